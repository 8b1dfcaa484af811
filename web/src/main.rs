use dioxus::prelude::*;

use ui::components::{register_links, AuthModals, RouteLinks, ThemeRoot};
use ui::store::{use_store_provider, Store};
use ui::views::{Dashboard, Landing, Privacy, TermsOfService};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/meta/privacy")]
    Privacy {},
    #[route("/meta/service")]
    TermsOfService {},
}

fn link_home(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Landing {}, "{label}" })
}
fn link_dashboard(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Dashboard {}, "{label}" })
}
fn link_privacy(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Privacy {}, "{label}" })
}
fn link_service(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::TermsOfService {}, "{label}" })
}

/// The browser restores the visitor's saved state. Server renders (the
/// `server` feature) start every client from defaults instead of the host's
/// own state file.
fn initial_store() -> Store {
    #[cfg(target_arch = "wasm32")]
    {
        Store::persistent()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Store::new(ui::store::AppState::default())
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_links(RouteLinks {
        home: link_home,
        dashboard: link_dashboard,
        privacy: link_privacy,
        service: link_service,
    });

    // Global language code; the language switcher updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_store_provider(initial_store);
    let theme_css = ui::THEME_CSS;

    rsx! {
        document::Style { "{theme_css}" }

        ThemeRoot {
            Router::<Route> {}
            AuthModals {}
        }
    }
}
