#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
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

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Reactive Resume – v{}", ui::config::APP_VERSION))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    LaunchBuilder::server().launch(App);
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

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; the language switcher updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_store_provider(Store::persistent);
    let theme_css = ui::THEME_CSS;

    register_links(RouteLinks {
        home: link_home,
        dashboard: link_dashboard,
        privacy: link_privacy,
        service: link_service,
    });

    rsx! {
        // Always inline the shared theme (no external file dependency for desktop builds)
        document::Style { "{theme_css}" }

        ThemeRoot {
            // Keyed on the language so the routed subtree remounts with fresh strings.
            div {
                key: "{lang_code()}",
                Router::<Route> { }
            }
            AuthModals {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` serve images straight from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
