use dioxus::prelude::*;

use crate::components::{InternalLink, InternalRoute};
use crate::store::{use_store, Action};
use crate::t;

/// Entry to the authenticated area. The resume editor itself lives elsewhere;
/// this page only gates on the session and offers a way out.
#[component]
pub fn Dashboard() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let store = use_store();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-dashboard",
            if store.is_logged_in() {
                h1 { {t!("dashboard-heading")} }
                p { {t!("dashboard-body")} }
                button {
                    r#type: "button",
                    class: "button button--outlined",
                    onclick: move |_| store.dispatch(Action::Logout),
                    {t!("landing-actions-logout")}
                }
            } else {
                p { class: "page-dashboard__signed-out", {t!("dashboard-signed-out")} }
                InternalLink {
                    to: InternalRoute::Home,
                    class: "button button--primary",
                    label: t!("meta-back"),
                }
            }
        }
    }
}
