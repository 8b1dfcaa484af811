use dioxus::prelude::*;

use crate::components::{InternalLink, InternalRoute};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetaKind {
    Privacy,
    Service,
}

#[component]
pub fn Privacy() -> Element {
    rsx! { MetaPage { kind: MetaKind::Privacy } }
}

#[component]
pub fn TermsOfService() -> Element {
    rsx! { MetaPage { kind: MetaKind::Service } }
}

#[component]
fn MetaPage(kind: MetaKind) -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let (heading, body) = match kind {
        MetaKind::Privacy => (t!("privacy-heading"), t!("privacy-body")),
        MetaKind::Service => (t!("service-heading"), t!("service-body")),
    };

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        article { class: "page page-meta",
            h1 { "{heading}" }
            p { "{body}" }
            InternalLink {
                to: InternalRoute::Home,
                class: "link-button",
                label: t!("meta-back"),
            }
        }
    }
}
