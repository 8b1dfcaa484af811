use dioxus::prelude::*;

use crate::config::{CONTACT_WEBSITE, GITHUB_URL};
use crate::t;

use super::ExternalLink;

/// Credit line shared by every page footer.
#[component]
pub fn Footer(class: Option<String>) -> Element {
    let credit = t!("footer-credit", author = "Amruth Pillai");
    rsx! {
        div { class: format!("footer-credit {}", class.unwrap_or_default()),
            p { "{credit}" }
            p { class: "footer-credit__links",
                ExternalLink { href: GITHUB_URL.to_string(), {t!("footer-source")} }
                " \u{00B7} "
                ExternalLink { href: CONTACT_WEBSITE.to_string(), {t!("footer-author")} }
            }
        }
    }
}
