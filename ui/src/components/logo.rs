use dioxus::prelude::*;

use crate::config::LOGO_SRC;

#[component]
pub fn Logo(#[props(default = 64)] size: u32) -> Element {
    rsx! {
        img {
            class: "logo",
            src: LOGO_SRC,
            alt: "Reactive Resume",
            width: "{size}",
            height: "{size}",
        }
    }
}
