use dioxus::prelude::*;

#[component]
pub fn Testimony(name: String, message: String) -> Element {
    rsx! {
        figure { class: "testimony",
            blockquote { class: "testimony__message", "{message}" }
            figcaption { class: "testimony__name", "{name}" }
        }
    }
}
