use dioxus::prelude::*;

use crate::store::{use_store, Action};
use crate::t;

/// Applies the current theme to everything below it.
#[component]
pub fn ThemeRoot(children: Element) -> Element {
    let theme = use_store().theme();
    rsx! {
        div {
            class: "theme {theme.css_class()}",
            "data-theme": theme.as_str(),
            {children}
        }
    }
}

/// Icon button flipping the theme. One dispatch per click.
#[component]
pub fn ThemeToggle() -> Element {
    let store = use_store();
    let theme = store.theme();
    let label = t!("landing-theme-toggle");

    rsx! {
        button {
            r#type: "button",
            class: "icon-button theme-toggle",
            title: "{label}",
            aria_label: "{label}",
            "data-theme": theme.as_str(),
            onclick: move |_| store.dispatch(Action::SetTheme(theme.toggled())),
            span { class: "theme-toggle__icon", aria_hidden: "true", "{theme.icon()}" }
        }
    }
}
