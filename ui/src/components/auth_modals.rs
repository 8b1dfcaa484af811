use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::store::{use_store, Action, ModalKind, Store};
use crate::t;

/// Overlay for whichever auth modal the store marks open.
///
/// Only the shell lives here: heading, explanation, a switch to the other
/// modal and a close control. Credential entry is handled by the
/// authentication flow, which signs the session in through `Action::SignIn`.
#[component]
pub fn AuthModals() -> Element {
    let store = use_store();
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let modals = store.modals();

    if modals.login {
        rsx! { LoginModal { store } }
    } else if modals.register && !config.signups_disabled {
        rsx! { RegisterModal { store } }
    } else {
        rsx! {}
    }
}

/// Close `from` and open `to` as two store updates.
fn switch_modal(store: Store, from: ModalKind, to: ModalKind) {
    store.dispatch(Action::close(from));
    store.dispatch(Action::open(to));
}

#[component]
fn LoginModal(store: Store) -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();

    rsx! {
        ModalFrame { store, kind: ModalKind::Login, heading: t!("modal-login-heading"),
            p { class: "modal__body", {t!("modal-login-body")} }
            if !config.signups_disabled {
                button {
                    r#type: "button",
                    class: "button button--ghost modal__switch",
                    onclick: move |_| switch_modal(store, ModalKind::Login, ModalKind::Register),
                    {t!("modal-login-switch")}
                }
            }
        }
    }
}

#[component]
fn RegisterModal(store: Store) -> Element {
    rsx! {
        ModalFrame { store, kind: ModalKind::Register, heading: t!("modal-register-heading"),
            p { class: "modal__body", {t!("modal-register-body")} }
            button {
                r#type: "button",
                class: "button button--ghost modal__switch",
                onclick: move |_| switch_modal(store, ModalKind::Register, ModalKind::Login),
                {t!("modal-register-switch")}
            }
        }
    }
}

#[component]
fn ModalFrame(store: Store, kind: ModalKind, heading: String, children: Element) -> Element {
    let modifier = match kind {
        ModalKind::Login => "modal--login",
        ModalKind::Register => "modal--register",
    };

    rsx! {
        div { class: "modal-backdrop",
            div {
                class: "modal {modifier}",
                role: "dialog",
                aria_modal: "true",
                div { class: "modal__header",
                    h2 { class: "modal__heading", "{heading}" }
                    button {
                        r#type: "button",
                        class: "icon-button modal__close",
                        aria_label: t!("modal-close"),
                        onclick: move |_| store.dispatch(Action::close(kind)),
                        "\u{00D7}"
                    }
                }
                {children}
            }
        }
    }
}
