use dioxus::prelude::*;

use crate::components::{
    ExternalLink, Footer, InternalLink, InternalRoute, LanguageSwitcher, Logo, Testimony,
    ThemeToggle,
};
use crate::config::{
    Screenshot, SiteConfig, Testimonial, CONTACT_EMAIL, CONTACT_WEBSITE, DIGITALOCEAN_URL,
    DOCS_URL, DONATION_URL, GITHUB_URL,
};
use crate::i18n;
use crate::store::{use_store, Action, ModalKind, Store};
use crate::t;

/// Which auth controls the hero shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthControls {
    /// Link to the dashboard plus logout.
    Authenticated,
    /// Login plus register; register is inert while signups are disabled.
    Guest { register_enabled: bool },
}

impl AuthControls {
    pub fn resolve(logged_in: bool, signups_disabled: bool) -> Self {
        if logged_in {
            AuthControls::Authenticated
        } else {
            AuthControls::Guest {
                register_enabled: !signups_disabled,
            }
        }
    }
}

#[component]
pub fn Landing() -> Element {
    i18n::init();

    // Re-render when the language switcher updates the global code.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let store = use_store();
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let controls = AuthControls::resolve(store.is_logged_in(), config.signups_disabled);

    rsx! {
        main { class: "landing",
            div { style: "display:none", "{lang_marker}" }

            div { class: "landing__header",
                div { class: "landing__logo",
                    Logo { size: 256 }
                }
                div { class: "landing__main",
                    h1 { {t!("common-title")} }
                    h2 { {t!("common-subtitle")} }
                    HeroActions { store, controls }
                }
            }

            section { class: "landing__section landing__summary",
                h6 { {t!("landing-summary-heading")} }
                p { {t!("landing-summary-body")} }
            }

            FeatureList {}

            ScreenshotGallery { screenshots: config.screenshots }

            TestimonialSection { testimonials: config.testimonials }

            LinkSection {}

            SponsorBanner { store }

            footer { class: "landing__footer",
                div { class: "landing__version",
                    Footer { class: "landing__credit" }
                    div { class: "landing__version-number", "v{config.version}" }
                }
                div { class: "landing__footer-actions",
                    ThemeToggle {}
                    LanguageSwitcher {}
                }
            }
        }
    }
}

#[component]
fn HeroActions(store: Store, controls: AuthControls) -> Element {
    match controls {
        AuthControls::Authenticated => rsx! {
            div { class: "landing__actions",
                InternalLink {
                    to: InternalRoute::Dashboard,
                    class: "button button--primary landing__action landing__action--app",
                    label: t!("landing-actions-app"),
                }
                button {
                    r#type: "button",
                    class: "button button--outlined landing__action landing__action--logout",
                    onclick: move |_| store.dispatch(Action::Logout),
                    {t!("landing-actions-logout")}
                }
            }
        },
        AuthControls::Guest { register_enabled } => rsx! {
            div { class: "landing__actions",
                button {
                    r#type: "button",
                    class: "button button--primary landing__action landing__action--login",
                    onclick: move |_| store.dispatch(Action::open(ModalKind::Login)),
                    {t!("landing-actions-login")}
                }
                button {
                    r#type: "button",
                    class: "button button--outlined landing__action landing__action--register",
                    disabled: !register_enabled,
                    onclick: move |_| {
                        if register_enabled {
                            store.dispatch(Action::open(ModalKind::Register));
                        }
                    },
                    {t!("landing-actions-register")}
                }
            }
        },
    }
}

#[component]
fn FeatureList() -> Element {
    let more_href = format!("{GITHUB_URL}#features");

    rsx! {
        section { class: "landing__section landing__features",
            h6 { {t!("landing-features-heading")} }
            ul { class: "landing__feature-list",
                li { {t!("landing-features-free")} }
                li { {t!("landing-features-ads")} }
                li { {t!("landing-features-tracking")} }
                li { {t!("landing-features-languages")} }
                li { {t!("landing-features-import")} }
                li { {t!("landing-features-export")} }
                li {
                    {t!("landing-features-more")}
                    " "
                    ExternalLink { href: more_href, {t!("landing-features-more-link")} }
                }
            }
        }
    }
}

#[component]
fn ScreenshotGallery(screenshots: &'static [Screenshot]) -> Element {
    rsx! {
        section { class: "landing__section landing__screenshots",
            h6 { {t!("landing-screenshots-heading")} }
            div { class: "landing__screenshot-grid",
                for shot in screenshots.iter() {
                    a {
                        key: "{shot.src}",
                        class: "landing__screenshot",
                        href: shot.src,
                        target: "_blank",
                        rel: "noreferrer",
                        img { src: shot.src, alt: shot.alt, loading: "lazy" }
                    }
                }
            }
        }
    }
}

// Stand-ins passed to Fluent for the contact links, then swapped for anchors.
const EMAIL_SLOT: &str = "\u{1}email\u{1}";
const WEBSITE_SLOT: &str = "\u{1}website\u{1}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ContactPart {
    Text(String),
    Email,
    Website,
}

/// Split a formatted contact message around the link slots, keeping the
/// order the translation puts them in.
fn contact_parts(message: &str) -> Vec<ContactPart> {
    let mut parts = Vec::new();
    let mut rest = message;

    loop {
        let next = [(EMAIL_SLOT, ContactPart::Email), (WEBSITE_SLOT, ContactPart::Website)]
            .into_iter()
            .filter_map(|(slot, part)| rest.find(slot).map(|at| (at, slot.len(), part)))
            .min_by_key(|(at, _, _)| *at);
        let Some((at, len, part)) = next else {
            break;
        };
        if at > 0 {
            parts.push(ContactPart::Text(rest[..at].to_string()));
        }
        parts.push(part);
        rest = &rest[at + len..];
    }

    if !rest.is_empty() {
        parts.push(ContactPart::Text(rest.to_string()));
    }
    parts
}

#[component]
fn TestimonialSection(testimonials: &'static [Testimonial]) -> Element {
    let message = t!("landing-testimonials-contact", email = EMAIL_SLOT, website = WEBSITE_SLOT);
    let contact = contact_parts(&message).into_iter().map(|part| match part {
        ContactPart::Text(text) => rsx! { "{text}" },
        ContactPart::Email => rsx! {
            a { href: CONTACT_EMAIL, {t!("landing-testimonials-contact-email")} }
        },
        ContactPart::Website => rsx! {
            a { href: CONTACT_WEBSITE, {t!("landing-testimonials-contact-website")} }
        },
    });

    rsx! {
        section { class: "landing__section landing__testimonials",
            h6 { {t!("landing-testimonials-heading")} }

            p { class: "landing__paragraph",
                {t!("landing-testimonials-body")}
                br {}
                {t!("landing-testimonials-body-more")}
            }

            p { class: "landing__paragraph", {contact} }

            div { class: "landing__testimonial-grid",
                for (index, entry) in testimonials.iter().enumerate() {
                    Testimony {
                        key: "{index}",
                        name: entry.name.to_string(),
                        message: entry.message.to_string(),
                    }
                }
            }
        }
    }
}

#[component]
fn LinkSection() -> Element {
    rsx! {
        section { class: "landing__section landing__links",
            h6 { {t!("landing-links-heading")} }
            div { class: "landing__link-row",
                InternalLink {
                    to: InternalRoute::Privacy,
                    class: "link-button",
                    label: t!("landing-links-privacy"),
                }
                InternalLink {
                    to: InternalRoute::Service,
                    class: "link-button",
                    label: t!("landing-links-service"),
                }
                ExternalLink { href: GITHUB_URL.to_string(), class: "link-button", {t!("landing-links-github")} }
                ExternalLink { href: DOCS_URL.to_string(), class: "link-button", {t!("landing-links-docs")} }
                ExternalLink { href: DONATION_URL.to_string(), class: "link-button", {t!("landing-links-donate")} }
            }
        }
    }
}

#[component]
fn SponsorBanner(store: Store) -> Element {
    let theme = store.theme();

    rsx! {
        section { class: "landing__section landing__sponsor",
            ExternalLink { href: DIGITALOCEAN_URL.to_string(),
                img {
                    class: "landing__sponsor-badge",
                    src: theme.sponsor_badge(),
                    alt: t!("landing-sponsor-alt"),
                    width: "200",
                    height: "40",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_in_shows_authenticated_controls() {
        assert_eq!(AuthControls::resolve(true, false), AuthControls::Authenticated);
        assert_eq!(AuthControls::resolve(true, true), AuthControls::Authenticated);
    }

    #[test]
    fn contact_parts_follow_translation_order() {
        let message = format!("Écrivez via {WEBSITE_SLOT} ou {EMAIL_SLOT}.");
        assert_eq!(
            contact_parts(&message),
            vec![
                ContactPart::Text("Écrivez via ".into()),
                ContactPart::Website,
                ContactPart::Text(" ou ".into()),
                ContactPart::Email,
                ContactPart::Text(".".into()),
            ]
        );
    }

    #[test]
    fn contact_parts_without_slots_is_plain_text() {
        assert_eq!(contact_parts("Hi"), vec![ContactPart::Text("Hi".into())]);
        assert_eq!(contact_parts(EMAIL_SLOT), vec![ContactPart::Email]);
    }

    #[test]
    fn register_disabled_iff_signups_disabled() {
        assert_eq!(
            AuthControls::resolve(false, false),
            AuthControls::Guest { register_enabled: true }
        );
        assert_eq!(
            AuthControls::resolve(false, true),
            AuthControls::Guest { register_enabled: false }
        );
    }
}
