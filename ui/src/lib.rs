//! Shared UI crate for Reactive Resume. The landing page, its components and
//! the state they read live here; platform crates only add routing and launch.

pub mod config;
pub mod i18n;
pub mod store;
pub mod views;

pub mod components {
    // Overlay for the login/register modals (components/auth_modals.rs)
    mod auth_modals;
    pub use auth_modals::AuthModals;

    mod footer;
    pub use footer::Footer;

    mod language_switcher;
    pub use language_switcher::LanguageSwitcher;

    // Router-agnostic links (components/links.rs)
    pub mod links;
    pub use links::{register_links, ExternalLink, InternalLink, InternalRoute, RouteLinks};

    mod logo;
    pub use logo::Logo;

    mod testimony;
    pub use testimony::Testimony;

    mod theme;
    pub use theme::{ThemeRoot, ThemeToggle};
}

/// Shared stylesheet. Both shells inline it so packaged builds carry no
/// external CSS file.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
