//! Light/dark display mode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// CSS modifier applied by `ThemeRoot`.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme--light",
            Theme::Dark => "theme--dark",
        }
    }

    /// Sponsor badge readable on this theme's background.
    pub fn sponsor_badge(self) -> &'static str {
        match self {
            Theme::Dark => "/images/sponsors/digitalocean.svg",
            Theme::Light => "/images/sponsors/digitaloceanLight.svg",
        }
    }

    /// Glyph shown on the theme toggle (moon while dark, sun while light).
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "\u{263E}",
            Theme::Light => "\u{2600}",
        }
    }
}
