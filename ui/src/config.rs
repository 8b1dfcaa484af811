//! Static site configuration: external links, build-time flags and the
//! content tables (screenshots, testimonials) rendered by the landing page.

/// Application version, shared by every crate in the workspace.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const GITHUB_URL: &str = "https://github.com/AmruthPillai/Reactive-Resume";
pub const DOCS_URL: &str = "https://docs.rxresu.me";
pub const DONATION_URL: &str = "https://www.buymeacoffee.com/AmruthPillai";
pub const DIGITALOCEAN_URL: &str = "https://pillai.xyz/digitalocean";
pub const CONTACT_EMAIL: &str = "mailto:im.amruth@gmail.com";
pub const CONTACT_WEBSITE: &str = "https://www.amruthpillai.com";

pub const LOGO_SRC: &str = "/images/logos/logo.svg";

/// Interpret a build-time flag value. Unset or unrecognised values are off.
pub fn flag_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|raw| {
        matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

/// Whether self-service registration is switched off for this build
/// (`DISABLE_SIGNUPS=true cargo build ...`).
pub fn signups_disabled() -> bool {
    flag_enabled(option_env!("DISABLE_SIGNUPS"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screenshot {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub message: &'static str,
}

/// Placeholder frames live in `ui/assets/images/screenshots`; deployments
/// replace them with real captures under the same names.
pub const SCREENSHOTS: &[Screenshot] = &[
    Screenshot {
        src: "/images/screenshots/dashboard.svg",
        alt: "Create multiple resumes under one account, starting from scratch or a template",
    },
    Screenshot {
        src: "/images/screenshots/import-external.svg",
        alt: "Import data from LinkedIn, JSON Resume or a previous export",
    },
    Screenshot {
        src: "/images/screenshots/builder.svg",
        alt: "Edit your resume with a live preview and a sidebar for every section",
    },
    Screenshot {
        src: "/images/screenshots/templates.svg",
        alt: "Pick from a growing collection of templates",
    },
    Screenshot {
        src: "/images/screenshots/layout.svg",
        alt: "Rearrange sections and columns with drag and drop",
    },
    Screenshot {
        src: "/images/screenshots/export.svg",
        alt: "Export to PDF or JSON, or share a public link",
    },
];

// Sample content. Swap in messages from real users (with their consent)
// before publishing.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Pedro",
        message: "I just wanted to say thank you for making this. It is by far the best free resume builder I have come across, and it got me my first job interview.",
    },
    Testimonial {
        name: "Sophie",
        message: "Clean, fast, and no sneaky paywall at the export step. I recommended it to my whole class.",
    },
    Testimonial {
        name: "Kaito",
        message: "Being able to keep several versions of my resume and switch templates without retyping anything saved me hours.",
    },
    Testimonial {
        name: "Amara",
        message: "The fact that it is open source and does not track me is the reason I trust it with my personal details.",
    },
    Testimonial {
        name: "Lukas",
        message: "Imported my LinkedIn profile, picked a template and was done in ten minutes. Brilliant work.",
    },
    Testimonial {
        name: "Valentina",
        message: "Finally a resume builder that works in Spanish too. Gracias!",
    },
];

/// Everything the landing page reads that is fixed at build time.
///
/// Views take this from context when a shell (or a test) provides one, and
/// fall back to [`SiteConfig::from_build`] otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub signups_disabled: bool,
    pub version: &'static str,
    pub screenshots: &'static [Screenshot],
    pub testimonials: &'static [Testimonial],
}

impl SiteConfig {
    pub fn from_build() -> Self {
        Self {
            signups_disabled: signups_disabled(),
            version: APP_VERSION,
            screenshots: SCREENSHOTS,
            testimonials: TESTIMONIALS,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_build()
    }
}
