use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Internal destinations the shared views link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalRoute {
    Home,
    Dashboard,
    Privacy,
    Service,
}

impl InternalRoute {
    /// Canonical path, used when no platform router is registered.
    pub fn path(self) -> &'static str {
        match self {
            InternalRoute::Home => "/",
            InternalRoute::Dashboard => "/dashboard",
            InternalRoute::Privacy => "/meta/privacy",
            InternalRoute::Service => "/meta/service",
        }
    }
}

/// Platforms register a `RouteLinks` providing fully constructed router
/// `Link` elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the CSS class and the already-localized label, and
/// must return a link whose only child is that label:
///
/// ```ignore
/// register_links(RouteLinks {
///     home: |class, label| rsx!( Link { class, to: Route::Landing {}, "{label}" } ),
///     dashboard: |class, label| rsx!( Link { class, to: Route::Dashboard {}, "{label}" } ),
///     privacy: |class, label| rsx!( Link { class, to: Route::Privacy {}, "{label}" } ),
///     service: |class, label| rsx!( Link { class, to: Route::TermsOfService {}, "{label}" } ),
/// });
/// ```
///
/// Without a registration (server rendering, tests) plain anchors are emitted.
pub struct RouteLinks {
    pub home: fn(class: &str, label: &str) -> Element,
    pub dashboard: fn(class: &str, label: &str) -> Element,
    pub privacy: fn(class: &str, label: &str) -> Element,
    pub service: fn(class: &str, label: &str) -> Element,
}

impl RouteLinks {
    fn builder(&self, route: InternalRoute) -> fn(&str, &str) -> Element {
        match route {
            InternalRoute::Home => self.home,
            InternalRoute::Dashboard => self.dashboard,
            InternalRoute::Privacy => self.privacy,
            InternalRoute::Service => self.service,
        }
    }
}

static ROUTE_LINKS: OnceCell<RouteLinks> = OnceCell::new();

/// First registration wins; later calls are ignored.
pub fn register_links(links: RouteLinks) {
    if ROUTE_LINKS.set(links).is_err() {
        tracing::trace!("route links already registered");
    }
}

/// Link to an in-app page through the registered router, or a plain anchor.
#[component]
pub fn InternalLink(to: InternalRoute, class: String, label: String) -> Element {
    match ROUTE_LINKS.get() {
        Some(links) => (links.builder(to))(&class, &label),
        None => rsx! {
            a { class: "{class}", href: to.path(), "{label}" }
        },
    }
}

/// Anchor that opens an external page in a new tab.
#[component]
pub fn ExternalLink(href: String, class: Option<String>, children: Element) -> Element {
    rsx! {
        a {
            class: class.unwrap_or_default(),
            href: "{href}",
            target: "_blank",
            rel: "noreferrer",
            {children}
        }
    }
}
