//! The site's route table.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::context::Method;

/// Path of the contact form submission endpoint.
pub const CONTACT_API_PATH: &str = "/api/contact";

/// A static content page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    About,
    TradingTypes,
    Contact,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::TradingTypes, Page::Contact];

    /// Canonical URL path.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::TradingTypes => "/types",
            Page::Contact => "/contact",
        }
    }

    /// Short name used in section ids, logs, and export paths.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::TradingTypes => "types",
            Page::Contact => "contact",
        }
    }

    /// Label shown in navigation.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::TradingTypes => "Trading Types",
            Page::Contact => "Contact",
        }
    }

    /// Document title.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "SniperTrader | Master Gold Trading with Expert Guidance",
            Page::About => "About | SniperTrader",
            Page::TradingTypes => "Trading Types | SniperTrader",
            Page::Contact => "Contact | SniperTrader",
        }
    }

    /// Cache-Control header for the page response.
    ///
    /// The contact page carries a form and is never cached.
    pub fn cache_control(&self) -> &'static str {
        match self {
            Page::Contact => "no-store",
            _ => "public, max-age=3600, stale-while-revalidate=300",
        }
    }

    /// Resolve a request path (trailing slash tolerant) to a page.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalised = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|p| p.path() == normalised)
    }
}

/// Outcome of routing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteRoute {
    /// Render a static page.
    Page(Page),
    /// Accept a contact form submission.
    ContactApi,
    /// Known path, wrong method.
    MethodNotAllowed,
    /// Unknown path.
    NotFound,
}

impl SiteRoute {
    /// Route a request.
    pub fn resolve(method: Method, path: &str) -> Self {
        if path.trim_end_matches('/') == CONTACT_API_PATH {
            return match method {
                Method::Post => SiteRoute::ContactApi,
                _ => SiteRoute::MethodNotAllowed,
            };
        }

        match Page::from_path(path) {
            Some(page) if matches!(method, Method::Get | Method::Head) => SiteRoute::Page(page),
            Some(_) => SiteRoute::MethodNotAllowed,
            None => SiteRoute::NotFound,
        }
    }

    /// Status code used when this route renders without further errors.
    pub fn status(&self) -> StatusCode {
        match self {
            SiteRoute::Page(_) | SiteRoute::ContactApi => StatusCode::OK,
            SiteRoute::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SiteRoute::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/about/"), Some(Page::About));
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/pricing"), None);
    }

    #[test]
    fn test_resolve_pages() {
        assert_eq!(
            SiteRoute::resolve(Method::Get, "/types"),
            SiteRoute::Page(Page::TradingTypes)
        );
        assert_eq!(
            SiteRoute::resolve(Method::Head, "/"),
            SiteRoute::Page(Page::Home)
        );
        assert_eq!(
            SiteRoute::resolve(Method::Post, "/about"),
            SiteRoute::MethodNotAllowed
        );
        assert_eq!(SiteRoute::resolve(Method::Get, "/nope"), SiteRoute::NotFound);
    }

    #[test]
    fn test_resolve_contact_api() {
        assert_eq!(
            SiteRoute::resolve(Method::Post, "/api/contact"),
            SiteRoute::ContactApi
        );
        assert_eq!(
            SiteRoute::resolve(Method::Get, "/api/contact"),
            SiteRoute::MethodNotAllowed
        );
    }

    #[test]
    fn test_route_status() {
        assert_eq!(SiteRoute::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            SiteRoute::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(SiteRoute::Page(Page::Home).status(), StatusCode::OK);
    }

    #[test]
    fn test_contact_page_not_cached() {
        assert_eq!(Page::Contact.cache_control(), "no-store");
        assert!(Page::Home.cache_control().starts_with("public"));
    }
}
