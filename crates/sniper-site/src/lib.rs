//! SniperTrader site content and rendering.
//!
//! Pages are built from static content structs and rendered as a list of
//! named sections. The web workload streams them one by one after the shell;
//! the CLI concatenates them into static files.

pub mod data;
pub mod form;
pub mod layout;
pub mod scripts;
pub mod sections;

use serde::{Deserialize, Serialize};
use sniper_core::Page;
use sniper_streaming::Shell;

pub use data::SiteContent;
pub use form::ContactFormView;
pub use layout::site_shell;

use sections::*;

/// Hostname used when none is configured.
pub const DEFAULT_HOSTNAME: &str = "snipertrader.online";
/// Environment variable overriding the hostname.
pub const HOSTNAME_ENV: &str = "SITE_HOSTNAME";

/// Site-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl SiteConfig {
    pub fn with_hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: Some(hostname.into()),
        }
    }

    pub fn from_env() -> Self {
        Self {
            hostname: std::env::var(HOSTNAME_ENV).ok(),
        }
    }

    /// Configured hostname, or the default when unset or blank.
    pub fn hostname(&self) -> &str {
        self.hostname
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_HOSTNAME)
    }
}

/// A rendered, named block of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSection {
    pub name: &'static str,
    pub html: String,
}

impl PageSection {
    fn new(name: &'static str, html: String) -> Self {
        Self { name, html }
    }
}

/// Renders pages from a fixed set of content.
#[derive(Debug, Clone, Default)]
pub struct Site {
    content: SiteContent,
}

impl Site {
    pub fn new(content: SiteContent) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn shell(&self, page: Page) -> Shell {
        site_shell(page, &self.content.footer)
    }

    /// Sections of `page` in display order.
    ///
    /// `form` only affects the contact page.
    pub fn sections(&self, page: Page, form: &ContactFormView) -> Vec<PageSection> {
        let c = &self.content;
        match page {
            Page::Home => vec![
                PageSection::new("hero", render_hero(&c.home.hero)),
                PageSection::new("features", render_features(&c.home.features)),
                PageSection::new("about-preview", render_about_preview(&c.home.about)),
                PageSection::new("whatsapp", render_whatsapp(&c.home.whatsapp)),
                PageSection::new("cta", render_cta(&c.home.cta)),
            ],
            Page::About => vec![
                PageSection::new("about-hero", render_about_hero(&c.about)),
                PageSection::new("vision-mission", render_vision_mission(&c.about)),
                PageSection::new("values", render_values(&c.about)),
                PageSection::new("experience", render_experience(&c.about)),
                PageSection::new("expertise", render_expertise(&c.about)),
            ],
            Page::TradingTypes => vec![
                PageSection::new("types-hero", render_types_hero(&c.types)),
                PageSection::new("what-is-trading", render_what_is_trading(&c.types)),
                PageSection::new("trading-types", render_type_grid(&c.types)),
                PageSection::new("recommendations", render_recommendations(&c.types)),
            ],
            Page::Contact => vec![
                PageSection::new("contact-hero", render_contact_hero(&c.contact)),
                PageSection::new(
                    "contact-form",
                    render_contact_main(&c.contact, &c.home.whatsapp, form),
                ),
                PageSection::new("faq", render_faq(&c.contact)),
            ],
        }
    }

    /// Render a complete document in one piece.
    pub fn render_page(&self, page: Page, form: &ContactFormView) -> String {
        let sections = self.sections(page, form);
        self.shell(page)
            .render_document(sections.iter().map(|s| s.html.as_str()))
    }

    /// Render the 404 document.
    pub fn render_not_found(&self) -> String {
        let mut shell = self.shell(Page::Home);
        shell.head.title = Some("Page Not Found | SniperTrader".to_string());
        let body = r#"<section class="page-hero" data-section="not-found">
    <div class="container">
        <h1 class="page-title">404</h1>
        <p class="page-intro">The page you're looking for doesn't exist.</p>
        <a href="/" class="btn-primary">Back to Home</a>
    </div>
</section>"#;
        shell.render_document([body])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sniper_contact::SubmissionState;

    #[test]
    fn test_every_page_renders() {
        let site = Site::default();
        let form = ContactFormView::new();
        for page in Page::ALL {
            let html = site.render_page(page, &form);
            assert!(html.starts_with("<!DOCTYPE html>"), "{:?}", page);
            assert!(html.ends_with("</html>"), "{:?}", page);
            assert!(html.contains(&format!("<title>{}</title>", page.title())));
            for section in site.sections(page, &form) {
                assert!(
                    html.contains(&format!(r#"data-section="{}""#, section.name)),
                    "{:?} missing {}",
                    page,
                    section.name
                );
            }
        }
    }

    #[test]
    fn test_contact_page_reflects_form_state() {
        let site = Site::default();
        let busy = ContactFormView::new().with_state(SubmissionState::Submitting);
        let html = site.render_page(Page::Contact, &busy);
        assert!(html.contains("Sending..."));
        assert!(html.contains(r#"class="hidden" tabindex="-1" autocomplete="off""#));
    }

    #[test]
    fn test_sections_have_unique_names() {
        let site = Site::default();
        for page in Page::ALL {
            let names: Vec<_> = site
                .sections(page, &ContactFormView::new())
                .into_iter()
                .map(|s| s.name)
                .collect();
            let mut deduped = names.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(names.len(), deduped.len());
        }
    }

    #[test]
    fn test_not_found_page() {
        let html = Site::default().render_not_found();
        assert!(html.contains("<title>Page Not Found | SniperTrader</title>"));
        assert!(html.contains(r#"data-section="not-found""#));
    }

    #[test]
    fn test_site_config_hostname() {
        assert_eq!(SiteConfig::default().hostname(), DEFAULT_HOSTNAME);
        assert_eq!(SiteConfig::with_hostname("  ").hostname(), DEFAULT_HOSTNAME);
        assert_eq!(
            SiteConfig::with_hostname("example.org").hostname(),
            "example.org"
        );
    }
}
