//! Site header and footer.

use sniper_core::Page;

use super::html_escape;
use crate::data::FooterContent;

/// Render the sticky header, marking `current` as the active link.
pub fn render_header(current: Page) -> String {
    let links = Page::ALL
        .iter()
        .map(|page| {
            let active = if *page == current {
                r#" class="active" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                page.path(),
                active,
                page.nav_label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<header class="site-header">
    <nav class="nav-container">
        <a href="/" class="logo"><span class="logo-mark">◎</span> SniperTrader</a>
        <div class="nav-links">
            {}
        </div>
        <a href="/contact" class="btn-primary nav-cta">Get Started</a>
    </nav>
</header>"#,
        links
    )
}

/// Render the site footer.
pub fn render_footer(content: &FooterContent) -> String {
    let quick_links = Page::ALL
        .iter()
        .map(|page| format!(r#"<a href="{}">{}</a>"#, page.path(), page.nav_label()))
        .collect::<Vec<_>>()
        .join("\n                ");

    let services = content
        .services
        .iter()
        .map(|s| format!("<li>{}</li>", html_escape(s)))
        .collect::<String>();

    let business = &content.business;

    format!(
        r#"<footer class="site-footer">
    <div class="footer-container">
        <div class="footer-brand">
            <a href="/" class="logo">SniperTrader</a>
            <p>{tagline}</p>
        </div>
        <div class="footer-column">
            <h4>Quick Links</h4>
            <nav class="footer-links">
                {quick_links}
            </nav>
        </div>
        <div class="footer-column">
            <h4>Services</h4>
            <ul>{services}</ul>
        </div>
        <div class="footer-column">
            <h4>Contact Info</h4>
            <p><a href="mailto:{email}">{email}</a></p>
            <p>{phone}</p>
            <p>{address}</p>
        </div>
    </div>
    <div class="footer-bottom">
        <p>{copyright}</p>
        <p class="footer-disclaimer">{disclaimer}</p>
    </div>
</footer>"#,
        tagline = html_escape(&content.tagline),
        quick_links = quick_links,
        services = services,
        email = html_escape(&business.email),
        phone = html_escape(&business.phone),
        address = html_escape(&business.address),
        copyright = html_escape(&content.copyright),
        disclaimer = html_escape(&content.disclaimer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_marks_active_page() {
        let html = render_header(Page::About);
        assert!(html.contains(r#"<a href="/about" class="active" aria-current="page">About Us</a>"#));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert_eq!(html.matches("aria-current").count(), 1);
    }

    #[test]
    fn test_footer_lists_services_and_contact() {
        let html = render_footer(&FooterContent::default());
        assert!(html.contains("<li>1-on-1 Mentorship</li>"));
        assert!(html.contains("mailto:contact@snipertrader.online"));
        assert!(html.contains("Bader Commercial, Phase V, DHA, Karachi"));
        assert!(html.contains("Past performance does not guarantee future results."));
    }
}
