//! Page shell: head, header, footer, and styles.

use sniper_core::Page;
use sniper_streaming::{HeadContent, Shell};

use crate::data::FooterContent;
use crate::scripts::contact_form_script;
use crate::sections::{render_footer, render_header};

const DESCRIPTION: &str = "Professional gold trading mentorship with 10+ years of market \
experience. Precise signals, market analysis, and one-on-one guidance.";

/// Build the shell every page of the site is streamed into.
pub fn site_shell(page: Page, footer: &FooterContent) -> Shell {
    let head = HeadContent::new(page.title())
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", DESCRIPTION)
        .with_meta("theme-color", "#0b0f19")
        .with_style(SITE_STYLES);

    let script = match page {
        Page::Contact => contact_form_script(),
        _ => String::new(),
    };

    Shell::new(head)
        .with_body_start(format!(
            "<body data-page=\"{}\">\n{}\n<main>\n",
            page.slug(),
            render_header(page)
        ))
        .with_body_end(format!(
            "</main>\n{}\n{}\n</body>\n</html>",
            render_footer(footer),
            script
        ))
}

pub const SITE_STYLES: &str = r##"
:root {
    --gold: #d4a017;
    --gold-light: #f5c542;
    --bg: #0b0f19;
    --bg-alt: #111827;
    --card: #161e2e;
    --text: #f3f4f6;
    --text-muted: #9ca3af;
    --border: #1f2937;
    --error: #ef4444;
    --success: #22c55e;
    --whatsapp: #25d366;
    --gradient: linear-gradient(135deg, #d4a017 0%, #f5c542 100%);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
}

a { color: inherit; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 2rem; }
.text-gold { background: var(--gradient); -webkit-background-clip: text; color: transparent; }
.hidden { display: none !important; }
.hp-field { position: absolute; left: -10000px; width: 1px; height: 1px; overflow: hidden; }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    background: rgba(11, 15, 25, 0.95);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--border);
    z-index: 100;
}
.nav-container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.logo { font-size: 1.5rem; font-weight: 700; color: var(--gold); text-decoration: none; }
.nav-links { display: flex; gap: 2rem; }
.nav-links a { text-decoration: none; font-weight: 500; transition: color 0.2s; }
.nav-links a:hover, .nav-links a.active { color: var(--gold); }

/* Buttons */
.btn-primary, .btn-outline, .btn-whatsapp {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    border-radius: 8px;
    text-decoration: none;
    font-weight: 600;
    border: none;
    cursor: pointer;
}
.btn-primary { background: var(--gradient); color: #111; }
.btn-primary:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-outline { border: 1px solid var(--gold); color: var(--gold); }
.btn-whatsapp { background: var(--whatsapp); color: white; }
.btn-large { padding: 1rem 2.5rem; font-size: 1.125rem; }

/* Sections */
.hero, .page-hero { padding: 6rem 2rem; text-align: center; }
.hero-headline, .page-title { font-size: 3.5rem; font-weight: 800; line-height: 1.1; margin-bottom: 1.5rem; }
.hero-subheadline, .page-intro { font-size: 1.25rem; color: var(--text-muted); max-width: 800px; margin: 0 auto 2rem; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; }
.features, .values, .expertise, .recommendations, .faq, .trading-types { padding: 5rem 2rem; }
.section-header { text-align: center; max-width: 640px; margin: 0 auto 3rem; }
.section-header h2 { font-size: 2.25rem; margin-bottom: 1rem; }
.features-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2rem; max-width: 1200px; margin: 0 auto; }
.grid-2 { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
.grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.split { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: start; padding: 4rem 2rem; }
.card, .feature-card, .type-card, .expertise-block {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 2rem;
}
.feature-icon { font-size: 2rem; }
.difficulty { font-size: 0.75rem; padding: 0.25rem 0.75rem; border-radius: 999px; }
.difficulty-beginner { background: rgba(34, 197, 94, 0.15); color: var(--success); }
.difficulty-intermediate { background: rgba(245, 197, 66, 0.15); color: var(--gold-light); }
.difficulty-expert { background: rgba(239, 68, 68, 0.15); color: var(--error); }
.stats { display: flex; gap: 3rem; justify-content: center; margin-top: 2rem; }
.stat-value { display: block; font-size: 2.5rem; font-weight: 800; color: var(--gold); }
.whatsapp, .cta, .experience, .what-is-trading { padding: 5rem 2rem; text-align: center; background: var(--bg-alt); }
.prose { max-width: 800px; text-align: left; }
.prose p { margin-bottom: 1rem; color: var(--text-muted); }

/* Contact form */
.form-group { margin-bottom: 1.25rem; display: flex; flex-direction: column; gap: 0.5rem; }
.form-group input, .form-group textarea {
    background: var(--bg);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 0.75rem 1rem;
    color: var(--text);
    font: inherit;
}
.btn-submit { width: 100%; }
.toast-region { display: flex; flex-direction: column; gap: 0.5rem; margin: 1rem 0; }
.toast { border-radius: 8px; padding: 0.75rem 1rem; border-left: 4px solid; }
.toast-info { border-color: var(--success); background: rgba(34, 197, 94, 0.1); }
.toast-error { border-color: var(--error); background: rgba(239, 68, 68, 0.1); }
.channel { display: flex; gap: 1rem; margin-top: 1rem; }
.faq-item { margin-bottom: 1rem; background: var(--card); border-radius: 8px; padding: 1rem 1.5rem; }

/* Footer */
.site-footer { border-top: 1px solid var(--border); padding: 4rem 2rem 2rem; }
.footer-container { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; gap: 2rem; }
.footer-links { display: flex; flex-direction: column; }
.footer-column ul { list-style: none; }
.footer-bottom { text-align: center; margin-top: 3rem; color: var(--text-muted); font-size: 0.875rem; }

@media (max-width: 768px) {
    .nav-links { display: none; }
    .hero-headline, .page-title { font-size: 2.25rem; }
    .split, .grid-2, .grid-3, .footer-container { grid-template-columns: 1fr; }
}
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_carries_title_nav_and_footer() {
        let shell = site_shell(Page::TradingTypes, &FooterContent::default());
        let opening = shell.render_opening();
        assert!(opening.contains("<title>Trading Types | SniperTrader</title>"));
        assert!(opening.contains(r#"<body data-page="types">"#));
        assert!(opening.contains(r#"aria-current="page">Trading Types</a>"#));
        assert!(shell.render_closing().contains("© 2024 SniperTrader. All rights reserved."));
    }

    #[test]
    fn test_only_contact_page_loads_form_script() {
        let footer = FooterContent::default();
        assert!(site_shell(Page::Contact, &footer)
            .render_closing()
            .contains("<script>"));
        assert!(!site_shell(Page::Home, &footer)
            .render_closing()
            .contains("<script>"));
    }
}
