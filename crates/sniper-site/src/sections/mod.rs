//! Section renderers, one module per page.
//!
//! Every renderer returns a self-contained `<section data-section="...">`
//! fragment so the workload can stream them one at a time after the shell.

mod about;
mod contact;
mod home;
mod nav;
mod types;

pub use about::*;
pub use contact::*;
pub use home::*;
pub use nav::*;
pub use types::*;

/// Escape text for HTML element content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render a page banner with a title and an intro line.
pub(crate) fn render_page_hero(section: &str, title: &str, intro: &str) -> String {
    format!(
        r#"<section class="page-hero" data-section="{}">
    <div class="container">
        <h1 class="page-title">{}</h1>
        <p class="page-intro">{}</p>
    </div>
</section>"#,
        section,
        html_escape(title),
        html_escape(intro)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_page_hero_escapes() {
        let html = render_page_hero("about-hero", "About <Us>", "intro");
        assert!(html.contains(r#"data-section="about-hero""#));
        assert!(html.contains("About &lt;Us&gt;"));
    }
}
