//! Document shell: everything around the streamed sections.

use std::fmt::Write as _;

/// `<head>` contents.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    pub title: Option<String>,
    /// `(name, content)` pairs rendered as `<meta name=..>`.
    pub meta: Vec<(String, String)>,
    /// Inline stylesheets, in order.
    pub styles: Vec<String>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Inline CSS. Not escaped.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");
        if let Some(title) = &self.title {
            let _ = writeln!(html, "<title>{}</title>", escape(title));
        }
        for (name, content) in &self.meta {
            let _ = writeln!(
                html,
                r#"<meta name="{}" content="{}">"#,
                escape(name),
                escape(content)
            );
        }
        for css in &self.styles {
            let _ = writeln!(html, "<style>{}</style>", css);
        }
        html
    }
}

/// Page frame that sections are streamed into.
///
/// `render_opening` goes out as the first chunk, `render_closing` as the last.
#[derive(Debug, Clone)]
pub struct Shell {
    pub lang: String,
    pub head: HeadContent,
    /// Opening `<body>` and anything before the first section.
    pub body_start: String,
    /// Anything after the last section through `</html>`.
    pub body_end: String,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            lang: "en".to_string(),
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    pub fn render_opening(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n{}</head>\n{}",
            escape(&self.lang),
            self.head.render(),
            self.body_start
        )
    }

    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }

    /// The whole document at once, for static export and non-streamed replies.
    pub fn render_document<'a>(&self, sections: impl IntoIterator<Item = &'a str>) -> String {
        let mut html = self.render_opening();
        for section in sections {
            html.push_str(section);
            html.push('\n');
        }
        html.push_str(&self.body_end);
        html
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_render() {
        let head = HeadContent::new("About | SniperTrader")
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style("body{margin:0}");

        let html = head.render();
        assert!(html.starts_with("<meta charset=\"utf-8\">"));
        assert!(html.contains("<title>About | SniperTrader</title>"));
        assert!(html.contains(r#"<meta name="viewport""#));
        assert!(html.contains("<style>body{margin:0}</style>"));
    }

    #[test]
    fn test_head_escapes_title_and_meta() {
        let html = HeadContent::new("Gold & <Silver>")
            .with_meta("description", r#"say "hi""#)
            .render();
        assert!(html.contains("<title>Gold &amp; &lt;Silver&gt;</title>"));
        assert!(html.contains(r#"content="say &quot;hi&quot;""#));
    }

    #[test]
    fn test_shell_opening_and_closing() {
        let shell = Shell::new(HeadContent::new("Home"))
            .with_body_start("<body><main>")
            .with_body_end("</main></body></html>");

        let opening = shell.render_opening();
        assert!(opening.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(opening.ends_with("<body><main>"));
        assert_eq!(shell.render_closing(), "</main></body></html>");
    }

    #[test]
    fn test_render_document_keeps_section_order() {
        let shell = Shell::new(HeadContent::new("Home"));
        let doc = shell.render_document(["<section>one</section>", "<section>two</section>"]);

        let one = doc.find("one").expect("first section");
        let two = doc.find("two").expect("second section");
        assert!(one < two);
        assert!(doc.ends_with("</html>"));
    }
}
