//! Shell template for streamed pages.

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags as (name, content) pairs.
    pub meta: Vec<(String, String)>,
    /// Inline style blocks.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add an inline style block.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render the head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{title}</title>\n"));
        }
        for (name, content) in &self.meta {
            html.push_str(&format!(r#"<meta name="{name}" content="{content}">"#));
            html.push('\n');
        }
        for css in &self.styles {
            html.push_str(&format!("<style>{css}</style>\n"));
        }

        html
    }
}

/// Shell template: the frame flushed before any section.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Head content.
    pub head: HeadContent,
    /// HTML between `</head>` and the first section.
    pub body_start: String,
    /// HTML after the last section.
    pub body_end: String,
}

impl Shell {
    /// Create a shell with the default body frame.
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Replace the opening body HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Replace the closing body HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render everything that precedes the sections.
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render everything that follows the sections.
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_contains_head_and_body_start() {
        let shell = Shell::new(
            HeadContent::new("Demo").with_meta("viewport", "width=device-width"),
        )
        .with_body_start("<body><main class=\"demo\">");

        let opening = shell.render_opening();
        assert!(opening.starts_with("<!DOCTYPE html>"));
        assert!(opening.contains("<title>Demo</title>"));
        assert!(opening.contains("viewport"));
        assert!(opening.ends_with("<main class=\"demo\">"));
    }

    #[test]
    fn test_closing_is_the_body_end() {
        let shell = Shell::new(HeadContent::new("Demo")).with_body_end("</body></html>");
        assert_eq!(shell.render_closing(), "</body></html>");
    }
}
