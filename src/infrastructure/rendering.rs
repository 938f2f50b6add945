// src/infrastructure/rendering.rs
use crate::application::ports::rendering::ContentRenderer;
use pulldown_cmark::{Options, Parser, html};

/// CommonMark with tables, strikethrough and footnotes, followed by an
/// allow-list sanitizer pass. Raw HTML in the source survives only where the
/// allow-list permits it.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_FOOTNOTES,
        }
    }
}

impl MarkdownRenderer {
    pub fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
        html::push_html(&mut out, parser);
        out
    }

    /// Strips every tag, attribute and URL scheme outside the allow-list.
    /// Links gain `rel="noopener noreferrer"`.
    pub fn sanitize(&self, html: &str) -> String {
        let mut builder = ammonia::Builder::default();
        builder.add_tag_attributes("code", &["class"]);
        builder.clean(html).to_string()
    }
}

impl ContentRenderer for MarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        self.sanitize(&self.to_html(markdown))
    }
}
