// tests/support/builders.rs
use chrono::{DateTime, Utc};
use dnews::domain::article::dates::format_date;

/// Builds an import document: front matter lines, a blank line, then the body.
pub struct DocumentBuilder {
    author: Option<String>,
    title: Option<String>,
    date: Option<String>,
    tags: Option<String>,
    body: String,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            author: Some("Aaron Bieber <aaron@example.org>".into()),
            title: Some("Hello".into()),
            date: None,
            tags: None,
            body: "# Hello\n\nSome *text* with a [link](https://example.org).\n".into(),
        }
    }

    pub fn author(mut self, line: &str) -> Self {
        self.author = Some(line.into());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn date(mut self, at: DateTime<Utc>) -> Self {
        self.date = Some(format_date(&at));
        self
    }

    pub fn tags(mut self, tags: &str) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> String {
        let mut text = String::new();
        for (key, value) in [
            ("author", self.author),
            ("title", self.title),
            ("date", self.date),
            ("tags", self.tags),
        ] {
            if let Some(value) = value {
                text.push_str(&format!("{key}: {value}\n"));
            }
        }
        text.push('\n');
        text.push_str(&self.body);
        text
    }
}
