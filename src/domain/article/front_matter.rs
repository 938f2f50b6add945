// src/domain/article/front_matter.rs
//! Line-oriented front-matter scanning.
//!
//! Every line of the document lands in the body, metadata lines included: the
//! signature covers the whole file, so the stored body must be the file.
use crate::domain::article::dates::parse_rfc1123;
use crate::domain::article::entity::NewArticle;
use crate::domain::user::AuthorLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Author,
    Title,
    Date,
    Tags,
}

const RULES: &[(&str, Field)] = &[
    ("author:", Field::Author),
    ("title:", Field::Title),
    ("date:", Field::Date),
    ("tags:", Field::Tags),
];

/// `key:` followed by exactly one whitespace character, then the value.
fn value_after<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?;
    let mut chars = rest.chars();
    chars
        .next()
        .filter(char::is_ascii_whitespace)
        .map(|_| chars.as_str())
}

fn classify(line: &str) -> Option<(Field, &str)> {
    RULES
        .iter()
        .find_map(|(key, field)| value_after(line, key).map(|value| (*field, value)))
}

pub struct FrontMatterParser;

impl FrontMatterParser {
    /// Builds an unsigned article from document text. Malformed metadata
    /// degrades the affected field to empty instead of failing.
    pub fn parse(document: &str) -> NewArticle {
        let mut article = NewArticle::default();

        for line in document.lines() {
            match classify(line) {
                Some((Field::Author, value)) => {
                    article.author = AuthorLine::parse(value);
                    tracing::debug!(
                        first = %article.author.first_name,
                        last = %article.author.last_name,
                        email = %article.author.email,
                        "front matter author"
                    );
                }
                Some((Field::Title, value)) => {
                    article.title = value.to_string();
                    tracing::debug!(title = %article.title, "front matter title");
                }
                Some((Field::Date, value)) => {
                    article.published_at = parse_rfc1123(value);
                    if article.published_at.is_none() {
                        tracing::debug!(value, "ignoring unparsable front matter date");
                    }
                }
                Some((Field::Tags, value)) => {
                    article.tags.extend_from_list(value);
                }
                None => {}
            }

            article.push_body_line(line);
        }

        article
    }
}
