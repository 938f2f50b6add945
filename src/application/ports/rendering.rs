/// Turns Markdown into HTML that is safe to embed directly in a page.
pub trait ContentRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}
