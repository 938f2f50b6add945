// src/application/commands/articles/mod.rs
mod create;
mod import;
mod service;

pub use import::{ImportArticleCommand, ImportArticleCommandBuilder, ImportDocument, ImportReport};
pub use service::ArticleCommandService;
