// src/application/commands/articles/import.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleId, FrontMatterParser},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Import of a Markdown document from disk, optionally verified against a
/// detached signature and stored.
pub struct ImportArticleCommand {
    pub document: PathBuf,
    pub public_key: Option<PathBuf>,
    pub signature: Option<PathBuf>,
    pub verify: bool,
    pub add: bool,
    pub live: bool,
}

impl ImportArticleCommand {
    pub fn builder() -> ImportArticleCommandBuilder {
        ImportArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct ImportArticleCommandBuilder {
    document: Option<PathBuf>,
    public_key: Option<PathBuf>,
    signature: Option<PathBuf>,
    verify: bool,
    add: bool,
    live: bool,
}

impl ImportArticleCommandBuilder {
    pub fn document(mut self, path: impl Into<PathBuf>) -> Self {
        self.document = Some(path.into());
        self
    }

    pub fn public_key(mut self, path: impl Into<PathBuf>) -> Self {
        self.public_key = Some(path.into());
        self
    }

    pub fn signature(mut self, path: impl Into<PathBuf>) -> Self {
        self.signature = Some(path.into());
        self
    }

    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn add(mut self, add: bool) -> Self {
        self.add = add;
        self
    }

    pub fn live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    pub fn build(self) -> Result<ImportArticleCommand, &'static str> {
        Ok(ImportArticleCommand {
            document: self.document.ok_or("document is required")?,
            public_key: self.public_key,
            signature: self.signature,
            verify: self.verify,
            add: self.add,
            live: self.live,
        })
    }
}

/// The in-memory form of an import.
#[derive(Debug, Clone, Default)]
pub struct ImportDocument {
    pub text: String,
    pub public_key: Option<Vec<u8>>,
    pub signature: Option<Vec<u8>>,
    pub verify: bool,
    pub add: bool,
    pub live: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub title: String,
    pub author: String,
    /// `None` when verification was not requested.
    pub verified: Option<bool>,
    pub inserted: Option<i64>,
}

impl ImportReport {
    pub fn rejected(&self) -> bool {
        self.verified == Some(false)
    }

    pub fn inserted_id(&self) -> Option<ArticleId> {
        self.inserted.map(ArticleId)
    }
}

async fn read_bytes(path: &Path) -> ApplicationResult<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|err| ApplicationError::io(path, err))
}

async fn read_optional(path: Option<&Path>) -> ApplicationResult<Option<Vec<u8>>> {
    match path {
        Some(path) => read_bytes(path).await.map(Some),
        None => Ok(None),
    }
}

impl ArticleCommandService {
    pub async fn import_article(
        &self,
        command: ImportArticleCommand,
    ) -> ApplicationResult<ImportReport> {
        let text = tokio::fs::read_to_string(&command.document)
            .await
            .map_err(|err| ApplicationError::io(&command.document, err))?;
        let public_key = read_optional(command.public_key.as_deref()).await?;
        let signature = read_optional(command.signature.as_deref()).await?;

        self.import_document(ImportDocument {
            text,
            public_key,
            signature,
            verify: command.verify,
            add: command.add,
            live: command.live,
        })
        .await
    }

    /// Parses, optionally verifies, and optionally stores a document. A
    /// signature that does not match never reaches the store.
    pub async fn import_document(&self, document: ImportDocument) -> ApplicationResult<ImportReport> {
        let mut article = FrontMatterParser::parse(&document.text);
        article.live = document.live;
        if let Some(signature) = document.signature {
            article.set_signature(signature);
        }

        let verified = if document.verify {
            let public_key = document.public_key.as_deref().ok_or_else(|| {
                ApplicationError::validation("verification requires a public key")
            })?;
            if article.signature().is_empty() {
                return Err(ApplicationError::validation(
                    "verification requires a signature",
                ));
            }
            Some(article.verify(self.verifier.as_ref(), public_key)?)
        } else {
            None
        };

        let mut report = ImportReport {
            title: article.title.clone(),
            author: article.author.combine(),
            verified,
            inserted: None,
        };

        if report.rejected() {
            tracing::warn!(title = %report.title, "signature does not match, not importing");
            return Ok(report);
        }

        if document.add {
            if report.verified.is_none() {
                tracing::warn!(
                    title = %report.title,
                    author = %report.author,
                    "storing article without signature verification"
                );
            }
            let id = self.create_article(article).await?;
            report.inserted = Some(id.into());
        }

        Ok(report)
    }
}
