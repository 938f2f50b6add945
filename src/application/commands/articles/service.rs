// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::article::{
    ArticleWriteRepository, SignatureVerifier, services::ArticleSlugService,
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) verifier: Arc<dyn SignatureVerifier>,
    pub(super) slug_service: Arc<ArticleSlugService>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        verifier: Arc<dyn SignatureVerifier>,
        slug_service: Arc<ArticleSlugService>,
    ) -> Self {
        Self {
            write_repo,
            verifier,
            slug_service,
        }
    }
}
