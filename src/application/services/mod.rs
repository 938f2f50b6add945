// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, users::UserCommandService},
        ports::{rendering::ContentRenderer, time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, catalog::CatalogQueryService},
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository, SignatureVerifier,
            services::ArticleSlugService,
        },
        bug::BugRepository,
        tag::TagRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub catalog_queries: Arc<CatalogQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        bug_repo: Arc<dyn BugRepository>,
        verifier: Arc<dyn SignatureVerifier>,
        renderer: Arc<dyn ContentRenderer>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(Arc::clone(&user_repo)));

        let slug_service = Arc::new(ArticleSlugService::new(slugger, clock));

        let article_commands = Arc::new(ArticleCommandService::new(
            article_write_repo,
            Arc::clone(&verifier),
            slug_service,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            article_read_repo,
            verifier,
            renderer,
        ));
        let catalog_queries = Arc::new(CatalogQueryService::new(tag_repo, user_repo, bug_repo));

        Self {
            user_commands,
            article_commands,
            article_queries,
            catalog_queries,
        }
    }
}
