// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dnews::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleSlug, ArticleWriteRepository,
    Author, NewArticle,
};
use dnews::domain::errors::{DomainError, DomainResult};
use dnews::domain::tag::{Tag, TagId};
use dnews::domain::user::UserId;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::time::fixed_now;

#[derive(Clone)]
struct StoredArticle {
    id: i64,
    slug: String,
    title: String,
    body: String,
    published: DateTime<Utc>,
    live: bool,
    signature: Vec<u8>,
    author_id: i64,
}

#[derive(Default)]
struct StoreState {
    authors: Vec<Author>,
    tags: Vec<Tag>,
    articles: Vec<StoredArticle>,
    links: Vec<(i64, i64)>,
    next_id: i64,
}

/// 記事・著者・タグを保持するインメモリストア
///
/// Inserts are staged and only become visible once every step succeeded,
/// mirroring the single transaction of the Postgres store.
#[derive(Default)]
pub struct InMemoryArticleStore {
    state: Mutex<StoreState>,
    fail_tag_link: AtomicBool,
    insert_calls: AtomicUsize,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_author(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        public_key: Option<Vec<u8>>,
    ) -> UserId {
        let mut state = self.state.lock().unwrap();
        let id = UserId::new(i64::try_from(state.authors.len()).unwrap() + 1).unwrap();
        state.authors.push(Author {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            public_key,
        });
        id
    }

    pub fn add_tag(&self, name: &str) -> TagId {
        let mut state = self.state.lock().unwrap();
        let id = TagId::new(i64::try_from(state.tags.len()).unwrap() + 1).unwrap();
        state.tags.push(Tag {
            id,
            name: name.into(),
            created_at: Some(fixed_now()),
        });
        id
    }

    /// Makes the tag-linking step of the next inserts fail.
    pub fn fail_tag_linking(&self, fail: bool) {
        self.fail_tag_link.store(fail, Ordering::SeqCst);
    }

    /// Replaces a stored signature, as a tampered database row would.
    pub fn overwrite_signature(&self, id: ArticleId, signature: Vec<u8>) {
        let mut state = self.state.lock().unwrap();
        if let Some(article) = state.articles.iter_mut().find(|a| a.id == id.0) {
            article.signature = signature;
        }
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn link_count(&self) -> usize {
        self.state.lock().unwrap().links.len()
    }

    pub fn tag_names_of(&self, id: ArticleId) -> Vec<String> {
        let state = self.state.lock().unwrap();
        let mut names: Vec<String> = Self::tags_of(&state, id.0)
            .into_iter()
            .map(|tag| tag.name)
            .collect();
        names.sort();
        names
    }

    pub fn tags(&self) -> Vec<Tag> {
        self.state.lock().unwrap().tags.clone()
    }

    fn tags_of(state: &StoreState, article_id: i64) -> Vec<Tag> {
        let mut tags: Vec<Tag> = state
            .links
            .iter()
            .filter(|(aid, _)| *aid == article_id)
            .filter_map(|(_, tid)| state.tags.iter().find(|t| t.id.0 == *tid).cloned())
            .collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        tags
    }

    fn hydrate(state: &StoreState, stored: &StoredArticle) -> Article {
        let author = state
            .authors
            .iter()
            .find(|a| a.id.0 == stored.author_id)
            .cloned()
            .unwrap();
        Article::new(
            ArticleId::new(stored.id).unwrap(),
            ArticleSlug::new(stored.slug.clone()).unwrap(),
            stored.title.clone(),
            stored.published,
            author,
            ArticleBody::new(stored.body.clone()),
            stored.signature.clone(),
        )
        .with_live(stored.live)
        .with_tags(Self::tags_of(state, stored.id))
    }

    /// Live articles, newest first.
    fn live_sorted(state: &StoreState) -> Vec<&StoredArticle> {
        let mut live: Vec<&StoredArticle> = state.articles.iter().filter(|a| a.live).collect();
        live.sort_by(|a, b| b.published.cmp(&a.published).then(b.id.cmp(&a.id)));
        live
    }
}

fn occurrences(haystack: &str, term: &str) -> usize {
    haystack.to_lowercase().matches(term).count()
}

/// The first body line mentioning a term, with the terms wrapped in `<b>`.
fn headline(body: &str, terms: &[String]) -> String {
    let line = body
        .lines()
        .find(|line| terms.iter().any(|t| line.to_lowercase().contains(t.as_str())))
        .unwrap_or_default();
    terms.iter().fold(line.to_string(), |acc, term| {
        acc.replace(term.as_str(), &format!("<b>{term}</b>"))
    })
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: &NewArticle) -> DomainResult<ArticleId> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();

        let author_id = state
            .authors
            .iter()
            .find(|a| a.email == article.author.email)
            .map(|a| a.id.0)
            .ok_or_else(|| DomainError::AuthorNotFound(article.author.email.clone()))?;

        let slug = article
            .slug
            .as_ref()
            .ok_or_else(|| DomainError::Validation("slug missing".into()))?;
        if state.articles.iter().any(|a| a.slug == slug.as_str()) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let id = state.next_id + 1;
        let staged = StoredArticle {
            id,
            slug: slug.to_string(),
            title: article.title.clone(),
            body: article.body().as_str().to_string(),
            published: article.published_at.unwrap_or_else(fixed_now),
            live: article.live,
            signature: article.signature().to_vec(),
            author_id,
        };
        let tag_ids: Vec<i64> = state
            .tags
            .iter()
            .filter(|tag| article.tags.as_slice().contains(&tag.name))
            .map(|tag| tag.id.0)
            .collect();

        if !tag_ids.is_empty() && self.fail_tag_link.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("tag link failed".into()));
        }

        state.next_id = id;
        state.articles.push(staged);
        state.links.extend(tag_ids.into_iter().map(|tid| (id, tid)));
        Ok(ArticleId::new(id).unwrap())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|a| a.id == id.0)
            .map(|a| Self::hydrate(&state, a)))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|a| a.slug == slug.as_str())
            .map(|a| Self::hydrate(&state, a)))
    }

    async fn find_raw_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleBody>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|a| a.slug == slug.as_str())
            .map(|a| ArticleBody::new(a.body.clone())))
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        Ok(Self::live_sorted(&state)
            .into_iter()
            .take(limit as usize)
            .map(|a| Self::hydrate(&state, a))
            .collect())
    }

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let Some(tag_id) = state.tags.iter().find(|t| t.name == tag).map(|t| t.id.0) else {
            return Ok(Vec::new());
        };
        Ok(Self::live_sorted(&state)
            .into_iter()
            .filter(|a| state.links.contains(&(a.id, tag_id)))
            .map(|a| Self::hydrate(&state, a))
            .collect())
    }

    async fn search(&self, query: &str, limit: u32) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

        let mut hits: Vec<(usize, &StoredArticle)> = Self::live_sorted(&state)
            .into_iter()
            .map(|a| {
                let text = format!("{} {}", a.title, a.body);
                let rank: usize = terms.iter().map(|t| occurrences(&text, t)).sum();
                (rank, a)
            })
            .filter(|(rank, _)| *rank > 0)
            .collect();
        hits.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(hits
            .into_iter()
            .take(limit as usize)
            .map(|(rank, a)| {
                #[allow(clippy::cast_precision_loss)]
                let rank = rank as f32;
                Self::hydrate(&state, a).with_search_hit(headline(&a.body, &terms), rank)
            })
            .collect())
    }
}
