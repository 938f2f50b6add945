mod get_by_id;
mod get_by_slug;
mod list;
mod raw;
mod search;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::{ListArticlesByTagQuery, ListRecentArticlesQuery};
pub use raw::GetRawArticleQuery;
pub use search::SearchArticlesQuery;
pub use service::{ArticleQueryService, MAX_LISTING_LIMIT};
