pub mod dates;
pub mod entity;
pub mod front_matter;
pub mod repository;
pub mod services;
pub mod signature;
pub mod value_objects;

pub use entity::{Article, Author, NewArticle};
pub use front_matter::FrontMatterParser;
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use signature::{SignatureError, SignatureVerifier};
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug};
