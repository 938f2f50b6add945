pub mod entity;
pub mod repository;

pub use entity::{Tag, TagId, TagNames};
pub use repository::TagRepository;
