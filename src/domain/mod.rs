pub mod article;
pub mod bug;
pub mod comment;
pub mod errors;
pub mod tag;
pub mod user;
