pub mod articles;
pub mod bugs;
pub mod users;

pub use articles::{ArticleDto, AuthorDto, TagDto};
pub use bugs::BugDto;
pub use users::UserDto;
