pub mod articles;
pub mod catalog;
