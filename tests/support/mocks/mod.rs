// tests/support/mocks/mod.rs
//! テスト用のインメモリ実装
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod catalog;
pub mod signing;
pub mod time;
pub mod user_repo;
pub mod util;

pub use article_repos::InMemoryArticleStore;
pub use catalog::{InMemoryBugRepo, InMemoryTagRepo};
pub use signing::TestSigner;
pub use time::fixed_now;
pub use user_repo::InMemoryUserRepo;
pub use util::{DummyClock, DummySlug};
