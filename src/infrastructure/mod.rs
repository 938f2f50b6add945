pub mod database;
pub mod rendering;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
