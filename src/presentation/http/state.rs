// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Listing size used when a request does not name one.
    pub recent_limit: u32,
    pub search_limit: u32,
}
