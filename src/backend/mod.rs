//! Search backend access

pub mod api;
pub mod types;

pub use api::BackendClient;
pub use types::{ContextResult, SearchResult};
