//! The async query seam between the board core and its backing service.

use crate::{SelectQuery, UpdateQuery};
use serde_json::Value;

/// Errors raised while executing a query against the data service.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("data service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Filtered read and filtered update against logical tables.
///
/// Implementations must be usable from concurrent tasks; the board issues its
/// two load reads simultaneously against one shared client.
#[async_trait::async_trait]
pub trait QueryClient: Send + Sync {
    /// Execute a select and return the matched rows as JSON objects.
    async fn select(&self, query: SelectQuery) -> QueryResult<Vec<Value>>;

    /// Execute an update and return the number of rows it changed.
    async fn update(&self, query: UpdateQuery) -> QueryResult<u64>;
}
