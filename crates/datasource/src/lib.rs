//! # Board Datasource
//!
//! Generic query client for the hosted data service backing the ward board.
//!
//! This crate contains the only code that knows how to talk to the remote
//! service:
//! - `SelectQuery`/`UpdateQuery`: transport-neutral descriptions of the two
//!   operations the board needs per logical table (filtered/ordered read,
//!   filtered update)
//! - `QueryClient`: the async seam the core is written against
//! - `HttpQueryClient`: REST implementation speaking the service's
//!   PostgREST-style dialect
//! - `MemoryQueryClient`: in-process table store for tests and local runs
//!
//! **No domain concerns**: row shapes, status values and filter semantics
//! belong in `board-core`.

mod client;
mod http;
mod memory;
mod query;

pub use client::{QueryClient, QueryError, QueryResult};
pub use http::HttpQueryClient;
pub use memory::MemoryQueryClient;
pub use query::{SelectQuery, UpdateQuery};
