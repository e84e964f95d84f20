//! # Board Core
//!
//! Core business logic for the ward discharge board.
//!
//! This crate contains pure data operations and the board session state:
//! - Loading the active patient and consultation lists from the data service
//! - Filtering the combined list by search text and specialty
//! - Dispatching discharge/completion updates and pruning the local list
//!
//! **No API concerns**: HTTP servers, OpenAPI documentation and CLI parsing
//! belong in `wardboard-run`, `api-shared` and `board-cli`. **No transport
//! concerns**: the wire dialect of the data service lives in
//! `board-datasource`; this crate only describes queries.

pub mod board;
pub mod config;
pub mod constants;
pub mod discharge;
pub mod error;
pub mod filter;
pub mod records;
pub mod service;
pub mod validation;

pub use board::BoardState;
pub use config::CoreConfig;
pub use discharge::{DischargeForm, DischargeOutcome};
pub use error::{BoardError, BoardResult};
pub use records::{ActiveRecord, ConsultationRow, PatientRow};
pub use service::WardService;
