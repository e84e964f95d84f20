//! # Board Types
//!
//! Validated primitive types shared across the ward board crates:
//! - `NonEmptyText`: a string guaranteed to hold non-whitespace content
//! - `Specialty`: the closed list of clinical specialties used by the filter
//! - `RecordKind`: the discriminant tagging a board record's origin table

mod kind;
mod specialty;
mod text;

pub use kind::RecordKind;
pub use specialty::{Specialty, SpecialtyError};
pub use text::{NonEmptyText, TextError};
