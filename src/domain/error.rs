//! Domain error types for carbook.
//!
//! These errors describe input that cannot become a valid owner or car.
//! They are raised before anything touches the database.

use thiserror::Error;

/// Validation failures for user-supplied record fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} is too long ({len} characters, at most {max} allowed)")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("{field} must be a whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
