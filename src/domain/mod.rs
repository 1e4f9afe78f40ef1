//! Domain types for owners and their cars.

pub mod car;
pub mod error;
pub mod owner;

pub use car::{Car, CarId, NewCar};
pub use error::InputError;
pub use owner::{NewOwner, Owner, OwnerId};

/// Parse an integer typed by the user, naming the field on failure.
pub fn parse_number(field: &'static str, raw: &str) -> Result<i32, InputError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| InputError::InvalidNumber {
            field,
            value: raw.trim().to_string(),
        })
}

/// Reject blank values and values longer than `max` characters.
pub(crate) fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), InputError> {
    if value.trim().is_empty() {
        return Err(InputError::Required(field));
    }
    let len = value.chars().count();
    if len > max {
        return Err(InputError::TooLong { field, max, len });
    }
    Ok(())
}
