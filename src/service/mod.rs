//! Domain services.
//!
//! Services hold the business rules: the booking state machine, comment
//! eligibility, the availability snapshot, and the validation around plain
//! CRUD. They read and write through the repositories in `crate::data` and
//! return wire DTOs or an `AppError`.

pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod snapshot;
pub mod user;

#[cfg(test)]
mod test;

use crate::error::AppError;

/// Validates `(from, size)` pagination parameters and converts them to an
/// offset/limit pair.
///
/// # Returns
/// - `Ok((offset, limit))` - Validated values
/// - `Err(AppError::Validation)` - `from` is negative or `size` is not positive
pub(crate) fn to_page(from: i64, size: i64) -> Result<(u64, u64), AppError> {
    if from < 0 {
        return Err(AppError::Validation(
            "Pagination parameter 'from' must not be negative".to_string(),
        ));
    }
    if size < 1 {
        return Err(AppError::Validation(
            "Pagination parameter 'size' must be positive".to_string(),
        ));
    }

    Ok((from as u64, size as u64))
}
