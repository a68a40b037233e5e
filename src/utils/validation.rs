//! Centralized validation and helper functions.

use crate::core::error::TransposeError;

/// Maximum number of markers allowed in a single MAP file (DOS protection)
pub const MAX_MARKERS: usize = 10_000_000;

/// Maximum number of samples allowed in a single PED file (DOS protection)
pub const MAX_SAMPLES: usize = 1_000_000;

/// Check if adding another marker would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new marker.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_marker_limit(markers.len()).is_some() {
///     return Err(...);
/// }
/// markers.push(new_marker); // Safe to add
/// ```
#[must_use]
pub fn check_marker_limit(count: usize) -> Option<String> {
    if count >= MAX_MARKERS {
        Some(format!(
            "Too many markers: adding another would exceed maximum of {MAX_MARKERS}"
        ))
    } else {
        None
    }
}

/// Check if adding another sample would exceed the maximum allowed.
#[must_use]
pub fn check_sample_limit(count: usize) -> Option<String> {
    if count >= MAX_SAMPLES {
        Some(format!(
            "Too many samples: adding another would exceed maximum of {MAX_SAMPLES}"
        ))
    } else {
        None
    }
}

/// Whether a value can be written as a single field of space-delimited output.
///
/// # Examples
///
/// ```
/// use transpose_ped::utils::validation::is_valid_field;
///
/// assert!(is_valid_field("INCH_"));
/// assert!(!is_valid_field("two words"));
/// assert!(!is_valid_field("tab\there"));
/// ```
#[must_use]
pub fn is_valid_field(s: &str) -> bool {
    !s.chars().any(char::is_whitespace)
}

/// Validate a user-supplied token (family prefix, status code, ...)
///
/// Empty strings are rejected too when `allow_empty` is false, since an empty
/// field vanishes from space-delimited output and shifts every later column.
///
/// # Errors
///
/// Returns `TransposeError::InvalidToken` naming `what` on failure.
pub fn validate_token(
    what: &'static str,
    value: &str,
    allow_empty: bool,
) -> Result<(), TransposeError> {
    if !is_valid_field(value) || (!allow_empty && value.is_empty()) {
        return Err(TransposeError::InvalidToken {
            what,
            value: value.to_string(),
        });
    }
    Ok(())
}
