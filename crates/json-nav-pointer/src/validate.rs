//! Validation of pointer expressions before compilation.

use thiserror::Error;

/// Maximum allowed pointer expression length, in bytes.
pub const MAX_POINTER_LENGTH: usize = 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("invalid JSON Pointer \"{0}\": must be empty or start with '/'")]
    MissingLeadingSlash(String),
    #[error("JSON Pointer is too long ({0} bytes, at most {max} allowed)", max = MAX_POINTER_LENGTH)]
    TooLong(usize),
}

/// Validate a JSON Pointer expression.
///
/// # Errors
///
/// Returns an error if:
/// - The expression is non-empty but doesn't start with `/`
/// - The expression exceeds [`MAX_POINTER_LENGTH`] bytes
///
/// # Example
///
/// ```
/// use json_nav_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();
/// validate_json_pointer("/foo/bar").unwrap();
/// validate_json_pointer("foo").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), PointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::MissingLeadingSlash(pointer.to_string()));
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(PointerError::TooLong(pointer.len()));
    }
    Ok(())
}
