//! Size contract for values and salts.
//!
//! The signable payload accepts salts up to [`MAX_SALT_LEN`] with no lower
//! bound, while signing additionally requires at least [`MIN_SALT_LEN`]
//! bytes.

use crate::error::SignError;

/// Largest value (`v`) accepted, in bytes.
pub const MAX_VALUE_LEN: usize = 1000;

/// Largest salt accepted anywhere, in bytes.
pub const MAX_SALT_LEN: usize = 64;

/// Smallest salt accepted when signing or generating, in bytes.
pub const MIN_SALT_LEN: usize = 16;

/// Salt length produced when no size is requested.
pub const DEFAULT_SALT_LEN: usize = 32;

/// Reject values larger than [`MAX_VALUE_LEN`].
pub fn check_value_len(len: usize) -> Result<(), SignError> {
    if len > MAX_VALUE_LEN {
        return Err(SignError::ValueTooLarge { size: len });
    }
    Ok(())
}

/// Salt bound for building a signable payload: upper bound only.
pub fn check_signable_salt_len(len: usize) -> Result<(), SignError> {
    if len > MAX_SALT_LEN {
        return Err(SignError::SaltTooLarge { size: len });
    }
    Ok(())
}

/// Salt bound for signing: `MIN_SALT_LEN..=MAX_SALT_LEN`.
pub fn check_sign_salt_len(len: usize) -> Result<(), SignError> {
    if !(MIN_SALT_LEN..=MAX_SALT_LEN).contains(&len) {
        return Err(SignError::SaltSizeOutOfRange { size: len });
    }
    Ok(())
}

/// Size bound for generated salts. Same range as signing.
pub fn check_salt_size(size: usize) -> Result<(), SignError> {
    check_sign_salt_len(size)
}
