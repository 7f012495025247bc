//! Salt generation.
//!
//! Salts are either random or derived from a string seed with the generic
//! hash: unkeyed BLAKE2b whose output length is a parameter of the hash (not
//! a truncation), matching libsodium's `crypto_generichash`.

use blake2::digest::{Update, VariableOutput};
use blake2::Blake2bVar;
use rand::RngCore;

use bitsign_types::limits::{self, DEFAULT_SALT_LEN};
use bitsign_types::{SaltRequest, SignError};

/// Produce a salt as described by `request`.
pub fn salt(request: &SaltRequest) -> Result<Vec<u8>, SignError> {
    match request {
        SaltRequest::Default => random_salt(DEFAULT_SALT_LEN),
        SaltRequest::ByteCount(n) => random_salt(*n),
        SaltRequest::SeedString { seed, size } => {
            salt_from_seed(seed, size.unwrap_or(DEFAULT_SALT_LEN))
        }
    }
}

/// `size` random bytes; `size` must be within 16..=64.
pub fn random_salt(size: usize) -> Result<Vec<u8>, SignError> {
    limits::check_salt_size(size)?;
    let mut buf = vec![0u8; size];
    rand::thread_rng().fill_bytes(&mut buf);
    Ok(buf)
}

/// Generic hash of the UTF-8 bytes of `seed`, `size` bytes long.
pub fn salt_from_seed(seed: &str, size: usize) -> Result<Vec<u8>, SignError> {
    limits::check_salt_size(size)?;
    generic_hash(seed.as_bytes(), size)
}

/// Unkeyed BLAKE2b with an `output_len`-byte digest (1..=64).
pub fn generic_hash(input: &[u8], output_len: usize) -> Result<Vec<u8>, SignError> {
    let mut hasher =
        Blake2bVar::new(output_len).map_err(|_| SignError::HashOutputSize(output_len))?;
    hasher.update(input);
    let mut out = vec![0u8; output_len];
    hasher
        .finalize_variable(&mut out)
        .map_err(|_| SignError::HashOutputSize(output_len))?;
    Ok(out)
}
