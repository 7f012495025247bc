//! Foundation types for bitsign.
//!
//! bitsign builds and signs the payload of a mutable DHT item (the
//! BEP44-style `{salt?, seq, v}` record). This crate holds the pieces every
//! other bitsign crate shares and that carry no cryptography of their own.
//!
//! # Key Types
//!
//! - [`SignError`] - Every failure bitsign can report, with stable messages
//! - [`ErrorKind`] - Coarse classification of a [`SignError`]
//! - [`SaltRequest`] - How a salt should be produced
//! - [`limits`] - The size contract for values and salts

pub mod error;
pub mod limits;
pub mod salt;

pub use error::{ErrorKind, SignError};
pub use salt::SaltRequest;

/// Sequence number of a mutable item. Non-negative by construction.
pub type Seq = u64;
