//! Signable payload construction and Ed25519 signing for mutable DHT items.
//!
//! A mutable item is signed over the inner content of the bencoded
//! dictionary `{salt?, seq, v}`, without the surrounding `d`/`e` markers.
//! This crate builds that payload, signs it, and verifies signatures over it.
//!
//! All crypto operations wrap established libraries - no custom cryptography.

pub mod dynamic;
pub mod keypair;
pub mod salt;
pub mod signable;
pub mod signer;

pub use bitsign_types::{ErrorKind, SaltRequest, Seq, SignError};
pub use keypair::{keypair, KeyPair, PublicKey, SecretKey};
pub use salt::{generic_hash, random_salt, salt, salt_from_seed};
pub use signable::{signable, SignableOptions, SignablePayload};
pub use signer::{crypto_sign, sign, verify, verify_value, SignOptions, Signature};
