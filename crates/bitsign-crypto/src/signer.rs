use serde::{Deserialize, Serialize};
use tracing::debug;

use bitsign_types::limits;
use bitsign_types::{Seq, SignError};

use crate::keypair::{KeyPair, PublicKey};
use crate::signable::{signable, SignableOptions};

/// Length of an encoded signature.
pub const SIGNATURE_LEN: usize = 64;

/// Ed25519 signature.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(#[serde(with = "signature_serde")] ed25519_dalek::Signature);

/// Options for [`sign`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SignOptions<'a> {
    pub seq: Option<Seq>,
    pub salt: Option<&'a [u8]>,
    pub keypair: Option<&'a KeyPair>,
}

impl<'a> SignOptions<'a> {
    pub fn new(keypair: &'a KeyPair) -> Self {
        Self {
            keypair: Some(keypair),
            ..Default::default()
        }
    }

    pub fn with_seq(mut self, seq: Seq) -> Self {
        self.seq = Some(seq);
        self
    }

    pub fn with_salt(mut self, salt: &'a [u8]) -> Self {
        self.salt = Some(salt);
        self
    }

    /// The payload-shaping subset of these options.
    pub fn signable(&self) -> SignableOptions<'a> {
        SignableOptions {
            seq: self.seq,
            salt: self.salt,
        }
    }
}

impl Signature {
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LEN]) -> Self {
        Self(ed25519_dalek::Signature::from_bytes(bytes))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignError> {
        ed25519_dalek::Signature::from_slice(bytes)
            .map(Self)
            .map_err(|_| SignError::InvalidSignature)
    }

    pub fn from_hex(s: &str) -> Result<Self, SignError> {
        let bytes = hex::decode(s).map_err(|_| SignError::InvalidSignature)?;
        Self::from_slice(&bytes)
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        self.0.to_bytes()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0.to_bytes())
    }
}

/// Sign a mutable item value.
///
/// Checks, in order: salt size (16..=64 when present), value size (<= 1000),
/// key pair presence. The signature covers the payload built by
/// [`signable`] from the same `seq` and `salt`.
pub fn sign(value: &[u8], options: &SignOptions<'_>) -> Result<Signature, SignError> {
    if let Some(salt) = options.salt {
        limits::check_sign_salt_len(salt.len())?;
    }
    limits::check_value_len(value.len())?;
    let keypair = options.keypair.ok_or(SignError::KeypairRequired)?;

    let payload = signable(value, &options.signable())?;
    let signature = crypto_sign(payload.as_bytes(), keypair);
    debug!(
        seq = options.seq.unwrap_or(0),
        salted = options.salt.is_some(),
        value_len = value.len(),
        "signed mutable item"
    );
    Ok(signature)
}

/// Sign arbitrary bytes with no size checks.
///
/// Callers are expected to pass a payload produced by [`signable`].
pub fn crypto_sign(msg: &[u8], keypair: &KeyPair) -> Signature {
    use ed25519_dalek::Signer;
    Signature(keypair.secret_key().inner().sign(msg))
}

/// Check a detached signature over `msg`.
pub fn verify(signature: &Signature, msg: &[u8], public_key: &PublicKey) -> bool {
    use ed25519_dalek::Verifier;
    public_key.inner().verify(msg, &signature.0).is_ok()
}

/// Rebuild the payload for `value` and check the signature over it.
pub fn verify_value(
    signature: &Signature,
    value: &[u8],
    options: &SignableOptions<'_>,
    public_key: &PublicKey,
) -> Result<(), SignError> {
    let payload = signable(value, options)?;
    let valid = verify(signature, payload.as_bytes(), public_key);
    debug!(
        seq = options.seq.unwrap_or(0),
        salted = options.salt.is_some(),
        valid,
        "verified mutable item"
    );
    if !valid {
        return Err(SignError::InvalidSignature);
    }
    Ok(())
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({}...)", hex::encode(&self.0.to_bytes()[..8]))
    }
}

mod signature_serde {
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(sig: &ed25519_dalek::Signature, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&sig.to_bytes())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ed25519_dalek::Signature, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes: Vec<u8> = Vec::deserialize(deserializer)?;
        let arr: [u8; 64] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 64-byte signature"))?;
        Ok(ed25519_dalek::Signature::from_bytes(&arr))
    }
}
