use bitsign_types::SignError;

/// Length of an encoded public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of an encoded secret key: 32-byte seed followed by the public key.
pub const SECRET_KEY_LEN: usize = 64;

/// Ed25519 public key (32 bytes).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(ed25519_dalek::VerifyingKey);

/// Ed25519 secret key in the 64-byte `seed || public key` layout.
#[derive(Clone)]
pub struct SecretKey(ed25519_dalek::SigningKey);

/// A matching public/secret key pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    public_key: PublicKey,
    secret_key: SecretKey,
}

/// Generate a fresh random key pair.
pub fn keypair() -> KeyPair {
    KeyPair::generate()
}

impl PublicKey {
    /// Create from raw 32-byte public key.
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LEN]) -> Result<Self, SignError> {
        let key = ed25519_dalek::VerifyingKey::from_bytes(bytes)
            .map_err(|_| SignError::InvalidPublicKey)?;
        Ok(Self(key))
    }

    /// Create from a byte slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignError> {
        let arr: &[u8; PUBLIC_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| SignError::InvalidPublicKey)?;
        Self::from_bytes(arr)
    }

    /// Parse from 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, SignError> {
        let bytes = hex::decode(s).map_err(|_| SignError::InvalidPublicKey)?;
        Self::from_slice(&bytes)
    }

    /// Raw public key bytes.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.0.to_bytes()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0.to_bytes())
    }

    pub(crate) fn inner(&self) -> &ed25519_dalek::VerifyingKey {
        &self.0
    }
}

impl SecretKey {
    /// Create from the 64-byte `seed || public key` encoding.
    ///
    /// The public half must match the one derived from the seed.
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_LEN]) -> Result<Self, SignError> {
        let key = ed25519_dalek::SigningKey::from_keypair_bytes(bytes)
            .map_err(|e| SignError::InvalidSecretKey(e.to_string()))?;
        Ok(Self(key))
    }

    /// Create from a byte slice that must be exactly 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignError> {
        let arr: &[u8; SECRET_KEY_LEN] = bytes.try_into().map_err(|_| {
            SignError::InvalidSecretKey(format!(
                "expected {SECRET_KEY_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Self::from_bytes(arr)
    }

    /// Parse from 128 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, SignError> {
        let bytes = hex::decode(s).map_err(|e| SignError::InvalidSecretKey(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Derive the secret key from a raw 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self(ed25519_dalek::SigningKey::from_bytes(seed))
    }

    /// The 64-byte `seed || public key` encoding.
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        self.0.to_keypair_bytes()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// The 32-byte seed.
    pub fn seed(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    /// The corresponding public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.verifying_key())
    }

    pub(crate) fn inner(&self) -> &ed25519_dalek::SigningKey {
        &self.0
    }
}

impl KeyPair {
    /// Generate a new random key pair from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut csprng = rand::thread_rng();
        Self::from_secret_key(SecretKey(ed25519_dalek::SigningKey::generate(&mut csprng)))
    }

    /// Build the pair around an existing secret key.
    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        Self {
            public_key: secret_key.public_key(),
            secret_key,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey(<redacted>)")
    }
}
