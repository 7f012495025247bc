use serde::{Deserialize, Serialize};

use crate::limits::DEFAULT_SALT_LEN;

/// How a salt should be produced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaltRequest {
    /// [`DEFAULT_SALT_LEN`] random bytes.
    #[default]
    Default,
    /// `n` random bytes.
    ByteCount(usize),
    /// Generic hash of the UTF-8 seed, `size` bytes long (default 32).
    SeedString { seed: String, size: Option<usize> },
}

impl SaltRequest {
    /// Request a salt derived from a string seed with the default size.
    pub fn seed(seed: impl Into<String>) -> Self {
        Self::SeedString {
            seed: seed.into(),
            size: None,
        }
    }

    /// Number of bytes this request will produce.
    pub fn size(&self) -> usize {
        match self {
            Self::Default => DEFAULT_SALT_LEN,
            Self::ByteCount(n) => *n,
            Self::SeedString { size, .. } => size.unwrap_or(DEFAULT_SALT_LEN),
        }
    }

    /// Whether the same request always yields the same bytes.
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::SeedString { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(SaltRequest::Default.size(), 32);
        assert_eq!(SaltRequest::ByteCount(64).size(), 64);
        assert_eq!(SaltRequest::seed("test").size(), 32);
        let sized = SaltRequest::SeedString {
            seed: "test".into(),
            size: Some(16),
        };
        assert_eq!(sized.size(), 16);
    }

    #[test]
    fn only_seeded_is_deterministic() {
        assert!(!SaltRequest::Default.is_deterministic());
        assert!(!SaltRequest::ByteCount(32).is_deterministic());
        assert!(SaltRequest::seed("x").is_deterministic());
    }

    #[test]
    fn serde_roundtrip() {
        let req = SaltRequest::SeedString {
            seed: "namespace".into(),
            size: Some(48),
        };
        let json = serde_json::to_string(&req).unwrap();
        let parsed: SaltRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, parsed);
    }
}
