use thiserror::Error;

/// Errors produced by bitsign operations.
///
/// The `Display` text of the validation variants is relied upon by existing
/// callers and must not change.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignError {
    #[error("Value must be a buffer")]
    ValueNotBuffer,

    #[error("Value size must be <= 1000")]
    ValueTooLarge { size: usize },

    #[error("salt must be a buffer")]
    SaltNotBuffer,

    #[error("salt size must be no greater than 64 bytes")]
    SaltTooLarge { size: usize },

    #[error("salt size must be between 16 and 64 bytes (inclusive)")]
    SaltSizeOutOfRange { size: usize },

    #[error("msg must be a buffer")]
    MsgNotBuffer,

    #[error("seq must be a non-negative integer")]
    InvalidSeq,

    #[error("Options are required")]
    OptionsRequired,

    #[error("keypair is required")]
    KeypairRequired,

    #[error("keypair.secretKey is required")]
    SecretKeyRequired,

    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid hash output size: {0}")]
    HashOutputSize(usize),
}

/// Coarse classification of a [`SignError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An input had the wrong type (only reachable from untyped input).
    TypeConstraint,
    /// An input had an out-of-range length.
    SizeConstraint,
    /// A required option, key pair or secret key was absent.
    MissingField,
    /// Key material could not be parsed.
    Key,
    /// A signature did not verify.
    Verification,
}

impl SignError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValueNotBuffer | Self::SaltNotBuffer | Self::MsgNotBuffer | Self::InvalidSeq => {
                ErrorKind::TypeConstraint
            }
            Self::ValueTooLarge { .. }
            | Self::SaltTooLarge { .. }
            | Self::SaltSizeOutOfRange { .. }
            | Self::HashOutputSize(_) => ErrorKind::SizeConstraint,
            Self::OptionsRequired | Self::KeypairRequired | Self::SecretKeyRequired => {
                ErrorKind::MissingField
            }
            Self::InvalidSecretKey(_) | Self::InvalidPublicKey => ErrorKind::Key,
            Self::InvalidSignature => ErrorKind::Verification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(SignError::ValueNotBuffer.to_string(), "Value must be a buffer");
        assert_eq!(
            SignError::ValueTooLarge { size: 1001 }.to_string(),
            "Value size must be <= 1000"
        );
        assert_eq!(SignError::SaltNotBuffer.to_string(), "salt must be a buffer");
        assert_eq!(
            SignError::SaltTooLarge { size: 65 }.to_string(),
            "salt size must be no greater than 64 bytes"
        );
        assert_eq!(
            SignError::SaltSizeOutOfRange { size: 15 }.to_string(),
            "salt size must be between 16 and 64 bytes (inclusive)"
        );
        assert_eq!(SignError::MsgNotBuffer.to_string(), "msg must be a buffer");
        assert_eq!(SignError::OptionsRequired.to_string(), "Options are required");
        assert_eq!(SignError::KeypairRequired.to_string(), "keypair is required");
        assert_eq!(
            SignError::SecretKeyRequired.to_string(),
            "keypair.secretKey is required"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(SignError::SaltNotBuffer.kind(), ErrorKind::TypeConstraint);
        assert_eq!(
            SignError::ValueTooLarge { size: 2000 }.kind(),
            ErrorKind::SizeConstraint
        );
        assert_eq!(SignError::SecretKeyRequired.kind(), ErrorKind::MissingField);
        assert_eq!(SignError::InvalidPublicKey.kind(), ErrorKind::Key);
        assert_eq!(SignError::InvalidSignature.kind(), ErrorKind::Verification);
    }
}
