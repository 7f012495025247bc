//! The signable payload of a mutable item.
//!
//! The payload is the bencoding of the dictionary `{salt?, seq, v}` with the
//! leading `d` and trailing `e` removed. Keys appear in sorted order
//! (`salt`, `seq`, `v`); byte strings are written as `<len>:<bytes>` and the
//! sequence number as `i<seq>e`. The length prefixes keep distinct inputs
//! from producing the same bytes.

use bitsign_types::limits;
use bitsign_types::{Seq, SignError};

const KEY_SALT: &[u8] = b"salt";
const KEY_SEQ: &[u8] = b"seq";
const KEY_VALUE: &[u8] = b"v";

/// Optional fields of a signable payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignableOptions<'a> {
    /// Sequence number; `None` encodes as 0.
    pub seq: Option<Seq>,
    /// Salt; `None` omits the field entirely.
    pub salt: Option<&'a [u8]>,
}

impl<'a> SignableOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seq(mut self, seq: Seq) -> Self {
        self.seq = Some(seq);
        self
    }

    pub fn with_salt(mut self, salt: &'a [u8]) -> Self {
        self.salt = Some(salt);
        self
    }
}

/// The exact bytes that get signed for a mutable item.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SignablePayload(Vec<u8>);

impl SignablePayload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The payload wrapped back into a complete bencoded dictionary.
    pub fn to_dictionary(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.0.len() + 2);
        out.push(b'd');
        out.extend_from_slice(&self.0);
        out.push(b'e');
        out
    }
}

impl AsRef<[u8]> for SignablePayload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SignablePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SignablePayload({})", self.0.escape_ascii())
    }
}

/// Build the signable payload for `value`.
///
/// Checks, in order: value size (<= 1000), then salt size (<= 64). There is
/// no lower bound on the salt here.
pub fn signable(value: &[u8], options: &SignableOptions<'_>) -> Result<SignablePayload, SignError> {
    limits::check_value_len(value.len())?;
    if let Some(salt) = options.salt {
        limits::check_signable_salt_len(salt.len())?;
    }

    let salt_len = options.salt.map_or(0, |s| s.len() + 16);
    let mut out = Vec::with_capacity(salt_len + value.len() + 40);
    if let Some(salt) = options.salt {
        put_bytes(&mut out, KEY_SALT);
        put_bytes(&mut out, salt);
    }
    put_bytes(&mut out, KEY_SEQ);
    put_int(&mut out, options.seq.unwrap_or(0));
    put_bytes(&mut out, KEY_VALUE);
    put_bytes(&mut out, value);
    Ok(SignablePayload(out))
}

fn put_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(bytes.len().to_string().as_bytes());
    out.push(b':');
    out.extend_from_slice(bytes);
}

fn put_int(out: &mut Vec<u8>, n: Seq) {
    out.push(b'i');
    out.extend_from_slice(n.to_string().as_bytes());
    out.push(b'e');
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde::{Deserialize, Serialize};
    use serde_bytes::ByteBuf;

    /// Reference shape for the bencode encoder and decoder.
    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Item {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        salt: Option<ByteBuf>,
        seq: u64,
        v: ByteBuf,
    }

    fn reference(value: &[u8], seq: u64, salt: Option<&[u8]>) -> Vec<u8> {
        let item = Item {
            salt: salt.map(|s| ByteBuf::from(s.to_vec())),
            seq,
            v: ByteBuf::from(value.to_vec()),
        };
        let encoded = serde_bencode::to_bytes(&item).unwrap();
        encoded[1..encoded.len() - 1].to_vec()
    }

    #[test]
    fn default_payload_bytes() {
        let payload = signable(b"test", &SignableOptions::new()).unwrap();
        assert_eq!(payload.as_bytes(), b"3:seqi0e1:v4:test");
    }

    #[test]
    fn seq_payload_bytes() {
        let payload = signable(b"test", &SignableOptions::new().with_seq(1)).unwrap();
        assert_eq!(payload.as_bytes(), b"3:seqi1e1:v4:test");
    }

    #[test]
    fn salted_payload_bytes() {
        let salt = [0x61u8; 16];
        let payload = signable(b"test", &SignableOptions::new().with_salt(&salt)).unwrap();
        assert_eq!(
            payload.as_bytes(),
            b"4:salt16:aaaaaaaaaaaaaaaa3:seqi0e1:v4:test"
        );
    }

    #[test]
    fn matches_reference_encoder() {
        let salt = crate::salt::random_salt(32).unwrap();
        let value = b"test";
        assert_eq!(
            signable(value, &SignableOptions::new()).unwrap().as_bytes(),
            reference(value, 0, None)
        );
        assert_eq!(
            signable(value, &SignableOptions::new().with_seq(1))
                .unwrap()
                .as_bytes(),
            reference(value, 1, None)
        );
        assert_eq!(
            signable(value, &SignableOptions::new().with_salt(&salt))
                .unwrap()
                .as_bytes(),
            reference(value, 0, Some(salt.as_slice()))
        );
    }

    #[test]
    fn decodable_as_dictionary() {
        let salt = crate::salt::random_salt(32).unwrap();
        let payload = signable(b"test", &SignableOptions::new().with_salt(&salt)).unwrap();
        let item: Item = serde_bencode::from_bytes(&payload.to_dictionary()).unwrap();
        assert_eq!(item.salt.as_deref().map(|s| s.as_slice()), Some(&salt[..]));
        assert_eq!(item.v.as_slice(), b"test");
        assert_eq!(item.seq, 0);
    }

    #[test]
    fn empty_value_is_allowed() {
        let payload = signable(b"", &SignableOptions::new()).unwrap();
        assert_eq!(payload.as_bytes(), b"3:seqi0e1:v0:");
    }

    #[test]
    fn value_size_boundary() {
        assert!(signable(&[0u8; 1000], &SignableOptions::new()).is_ok());
        let err = signable(&[0u8; 1001], &SignableOptions::new()).unwrap_err();
        assert_eq!(err.to_string(), "Value size must be <= 1000");
    }

    #[test]
    fn salt_size_boundary() {
        let ok = [0u8; 64];
        assert!(signable(b"test", &SignableOptions::new().with_salt(&ok)).is_ok());
        let too_big = [0u8; 65];
        let err = signable(b"test", &SignableOptions::new().with_salt(&too_big)).unwrap_err();
        assert_eq!(err.to_string(), "salt size must be no greater than 64 bytes");
    }

    #[test]
    fn short_salt_is_accepted() {
        let salt = [1u8; 1];
        assert!(signable(b"test", &SignableOptions::new().with_salt(&salt)).is_ok());
        assert!(signable(b"test", &SignableOptions::new().with_salt(&[])).is_ok());
    }

    #[test]
    fn value_checked_before_salt() {
        let salt = [0u8; 65];
        let err = signable(&[0u8; 1001], &SignableOptions::new().with_salt(&salt)).unwrap_err();
        assert_eq!(err, SignError::ValueTooLarge { size: 1001 });
    }

    #[test]
    fn empty_salt_differs_from_no_salt() {
        let none = signable(b"x", &SignableOptions::new()).unwrap();
        let empty = signable(b"x", &SignableOptions::new().with_salt(&[])).unwrap();
        assert_ne!(none, empty);
    }

    fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(any::<u8>(), 0..=1000)
    }

    fn salt_strategy() -> impl Strategy<Value = Option<Vec<u8>>> {
        proptest::option::of(proptest::collection::vec(any::<u8>(), 0..=64))
    }

    proptest! {
        #[test]
        fn payload_is_deterministic(value in value_strategy(), seq in any::<u64>(), salt in salt_strategy()) {
            let opts = SignableOptions { seq: Some(seq), salt: salt.as_deref() };
            prop_assert_eq!(signable(&value, &opts).unwrap(), signable(&value, &opts).unwrap());
        }

        #[test]
        fn wrapped_payload_decodes_to_fields(value in value_strategy(), seq in 0u64..=(i64::MAX as u64), salt in salt_strategy()) {
            let opts = SignableOptions { seq: Some(seq), salt: salt.as_deref() };
            let payload = signable(&value, &opts).unwrap();
            let item: Item = serde_bencode::from_bytes(&payload.to_dictionary()).unwrap();
            prop_assert_eq!(item, Item {
                salt: salt.map(ByteBuf::from),
                seq,
                v: ByteBuf::from(value),
            });
        }

        #[test]
        fn distinct_inputs_give_distinct_payloads(
            a in value_strategy(), b in value_strategy(),
            seq_a in any::<u64>(), seq_b in any::<u64>(),
            salt_a in salt_strategy(), salt_b in salt_strategy(),
        ) {
            prop_assume!((&a, seq_a, &salt_a) != (&b, seq_b, &salt_b));
            let pa = signable(&a, &SignableOptions { seq: Some(seq_a), salt: salt_a.as_deref() }).unwrap();
            let pb = signable(&b, &SignableOptions { seq: Some(seq_b), salt: salt_b.as_deref() }).unwrap();
            prop_assert_ne!(pa, pb);
        }
    }
}
