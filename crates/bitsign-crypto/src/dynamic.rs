//! Untyped entry points over JSON values.
//!
//! Requests arriving as JSON cannot guarantee that a field holds bytes. These
//! functions run the runtime type checks in their exact validation order, then
//! hand off to the typed API.
//!
//! A byte buffer is the object `{"type": "Buffer", "data": [u8, ...]}`. Any
//! other shape, including strings and plain arrays, is not a buffer. A `null`
//! field counts as absent.

use serde_json::{json, Map, Value};

use bitsign_types::limits;
use bitsign_types::{Seq, SignError};

use crate::keypair::{KeyPair, SecretKey};
use crate::signable::{signable, SignableOptions, SignablePayload};
use crate::signer::{crypto_sign, sign, SignOptions, Signature};

const BUFFER_TYPE: &str = "Buffer";

/// Decode a buffer value, or `None` if `value` is not a buffer.
pub fn as_buffer(value: &Value) -> Option<Vec<u8>> {
    let obj = value.as_object()?;
    if obj.get("type")?.as_str()? != BUFFER_TYPE {
        return None;
    }
    obj.get("data")?
        .as_array()?
        .iter()
        .map(|b| b.as_u64().and_then(|b| u8::try_from(b).ok()))
        .collect()
}

/// Encode bytes as a buffer value.
pub fn buffer_to_value(bytes: &[u8]) -> Value {
    json!({ "type": BUFFER_TYPE, "data": bytes })
}

/// Encode a key pair as `{"publicKey": Buffer, "secretKey": Buffer}`.
pub fn keypair_to_value(keypair: &KeyPair) -> Value {
    let mut obj = Map::new();
    obj.insert(
        "publicKey".into(),
        buffer_to_value(&keypair.public_key().to_bytes()),
    );
    obj.insert(
        "secretKey".into(),
        buffer_to_value(&keypair.secret_key().to_bytes()),
    );
    Value::Object(obj)
}

/// Build a signable payload from untyped input.
///
/// Order: value type, value size, salt type, salt size (<= 64), seq.
pub fn signable_value(value: &Value, options: Option<&Value>) -> Result<SignablePayload, SignError> {
    let value = as_buffer(value).ok_or(SignError::ValueNotBuffer)?;
    limits::check_value_len(value.len())?;
    let salt = salt_field(options)?;
    if let Some(salt) = &salt {
        limits::check_signable_salt_len(salt.len())?;
    }
    let seq = seq_field(options)?;
    signable(
        &value,
        &SignableOptions {
            seq,
            salt: salt.as_deref(),
        },
    )
}

/// Sign a value from untyped input.
///
/// Order: options present, salt type, salt size (16..=64), value type,
/// value size, key pair present, secret key present and a buffer, seq.
pub fn sign_value(value: &Value, options: Option<&Value>) -> Result<Signature, SignError> {
    let options = options
        .filter(|o| !o.is_null())
        .ok_or(SignError::OptionsRequired)?;
    let salt = salt_field(Some(options))?;
    if let Some(salt) = &salt {
        limits::check_sign_salt_len(salt.len())?;
    }
    let value = as_buffer(value).ok_or(SignError::ValueNotBuffer)?;
    limits::check_value_len(value.len())?;
    let keypair = field(Some(options), "keypair").ok_or(SignError::KeypairRequired)?;
    let keypair = keypair_from_value(keypair)?;
    let seq = seq_field(Some(options))?;

    sign(
        &value,
        &SignOptions {
            seq,
            salt: salt.as_deref(),
            keypair: Some(&keypair),
        },
    )
}

/// Sign raw bytes from untyped input.
///
/// Order: msg type, key pair present, secret key present and a buffer.
pub fn crypto_sign_value(msg: &Value, keypair: Option<&Value>) -> Result<Signature, SignError> {
    let msg = as_buffer(msg).ok_or(SignError::MsgNotBuffer)?;
    let keypair = keypair
        .filter(|k| !k.is_null())
        .ok_or(SignError::KeypairRequired)?;
    let keypair = keypair_from_value(keypair)?;
    Ok(crypto_sign(&msg, &keypair))
}

fn field<'v>(options: Option<&'v Value>, name: &str) -> Option<&'v Value> {
    options?.get(name).filter(|v| !v.is_null())
}

fn salt_field(options: Option<&Value>) -> Result<Option<Vec<u8>>, SignError> {
    field(options, "salt")
        .map(|v| as_buffer(v).ok_or(SignError::SaltNotBuffer))
        .transpose()
}

fn seq_field(options: Option<&Value>) -> Result<Option<Seq>, SignError> {
    field(options, "seq")
        .map(|v| v.as_u64().ok_or(SignError::InvalidSeq))
        .transpose()
}

fn keypair_from_value(keypair: &Value) -> Result<KeyPair, SignError> {
    let secret = field(Some(keypair), "secretKey")
        .and_then(as_buffer)
        .ok_or(SignError::SecretKeyRequired)?;
    let secret_key = SecretKey::from_slice(&secret)?;
    Ok(KeyPair::from_secret_key(secret_key))
}
