//! core/codec — length-prefix field encoding and signature transport helpers.
//!
//! This module is *infrastructure*, not domain-specific:
//! - [`encode`] / [`encode_all`] produce the canonical length-prefixed
//!   concatenation that both handshake directions sign.
//! - [`encode_signature`] / [`decode_signature`] move raw signature bytes to
//!   and from their base64 wire form.
//!
//! Notes:
//! - Field order in `encode_all` is caller-specified and load-bearing:
//!   changing it changes the byte string and therefore the signature.
//! - Lengths are counted in bytes. Protocol fields are ASCII, where bytes and
//!   characters coincide; for anything else the byte count is the one that
//!   matches what is actually signed.
//! - No decode counterpart for the length-prefixed form exists: the receiver
//!   recomputes the expected encoding from its own field values instead of
//!   parsing the signed blob.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

/// Fields at or above this byte length cannot be represented by the 3-digit
/// decimal prefix.
pub const FIELD_LEN_LIMIT: usize = 1000;

/// Errors produced by the length-prefix codec.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The field's byte length cannot be expressed in the 3-digit prefix.
    /// An encoding precondition violation, distinct from any protocol error.
    #[error("field of {len} bytes cannot be length-prefixed (limit 999)")]
    FieldTooLong { len: usize },
}

/// Encode one field as its 3-digit zero-padded decimal byte length followed
/// immediately by the field itself, with no separator.
///
/// # Errors
///
/// Returns [`EncodeError::FieldTooLong`] if the field is 1000 bytes or
/// longer.
pub fn encode(field: &str) -> Result<String, EncodeError> {
    let len = field.len();
    if len >= FIELD_LEN_LIMIT {
        return Err(EncodeError::FieldTooLong { len });
    }
    Ok(format!("{len:03}{field}"))
}

/// Concatenation of [`encode`] applied to each field, in the given order.
///
/// # Errors
///
/// Returns [`EncodeError::FieldTooLong`] for the first field over the limit;
/// later fields are not encoded.
pub fn encode_all<'a, I>(fields: I) -> Result<String, EncodeError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for field in fields {
        out.push_str(&encode(field)?);
    }
    Ok(out)
}

/// Base64 wire form of raw signature bytes (standard alphabet, unwrapped).
#[must_use]
pub fn encode_signature(raw: &[u8]) -> String {
    BASE64.encode(raw)
}

/// Decode a base64 signature from the wire, tolerating the classic
/// line-wrapped variant and surrounding whitespace.
///
/// Returns `None` when the input is not valid base64 at all; callers treat
/// that the same as a signature that fails verification.
#[must_use]
pub fn decode_signature(wire: &str) -> Option<Vec<u8>> {
    let compact: String = wire.split_ascii_whitespace().collect();
    BASE64.decode(compact).ok()
}
