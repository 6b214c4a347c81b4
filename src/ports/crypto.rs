// src/ports/crypto.rs
use thiserror::Error;

/// Trait for producing a single asymmetric signature over a raw byte string.
///
/// An implementor holds its own private key material, loaded for exactly one
/// flow invocation and dropped with the implementor. The scheme is
/// deterministic: the same key and message always yield the same signature
/// bytes (PKCS#1 v1.5, not a probabilistic padding).
///
/// The signature input is already the canonical length-prefixed
/// concatenation; implementations sign the bytes as given and never
/// re-encode.
///
/// Base64 for wire transport is the caller's concern, not the signer's.
pub trait RequestSigner {
    /// Sign `message`, returning the raw (pre-base64) signature bytes.
    ///
    /// # Errors
    /// Returns [`SignError::Internal`] if the signing operation fails.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignError>;
}

/// Trait for verifying an asymmetric signature over a raw byte string.
///
/// Malformed or truncated signature bytes are a verification failure, never
/// a panic or error: callers hand this whatever the wire produced.
pub trait ResponseVerifier {
    /// True iff `signature` is valid over `message` under the held public
    /// key.
    fn verify(&self, signature: &[u8], message: &[u8]) -> bool;
}

#[derive(Debug, Error)]
pub enum SignError {
    #[error("internal signing error")]
    Internal,
}
