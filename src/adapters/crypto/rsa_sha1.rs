// src/adapters/crypto/rsa_sha1.rs
use crate::ports::crypto::{RequestSigner, ResponseVerifier, SignError};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;

/// RSA-PKCS#1 v1.5 signer over a SHA-1 digest, the scheme this banklink
/// protocol version is fixed to.
///
/// SHA-1 is a wire commitment of the counter-party here, not a choice this
/// crate gets to make; the digest is confined to this adapter so a future
/// protocol version swaps it in one place.
#[derive(Debug)]
pub struct RsaSha1Signer {
    key: SigningKey<Sha1>,
}

impl RsaSha1Signer {
    #[must_use]
    pub fn new(key: RsaPrivateKey) -> Self {
        Self {
            key: SigningKey::new(key),
        }
    }
}

impl RequestSigner for RsaSha1Signer {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignError> {
        let signature = self
            .key
            .try_sign(message)
            .map_err(|_| SignError::Internal)?;
        Ok(signature.to_vec())
    }
}

/// RSA-PKCS#1 v1.5 verifier over a SHA-1 digest.
///
/// Error mapping: any failure — wrong length, un-decodable signature bytes,
/// digest mismatch — collapses to `false`. The wire hands us attacker-chosen
/// bytes; distinguishing *why* they fail leaks nothing useful and invites
/// callers to branch on it.
#[derive(Debug)]
pub struct RsaSha1Verifier {
    key: VerifyingKey<Sha1>,
}

impl RsaSha1Verifier {
    #[must_use]
    pub fn new(key: RsaPublicKey) -> Self {
        Self {
            key: VerifyingKey::new(key),
        }
    }
}

impl ResponseVerifier for RsaSha1Verifier {
    fn verify(&self, signature: &[u8], message: &[u8]) -> bool {
        let Ok(signature) = Signature::try_from(signature) else {
            return false;
        };
        self.key.verify(message, &signature).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mk_rsa_keypair;

    #[test]
    fn sign_verify_round_trip() {
        let (private, public) = mk_rsa_keypair();
        let signer = RsaSha1Signer::new(private);
        let verifier = RsaSha1Verifier::new(public);
        let sig = signer.sign(b"009MY_SND_ID0040005").unwrap();
        assert!(verifier.verify(&sig, b"009MY_SND_ID0040005"));
    }

    #[test]
    fn signing_is_deterministic() {
        let (private, _) = mk_rsa_keypair();
        let signer = RsaSha1Signer::new(private);
        assert_eq!(signer.sign(b"m").unwrap(), signer.sign(b"m").unwrap());
    }

    #[test]
    fn single_bit_message_mutation_fails() {
        let (private, public) = mk_rsa_keypair();
        let signer = RsaSha1Signer::new(private);
        let verifier = RsaSha1Verifier::new(public);
        let sig = signer.sign(b"canonical input").unwrap();
        let mut mutated = b"canonical input".to_vec();
        mutated[0] ^= 0x01;
        assert!(!verifier.verify(&sig, &mutated));
    }

    #[test]
    fn unrelated_key_fails() {
        let (private, _) = mk_rsa_keypair();
        let (_, other_public) = mk_rsa_keypair();
        let signer = RsaSha1Signer::new(private);
        let verifier = RsaSha1Verifier::new(other_public);
        let sig = signer.sign(b"message").unwrap();
        assert!(!verifier.verify(&sig, b"message"));
    }

    #[test]
    fn malformed_signature_bytes_return_false() {
        let (_, public) = mk_rsa_keypair();
        let verifier = RsaSha1Verifier::new(public);
        assert!(!verifier.verify(b"", b"message"));
        assert!(!verifier.verify(b"invalid signature", b"message"));
        assert!(!verifier.verify(&[0u8; 4096], b"message"));
    }
}
