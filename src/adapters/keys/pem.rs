// src/adapters/keys/pem.rs
use crate::adapters::crypto::{RsaSha1Signer, RsaSha1Verifier};
use crate::ports::keys::{KeyLoadError, KeyMaterialSource};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fs;
use std::path::Path;
use x509_cert::Certificate;
use x509_cert::der::DecodePem;
use x509_cert::der::referenced::OwnedToRef;

/// Loads PEM key material from disk, fresh for each call.
///
/// Private keys are accepted in PKCS#1 (`RSA PRIVATE KEY`) form — what bank
/// integrations ship — with a PKCS#8 (`PRIVATE KEY`) fallback for keys
/// converted by newer tooling. Public keys come from the
/// SubjectPublicKeyInfo of a PEM X.509 certificate.
///
/// Reads use scoped acquisition: the file handle is closed before either
/// method returns, on every path.
#[derive(Debug, Clone, Copy, Default)]
pub struct PemKeySource;

impl PemKeySource {
    fn read(path: &Path) -> Result<String, KeyLoadError> {
        fs::read_to_string(path).map_err(|source| KeyLoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl KeyMaterialSource for PemKeySource {
    type Signer = RsaSha1Signer;
    type Verifier = RsaSha1Verifier;

    fn load_private_key(&self, path: &Path) -> Result<Self::Signer, KeyLoadError> {
        let pem = Self::read(path)?;
        let key = RsaPrivateKey::from_pkcs1_pem(&pem).or_else(|pkcs1_err| {
            // On double failure the PKCS#1 error is the one reported.
            RsaPrivateKey::from_pkcs8_pem(&pem).map_err(|_| KeyLoadError::Parse {
                path: path.to_path_buf(),
                source: Box::new(pkcs1_err),
            })
        })?;
        Ok(RsaSha1Signer::new(key))
    }

    fn load_certificate_public_key(&self, path: &Path) -> Result<Self::Verifier, KeyLoadError> {
        let pem = Self::read(path)?;
        let certificate =
            Certificate::from_pem(pem.as_bytes()).map_err(|source| KeyLoadError::Parse {
                path: path.to_path_buf(),
                source: Box::new(source),
            })?;
        let spki = certificate
            .tbs_certificate
            .subject_public_key_info
            .owned_to_ref();
        let key = RsaPublicKey::try_from(spki).map_err(|_| KeyLoadError::NotRsa {
            path: path.to_path_buf(),
        })?;
        Ok(RsaSha1Verifier::new(key))
    }
}
