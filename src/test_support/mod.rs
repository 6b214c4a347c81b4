#![allow(dead_code)]
use crate::core::codec;
use crate::domain::banklink::config::AuthConfig;
use crate::domain::banklink::fields::CallbackParams;
use crate::domain::banklink::params::{SIGNED_CALLBACK_FIELDS, field};
use crate::ports::crypto::{RequestSigner, ResponseVerifier, SignError};
use crate::ports::keys::{KeyLoadError, KeyMaterialSource};
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::path::Path;

/// Signer whose "signature" is the reversed message, so unit tests can
/// fabricate verifiable values without real crypto. NOT secure, purely for
/// exercising the trait flow.
pub struct DummySigner;

impl RequestSigner for DummySigner {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignError> {
        Ok(message.iter().rev().copied().collect())
    }
}

/// Counterpart to [`DummySigner`]: accepts exactly the reversed message.
pub struct DummyVerifier;

impl ResponseVerifier for DummyVerifier {
    fn verify(&self, signature: &[u8], message: &[u8]) -> bool {
        let expected: Vec<u8> = message.iter().rev().copied().collect();
        signature == expected.as_slice()
    }
}

/// Key source over the dummy primitives with switchable load failures.
pub struct DummyKeySource {
    fail_private: bool,
    fail_public: bool,
}

impl DummyKeySource {
    pub fn ok() -> Self {
        Self {
            fail_private: false,
            fail_public: false,
        }
    }
    pub fn failing_private() -> Self {
        Self {
            fail_private: true,
            fail_public: false,
        }
    }
    pub fn failing_public() -> Self {
        Self {
            fail_private: false,
            fail_public: true,
        }
    }

    fn missing(path: &Path) -> KeyLoadError {
        KeyLoadError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing key file"),
        }
    }
}

impl KeyMaterialSource for DummyKeySource {
    type Signer = DummySigner;
    type Verifier = DummyVerifier;

    fn load_private_key(&self, path: &Path) -> Result<DummySigner, KeyLoadError> {
        if self.fail_private {
            return Err(Self::missing(path));
        }
        Ok(DummySigner)
    }

    fn load_certificate_public_key(&self, path: &Path) -> Result<DummyVerifier, KeyLoadError> {
        if self.fail_public {
            return Err(Self::missing(path));
        }
        Ok(DummyVerifier)
    }
}

/// Config with the reference sender/receiver ids and throwaway key paths.
pub fn mk_config() -> AuthConfig {
    AuthConfig::new(
        "request.private.pem",
        "response.public.pem",
        "MY_SND_ID",
        "MY_REC_ID",
    )
}

/// Dummy-signed `CRC` over the canonical field order of `response`.
pub fn mk_crc(response: &CallbackParams) -> String {
    let input = codec::encode_all(
        SIGNED_CALLBACK_FIELDS
            .iter()
            .map(|name| response.get(name).unwrap()),
    )
    .unwrap();
    let signature: Vec<u8> = input.bytes().rev().collect();
    codec::encode_signature(&signature)
}

/// Callback parameter set from the reference vectors, dummy-signed.
pub fn mk_callback_params() -> CallbackParams {
    let mut response: CallbackParams = [
        (field::SND_ID, "SEBUB"),
        (field::SERVICE, "0001"),
        (field::REC_ID, "LVTC"),
        (field::USER, "123456-12345"),
        (field::DATE, "26.02.2014"),
        (field::TIME, "13:53:31"),
        (field::USER_INFO, "ID=123456-12345;NAME=Example User"),
        (field::VERSION, "001"),
        (field::LANG, "LAT"),
    ]
    .into_iter()
    .collect();
    let crc = mk_crc(&response);
    response.insert(field::CRC, crc);
    response
}

/// Small RSA keypair for adapter tests.
pub fn mk_rsa_keypair() -> (RsaPrivateKey, RsaPublicKey) {
    let mut rng = rand::thread_rng();
    let private = RsaPrivateKey::new(&mut rng, 1024).expect("generate test key");
    let public = RsaPublicKey::from(&private);
    (private, public)
}
