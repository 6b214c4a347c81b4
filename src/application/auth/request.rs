//! Outbound request builder: assembles and signs the redirect field set.
//!
//! The begin phase of the handshake. Key material is loaded fresh for the
//! invocation through the [`KeyMaterialSource`] port, the signature input is
//! the length-prefixed concatenation of `SND_ID` and the service-type code —
//! exactly those two fields, in that order — and the resulting signature
//! rides in the legacy-named `CRC` field. Rendering the auto-submit form is
//! the external renderer's job; this module only produces the payload.

use crate::application::auth::errors::RequestError;
use crate::core::codec;
use crate::domain::banklink::config::AuthConfig;
use crate::domain::banklink::fields::{AuthRedirect, FormField};
use crate::domain::banklink::params::{self, field};
use crate::ports::crypto::RequestSigner;
use crate::ports::keys::KeyMaterialSource;
use tracing::debug;

/// Build the signed redirect request for the begin phase.
///
/// # Errors
///
/// - [`RequestError::PrivateKeyLoad`] if the private key cannot be loaded;
///   signing is never attempted.
/// - [`RequestError::Encoding`] if a field exceeds the length-prefix limit.
/// - [`RequestError::Sign`] if the signing operation itself fails.
pub fn build_request<K: KeyMaterialSource>(
    config: &AuthConfig,
    keys: &K,
) -> Result<AuthRedirect, RequestError> {
    let signer = keys
        .load_private_key(&config.private_key_file)
        .map_err(RequestError::PrivateKeyLoad)?;

    let signature_input =
        codec::encode_all([config.snd_id.as_str(), params::AUTH_SERVICE_ID])?;
    let crc = codec::encode_signature(&signer.sign(signature_input.as_bytes())?);

    debug!(snd_id = %config.snd_id, "signed banklink redirect request");

    let fields = vec![
        FormField {
            name: field::SND_ID.into(),
            value: config.snd_id.clone(),
        },
        FormField {
            name: field::SERVICE.into(),
            value: params::AUTH_SERVICE_ID.into(),
        },
        FormField {
            name: field::LANG.into(),
            value: config.lang.clone(),
        },
        FormField {
            name: field::CRC.into(),
            value: crc,
        },
    ];

    Ok(AuthRedirect {
        fields,
        action_url: config.site.clone(),
        button_label: config.button_label.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::decode_signature;
    use crate::test_support::{DummyKeySource, DummyVerifier, mk_config};
    use crate::ports::crypto::ResponseVerifier;

    #[test]
    fn fields_come_in_form_order_with_constants() {
        let redirect = build_request(&mk_config(), &DummyKeySource::ok()).unwrap();
        let names: Vec<&str> = redirect.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, [field::SND_ID, field::SERVICE, field::LANG, field::CRC]);
        assert_eq!(redirect.field(field::SERVICE), Some("0005"));
        assert_eq!(redirect.field(field::LANG), Some("LAT"));
        assert_eq!(redirect.field(field::SND_ID), Some("MY_SND_ID"));
    }

    #[test]
    fn crc_signs_snd_id_then_service_only() {
        let redirect = build_request(&mk_config(), &DummyKeySource::ok()).unwrap();
        let raw = decode_signature(redirect.field(field::CRC).unwrap()).unwrap();
        assert!(DummyVerifier.verify(&raw, b"009MY_SND_ID0040005"));
    }

    #[test]
    fn action_url_and_label_come_from_config() {
        let config = mk_config()
            .with_site("https://test.lv/banklink")
            .with_button_label("press");
        let redirect = build_request(&config, &DummyKeySource::ok()).unwrap();
        assert_eq!(redirect.action_url, "https://test.lv/banklink");
        assert_eq!(redirect.button_label, "press");
    }

    #[test]
    fn key_load_failure_skips_signing() {
        let err = build_request(&mk_config(), &DummyKeySource::failing_private()).unwrap_err();
        assert!(matches!(err, RequestError::PrivateKeyLoad(_)));
    }

    #[test]
    fn over_long_sender_is_an_encoding_error() {
        let config = {
            let mut cfg = mk_config();
            cfg.snd_id = "x".repeat(1000);
            cfg
        };
        let err = build_request(&config, &DummyKeySource::ok()).unwrap_err();
        assert!(matches!(err, RequestError::Encoding(_)));
    }
}
