//! Authentication phase gateway.
//!
//! Dispatches the two external operations — begin and complete — and
//! normalizes every outcome into a success value or an [`AuthFailure`]
//! carrying a stable failure code. Nothing leaves this boundary
//! unclassified: component errors map to their own codes, anything else is
//! tagged with the phase it occurred in.

use crate::application::auth::callback::CallbackValidator;
use crate::application::auth::errors::AuthFailure;
use crate::application::auth::request;
use crate::domain::banklink::config::AuthConfig;
use crate::domain::banklink::fields::{AuthRedirect, CallbackParams};
use crate::domain::banklink::identity::Identity;
use crate::ports::keys::KeyMaterialSource;
use tracing::{debug, warn};

/// Entry point binding an immutable [`AuthConfig`] to a key-material source.
///
/// Stateless across invocations: each phase call loads its own key material
/// and owns every intermediate value it derives, so concurrent calls on a
/// shared gateway are safe.
pub struct AuthGateway<K: KeyMaterialSource> {
    config: AuthConfig,
    keys: K,
}

impl<K: KeyMaterialSource> AuthGateway<K> {
    pub fn new(config: AuthConfig, keys: K) -> Self {
        Self { config, keys }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Begin phase: build the signed redirect request for the form renderer.
    ///
    /// # Errors
    ///
    /// [`AuthFailure`] with kind `private_key_load_err`, `field_encoding_err`,
    /// or `unknown_request_err`.
    pub fn begin(&self) -> Result<AuthRedirect, AuthFailure> {
        match request::build_request(&self.config, &self.keys) {
            Ok(redirect) => {
                debug!("begin phase complete");
                Ok(redirect)
            }
            Err(err) => {
                let failure = AuthFailure::from(err);
                warn!(kind = %failure.kind(), "begin phase failed");
                Err(failure)
            }
        }
    }

    /// Complete phase: validate the callback and extract the asserted
    /// identity.
    ///
    /// # Errors
    ///
    /// [`AuthFailure`] with kind `public_key_load_err`,
    /// `unsupported_response_service_err`, `unsupported_response_version_err`,
    /// `invalid_response_signature_err`, `identity_parse_err`,
    /// `field_encoding_err`, or `unknown_callback_err`.
    pub fn complete(&self, response: &CallbackParams) -> Result<Identity, AuthFailure> {
        match CallbackValidator::new(&self.config, &self.keys).validate(response) {
            Ok(identity) => {
                debug!("complete phase verified");
                Ok(identity)
            }
            Err(err) => {
                let failure = AuthFailure::from(err);
                warn!(kind = %failure.kind(), "complete phase failed");
                Err(failure)
            }
        }
    }
}
