//! Callback validation state machine.
//!
//! The complete phase of the handshake. Validation runs as a strict
//! sequential FSM:
//!
//! `Start -> KeyLoaded -> ServiceChecked -> VersionChecked ->
//! SignatureVerified -> IdentityExtracted`
//!
//! A later step never runs when an earlier one failed: later steps assume
//! the invariants the earlier ones established, and signature verification
//! is asymmetric-crypto work not worth spending on a payload already known
//! to be invalid. Failure is terminal from any state and carries exactly one
//! classified [`CallbackError`].
//!
//! The machine is driven either step by step (each step rejects out-of-order
//! application) or through [`CallbackValidator::validate`], which runs the
//! protocol order end to end.

use crate::application::auth::errors::CallbackError;
use crate::core::codec;
use crate::domain::banklink::config::AuthConfig;
use crate::domain::banklink::fields::CallbackParams;
use crate::domain::banklink::identity::{Identity, IdentityParseError};
use crate::domain::banklink::params::{self, field};
use crate::ports::crypto::ResponseVerifier;
use crate::ports::keys::KeyMaterialSource;

/// States of the callback validation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackState {
    /// Nothing validated yet.
    Start,
    /// Public key material loaded from the certificate.
    KeyLoaded,
    /// `SERVICE` confirmed to be the supported callback service.
    ServiceChecked,
    /// `VERSION` confirmed to be the supported schema version.
    VersionChecked,
    /// Signature verified over the canonical eight-field input.
    SignatureVerified,
    /// Terminal success: identity extracted from `USER_INFO`.
    IdentityExtracted,
}

/// Discrete validation steps, applied strictly in protocol order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallbackStep {
    LoadKey,
    CheckService,
    CheckVersion,
    VerifySignature,
    ExtractIdentity,
}

/// One-shot validator for a single callback invocation.
///
/// Owns the key material it loads; nothing is cached across invocations.
pub struct CallbackValidator<'a, K: KeyMaterialSource> {
    config: &'a AuthConfig,
    keys: &'a K,
    state: CallbackState,
    verifier: Option<K::Verifier>,
}

impl<'a, K: KeyMaterialSource> CallbackValidator<'a, K> {
    pub fn new(config: &'a AuthConfig, keys: &'a K) -> Self {
        Self {
            config,
            keys,
            state: CallbackState::Start,
            verifier: None,
        }
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn state(&self) -> CallbackState {
        self.state
    }

    fn state_ordinal(state: CallbackState) -> u8 {
        match state {
            CallbackState::Start => 0,
            CallbackState::KeyLoaded => 1,
            CallbackState::ServiceChecked => 2,
            CallbackState::VersionChecked => 3,
            CallbackState::SignatureVerified => 4,
            CallbackState::IdentityExtracted => 5,
        }
    }

    /// The state `step` would move to, or `OutOfOrder` when `step` is not
    /// the successor of the current state. The transition table is the
    /// single source of the protocol order.
    fn next_state(&self, step: CallbackStep) -> Result<CallbackState, CallbackError> {
        match (self.state, step) {
            (CallbackState::Start, CallbackStep::LoadKey) => Ok(CallbackState::KeyLoaded),
            (CallbackState::KeyLoaded, CallbackStep::CheckService) => {
                Ok(CallbackState::ServiceChecked)
            }
            (CallbackState::ServiceChecked, CallbackStep::CheckVersion) => {
                Ok(CallbackState::VersionChecked)
            }
            (CallbackState::VersionChecked, CallbackStep::VerifySignature) => {
                Ok(CallbackState::SignatureVerified)
            }
            (CallbackState::SignatureVerified, CallbackStep::ExtractIdentity) => {
                Ok(CallbackState::IdentityExtracted)
            }
            _ => Err(CallbackError::OutOfOrder),
        }
    }

    /// Commit a transition computed by [`Self::next_state`]. Only called
    /// after the step's work succeeded, so a failed step leaves the machine
    /// in its pre-step state.
    fn advance(&mut self, new: CallbackState) {
        debug_assert!(
            Self::state_ordinal(new) > Self::state_ordinal(self.state),
            "state regression: {:?} -> {new:?}",
            self.state
        );
        self.state = new;
    }

    /// Step 1: load public key material from the configured certificate.
    ///
    /// # Errors
    /// [`CallbackError::PublicKeyLoad`] with the underlying cause, or
    /// [`CallbackError::OutOfOrder`] when not in `Start`.
    pub fn load_key(&mut self) -> Result<(), CallbackError> {
        let next = self.next_state(CallbackStep::LoadKey)?;
        let verifier = self
            .keys
            .load_certificate_public_key(&self.config.public_key_file)
            .map_err(CallbackError::PublicKeyLoad)?;
        self.verifier = Some(verifier);
        self.advance(next);
        Ok(())
    }

    /// Step 2: require `SERVICE` to be the supported callback service.
    /// A missing field compares unequal and fails the same way.
    ///
    /// # Errors
    /// [`CallbackError::UnsupportedService`] or out-of-order.
    pub fn check_service(&mut self, response: &CallbackParams) -> Result<(), CallbackError> {
        let next = self.next_state(CallbackStep::CheckService)?;
        let got = response.get(field::SERVICE).unwrap_or_default();
        if got != params::CALLBACK_SERVICE_ID {
            return Err(CallbackError::UnsupportedService {
                got: got.to_string(),
            });
        }
        self.advance(next);
        Ok(())
    }

    /// Step 3: require `VERSION` to be the supported schema version.
    ///
    /// # Errors
    /// [`CallbackError::UnsupportedVersion`] or out-of-order.
    pub fn check_version(&mut self, response: &CallbackParams) -> Result<(), CallbackError> {
        let next = self.next_state(CallbackStep::CheckVersion)?;
        let got = response.get(field::VERSION).unwrap_or_default();
        if got != params::CALLBACK_VERSION {
            return Err(CallbackError::UnsupportedVersion {
                got: got.to_string(),
            });
        }
        self.advance(next);
        Ok(())
    }

    /// Step 4: verify `CRC` over the canonical eight-field signature input.
    ///
    /// # Errors
    /// [`CallbackError::InvalidSignature`] when a signed field or the `CRC`
    /// is missing, the `CRC` is not base64, or verification fails;
    /// [`CallbackError::Encoding`] when a field cannot be length-prefixed;
    /// or out-of-order.
    pub fn verify_signature(&mut self, response: &CallbackParams) -> Result<(), CallbackError> {
        let next = self.next_state(CallbackStep::VerifySignature)?;

        let mut values = Vec::with_capacity(params::SIGNED_CALLBACK_FIELDS.len());
        for name in params::SIGNED_CALLBACK_FIELDS {
            // A signed field that never arrived cannot verify; treat it as
            // the verification failure it is instead of defaulting it.
            let Some(value) = response.get(name) else {
                return Err(CallbackError::InvalidSignature);
            };
            values.push(value);
        }
        let signature_input = codec::encode_all(values)?;

        let crc = response
            .get(field::CRC)
            .ok_or(CallbackError::InvalidSignature)?;
        let raw_signature =
            codec::decode_signature(crc).ok_or(CallbackError::InvalidSignature)?;

        let verifier = self.verifier.as_ref().ok_or(CallbackError::OutOfOrder)?;
        if !verifier.verify(&raw_signature, signature_input.as_bytes()) {
            return Err(CallbackError::InvalidSignature);
        }
        self.advance(next);
        Ok(())
    }

    /// Step 5: extract the identity from `USER_INFO`.
    ///
    /// # Errors
    /// [`CallbackError::IdentityParse`] when the uid or name markers are
    /// absent, or out-of-order.
    pub fn extract_identity(
        &mut self,
        response: &CallbackParams,
    ) -> Result<Identity, CallbackError> {
        let next = self.next_state(CallbackStep::ExtractIdentity)?;
        let user_info = response
            .get(field::USER_INFO)
            .ok_or(IdentityParseError::UidMissing)?;
        let identity = Identity::parse(user_info)?;
        self.advance(next);
        Ok(identity)
    }

    /// Run the full validation sequence in protocol order.
    ///
    /// # Errors
    /// The first failing step's classified error; later steps are not
    /// attempted.
    pub fn validate(mut self, response: &CallbackParams) -> Result<Identity, CallbackError> {
        self.load_key()?;
        self.check_service(response)?;
        self.check_version(response)?;
        self.verify_signature(response)?;
        self.extract_identity(response)
    }
}
