use crate::core::codec::EncodeError;
use crate::domain::banklink::identity::IdentityParseError;
use crate::ports::crypto::SignError;
use crate::ports::keys::KeyLoadError;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Failures classified while building the outbound redirect request.
///
/// Classification happens at the point each failure occurs; there is no
/// outer catch-all re-interpreting errors after the fact.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The private key could not be loaded; signing was never attempted.
    #[error("private key could not be loaded")]
    PrivateKeyLoad(#[source] KeyLoadError),
    /// A field exceeded the length-prefix limit.
    #[error(transparent)]
    Encoding(#[from] EncodeError),
    /// The signing operation itself failed.
    #[error("signing the request failed")]
    Sign(#[from] SignError),
}

/// Failures classified while validating a callback, one per state-machine
/// step. A missing field surfaces as the failure of the step that needed it.
#[derive(Debug, Error)]
pub enum CallbackError {
    /// The certificate's public key could not be loaded; no later check ran.
    #[error("public key could not be loaded")]
    PublicKeyLoad(#[source] KeyLoadError),
    #[error("unsupported callback SERVICE {got:?}")]
    UnsupportedService { got: String },
    #[error("unsupported callback VERSION {got:?}")]
    UnsupportedVersion { got: String },
    /// Signature absent, un-decodable, or failing verification over the
    /// canonical field order.
    #[error("callback signature is invalid")]
    InvalidSignature,
    #[error(transparent)]
    IdentityParse(#[from] IdentityParseError),
    /// A callback field exceeded the length-prefix limit.
    #[error(transparent)]
    Encoding(#[from] EncodeError),
    /// Validation steps were driven out of protocol order.
    #[error("callback validation step applied out of order")]
    OutOfOrder,
}

/// Stable machine-readable failure codes surfaced to the relying party.
///
/// The rendered strings are part of the external contract (failure-redirect
/// query parameters); variants may be added but existing strings never
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCode {
    PrivateKeyLoad,
    PublicKeyLoad,
    UnsupportedResponseService,
    UnsupportedResponseVersion,
    InvalidResponseSignature,
    IdentityParse,
    FieldEncoding,
    UnknownRequest,
    UnknownCallback,
}

impl FailureCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureCode::PrivateKeyLoad => "private_key_load_err",
            FailureCode::PublicKeyLoad => "public_key_load_err",
            FailureCode::UnsupportedResponseService => "unsupported_response_service_err",
            FailureCode::UnsupportedResponseVersion => "unsupported_response_version_err",
            FailureCode::InvalidResponseSignature => "invalid_response_signature_err",
            FailureCode::IdentityParse => "identity_parse_err",
            FailureCode::FieldEncoding => "field_encoding_err",
            FailureCode::UnknownRequest => "unknown_request_err",
            FailureCode::UnknownCallback => "unknown_callback_err",
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FailureCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

/// Normalized failure handed to the relying party: a stable code plus the
/// classified error that produced it, kept for diagnostics only — never
/// parsed for control flow.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct AuthFailure {
    kind: FailureCode,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AuthFailure {
    pub(crate) fn new(
        kind: FailureCode,
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self { kind, cause }
    }

    #[must_use]
    pub fn kind(&self) -> FailureCode {
        self.kind
    }

    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        self.cause.as_deref()
    }
}

impl From<RequestError> for AuthFailure {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::PrivateKeyLoad(e) => {
                Self::new(FailureCode::PrivateKeyLoad, Some(Box::new(e)))
            }
            RequestError::Encoding(e) => Self::new(FailureCode::FieldEncoding, Some(Box::new(e))),
            RequestError::Sign(e) => Self::new(FailureCode::UnknownRequest, Some(Box::new(e))),
        }
    }
}

impl From<CallbackError> for AuthFailure {
    fn from(err: CallbackError) -> Self {
        match err {
            CallbackError::PublicKeyLoad(e) => {
                Self::new(FailureCode::PublicKeyLoad, Some(Box::new(e)))
            }
            CallbackError::UnsupportedService { .. } => {
                Self::new(FailureCode::UnsupportedResponseService, None)
            }
            CallbackError::UnsupportedVersion { .. } => {
                Self::new(FailureCode::UnsupportedResponseVersion, None)
            }
            CallbackError::InvalidSignature => {
                Self::new(FailureCode::InvalidResponseSignature, None)
            }
            CallbackError::IdentityParse(e) => {
                Self::new(FailureCode::IdentityParse, Some(Box::new(e)))
            }
            CallbackError::Encoding(e) => Self::new(FailureCode::FieldEncoding, Some(Box::new(e))),
            CallbackError::OutOfOrder => Self::new(
                FailureCode::UnknownCallback,
                Some(Box::new(CallbackError::OutOfOrder)),
            ),
        }
    }
}
