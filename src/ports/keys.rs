//! Key-material boundary port shared by the application layer and adapters.
//!
//! The application layer treats "load key material" as an opaque operation:
//! it asks this port for a signer (begin phase) or a verifier (complete
//! phase) and never sees concrete key types. Keeping the port out of the
//! application module preserves the dependency direction — orchestration
//! code depends on contracts, adapters depend on crypto crates.

use crate::ports::crypto::{RequestSigner, ResponseVerifier};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Port abstraction for loading per-flow key material.
///
/// Invariants:
/// - Loaded material is owned by the caller and scoped to one invocation;
///   implementations never cache across calls.
/// - The underlying file handle is released before the call returns, on
///   success and failure alike.
pub trait KeyMaterialSource {
    type Signer: RequestSigner;
    type Verifier: ResponseVerifier;

    /// Load a private signing key.
    ///
    /// # Errors
    /// Returns [`KeyLoadError`] carrying the underlying cause when the file
    /// cannot be read or its contents are not a usable private key.
    fn load_private_key(&self, path: &Path) -> Result<Self::Signer, KeyLoadError>;

    /// Load the public verification key carried by a certificate.
    ///
    /// # Errors
    /// Returns [`KeyLoadError`] carrying the underlying cause when the file
    /// cannot be read, is not a certificate, or holds a non-RSA key.
    fn load_certificate_public_key(&self, path: &Path) -> Result<Self::Verifier, KeyLoadError>;
}

/// Why key material could not be produced. Causes are diagnostics for the
/// operator; callers branch only on the fact that loading failed.
#[derive(Debug, Error)]
pub enum KeyLoadError {
    #[error("key file {} could not be read", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("key material in {} could not be parsed", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("certificate in {} does not carry an RSA public key", .path.display())]
    NotRsa { path: PathBuf },
}
