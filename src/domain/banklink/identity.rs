use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Verified identity asserted by the bank's callback `USER_INFO` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// National identity number, `\d{6}-\d{5}`.
    pub uid: String,
    /// Everything after the `NAME=` marker.
    pub full_name: String,
}

/// `USER_INFO` did not carry the expected markers. An explicit outcome, not
/// a stray panic from dereferencing an absent match.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityParseError {
    #[error("USER_INFO carries no ID= entry of the form \\d{{6}}-\\d{{5}}")]
    UidMissing,
    #[error("USER_INFO carries no NAME= entry")]
    NameMissing,
}

static UID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ID=(\d{6}-\d{5})").expect("uid pattern"));
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"NAME=(.+)").expect("name pattern"));

impl Identity {
    /// Extract an identity from a callback `USER_INFO` value, e.g.
    /// `"ID=123456-12345;NAME=Example User"`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityParseError::UidMissing`] when no `ID=` entry matches
    /// the uid pattern, [`IdentityParseError::NameMissing`] when no non-empty
    /// `NAME=` entry is present.
    pub fn parse(user_info: &str) -> Result<Self, IdentityParseError> {
        let uid = UID_RE
            .captures(user_info)
            .and_then(|c| c.get(1))
            .ok_or(IdentityParseError::UidMissing)?;
        let full_name = NAME_RE
            .captures(user_info)
            .and_then(|c| c.get(1))
            .ok_or(IdentityParseError::NameMissing)?;
        Ok(Identity {
            uid: uid.as_str().to_string(),
            full_name: full_name.as_str().to_string(),
        })
    }
}
