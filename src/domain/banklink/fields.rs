use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Single name/value pair destined for a hidden form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// Redirect payload handed to the external form renderer: the ordered field
/// set, the bank endpoint to post it to, and the fallback button label for
/// clients without script support.
///
/// Field order matters to the renderer only cosmetically; the signature was
/// already computed over the canonical order before this value exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRedirect {
    pub fields: Vec<FormField>,
    pub action_url: String,
    pub button_label: String,
}

impl AuthRedirect {
    /// Look up an outbound field value by wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// Callback parameters as received from the bank, keyed by wire field name.
///
/// Lookup-only: the validator recomputes the signature input from the
/// canonical field order rather than trusting any ordering the transport
/// layer preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams(BTreeMap<String, String>);

impl CallbackParams {
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Value of `name`, or `None` when the bank never sent it. Absence is a
    /// validation signal, never a silent default.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Drop a field, for exercising missing-field handling.
    pub fn remove(&mut self, name: &str) {
        self.0.remove(name);
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for CallbackParams {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::banklink::params::field;

    #[test]
    fn params_lookup_and_absence() {
        let mut params: CallbackParams =
            [(field::SND_ID, "SEBUB"), (field::SERVICE, "0001")]
                .into_iter()
                .collect();
        assert_eq!(params.get(field::SND_ID), Some("SEBUB"));
        assert_eq!(params.get(field::VERSION), None);
        params.remove(field::SERVICE);
        assert_eq!(params.get(field::SERVICE), None);
    }

    #[test]
    fn redirect_field_lookup() {
        let redirect = AuthRedirect {
            fields: vec![FormField {
                name: field::SND_ID.into(),
                value: "MY_SND_ID".into(),
            }],
            action_url: "https://example.test/bank".into(),
            button_label: "go".into(),
        };
        assert_eq!(redirect.field(field::SND_ID), Some("MY_SND_ID"));
        assert_eq!(redirect.field(field::CRC), None);
    }
}
