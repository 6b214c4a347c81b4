use crate::domain::banklink::params::{DEFAULT_BUTTON_LABEL, DEFAULT_LANG, DEFAULT_SITE};
use std::path::PathBuf;

/// Immutable per-flow configuration, fixed at construction and read-only
/// thereafter. An explicit value passed into both phases at call time, never
/// ambient or global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// PEM file holding the relying party's RSA signing key.
    pub private_key_file: PathBuf,
    /// PEM file holding the bank's X.509 certificate.
    pub public_key_file: PathBuf,
    /// Sender identifier the bank issued to the relying party.
    pub snd_id: String,
    /// Receiver identifier under which the relying party is registered.
    pub rec_id: String,
    /// Bank authentication endpoint the redirect form posts to.
    pub site: String,
    /// Outbound language code.
    pub lang: String,
    /// Fallback label for the manual submit button.
    pub button_label: String,
}

impl AuthConfig {
    /// Configuration with the production endpoint, language, and button-label
    /// defaults.
    pub fn new(
        private_key_file: impl Into<PathBuf>,
        public_key_file: impl Into<PathBuf>,
        snd_id: impl Into<String>,
        rec_id: impl Into<String>,
    ) -> Self {
        Self {
            private_key_file: private_key_file.into(),
            public_key_file: public_key_file.into(),
            snd_id: snd_id.into(),
            rec_id: rec_id.into(),
            site: DEFAULT_SITE.to_string(),
            lang: DEFAULT_LANG.to_string(),
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
        }
    }

    /// Override the bank endpoint (test environments, other banks of the same
    /// protocol family).
    #[must_use]
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    /// Override the outbound language code.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Override the manual-submit button label (localization lives with the
    /// caller).
    #[must_use]
    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = label.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_production_endpoint() {
        let cfg = AuthConfig::new("req.pem", "resp.pem", "MY_SND_ID", "MY_REC_ID");
        assert_eq!(cfg.site, DEFAULT_SITE);
        assert_eq!(cfg.lang, "LAT");
        assert_eq!(cfg.snd_id, "MY_SND_ID");
    }

    #[test]
    fn overrides_replace_defaults() {
        let cfg = AuthConfig::new("req.pem", "resp.pem", "S", "R")
            .with_site("https://test.lv/banklink")
            .with_lang("ENG");
        assert_eq!(cfg.site, "https://test.lv/banklink");
        assert_eq!(cfg.lang, "ENG");
    }
}
