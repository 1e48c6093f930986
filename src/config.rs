use std::env;

use secrecy::{ExposeSecret, Secret};

pub const DEFAULT_MAIL_FROM: &str = "Brickshare <onboarding@resend.dev>";
pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";
pub const DEFAULT_MAILTRAP_FROM_EMAIL: &str = "info@brickshare.es";
pub const DEFAULT_MAILTRAP_BASE_URL: &str = "https://send.api.mailtrap.io";

/// Provider API key. Never empty, never printed.
#[derive(Clone)]
pub struct Credential(Secret<String>);

impl Credential {
    /// Returns `None` for an empty key. Any other value is accepted as-is.
    pub fn parse(raw: String) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(Secret::new(raw)))
        }
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub resend_api_key: Credential,
    pub mail_from: String,
    pub resend_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            resend_api_key: lookup("RESEND_API_KEY")
                .and_then(Credential::parse)
                .ok_or(ConfigError::MissingApiKey)?,
            mail_from: lookup("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            resend_base_url: lookup("RESEND_BASE_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_BASE_URL.to_string()),
        })
    }
}

/// Settings for the Mailtrap sending API.
#[derive(Debug, Clone)]
pub struct MailtrapConfig {
    pub api_key: Credential,
    pub from_email: String,
    pub base_url: String,
}

impl MailtrapConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(MailtrapConfig {
            api_key: lookup("MAILTRAP_API_KEY")
                .and_then(Credential::parse)
                .ok_or(ConfigError::MissingMailtrapApiKey)?,
            from_email: lookup("MAILTRAP_FROM_EMAIL")
                .unwrap_or_else(|| DEFAULT_MAILTRAP_FROM_EMAIL.to_string()),
            base_url: lookup("MAILTRAP_BASE_URL")
                .unwrap_or_else(|| DEFAULT_MAILTRAP_BASE_URL.to_string()),
        })
    }

    /// Sender identity used when a message does not name one.
    pub fn default_sender(&self) -> String {
        format!("Brickshare <{}>", self.from_email)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("RESEND_API_KEY not found in environment variables")]
    MissingApiKey,
    #[error("MAILTRAP_API_KEY not found in environment variables")]
    MissingMailtrapApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert_eq!(
            err.to_string(),
            "RESEND_API_KEY not found in environment variables"
        );
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("RESEND_API_KEY", "")]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_non_empty_api_key_is_kept_verbatim() {
        let config = Config::from_lookup(lookup_from(&[("RESEND_API_KEY", "  ")]))
            .expect("Should load config");
        assert_eq!(config.resend_api_key.expose(), "  ");
    }

    #[test]
    fn test_defaults_apply() {
        let config = Config::from_lookup(lookup_from(&[("RESEND_API_KEY", "re_123")]))
            .expect("Should load config");

        assert_eq!(config.resend_api_key.expose(), "re_123");
        assert_eq!(config.mail_from, DEFAULT_MAIL_FROM);
        assert_eq!(config.resend_base_url, DEFAULT_RESEND_BASE_URL);
    }

    #[test]
    fn test_overrides_apply() {
        let config = Config::from_lookup(lookup_from(&[
            ("RESEND_API_KEY", "re_123"),
            ("MAIL_FROM", "Ops <ops@brickshare.es>"),
            ("RESEND_BASE_URL", "http://127.0.0.1:9999"),
        ]))
        .expect("Should load config");

        assert_eq!(config.mail_from, "Ops <ops@brickshare.es>");
        assert_eq!(config.resend_base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_credential_is_redacted_in_debug() {
        let config = Config::from_lookup(lookup_from(&[("RESEND_API_KEY", "re_secret")]))
            .expect("Should load config");

        let printed = format!("{:?}", config);
        assert!(!printed.contains("re_secret"));
    }

    #[test]
    fn test_mailtrap_config() {
        let missing = MailtrapConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(missing, Err(ConfigError::MissingMailtrapApiKey)));

        let config = MailtrapConfig::from_lookup(lookup_from(&[("MAILTRAP_API_KEY", "mt_1")]))
            .expect("Should load mailtrap config");
        assert_eq!(config.api_key.expose(), "mt_1");
        assert_eq!(config.from_email, DEFAULT_MAILTRAP_FROM_EMAIL);
        assert_eq!(config.base_url, DEFAULT_MAILTRAP_BASE_URL);
        assert_eq!(config.default_sender(), "Brickshare <info@brickshare.es>");
    }
}
