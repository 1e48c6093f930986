use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Provider rejected the message ({status}): {body}")]
    ProviderRejected { status: u16, body: String },
}

impl From<ConfigError> for MailError {
    fn from(err: ConfigError) -> Self {
        MailError::ConfigurationMissing(err.to_string())
    }
}

impl From<reqwest::Error> for MailError {
    fn from(err: reqwest::Error) -> Self {
        MailError::TransportError(err.to_string())
    }
}

impl From<serde_json::Error> for MailError {
    fn from(err: serde_json::Error) -> Self {
        MailError::TransportError(format!("Invalid provider response: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, MailError>;
