pub mod mailtrap;
pub mod resend;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::Result;
use crate::models::{Message, ProviderResponse, Recipients};

pub use mailtrap::MailtrapTransport;
pub use resend::ResendTransport;

/// Something that can hand a single message to an email provider.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: &Message) -> Result<ProviderResponse>;
}

/// Sends one email per call through a [`MailTransport`]. No retries, no queue.
#[derive(Clone)]
pub struct EmailSender<T> {
    transport: T,
    default_from: String,
}

impl EmailSender<ResendTransport> {
    /// Resend-backed sender using the configured default sender identity.
    pub fn resend(config: &Config) -> Self {
        Self::new(ResendTransport::new(config), config.mail_from.clone())
    }
}

impl<T: MailTransport> EmailSender<T> {
    pub fn new(transport: T, default_from: impl Into<String>) -> Self {
        Self {
            transport,
            default_from: default_from.into(),
        }
    }

    pub fn default_from(&self) -> &str {
        &self.default_from
    }

    /// Send an email. `from_email` falls back to the default sender and is
    /// otherwise used verbatim.
    ///
    /// Failures are logged once and returned to the caller.
    pub async fn send_email(
        &self,
        to: impl Into<Recipients>,
        subject: &str,
        html: &str,
        from_email: Option<&str>,
    ) -> Result<ProviderResponse> {
        let message = Message {
            from: from_email.unwrap_or(&self.default_from).to_string(),
            to: to.into(),
            subject: subject.to_string(),
            html: html.to_string(),
        };

        self.transport.send(&message).await.inspect_err(|e| {
            tracing::error!(error = %e, "Error sending email");
        })
    }
}
