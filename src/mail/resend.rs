use async_trait::async_trait;
use reqwest::Client;

use crate::config::{Config, Credential};
use crate::error::{MailError, Result};
use crate::mail::MailTransport;
use crate::models::{Message, ProviderResponse};

#[derive(Clone)]
pub struct ResendTransport {
    client: Client,
    api_key: Credential,
    base_url: String,
}

impl ResendTransport {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.resend_api_key.clone(),
            base_url: config.resend_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MailTransport for ResendTransport {
    async fn send(&self, message: &Message) -> Result<ProviderResponse> {
        let res = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(self.api_key.expose())
            .json(message)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(MailError::ProviderRejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = res.bytes().await?;
        Ok(ProviderResponse(serde_json::from_slice(&body)?))
    }
}
