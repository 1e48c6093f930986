use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::{Credential, MailtrapConfig};
use crate::error::{MailError, Result};
use crate::mail::MailTransport;
use crate::models::{Message, ProviderResponse};

const CATEGORY: &str = "Notification";
const DEFAULT_TEXT: &str = "Brickshare Notification";

/// Transport for the Mailtrap sending API
#[derive(Clone)]
pub struct MailtrapTransport {
    client: Client,
    api_key: Credential,
    base_url: String,
}

#[derive(Debug, PartialEq, Serialize)]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize)]
struct Payload<'a> {
    from: Address<'a>,
    to: Vec<Address<'a>>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    category: &'a str,
}

/// Split `Name <email>` into its parts. Anything else is taken as a bare address.
fn parse_address(raw: &str) -> Address<'_> {
    let raw = raw.trim();
    if let (Some(open), true) = (raw.rfind('<'), raw.ends_with('>')) {
        let name = raw[..open].trim();
        Address {
            email: raw[open + 1..raw.len() - 1].trim(),
            name: (!name.is_empty()).then_some(name),
        }
    } else {
        Address {
            email: raw,
            name: None,
        }
    }
}

impl MailtrapTransport {
    pub fn new(config: &MailtrapConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MailTransport for MailtrapTransport {
    async fn send(&self, message: &Message) -> Result<ProviderResponse> {
        let payload = Payload {
            from: parse_address(&message.from),
            to: message
                .to
                .addresses()
                .into_iter()
                .map(|email| Address { email, name: None })
                .collect(),
            subject: &message.subject,
            html: &message.html,
            text: DEFAULT_TEXT,
            category: CATEGORY,
        };

        let res = self
            .client
            .post(format!("{}/api/send", self.base_url))
            .bearer_auth(self.api_key.expose())
            .json(&payload)
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
