use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Destination address(es), forwarded in the shape the caller gave them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    pub fn addresses(&self) -> Vec<&str> {
        match self {
            Recipients::One(address) => vec![address.as_str()],
            Recipients::Many(addresses) => addresses.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Recipients::One(address.to_string())
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Recipients::One(address)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addresses: Vec<String>) -> Self {
        Recipients::Many(addresses)
    }
}

impl From<&[&str]> for Recipients {
    fn from(addresses: &[&str]) -> Self {
        Recipients::Many(addresses.iter().map(|a| a.to_string()).collect())
    }
}

/// One outbound email, prior to transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub from: String,
    pub to: Recipients,
    pub subject: String,
    pub html: String,
}

/// Provider acknowledgement, kept as the raw JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse(pub Value);

impl ProviderResponse {
    /// Message identifier, if the provider returned one.
    pub fn id(&self) -> Option<&str> {
        self.0
            .get("id")
            .and_then(Value::as_str)
            .or_else(|| {
                self.0
                    .get("message_ids")
                    .and_then(|ids| ids.get(0))
                    .and_then(Value::as_str)
            })
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}
