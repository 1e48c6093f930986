pub mod config;
pub mod error;
pub mod mail;
pub mod models;

pub use config::{Config, ConfigError, Credential, MailtrapConfig};
pub use error::{MailError, Result};
pub use mail::{EmailSender, MailTransport, MailtrapTransport, ResendTransport};
pub use models::{Message, ProviderResponse, Recipients};
