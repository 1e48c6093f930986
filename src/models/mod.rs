pub mod message;

pub use message::{Message, ProviderResponse, Recipients};
