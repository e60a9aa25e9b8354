// Public modules
pub mod chat;
pub mod client;
pub mod client_logger;
pub mod config;
pub mod error;
pub mod observability;
pub mod prompt;
pub mod render;
pub mod types;

// Re-exports
pub use client::AzureOpenAI;
pub use client_logger::{ClientLogger, StderrLogger};
pub use config::{AzureOpenAISettings, Settings};
pub use error::{Error, Result};
pub use types::*;
