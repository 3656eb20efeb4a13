//! Remote escalation layer: chat-completion HTTP client and credential
//! handling.

mod client;
pub mod credentials;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, LlmClient, LlmError};
