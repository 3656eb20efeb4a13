//! Reversible at-rest encoding for the API credential.
//!
//! Base64 is obfuscation, not a security boundary: the key is decoded in
//! memory immediately before use and never written back.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("invalid base64 in stored credential: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("decoded credential is not valid UTF-8")]
    NotUtf8,
}

/// Decode a base64-obfuscated API key. Surrounding whitespace is ignored.
pub fn decode_api_key(encoded: &str) -> Result<String, CredentialError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    String::from_utf8(bytes).map_err(|_| CredentialError::NotUtf8)
}

/// Encode a raw API key for at-rest storage.
#[must_use]
pub fn encode_api_key(raw: &str) -> String {
    STANDARD.encode(raw.as_bytes())
}
