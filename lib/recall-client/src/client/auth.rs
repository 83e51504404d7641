use std::fmt;

use http::HeaderValue;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::error::RecallError;

/// Authorization scheme expected by the Recall API.
const AUTH_SCHEME: &str = "Token";

/// Secure wrapper for sensitive string data that zeroes memory on drop.
///
/// Credentials are redacted in `Debug` output and masked in `Display` so they
/// never leak in full through logging.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Creates a new secure string from the provided value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masks sensitive data for display purposes.
    fn mask_sensitive(value: &str) -> String {
        if value.len() <= 8 {
            "***".to_string()
        } else {
            format!("{}...{}", &value[..4], &value[value.len() - 4..])
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::mask_sensitive(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl Serialize for SecureString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecureString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Recall API key, attached to every outgoing request.
///
/// The `Authorization` header is derived per request rather than cached, so a
/// key swapped in through a custom transport wrapper takes effect on the next
/// call.
#[derive(Debug, Clone)]
pub(crate) struct ApiKey(SecureString);

impl ApiKey {
    pub(crate) fn new(key: SecureString) -> Self {
        Self(key)
    }

    /// Formats the `Authorization` header value.
    ///
    /// A key already carrying the `Token ` scheme prefix is used verbatim;
    /// otherwise the prefix is prepended.
    pub(crate) fn to_header_value(&self) -> Result<HeaderValue, RecallError> {
        let raw = self.0.as_str();
        let credential = if raw.starts_with(&format!("{AUTH_SCHEME} ")) {
            raw.to_string()
        } else {
            format!("{AUTH_SCHEME} {raw}")
        };
        let mut value = HeaderValue::from_str(&credential)?;
        value.set_sensitive(true);
        Ok(value)
    }
}
