use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Login form input. Field names on the wire are fixed by the backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "correo")]
    pub identifier: String,
    #[serde(rename = "contrasena")]
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /login`. Every field is optional because the caller decides
/// success by the presence of `access_token`, not by status code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl LoginResponse {
    /// Any JSON is accepted. Each field is read on its own, so a sibling of
    /// an unexpected type never hides `access_token`; non-object bodies read
    /// as empty.
    pub fn from_json(value: Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            access_token: text("access_token"),
            refresh_token: text("refresh_token"),
            token_type: text("token_type"),
            detail: value.get("detail").cloned(),
        }
    }

    pub fn session_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.is_empty())
    }

    pub fn detail_message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
            _ => None,
        }
    }
}

/// Failure of a single API call: the request never completed or the body
/// was not JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    InvalidBody(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("invalid credentials")]
    InvalidCredentials { detail: Option<String> },
}
