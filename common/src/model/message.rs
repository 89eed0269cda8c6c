use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification. Drives the toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Success,
    Info,
    Error,
    Warning,
}

impl MessageType {
    /// CSS modifier used by the toast component.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Success => "success",
            MessageType::Info => "info",
            MessageType::Error => "error",
            MessageType::Warning => "warning",
        }
    }
}

/// A single notification as broadcast by the message channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageType,
}

impl Message {
    pub fn new(text: impl Into<String>, kind: MessageType) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}
