use serde::Serialize;
use serde_json::Value;

use crate::LogLevel;

/// A leveled log message with an optional structured payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Message as sent to listeners: the text, then the compact JSON payload.
    pub fn formatted_message(&self) -> String {
        match &self.data {
            Some(data) => format!("{} | {}", self.message, data),
            None => self.message.clone(),
        }
    }
}
