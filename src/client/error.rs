use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::picture::PictureReadError;

pub const FALLBACK_COMMAND_MESSAGE: &str = "Command failed with an unspecified error";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Command(CommandError),

    #[error(transparent)]
    Picture(#[from] PictureReadError),

    #[error("malformed {command} response: {source}")]
    Response {
        command: &'static str,
        source: serde_json::Error,
    },
}

// Structured rejection payload the backend uses for known failures. Decoding
// is best-effort; the raw value is what gets re-raised either way.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendErrorDetail {
    pub code_name: String,
    pub code: u32,
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{command} failed: {}", render_message(.raw))]
pub struct CommandError {
    command: &'static str,
    raw: Value,
}

impl CommandError {
    pub(crate) fn new(command: &'static str, raw: Value) -> Self {
        Self { command, raw }
    }

    pub fn command(&self) -> &'static str {
        self.command
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }

    pub fn detail(&self) -> Option<BackendErrorDetail> {
        BackendErrorDetail::deserialize(&self.raw).ok()
    }

    pub fn message(&self) -> String {
        render_message(&self.raw)
    }
}

fn render_message(raw: &Value) -> String {
    if let Ok(detail) = BackendErrorDetail::deserialize(raw) {
        return detail.message;
    }
    match raw {
        Value::String(message) if !message.is_empty() => message.clone(),
        value if is_falsy(value) => FALLBACK_COMMAND_MESSAGE.to_string(),
        value => value.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(message) => message.is_empty(),
        _ => false,
    }
}
