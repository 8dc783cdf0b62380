use super::{DeviceAddress, DeviceError};
use serde::{Serialize, Serializer};
use serde_json::Value;

const DEFAULT_MODEL: &str = "Philips TV";
const DEFAULT_VERSION: &str = "Unknown";

/// Outcome of one key-press attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandResult {
    pub success: bool,
    /// Wire command that was sent
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_error"
    )]
    pub error: Option<DeviceError>,
}

impl CommandResult {
    pub fn succeeded(command: &str, status_code: u16, response: String) -> Self {
        Self {
            success: true,
            command: command.to_string(),
            status_code: Some(status_code),
            response: Some(response),
            error: None,
        }
    }

    pub fn failed(
        command: &str,
        error: DeviceError,
        status_code: Option<u16>,
        response: Option<String>,
    ) -> Self {
        Self {
            success: false,
            command: command.to_string(),
            status_code,
            response,
            error: Some(error),
        }
    }
}

/// What the TV reported about itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SystemInfo {
    Parsed {
        model: String,
        version: String,
        raw: Value,
    },
    /// The TV answered 200 but the body was not JSON.
    Raw { body: String },
}

impl SystemInfo {
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(raw @ Value::Object(_)) => SystemInfo::Parsed {
                model: field_text(raw.get("name"), DEFAULT_MODEL),
                version: field_text(raw.get("nettvversion"), DEFAULT_VERSION),
                raw,
            },
            // Valid JSON that is not an object carries no fields to read.
            _ => SystemInfo::Raw {
                body: body.to_string(),
            },
        }
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            SystemInfo::Parsed { model, .. } => Some(model),
            SystemInfo::Raw { .. } => None,
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            SystemInfo::Parsed { version, .. } => Some(version),
            SystemInfo::Raw { .. } => None,
        }
    }
}

/// Display text for a system-info field; empty values fall back to `default`.
fn field_text(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => default.to_string(),
        Some(Value::String(text)) if text.is_empty() => default.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => default.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Outcome of a connectivity probe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectivityResult {
    pub connected: bool,
    pub address: DeviceAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemInfo>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_error"
    )]
    pub error: Option<DeviceError>,
}

/// Outcome of asking the TV which keys it supports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<Value>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_error"
    )]
    pub error: Option<DeviceError>,
}

fn serialize_error<S: Serializer>(
    error: &Option<DeviceError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(error) => serializer.collect_str(error),
        None => serializer.serialize_none(),
    }
}
