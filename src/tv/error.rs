use reqwest::StatusCode;
use std::error::Error as _;
use std::time::Duration;
use thiserror::Error;

/// Why a single device request failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// The TV answered with a status other than 200 or 503.
    #[error("HTTP {status}: {reason}")]
    Rejected { status: u16, reason: String },

    /// The TV answered 503; it is busy rather than refusing the command.
    #[error("Service Unavailable (503)")]
    ServiceUnavailable,

    /// Connection refused, DNS failure, reset while reading, ...
    #[error("{0}")]
    Network(String),

    /// No complete response within `after`.
    #[error("{label} timeout")]
    Timeout {
        label: &'static str,
        after: Duration,
    },

    /// The body was not the JSON that was expected.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl DeviceError {
    /// Classify a non-200 status.
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::SERVICE_UNAVAILABLE {
            return DeviceError::ServiceUnavailable;
        }
        DeviceError::Rejected {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    pub(super) fn network(error: &reqwest::Error) -> Self {
        // reqwest's top-level message is generic; the source chain names the cause.
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        DeviceError::Network(message)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, DeviceError::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_unavailable_is_reported_distinctly() {
        let error = DeviceError::from_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error, DeviceError::ServiceUnavailable);
        assert_eq!(error.to_string(), "Service Unavailable (503)");
    }

    #[test]
    fn other_statuses_are_rejections() {
        let error = DeviceError::from_status(StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn timeout_message_names_operation() {
        let error = DeviceError::Timeout {
            label: "Connection",
            after: Duration::from_secs(3),
        };
        assert!(error.is_timeout());
        assert_eq!(error.to_string(), "Connection timeout");

        let error = DeviceError::Timeout {
            label: "Request",
            after: Duration::from_secs(5),
        };
        assert_eq!(error.to_string(), "Request timeout");
    }
}
