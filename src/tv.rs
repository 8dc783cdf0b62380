//! Client for the Philips JointSpace HTTP API.
//!
//! Every device operation resolves into a result record: failures are
//! classified into [`DeviceError`] and carried inside the record rather than
//! returned as `Err`.

mod aliases;
mod discover;
mod dispatch;
mod error;
#[cfg(test)]
mod mock;
mod model;
mod probe;

pub use aliases::AliasTable;
pub use error::DeviceError;
pub use model::{CommandResult, ConnectivityResult, DiscoveryResult, SystemInfo};

use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Port the JointSpace API listens on.
pub const DEFAULT_PORT: u16 = 1925;

const API_VERSION: u8 = 1;
const USER_AGENT: &str = "Philips-TV-Remote/1.0";

/// Network location of the TV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceAddress {
    pub host: String,
    pub port: u16,
}

impl DeviceAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Full URL of an API endpoint, e.g. `input/key`.
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "http://{}:{}/{}/{}",
            self.host, self.port, API_VERSION, endpoint
        )
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Timeouts and pauses applied around device requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Bound on a single key-press request
    pub command_timeout: Duration,
    /// Bound on system-info and key-list requests
    pub probe_timeout: Duration,
    /// Delay before the first attempt of a dispatch
    pub pre_send_delay: Duration,
    /// Pause between two fallback candidates
    pub candidate_pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            command_timeout: Duration::from_secs(5),
            probe_timeout: Duration::from_secs(3),
            pre_send_delay: Duration::from_millis(100),
            candidate_pause: Duration::from_millis(200),
        }
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug)]
struct Reply {
    status: StatusCode,
    body: String,
}

/// Handle to one TV. Cheap to clone.
#[derive(Debug, Clone)]
pub struct TvClient {
    http: reqwest::Client,
    address: DeviceAddress,
    aliases: Arc<AliasTable>,
    timing: Timing,
}

impl TvClient {
    pub fn new(address: DeviceAddress, aliases: AliasTable, timing: Timing) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            address,
            aliases: Arc::new(aliases),
            timing,
        }
    }

    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Send one request and read the whole body, giving up after `timeout`.
    ///
    /// `label` names the operation in the timeout message ("Request",
    /// "Connection").
    async fn exchange(
        &self,
        request: RequestBuilder,
        timeout: Duration,
        label: &'static str,
    ) -> Result<Reply, DeviceError> {
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>(Reply { status, body })
        };

        match tokio::time::timeout(timeout, exchange).await {
            Ok(Ok(reply)) => {
                debug!(
                    status = reply.status.as_u16(),
                    body = %reply.body,
                    "device responded"
                );
                Ok(reply)
            }
            Ok(Err(e)) if e.is_timeout() => Err(DeviceError::Timeout {
                label,
                after: timeout,
            }),
            Ok(Err(e)) => Err(DeviceError::network(&e)),
            Err(_) => Err(DeviceError::Timeout {
                label,
                after: timeout,
            }),
        }
    }
}
