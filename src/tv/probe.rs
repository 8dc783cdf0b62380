use super::{ConnectivityResult, DeviceError, SystemInfo, TvClient};
use reqwest::header::{ACCEPT, CONNECTION};
use reqwest::StatusCode;
use tracing::{debug, info, warn};

impl TvClient {
    /// Check whether the TV answers on its system-info endpoint.
    pub async fn probe(&self) -> ConnectivityResult {
        let url = self.address.url("system");
        debug!(%url, "checking connection");

        let request = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CONNECTION, "close");

        let outcome = self
            .exchange(request, self.timing.probe_timeout, "Connection")
            .await
            .and_then(|reply| {
                if reply.status == StatusCode::OK {
                    Ok(SystemInfo::from_body(&reply.body))
                } else {
                    Err(DeviceError::from_status(reply.status))
                }
            });

        match outcome {
            Ok(system) => {
                match &system {
                    SystemInfo::Parsed { model, version, .. } => {
                        info!(address = %self.address, %model, %version, "TV connected")
                    }
                    SystemInfo::Raw { body } => {
                        info!(address = %self.address, %body, "TV answered with non-JSON body")
                    }
                }
                ConnectivityResult {
                    connected: true,
                    address: self.address.clone(),
                    system: Some(system),
                    error: None,
                }
            }
            Err(error) => {
                warn!(
                    address = %self.address,
                    %error,
                    timed_out = error.is_timeout(),
                    "TV not reachable"
                );
                ConnectivityResult {
                    connected: false,
                    address: self.address.clone(),
                    system: None,
                    error: Some(error),
                }
            }
        }
    }
}
