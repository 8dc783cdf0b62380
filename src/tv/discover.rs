use super::{DeviceError, DiscoveryResult, TvClient};
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, info, warn};

impl TvClient {
    /// Ask the TV for the list of keys it accepts.
    ///
    /// The status code is not inspected; any body that parses as a JSON list
    /// is taken as the answer.
    pub async fn discover(&self) -> DiscoveryResult {
        let url = self.address.url("input/key");
        debug!(%url, "discovering commands");

        let request = self.http.get(&url).header(ACCEPT, "application/json");

        let outcome = self
            .exchange(request, self.timing.probe_timeout, "Request")
            .await
            .and_then(|reply| {
                serde_json::from_str::<Vec<Value>>(&reply.body).map_err(|e| {
                    DeviceError::MalformedResponse(format!("could not parse command list: {e}"))
                })
            });

        match outcome {
            Ok(commands) => {
                info!(count = commands.len(), "discovered commands");
                DiscoveryResult {
                    success: true,
                    commands: Some(commands),
                    error: None,
                }
            }
            Err(error) => {
                warn!(%error, "command discovery failed");
                DiscoveryResult {
                    success: false,
                    commands: None,
                    error: Some(error),
                }
            }
        }
    }
}
