use super::{CommandResult, DeviceError, TvClient};
use reqwest::header::{ACCEPT, CONNECTION};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
struct KeyPress<'a> {
    key: &'a str,
}

impl TvClient {
    /// Press a logical button.
    ///
    /// Candidates from the alias table are tried one at a time until the TV
    /// accepts one. When none is accepted the original command is sent once
    /// more and that outcome is returned.
    pub async fn dispatch(&self, logical: &str) -> CommandResult {
        tokio::time::sleep(self.timing.pre_send_delay).await;

        let candidates = self.aliases.candidates(logical);
        let total = candidates.len();
        info!(command = logical, candidates = total, "dispatching command");

        let mut attempt = 0;
        while attempt < total {
            let candidate = candidates[attempt];
            debug!(attempt = attempt + 1, total, candidate, "trying candidate");

            let result = self.send_key(candidate).await;
            if result.success {
                info!(command = logical, candidate, "command accepted");
                return result;
            }
            warn!(
                command = logical,
                candidate,
                error = %display_error(&result),
                "candidate failed"
            );

            attempt += 1;
            if attempt < total {
                tokio::time::sleep(self.timing.candidate_pause).await;
            }
        }

        warn!(
            command = logical,
            "all candidates failed, retrying original command"
        );
        self.send_key(logical).await
    }

    /// Send one wire command to the key-input endpoint.
    pub async fn send_key(&self, command: &str) -> CommandResult {
        let url = self.address.url("input/key");
        debug!(%url, key = command, "POST key");

        let request = self
            .http
            .post(&url)
            .header(ACCEPT, "*/*")
            .header(CONNECTION, "close")
            .json(&KeyPress { key: command });

        match self
            .exchange(request, self.timing.command_timeout, "Request")
            .await
        {
            Ok(reply) if reply.status == StatusCode::OK => {
                CommandResult::succeeded(command, reply.status.as_u16(), reply.body)
            }
            Ok(reply) => CommandResult::failed(
                command,
                DeviceError::from_status(reply.status),
                Some(reply.status.as_u16()),
                Some(reply.body),
            ),
            Err(error) => CommandResult::failed(command, error, None, None),
        }
    }
}

fn display_error(result: &CommandResult) -> String {
    result
        .error
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}
