//! Transport sinks that deliver command tokens to the vehicle.

use crate::dispatch::TransportSink;
use crate::{Error, Result};
use log::info;
use std::time::Duration;

/// HTTP GET transport for the vehicle's command endpoint.
///
/// Sends `GET <base_url>/move?cmd=<token>` with a hard per-request
/// timeout, so a dead link can never stall the frame loop for longer
/// than one deadline. Command tokens are plain ASCII and need no URL
/// encoding.
pub struct HttpTransport {
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport for a vehicle base URL, e.g. `http://192.168.4.1`
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

impl TransportSink for HttpTransport {
    fn send(&self, token: &str) -> Result<()> {
        let url = format!("{}/move?cmd={}", self.base_url, token);

        ureq::get(&url)
            .timeout(self.timeout)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => {
                    Error::TransportFailure(format!("vehicle returned status {}", code))
                }
                ureq::Error::Transport(t) => {
                    let msg = t.to_string();
                    if msg.contains("timeout") || msg.contains("timed out") {
                        Error::TransportTimeout {
                            timeout_ms: self.timeout.as_millis() as u64,
                        }
                    } else {
                        Error::TransportFailure(msg)
                    }
                }
            })?;

        Ok(())
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Dry-run transport that logs tokens instead of sending them
pub struct LogTransport;

impl TransportSink for LogTransport {
    fn send(&self, token: &str) -> Result<()> {
        info!("dry run: would send command {}", token);
        Ok(())
    }

    fn name(&self) -> &str {
        "dry-run"
    }
}
