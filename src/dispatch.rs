//! Change-driven command dispatch.
//!
//! The gate owns the memory of the last successfully sent token and
//! forwards a command only when it differs, so a stream of identical
//! frames costs a single transmission.

use crate::Result;
use log::{debug, warn};

/// Transport seam for delivering encoded command tokens
pub trait TransportSink: Send + Sync {
    /// Deliver one token to the vehicle
    ///
    /// # Errors
    ///
    /// Returns a transport error when delivery fails or times out.
    fn send(&self, token: &str) -> Result<()>;

    /// Get sink name
    fn name(&self) -> &str;
}

/// Outcome of offering one command to the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Token differed from the last sent one and was delivered
    Sent,
    /// Token matched the last sent one; nothing was transmitted
    Suppressed,
    /// Delivery failed; the token will be retried while it stays current
    Failed,
}

/// Debouncing dispatch gate in front of a transport sink
pub struct DispatchGate {
    transport: Box<dyn TransportSink>,
    last_sent: Option<String>,
}

impl DispatchGate {
    /// Create a gate that has sent nothing yet
    #[must_use]
    pub fn new(transport: Box<dyn TransportSink>) -> Self {
        Self {
            transport,
            last_sent: None,
        }
    }

    /// Offer the current frame's token for transmission.
    ///
    /// Failures are logged and absorbed. The last-sent memory advances
    /// only on success, so a token that failed to go out is retried on
    /// the next frame where it is still current.
    pub fn offer(&mut self, token: &str) -> DispatchOutcome {
        if self.last_sent.as_deref() == Some(token) {
            return DispatchOutcome::Suppressed;
        }

        match self.transport.send(token) {
            Ok(()) => {
                debug!("Sent command {} via {}", token, self.transport.name());
                self.last_sent = Some(token.to_string());
                DispatchOutcome::Sent
            }
            Err(e) => {
                warn!("Failed to send command {}: {}", token, e);
                DispatchOutcome::Failed
            }
        }
    }

    /// Last token known to have reached the transport
    #[must_use]
    pub fn last_sent(&self) -> Option<&str> {
        self.last_sent.as_deref()
    }
}
