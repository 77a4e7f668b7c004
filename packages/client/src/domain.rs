//! Reconnection policy for the classroom client.
//!
//! Pure state machine: the runner reports how each session ended and the
//! policy answers with the next step, so the rules can be tested without a
//! server.

use crate::error::ClientError;

/// What the runner does after a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// The user closed the input
    Exit,
    /// Wait, then connect (and authenticate) again
    Reconnect { attempt: u32 },
    /// Retrying cannot help (e.g., the URL itself is invalid)
    Abort,
    /// Too many consecutive failed connection attempts
    GiveUp,
}

/// Counts consecutive failures across sessions
///
/// A session that got connected and later dropped proves the server was
/// reachable, so it restarts the count instead of adding to it.
#[derive(Debug)]
pub struct ReconnectPolicy {
    max_attempts: u32,
    failures: u32,
}

impl ReconnectPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            failures: 0,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Decide the next step from how the last session ended
    pub fn next_step(&mut self, outcome: &Result<(), ClientError>) -> NextStep {
        let error = match outcome {
            Ok(()) => return NextStep::Exit,
            Err(error) => error,
        };

        match error {
            ClientError::InvalidUrl(_) | ClientError::Encode(_) | ClientError::ReconnectFailed(_) => {
                NextStep::Abort
            }
            ClientError::ConnectionLost(_) => {
                self.failures = 1;
                NextStep::Reconnect {
                    attempt: self.failures,
                }
            }
            ClientError::ConnectionError(_) => {
                self.failures += 1;
                if self.failures > self.max_attempts {
                    NextStep::GiveUp
                } else {
                    NextStep::Reconnect {
                        attempt: self.failures,
                    }
                }
            }
        }
    }
}
