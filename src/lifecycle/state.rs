//! Listener state machine.
//!
//! # States
//! ```text
//! Accepting → Draining → Stopped
//! ```
//!
//! Transitions only move forward; a request to go back is ignored.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

/// Where the listener is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ServerState {
    /// Accepting new connections.
    Accepting,
    /// No new connections; in-flight requests are finishing.
    Draining,
    /// All connections closed.
    Stopped,
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServerState::Accepting => "accepting",
            ServerState::Draining => "draining",
            ServerState::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Publishes state transitions over a watch channel.
#[derive(Debug, Clone)]
pub struct StateTracker {
    tx: Arc<watch::Sender<ServerState>>,
}

impl StateTracker {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ServerState::Accepting);
        Self { tx: Arc::new(tx) }
    }

    /// Current state.
    pub fn current(&self) -> ServerState {
        *self.tx.borrow()
    }

    /// Receiver that observes every later transition.
    pub fn subscribe(&self) -> watch::Receiver<ServerState> {
        self.tx.subscribe()
    }

    /// Move to `next` if it is ahead of the current state.
    pub fn advance(&self, next: ServerState) -> bool {
        let moved = self.tx.send_if_modified(|state| {
            if next > *state {
                *state = next;
                true
            } else {
                false
            }
        });

        if moved {
            tracing::debug!(state = %next, "Server state changed");
        }
        moved
    }
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}
