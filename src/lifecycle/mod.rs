//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     TerminationSignals::install() → recv() resolves on SIGTERM/SIGINT
//!
//! Shutdown (shutdown.rs):
//!     Shutdown::trigger() → every subscribed receiver wakes
//!
//! State (state.rs):
//!     Accepting → Draining → Stopped
//! ```
//!
//! # Design Decisions
//! - Ordered shutdown: stop accept, drain, close
//! - No drain deadline: in-flight requests are never aborted

pub mod shutdown;
pub mod signals;
pub mod state;

pub use shutdown::Shutdown;
pub use signals::{TerminationSignal, TerminationSignals};
pub use state::{ServerState, StateTracker};
