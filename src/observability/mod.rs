//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields)
//!     → TraceLayer request spans (http::server)
//!
//! Consumer:
//!     → logging.rs (fmt layer on stdout, EnvFilter)
//! ```

pub mod logging;

pub use logging::init;
