//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum::serve, fallback dispatch handler)
//!     → routing (exact method + target lookup)
//!     → response.rs (plain-text body, Content-Type: text/plain)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::PlainText;
pub use server::HttpServer;
