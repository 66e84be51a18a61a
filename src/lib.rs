//! Minimal HTTP server with two static routes and graceful shutdown.
//!
//! `GET /hello` answers `OK`, `GET /health` answers `healthy`, anything
//! else is a `404 Not Found`. A termination signal stops the listener from
//! accepting, lets in-flight requests finish, then the process exits.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use error::ServerError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
