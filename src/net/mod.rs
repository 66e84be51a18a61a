//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (parse address, bind socket)
//!     → TcpListener handed to the HTTP layer
//! ```
//!
//! Connection acceptance and per-connection tasks are owned by
//! `axum::serve`; this layer only produces the socket.

pub mod listener;

pub use listener::bind;
