//! TCP listener setup.
//!
//! # Responsibilities
//! - Parse the configured bind address
//! - Bind the listening socket
//! - Report the address actually bound (port 0 resolves here)

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;
use crate::error::ServerError;

/// Bind a TCP listener to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ServerError> {
    let bind_error = |source| ServerError::Bind {
        address: config.bind_address.clone(),
        source,
    };

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .map_err(|e| bind_error(std::io::Error::new(std::io::ErrorKind::InvalidInput, e)))?;

    let listener = TcpListener::bind(addr).await.map_err(bind_error)?;
    let local_addr = listener.local_addr().map_err(bind_error)?;

    tracing::debug!(address = %local_addr, "Listener bound");

    Ok(listener)
}
