//! hello-server binary.
//!
//! ```text
//!   Client ──▶ net::listener ──▶ http::server ──▶ routing ──▶ PlainText
//!
//!   SIGTERM/SIGINT ──▶ lifecycle::signals ──▶ Shutdown ──▶ drain ──▶ exit 0
//! ```

use hello_server::config::ServerConfig;
use hello_server::lifecycle::{Shutdown, TerminationSignals};
use hello_server::{net, observability, HttpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::default();

    observability::init(&config.observability)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "hello-server starting");

    let mut signals = TerminationSignals::install()?;
    let listener = net::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        signals.recv().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
