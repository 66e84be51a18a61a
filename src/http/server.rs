//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with a single fallback handler
//! - Wire up request tracing
//! - Dispatch every request through the exact-match route table
//! - Serve until shutdown, then drain in-flight connections
//! - Publish listener state (accepting, draining, stopped)

use std::borrow::Cow;

use axum::{
    extract::State,
    http::{Method, Uri},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, watch};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::http::response::PlainText;
use crate::lifecycle::{ServerState, StateTracker};
use crate::routing::Router as RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: RouteTable,
}

/// HTTP server answering the static route table.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
    state: StateTracker,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState {
            routes: RouteTable::new(),
        };

        Self {
            router: Self::build_router(state),
            config,
            state: StateTracker::new(),
        }
    }

    /// Build the Axum router.
    ///
    /// Axum's own path routing would answer `405` for a known path with the
    /// wrong method and ignore query strings, so every request goes to one
    /// fallback that does the exact comparison itself.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// A clone of the request router, for driving it without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Observe listener state transitions.
    pub fn state(&self) -> watch::Receiver<ServerState> {
        self.state.subscribe()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` fires (or its sender is dropped) and every
    /// in-flight connection has finished. There is no drain deadline.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %format!("http://{}/", addr), "Server running");

        let tracker = self.state.clone();
        let signal = async move {
            let _ = shutdown.recv().await;
            tracker.advance(ServerState::Draining);
            tracing::info!("Stopped accepting connections, draining");
        };

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        self.state.advance(ServerState::Stopped);
        tracing::info!("HTTP server closed");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Route every request by exact method and request target.
async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> PlainText {
    let target = request_target(&uri);
    let matched = state.routes.dispatch(&method, &target);

    tracing::debug!(
        method = %method,
        target = %target,
        status = matched.status().as_u16(),
        "Dispatched request"
    );

    PlainText::from(matched)
}

/// The request target as the client wrote it.
///
/// Origin-form (`/hello?x=1`) keeps its query string. Absolute-form
/// (`http://host/hello`) and authority-form keep scheme and host, so they
/// never equal a route path.
fn request_target(uri: &Uri) -> Cow<'_, str> {
    if uri.scheme().is_some() || uri.authority().is_some() {
        return Cow::Owned(uri.to_string());
    }

    Cow::Borrowed(
        uri.path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path()),
    )
}
