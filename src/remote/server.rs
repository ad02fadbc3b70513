//! HTTP server for the toast remote.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::federation::RemoteManifest;

/// Path the manifest is served under.
pub const MANIFEST_PATH: &str = "/mf-manifest.json";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

async fn manifest(State(manifest): State<Arc<RemoteManifest>>) -> Json<RemoteManifest> {
    Json(manifest.as_ref().clone())
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "remote-toast".to_string(),
    })
}

/// Router serving `manifest` and a health endpoint.
pub fn build_router(manifest: RemoteManifest) -> Router {
    Router::new()
        .route(MANIFEST_PATH, get(self::manifest))
        .route("/health", get(health))
        .with_state(Arc::new(manifest))
}

/// A bound remote server.
pub struct RemoteServer {
    listener: TcpListener,
    router: Router,
}

impl RemoteServer {
    /// Bind to `addr` (port 0 picks a free port).
    pub async fn bind(addr: &str, manifest: RemoteManifest) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            router: build_router(manifest),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// URL of the manifest on this server.
    pub fn manifest_url(&self) -> io::Result<String> {
        Ok(format!("http://{}{}", self.local_addr()?, MANIFEST_PATH))
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.listener.local_addr()?;
        tracing::info!("Remote serving {} on {}", MANIFEST_PATH, addr);
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("Remote shut down");
        Ok(())
    }
}
