// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{routing::get, Router};
use prometheus::Registry;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::metrics_handler;
use crate::error::{Error, Result};
use crate::mock::constants::METRICS_PATH;

/// Build the router serving `GET /metrics` from `registry`.
pub fn build_router(registry: Registry) -> Router {
    Router::new()
        .route(METRICS_PATH, get(metrics_handler))
        .with_state(registry)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Bind the TCP listener on all interfaces. Port 0 picks an ephemeral port.
pub async fn bind(port: u16) -> Result<TcpListener> {
    TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|source| Error::Bind { port, source })
}

/// Serve the router on an already bound listener until the process ends.
pub async fn serve(listener: TcpListener, registry: Registry) -> Result<()> {
    axum::serve(listener, build_router(registry))
        .await
        .map_err(Error::Serve)
}

/// Bind `port`, announce it, then serve forever.
pub async fn run_server(registry: Registry, port: u16) -> Result<()> {
    let listener = bind(port).await?;
    tracing::info!("prometheus-mock-exporter listening on port {port}");
    serve(listener, registry).await
}
