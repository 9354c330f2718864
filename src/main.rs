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

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prometheus_mock_exporter::api::run_server;
use prometheus_mock_exporter::cli::Cli;
use prometheus_mock_exporter::mock::{load_config, new_registry, spawn_populator};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prometheus_mock_exporter=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // No graceful shutdown: a signal ends the process with status 0
    tokio::spawn(async {
        if signal::ctrl_c().await.is_ok() {
            std::process::exit(0);
        }
    });

    #[cfg(unix)]
    tokio::spawn(async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                std::process::exit(0);
            }
            Err(e) => tracing::warn!("Failed to listen for SIGTERM: {e}"),
        }
    });

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("error loading config: {e}");
            std::process::exit(1);
        }
    };

    let registry = new_registry();
    spawn_populator(registry.clone(), config);

    if let Err(e) = run_server(registry, cli.port).await {
        tracing::error!("Error starting HTTP server: {e}");
        std::process::exit(1);
    }
}
