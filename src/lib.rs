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

//! Mock Prometheus exporter.
//!
//! Loads fake metric definitions from YAML, registers them as counters and
//! gauges with constant labels, and serves them on a pull endpoint.
//!
//! ```rust,no_run
//! use prometheus_mock_exporter::{api, mock, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = mock::load_config("config.yml")?;
//!     let registry = mock::new_registry();
//!     mock::spawn_populator(registry.clone(), config);
//!     api::run_server(registry, 2112).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod mock;

pub use error::{Error, Result};
