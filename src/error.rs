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

//! Error types for the mock exporter.
//!
//! Every variant is fatal to the process. Configuration errors abort startup
//! before the listener binds; registration errors abort the background
//! populator; bind and serve errors end the HTTP endpoint.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for mock exporter operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be opened or read.
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not well-formed YAML or does not match the schema.
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The registry rejected an instrument.
    ///
    /// Raised for invalid metric or label names, a second registration of the
    /// same name and label values, or a name reused with different label names.
    #[error("failed to register metric {name}: {source}")]
    Registration {
        name: String,
        #[source]
        source: prometheus::Error,
    },

    /// Rendering the registry into the text exposition format failed.
    #[error("failed to encode metrics: {0}")]
    Encode(#[source] prometheus::Error),

    /// The HTTP listener could not bind its port.
    #[error("failed to bind TCP listener on port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("HTTP server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// A specialized Result type for mock exporter operations.
pub type Result<T> = std::result::Result<T, Error>;
