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

use std::path::PathBuf;

use clap::Parser;

use crate::mock::constants::{DEFAULT_CONFIG_PATH, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve mock Prometheus metrics described in a YAML file", long_about = None)]
pub struct Cli {
    /// Path to the YAML file describing the mock metrics.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// The port to serve `/metrics` on.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}
