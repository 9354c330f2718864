//! Constants used throughout the mock exporter

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

// Startup defaults
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";
pub const DEFAULT_PORT: u16 = 2112;
pub const METRICS_PATH: &str = "/metrics";

// Informational gauge registered once per `label_metrics` entry
pub const TAG_INFO_METRIC_NAME: &str = "mock_tag_info";
pub const TAG_INFO_VALUE: f64 = 1.0;

// Counters are increased once by a value drawn from [0, COUNTER_INCREMENT_MAX)
pub const COUNTER_INCREMENT_MAX: f64 = 10.0;
