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

//! Turns the loaded configuration into registered instruments.
//!
//! The pass runs once at startup. Every instrument carries its labels as
//! constant labels and uses its own name as help text.

use chrono::Utc;
use prometheus::core::Collector;
use prometheus::{Counter, Gauge, Opts, Registry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::mock::config::{Config, LabelSet, MetricKind};
use crate::mock::constants::{COUNTER_INCREMENT_MAX, TAG_INFO_METRIC_NAME, TAG_INFO_VALUE};

/// Number of instruments created by one [`populate`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    pub tag_infos: usize,
    pub counters: usize,
    pub gauges: usize,
    /// `mock_metrics` entries with a kind other than counter or gauge.
    pub skipped: usize,
}

/// Register every instrument described by `config` into `registry`.
///
/// Fails on the first instrument the registry rejects. Entries registered
/// before the failure stay in the registry.
pub fn populate(registry: &Registry, config: &Config) -> Result<PopulateSummary> {
    let mut summary = PopulateSummary::default();

    for labels in &config.label_metrics {
        let gauge = register(
            registry,
            TAG_INFO_METRIC_NAME,
            Gauge::with_opts(metric_opts(TAG_INFO_METRIC_NAME, labels)),
        )?;
        gauge.set(TAG_INFO_VALUE);
        summary.tag_infos += 1;
    }

    for metric in &config.mock_metrics {
        match metric.kind {
            MetricKind::Counter => {
                let counter = register(
                    registry,
                    &metric.name,
                    Counter::with_opts(metric_opts(&metric.name, &metric.labels)),
                )?;
                counter.inc_by(random_increment());
                summary.counters += 1;
            }
            MetricKind::Gauge => {
                let gauge = register(
                    registry,
                    &metric.name,
                    Gauge::with_opts(metric_opts(&metric.name, &metric.labels)),
                )?;
                gauge.set(metric.value as f64);
                summary.gauges += 1;
            }
            MetricKind::Unknown => summary.skipped += 1,
        }
    }

    Ok(summary)
}

/// Run [`populate`] on a background task without waiting for it.
///
/// A scrape that arrives before the task finishes sees a partially populated
/// registry. A rejected registration terminates the process.
pub fn spawn_populator(registry: Registry, config: Config) -> JoinHandle<()> {
    tokio::spawn(async move {
        match populate(&registry, &config) {
            Ok(summary) => tracing::debug!(
                tag_infos = summary.tag_infos,
                counters = summary.counters,
                gauges = summary.gauges,
                skipped = summary.skipped,
                "Mock metrics populated"
            ),
            Err(e) => {
                tracing::error!("{e}");
                std::process::exit(1);
            }
        }
    })
}

/// Value added to a mock counter, drawn uniformly from `[0, COUNTER_INCREMENT_MAX)`.
///
/// The generator is seeded from the wall clock on every call, so values differ
/// between runs.
pub fn random_increment() -> f64 {
    let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    rng.random_range(0.0..COUNTER_INCREMENT_MAX)
}

fn metric_opts(name: &str, labels: &LabelSet) -> Opts {
    Opts::new(name, name).const_labels(
        labels
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    )
}

fn register<C>(
    registry: &Registry,
    name: &str,
    collector: prometheus::Result<C>,
) -> Result<C>
where
    C: Collector + Clone + 'static,
{
    let registration_error = |source| Error::Registration {
        name: name.to_string(),
        source,
    };
    let collector = collector.map_err(registration_error)?;
    registry
        .register(Box::new(collector.clone()))
        .map_err(registration_error)?;
    Ok(collector)
}
