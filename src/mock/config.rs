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

//! YAML configuration for the mock exporter.
//!
//! The file holds two lists. `label_metrics` entries each become one
//! `mock_tag_info` gauge carrying the entry as constant labels, and
//! `mock_metrics` entries each describe one counter or gauge.
//!
//! ```yaml
//! label_metrics:
//!   - resource_info:
//!       region: us-east-1
//! mock_metrics:
//!   - name: requests_total
//!     type: counter
//!     labels: {service: api}
//!   - name: queue_depth
//!     type: gauge
//!     value: 42
//!     labels: {queue: default}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};

/// Constant label set attached to an instrument at registration time.
pub type LabelSet = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "deserialize_label_metrics")]
    pub label_metrics: Vec<LabelSet>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub mock_metrics: Vec<MockMetric>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MockMetric {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: MetricKind,

    /// Only used by gauges. Counters ignore it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: i64,

    #[serde(default, deserialize_with = "deserialize_labels")]
    pub labels: LabelSet,
}

/// Instrument kind named by the `type` key.
///
/// Anything other than `counter` or `gauge` maps to `Unknown` and is skipped
/// when the registry is populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Counter,
    Gauge,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Read and parse the configuration file at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse configuration from YAML text. An empty document yields an empty config.
pub fn parse_config(contents: &str) -> std::result::Result<Config, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Option<Config> = serde_yaml::from_str(contents)?;
    Ok(config.unwrap_or_default())
}

/// Treats an explicit `null` (`labels:` with nothing after it) like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_labels<'de, D>(deserializer: D) -> std::result::Result<LabelSet, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Mapping>::deserialize(deserializer)? {
        Some(mapping) => labels_from_mapping(mapping).map_err(D::Error::custom),
        None => Ok(LabelSet::new()),
    }
}

fn deserialize_label_metrics<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<LabelSet>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(label_metric_entry)
        .collect::<std::result::Result<_, _>>()
        .map_err(D::Error::custom)
}

/// An entry is either a flat label mapping or a single key wrapping one,
/// e.g. `resource_info: {region: us-east-1}`. A wrapper with nothing under
/// it (`resource_info:`) carries no labels.
fn label_metric_entry(entry: Value) -> std::result::Result<LabelSet, String> {
    match entry {
        Value::Null => Ok(LabelSet::new()),
        Value::Mapping(mapping) => {
            if mapping.len() == 1 {
                match mapping.iter().next() {
                    Some((_, Value::Mapping(inner))) => {
                        return labels_from_mapping(inner.clone());
                    }
                    Some((_, Value::Null)) => return Ok(LabelSet::new()),
                    _ => {}
                }
            }
            labels_from_mapping(mapping)
        }
        other => Err(format!(
            "label_metrics entries must be mappings, found {}",
            value_kind(&other)
        )),
    }
}

fn labels_from_mapping(mapping: Mapping) -> std::result::Result<LabelSet, String> {
    mapping
        .into_iter()
        .map(|(key, value)| {
            let key = scalar_to_string(key)
                .map_err(|kind| format!("label name must be a scalar, found {kind}"))?;
            let value = scalar_to_string(value)
                .map_err(|kind| format!("label `{key}` must have a scalar value, found {kind}"))?;
            Ok((key, value))
        })
        .collect()
}

fn scalar_to_string(value: Value) -> std::result::Result<String, &'static str> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(value_kind(&other)),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn labels(pairs: &[(&str, &str)]) -> LabelSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_documented_example() {
        let yaml = r#"
label_metrics:
  - resource_info:
      region: us-east-1
mock_metrics:
  - name: requests_total
    type: counter
    labels: {service: api}
  - name: queue_depth
    type: gauge
    value: 42
    labels: {queue: default}
"#;
        let config = parse_config(yaml).unwrap();

        assert_eq!(config.label_metrics, vec![labels(&[("region", "us-east-1")])]);
        assert_eq!(config.mock_metrics.len(), 2);

        let counter = &config.mock_metrics[0];
        assert_eq!(counter.name, "requests_total");
        assert_eq!(counter.kind, MetricKind::Counter);
        assert_eq!(counter.value, 0);
        assert_eq!(counter.labels, labels(&[("service", "api")]));

        let gauge = &config.mock_metrics[1];
        assert_eq!(gauge.kind, MetricKind::Gauge);
        assert_eq!(gauge.value, 42);
        assert_eq!(gauge.labels, labels(&[("queue", "default")]));
    }

    #[test]
    fn test_flat_label_metric_entry() {
        let yaml = r#"
label_metrics:
  - region: eu-west-1
    cluster: blue
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(
            config.label_metrics,
            vec![labels(&[("cluster", "blue"), ("region", "eu-west-1")])]
        );
        assert!(config.mock_metrics.is_empty());
    }

    #[test]
    fn test_empty_wrapper_has_no_labels() {
        let yaml = r#"
label_metrics:
  - resource_info:
  - team: ""
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(
            config.label_metrics,
            vec![LabelSet::new(), labels(&[("team", "")])]
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let yaml = r#"
mock_metrics:
  - name: bare
  - name: null_labels
    type: gauge
    labels:
"#;
        let config = parse_config(yaml).unwrap();
        assert!(config.label_metrics.is_empty());

        let bare = &config.mock_metrics[0];
        assert_eq!(bare.kind, MetricKind::Unknown);
        assert_eq!(bare.value, 0);
        assert!(bare.labels.is_empty());

        assert!(config.mock_metrics[1].labels.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_not_an_error() {
        let yaml = r#"
mock_metrics:
  - name: latency
    type: histogram
  - name: shouty
    type: Counter
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.mock_metrics[0].kind, MetricKind::Unknown);
        assert_eq!(config.mock_metrics[1].kind, MetricKind::Unknown);
    }

    #[test]
    fn test_scalar_label_values_are_stringified() {
        let yaml = r#"
mock_metrics:
  - name: b
    type: gauge
    value: 5
    labels: {port: 8080, canary: true, ratio: 0.5}
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(
            config.mock_metrics[0].labels,
            labels(&[("canary", "true"), ("port", "8080"), ("ratio", "0.5")])
        );
    }

    #[test]
    fn test_nested_label_value_is_rejected() {
        let yaml = r#"
mock_metrics:
  - name: b
    type: gauge
    labels: {env: {nested: value}}
"#;
        assert!(parse_config(yaml).is_err());
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse_config("").unwrap(), Config::default());
        assert_eq!(parse_config("\n  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        assert!(parse_config("mock_metrics: [unterminated").is_err());
        assert!(parse_config("mock_metrics: 12").is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("config.yml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn test_load_config_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "label_metrics: {{").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mock_metrics:\n  - name: a\n    type: counter\n    value: 99").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.mock_metrics[0].name, "a");
        assert_eq!(config.mock_metrics[0].value, 99);
    }
}
