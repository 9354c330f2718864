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

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use prometheus::{Encoder, Registry, TextEncoder, TEXT_FORMAT};

use crate::error::{Error, Result};

/// Render everything currently registered in the text exposition format.
pub fn render_metrics(registry: &Registry) -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&registry.gather(), &mut buffer)
        .map_err(Error::Encode)?;
    String::from_utf8(buffer).map_err(|e| Error::Encode(prometheus::Error::Msg(e.to_string())))
}

pub async fn metrics_handler(State(registry): State<Registry>) -> Response {
    match render_metrics(&registry) {
        Ok(body) => ([(header::CONTENT_TYPE, TEXT_FORMAT)], body).into_response(),
        Err(e) => {
            tracing::error!("{e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::config::parse_config;
    use crate::mock::populate;

    #[test]
    fn test_render_gauge_line() {
        let registry = Registry::new();
        let config = parse_config(
            "mock_metrics:\n  - {name: b, type: gauge, value: 5, labels: {env: prod}}\n",
        )
        .unwrap();
        populate(&registry, &config).unwrap();

        let body = render_metrics(&registry).unwrap();
        assert!(body.contains("# HELP b b\n"));
        assert!(body.contains("# TYPE b gauge\n"));
        assert!(body.lines().any(|line| line == r#"b{env="prod"} 5"#));
    }

    #[test]
    fn test_render_empty_registry() {
        assert_eq!(render_metrics(&Registry::new()).unwrap(), "");
    }

    #[test]
    fn test_render_is_a_pure_read() {
        let registry = Registry::new();
        let config = parse_config(
            "label_metrics:\n  - {team: core}\nmock_metrics:\n  - {name: a, type: counter}\n",
        )
        .unwrap();
        populate(&registry, &config).unwrap();

        let first = render_metrics(&registry).unwrap();
        let second = render_metrics(&registry).unwrap();
        assert_eq!(first, second);
        assert!(first.contains(r#"mock_tag_info{team="core"} 1"#));
    }
}
