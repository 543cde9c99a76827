//! Shared helpers for the provider integration tests.

#![allow(dead_code)]

use std::time::Duration;

use schematics_core::resource::{ResourceId, State, Value};
use schematics_provider::{ProviderConfig, SchematicsProvider};
use wiremock::MockServer;

pub use wiremock::matchers::{body_partial_json, header, method, path, query_param};
pub use wiremock::{Mock, ResponseTemplate};

/// Mock server plus a provider pointed at it.
pub struct Harness {
    pub server: MockServer,
    pub provider: SchematicsProvider,
}

impl Harness {
    pub async fn new() -> Self {
        Self::with_config(|c| c).await
    }

    pub async fn with_config(adjust: impl FnOnce(ProviderConfig) -> ProviderConfig) -> Self {
        let server = MockServer::start().await;
        let config = ProviderConfig::new("us-south")
            .with_endpoint(&server.uri())
            .expect("mock server uri parses")
            .with_tokens("test-token", "test-refresh")
            .with_destroy_polling(Duration::from_millis(10), Duration::from_millis(200));
        let provider = SchematicsProvider::new(adjust(config)).expect("provider builds");
        Self { server, provider }
    }
}

pub fn s(v: &str) -> Value {
    Value::String(v.to_string())
}

pub fn prior(resource_type: &str, attrs: &[(&str, Value)]) -> State {
    State::existing(
        ResourceId::new(resource_type, "test"),
        attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}
