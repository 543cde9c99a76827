//! Agent handlers and the destroy-resources wait.

mod common;

use std::time::Duration;

use common::*;
use schematics_core::provider::{Operation, Provider};
use schematics_core::resource::{Resource, ResourceId, Value};
use serde_json::json;

const AGENT: &str = "ibm_schematics_agent";

fn agent_body(destroy_status: Option<&str>) -> serde_json::Value {
    let mut body = json!({
        "id": "agent-1",
        "name": "demo-agent",
        "resource_group": "Default",
        "version": "1.0.0",
        "schematics_location": "us-south",
        "agent_location": "us-south",
        "agent_infrastructure": {"infra_type": "ibm_kubernetes", "cluster_id": "c-1"},
        "agent_kpi": {"availability_indicator": "available"},
        "user_state": {"state": "enable", "set_by": "ops@example.com"},
        "created_at": "2024-05-01T08:00:00Z"
    });
    if let Some(code) = destroy_status {
        body["recent_destroy_job"] = json!({"agent_id": "agent-1", "status_code": code});
    }
    body
}

fn infrastructure() -> Value {
    Value::List(vec![Value::Map(
        [
            ("infra_type".to_string(), s("ibm_kubernetes")),
            ("cluster_id".to_string(), s("c-1")),
        ]
        .into_iter()
        .collect(),
    )])
}

#[tokio::test]
async fn read_requests_detailed_profile() {
    let h = Harness::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/agents/agent-1"))
        .and(query_param("profile", "detailed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_body(None)))
        .expect(1)
        .mount(&h.server)
        .await;

    let id = ResourceId::new(AGENT, "demo");
    let state = h.provider.read(&id, Some("agent-1")).await.unwrap();
    assert_eq!(state.get("name"), Some(&s("demo-agent")));
    assert_eq!(state.get("created_at"), Some(&s("2024-05-01T08:00:00.000Z")));
    assert!(state.get("agent_kpi").is_some());
}

#[tokio::test]
async fn create_requires_core_fields() {
    let h = Harness::new().await;
    let resource = Resource::new(AGENT, "demo")
        .with_attribute("name", s("demo-agent"))
        .with_attribute("resource_group", s("Default"));

    let err = h.provider.create(&resource).await.unwrap_err();
    assert_eq!(err.operation, Some(Operation::Create));
    assert!(err.message.contains("version is required"));
    assert!(h.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_carries_run_destroy_resources() {
    let h = Harness::new().await;
    Mock::given(method("POST"))
        .and(path("/v2/agents"))
        .and(body_partial_json(json!({
            "name": "demo-agent",
            "agent_infrastructure": {"infra_type": "ibm_kubernetes"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "agent-1"})))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/agents/agent-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_body(None)))
        .mount(&h.server)
        .await;

    let state = h.provider.create(&demo_agent()).await.unwrap();
    assert_eq!(state.identifier.as_deref(), Some("agent-1"));
    assert_eq!(state.get("run_destroy_resources"), Some(&Value::Int(1)));
}

fn demo_agent() -> Resource {
    Resource::new(AGENT, "demo")
        .with_attribute("name", s("demo-agent"))
        .with_attribute("resource_group", s("Default"))
        .with_attribute("version", s("1.0.0"))
        .with_attribute("schematics_location", s("us-south"))
        .with_attribute("agent_location", s("us-south"))
        .with_attribute("agent_infrastructure", infrastructure())
        .with_attribute("run_destroy_resources", Value::Int(1))
}

#[tokio::test]
async fn update_with_read_back_state_sends_nothing() {
    let h = Harness::new().await;
    Mock::given(method("POST"))
        .and(path("/v2/agents"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "agent-1"})))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/agents/agent-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_body(None)))
        .mount(&h.server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_body(None)))
        .expect(0)
        .mount(&h.server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&h.server)
        .await;

    let resource = demo_agent();
    let from = h.provider.create(&resource).await.unwrap();
    assert!(from.get("user_state").is_some());

    h.provider.update(&resource.id, "agent-1", &from, &resource).await.unwrap();
}

#[tokio::test]
async fn location_change_sends_both_locations() {
    let h = Harness::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/agents/agent-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_body(None)))
        .mount(&h.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v2/agents/agent-1"))
        .and(body_partial_json(json!({
            "name": "demo-agent",
            "version": "1.0.0",
            "schematics_location": "us-south",
            "agent_location": "eu-de"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_body(None)))
        .expect(1)
        .mount(&h.server)
        .await;

    let from = prior(
        AGENT,
        &[
            ("schematics_location", s("us-south")),
            ("agent_location", s("us-south")),
        ],
    );
    let to = Resource::new(AGENT, "test")
        .with_attribute("schematics_location", s("us-south"))
        .with_attribute("agent_location", s("eu-de"));
    h.provider.update(&to.id, "agent-1", &from, &to).await.unwrap();
}

#[tokio::test]
async fn destroy_wait_stops_on_terminal_code() {
    let h = Harness::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/agents/agent-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_body(Some("job_in_progress"))))
        .up_to_n_times(2)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/agents/agent-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_body(Some("job_finished"))))
        .mount(&h.server)
        .await;

    let endpoint = h.provider.config().endpoint_for(None).unwrap();
    let code = h
        .provider
        .wait_for_destroy(&endpoint, "agent-1", Duration::from_millis(5), Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(code, "job_finished");
    assert_eq!(h.server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn destroy_wait_times_out_while_pending() {
    let h = Harness::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/agents/agent-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_body(None)))
        .mount(&h.server)
        .await;

    let endpoint = h.provider.config().endpoint_for(None).unwrap();
    let err = h
        .provider
        .wait_for_destroy(&endpoint, "agent-1", Duration::from_millis(5), Duration::from_millis(40))
        .await
        .unwrap_err();
    assert!(err.message.contains("timed out"));
}

#[tokio::test]
async fn delete_destroys_resources_then_forces_removal() {
    let h = Harness::new().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/agents/agent-1/resources"))
        .and(header("refresh_token", "test-refresh"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/agents/agent-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_body(Some("job_finished"))))
        .mount(&h.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/agents/agent-1"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&h.server)
        .await;

    let id = ResourceId::new(AGENT, "demo");
    h.provider.delete(&id, "agent-1").await.unwrap();
}

#[tokio::test]
async fn failed_resource_destroy_does_not_block_delete() {
    let h = Harness::new().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/agents/agent-1/resources"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agent_body(None)))
        .expect(0)
        .mount(&h.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/agents/agent-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&h.server)
        .await;

    let id = ResourceId::new(AGENT, "demo");
    h.provider.delete(&id, "agent-1").await.unwrap();
}
