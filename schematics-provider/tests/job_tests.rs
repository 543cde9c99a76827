//! Job handlers and the remaining data source lookups.

mod common;

use common::*;
use schematics_core::provider::{Operation, Provider};
use schematics_core::resource::{Resource, ResourceId, Value};
use serde_json::json;

const JOB: &str = "ibm_schematics_job";
const JOB_ID: &str = "us-south.JOB.demo.5e6f";

fn job_body() -> serde_json::Value {
    json!({
        "id": JOB_ID,
        "name": "demo",
        "command_object": "workspace",
        "command_object_id": "us-south.workspace.demo.1a2b3c4d",
        "command_name": "workspace_plan",
        "location": "us-south",
        "submitted_at": "2024-05-02T10:00:00Z",
        "status": {"workspace_job_status": {"workspace_name": "demo", "status_code": "job_finished"}},
        "log_summary": {"job_id": JOB_ID, "elapsed_time": 12.5}
    })
}

#[tokio::test]
async fn create_submits_job_with_refresh_token() {
    let h = Harness::new().await;
    Mock::given(method("POST"))
        .and(path("/v2/jobs"))
        .and(header("refresh_token", "test-refresh"))
        .and(body_partial_json(json!({
            "command_object": "workspace",
            "command_name": "workspace_plan"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": JOB_ID})))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v2/jobs/{}", JOB_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body()))
        .mount(&h.server)
        .await;

    let resource = Resource::new(JOB, "demo")
        .with_attribute("command_object", s("workspace"))
        .with_attribute("command_object_id", s("us-south.workspace.demo.1a2b3c4d"))
        .with_attribute("command_name", s("workspace_plan"))
        .with_attribute("location", s("us-south"));

    let state = h.provider.create(&resource).await.unwrap();
    assert_eq!(state.identifier.as_deref(), Some(JOB_ID));
    assert_eq!(state.get("submitted_at"), Some(&s("2024-05-02T10:00:00.000Z")));
    let status = state.get("status").and_then(Value::as_list).unwrap();
    assert_eq!(status.len(), 1);
    let summary = state.get("log_summary").and_then(Value::as_list).unwrap();
    assert_eq!(
        summary[0].as_map().unwrap().get("elapsed_time"),
        Some(&Value::Float(12.5))
    );
}

#[tokio::test]
async fn update_replaces_job() {
    let h = Harness::new().await;
    Mock::given(method("PUT"))
        .and(path(format!("/v2/jobs/{}", JOB_ID)))
        .and(body_partial_json(json!({
            "command_name": "workspace_apply",
            "command_object": "workspace"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body()))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v2/jobs/{}", JOB_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body()))
        .mount(&h.server)
        .await;

    let from = prior(
        JOB,
        &[
            ("command_object", s("workspace")),
            ("command_name", s("workspace_plan")),
        ],
    );
    let to = Resource::new(JOB, "test")
        .with_attribute("command_object", s("workspace"))
        .with_attribute("command_name", s("workspace_apply"));
    h.provider.update(&to.id, JOB_ID, &from, &to).await.unwrap();
}

#[tokio::test]
async fn update_with_read_back_state_sends_nothing() {
    let h = Harness::new().await;
    Mock::given(method("POST"))
        .and(path("/v2/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": JOB_ID})))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v2/jobs/{}", JOB_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body()))
        .mount(&h.server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body()))
        .expect(0)
        .mount(&h.server)
        .await;

    let resource = Resource::new(JOB, "demo")
        .with_attribute("command_object", s("workspace"))
        .with_attribute("command_object_id", s("us-south.workspace.demo.1a2b3c4d"))
        .with_attribute("command_name", s("workspace_plan"));
    let from = h.provider.create(&resource).await.unwrap();
    assert_eq!(from.get("location"), Some(&s("us-south")));

    let state = h.provider.update(&resource.id, JOB_ID, &from, &resource).await.unwrap();
    assert_eq!(state.identifier.as_deref(), Some(JOB_ID));
}

#[tokio::test]
async fn delete_failure_keeps_identity() {
    let h = Harness::new().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/v2/jobs/{}", JOB_ID)))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "forbidden"})))
        .mount(&h.server)
        .await;

    let id = ResourceId::new(JOB, "demo");
    let err = h.provider.delete(&id, JOB_ID).await.unwrap_err();
    assert_eq!(err.operation, Some(Operation::Delete));
    assert!(err.to_string().starts_with("[ibm_schematics_job.demo] delete: delete job failed"));
}

#[tokio::test]
async fn inventory_lookup() {
    let h = Harness::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/inventories/inv-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "inv-1",
            "name": "hosts",
            "resource_queries": ["q-1", "q-2"]
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let query = Resource::new("ibm_schematics_inventory", "inv")
        .with_read_only(true)
        .with_attribute("inventory_id", s("inv-1"))
        .with_attribute("location", s("eu-de"));
    let state = h.provider.read_data_source(&query).await.unwrap();
    assert_eq!(state.get("name"), Some(&s("hosts")));
    assert_eq!(
        state.get("resource_queries"),
        Some(&Value::List(vec![s("q-1"), s("q-2")]))
    );
}

#[tokio::test]
async fn resource_query_lookup_failure_is_an_error() {
    let h = Harness::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/resources_query/q-404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&h.server)
        .await;

    let query = Resource::new("ibm_schematics_resource_query", "q")
        .with_read_only(true)
        .with_attribute("query_id", s("q-404"));
    let err = h.provider.read_data_source(&query).await.unwrap_err();
    assert_eq!(err.operation, Some(Operation::Read));
}
