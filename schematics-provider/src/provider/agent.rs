//! ibm_schematics_agent handlers
//!
//! Agents live in the session region; their ids carry no region prefix.
//! Removing an agent first destroys whatever it deployed, which runs as a
//! job on the service side that is polled until it settles.

use std::time::Duration;

use schematics_core::provider::{Operation, ProviderError, ProviderResult};
use schematics_core::resource::{Resource, ResourceId, State};
use tokio::time::Instant;
use url::Url;

use super::{SchematicsProvider, carry_configured, created_id, failed, found};
use crate::convert::{AttrMap, Expand, Flatten, configured};
use crate::models::AgentData;
use crate::schemas::agent::agent_schema;

/// Destroy job states that keep the wait going
pub const DESTROY_PENDING_CODES: &[&str] = &[
    "retry",
    "job_in_progress",
    "job_pending",
    "job_ready_to_execute",
    "job_stop_in_progress",
];

/// Destroy job states that end the wait. The empty code means no job ran.
pub const DESTROY_TERMINAL_CODES: &[&str] = &[
    "job_finished",
    "job_failed",
    "job_cancelled",
    "job_stopped",
    "",
];

const REQUIRED: &[&str] = &[
    "name",
    "resource_group",
    "version",
    "schematics_location",
    "agent_location",
    "agent_infrastructure",
];

const UPDATABLE: &[&str] = &[
    "name",
    "version",
    "agent_infrastructure",
    "description",
    "tags",
    "agent_metadata",
    "agent_inputs",
    "user_state",
];

const LOCATIONS: &[&str] = &["schematics_location", "agent_location"];

impl SchematicsProvider {
    pub(super) async fn read_agent(
        &self,
        id: &ResourceId,
        identifier: &str,
        desired: Option<&Resource>,
    ) -> ProviderResult<State> {
        let endpoint = self.endpoint(id, Operation::Read, None)?;
        let result = self.client.get_agent(&endpoint, identifier).await;
        let Some(agent) = found(result, id, "get agent")? else {
            return Ok(State::not_found(id.clone()));
        };

        let mut attributes = agent.flatten();
        carry_configured(&mut attributes, desired, &["run_destroy_resources"]);
        Ok(State::existing(id.clone(), attributes).with_identifier(identifier))
    }

    pub(super) async fn create_agent(&self, resource: &Resource) -> ProviderResult<State> {
        let id = &resource.id;
        if let Some(missing) = REQUIRED.iter().find(|key| resource.get_ok(key).is_none()) {
            return Err(ProviderError::new(format!("{} is required", missing))
                .for_resource(id.clone())
                .with_operation(Operation::Create));
        }

        let endpoint = self.endpoint(id, Operation::Create, None)?;
        let agent = AgentData::expand(&configured(resource));
        let created = self
            .client
            .create_agent(&endpoint, &agent)
            .await
            .map_err(|e| failed(id, Operation::Create, "create agent", e))?;
        let identifier = created_id(id, "create agent", created.id)?;
        log::info!("created agent {} as {}", id.name, identifier);

        self.read_agent(id, &identifier, Some(resource)).await
    }

    pub(super) async fn update_agent(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        let endpoint = self.endpoint(id, Operation::Update, None)?;
        let result = self.client.get_agent(&endpoint, identifier).await;
        let Some(current) = found(result, id, "get agent")? else {
            return Ok(State::not_found(id.clone()));
        };

        let schema = agent_schema();
        let mut changes = AttrMap::new();
        for key in UPDATABLE.iter().filter(|key| schema.has_change(from, to, key)) {
            if let Some(value) = to.get(key) {
                changes.insert(key.to_string(), value.clone());
            }
        }
        // The two locations are always sent as a pair.
        if LOCATIONS.iter().any(|key| schema.has_change(from, to, key)) {
            for key in LOCATIONS {
                if let Some(value) = to.get(key) {
                    changes.insert(key.to_string(), value.clone());
                }
            }
        }

        if schema.has_change(from, to, "run_destroy_resources") {
            self.destroy_agent_resources(&endpoint, identifier).await;
        }

        if changes.is_empty() {
            log::debug!("agent {} has no tracked changes", identifier);
        } else {
            let payload = overlay(seed(&current), AgentData::expand(&changes));
            self.client
                .update_agent(&endpoint, identifier, &payload)
                .await
                .map_err(|e| failed(id, Operation::Update, "update agent", e))?;
        }

        self.read_agent(id, identifier, Some(to)).await
    }

    pub(super) async fn delete_agent(&self, id: &ResourceId, identifier: &str) -> ProviderResult<()> {
        let endpoint = self.endpoint(id, Operation::Delete, None)?;
        self.destroy_agent_resources(&endpoint, identifier).await;
        self.client
            .delete_agent(&endpoint, identifier)
            .await
            .map_err(|e| failed(id, Operation::Delete, "delete agent", e))
    }

    /// Start the destroy-resources job and wait for it. Failures are logged only.
    async fn destroy_agent_resources(&self, endpoint: &Url, identifier: &str) {
        if let Err(e) = self.client.delete_agent_resources(endpoint, identifier).await {
            log::warn!("destroying resources of agent {} failed: {}", identifier, e);
            return;
        }
        if let Err(e) = self
            .wait_for_destroy(
                endpoint,
                identifier,
                self.config.destroy_poll_interval,
                self.config.destroy_timeout,
            )
            .await
        {
            log::warn!("{}", e);
        }
    }

    /// Poll the agent until its latest destroy job reaches a terminal code.
    pub async fn wait_for_destroy(
        &self,
        endpoint: &Url,
        identifier: &str,
        interval: Duration,
        timeout: Duration,
    ) -> ProviderResult<String> {
        log::info!("waiting for resources of agent {} to be destroyed", identifier);
        let deadline = Instant::now() + timeout;

        loop {
            let agent = self
                .client
                .get_agent(endpoint, identifier)
                .await
                .map_err(|e| {
                    ProviderError::new(format!("Failed to get agent status: {}", e)).with_cause(e)
                })?;
            let code = agent.destroy_status().unwrap_or("job_pending");

            if DESTROY_TERMINAL_CODES.contains(&code) {
                log::debug!("destroy job of agent {} ended with '{}'", identifier, code);
                return Ok(code.to_string());
            }
            if !DESTROY_PENDING_CODES.contains(&code) {
                return Err(ProviderError::new(format!(
                    "unexpected destroy job status '{}' for agent {}",
                    code, identifier
                )));
            }
            if Instant::now() + interval > deadline {
                return Err(ProviderError::new(format!(
                    "timed out after {:?} waiting for resources of agent {} to be destroyed (last status '{}')",
                    timeout, identifier, code
                )));
            }
            tokio::time::sleep(interval).await;
        }
    }
}

/// Writable fields of the current agent, the base of every update body.
fn seed(current: &AgentData) -> AgentData {
    AgentData {
        name: current.name.clone(),
        description: current.description.clone(),
        resource_group: current.resource_group.clone(),
        tags: current.tags.clone(),
        version: current.version.clone(),
        schematics_location: current.schematics_location.clone(),
        agent_location: current.agent_location.clone(),
        agent_infrastructure: current.agent_infrastructure.clone(),
        agent_metadata: current.agent_metadata.clone(),
        agent_inputs: current.agent_inputs.clone(),
        user_state: current.user_state.clone(),
        agent_kpi: current.agent_kpi.clone(),
        ..Default::default()
    }
}

fn overlay(mut base: AgentData, changes: AgentData) -> AgentData {
    macro_rules! take {
        ($($field:ident),*) => {
            $(if changes.$field.is_some() { base.$field = changes.$field; })*
        };
    }
    take!(
        name,
        description,
        tags,
        version,
        schematics_location,
        agent_location,
        agent_infrastructure,
        agent_metadata,
        agent_inputs,
        user_state
    );
    base
}
