//! Data source lookups
//!
//! Every lookup is keyed by one id attribute. The region is the configured
//! `location`, falling back to the id's region prefix and then the session
//! region. A lookup that finds nothing is an error.

use schematics_core::provider::{Operation, ProviderError, ProviderResult};
use schematics_core::resource::{Resource, State, Value};
use url::Url;

use super::{SchematicsProvider, failed};
use crate::convert::{AttrMap, Flatten, flatten_lookup_extras};
use crate::utils::{configured_location, region_from_identifier};

impl SchematicsProvider {
    pub(super) async fn lookup_workspace(&self, query: &Resource) -> ProviderResult<State> {
        let (key, endpoint) = self.lookup_target(query, "workspace_id")?;
        let workspace = self
            .client
            .get_workspace(&endpoint, key)
            .await
            .map_err(|e| failed(&query.id, Operation::Read, "get workspace", e))?;

        let mut attributes = workspace.flatten();
        flatten_lookup_extras(&mut attributes, &workspace);
        Ok(lookup_state(query, "workspace_id", key, attributes))
    }

    pub(super) async fn lookup_action(&self, query: &Resource) -> ProviderResult<State> {
        let (key, endpoint) = self.lookup_target(query, "action_id")?;
        let action = self
            .client
            .get_action(&endpoint, key)
            .await
            .map_err(|e| failed(&query.id, Operation::Read, "get action", e))?;
        Ok(lookup_state(query, "action_id", key, action.flatten()))
    }

    pub(super) async fn lookup_agent(&self, query: &Resource) -> ProviderResult<State> {
        let (key, endpoint) = self.lookup_target(query, "agent_id")?;
        let agent = self
            .client
            .get_agent(&endpoint, key)
            .await
            .map_err(|e| failed(&query.id, Operation::Read, "get agent", e))?;
        Ok(lookup_state(query, "agent_id", key, agent.flatten()))
    }

    pub(super) async fn lookup_job(&self, query: &Resource) -> ProviderResult<State> {
        let (key, endpoint) = self.lookup_target(query, "job_id")?;
        let job = self
            .client
            .get_job(&endpoint, key)
            .await
            .map_err(|e| failed(&query.id, Operation::Read, "get job", e))?;
        Ok(lookup_state(query, "job_id", key, job.flatten()))
    }

    pub(super) async fn lookup_inventory(&self, query: &Resource) -> ProviderResult<State> {
        let (key, endpoint) = self.lookup_target(query, "inventory_id")?;
        let inventory = self
            .client
            .get_inventory(&endpoint, key)
            .await
            .map_err(|e| failed(&query.id, Operation::Read, "get inventory", e))?;
        Ok(lookup_state(query, "inventory_id", key, inventory.flatten()))
    }

    pub(super) async fn lookup_resource_query(&self, query: &Resource) -> ProviderResult<State> {
        let (key, endpoint) = self.lookup_target(query, "query_id")?;
        let record = self
            .client
            .get_resource_query(&endpoint, key)
            .await
            .map_err(|e| failed(&query.id, Operation::Read, "get resource query", e))?;
        Ok(lookup_state(query, "query_id", key, record.flatten()))
    }

    fn lookup_target<'a>(&self, query: &'a Resource, key_attr: &str) -> ProviderResult<(&'a str, Url)> {
        let key = query.get_str(key_attr).ok_or_else(|| {
            ProviderError::new(format!("{} is required", key_attr))
                .for_resource(query.id.clone())
                .with_operation(Operation::Read)
        })?;
        let region = configured_location(query).or_else(|| region_from_identifier(key));
        let endpoint = self.endpoint(&query.id, Operation::Read, region)?;
        Ok((key, endpoint))
    }
}

fn lookup_state(query: &Resource, key_attr: &str, key: &str, mut attributes: AttrMap) -> State {
    attributes.insert(key_attr.to_string(), Value::String(key.to_string()));
    State::existing(query.id.clone(), attributes).with_identifier(key)
}
