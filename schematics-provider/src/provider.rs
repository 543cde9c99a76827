//! Schematics Provider implementation
//!
//! Dispatches resource and data source calls to the per-type handlers in the
//! submodules. Every handler resolves its endpoint for the call, talks to the
//! REST client, and flattens the response into a [`State`].

mod action;
mod agent;
mod job;
mod lookup;
mod workspace;

use schematics_core::provider::{Operation, ProviderError, ProviderResult};
use schematics_core::resource::{Resource, ResourceId, State};
use url::Url;

use crate::client::SchematicsClient;
use crate::config::ProviderConfig;
use crate::error::{ClientError, Result as ClientResult};
use crate::schemas::{ACTION, AGENT, INVENTORY, JOB, RESOURCE_QUERY, WORKSPACE};

pub use agent::{DESTROY_PENDING_CODES, DESTROY_TERMINAL_CODES};

/// IBM Cloud Schematics Provider
pub struct SchematicsProvider {
    client: SchematicsClient,
    config: ProviderConfig,
}

impl SchematicsProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ClientError> {
        Ok(Self {
            client: SchematicsClient::new(&config)?,
            config,
        })
    }

    /// Build a provider from `IC_*` / `IBMCLOUD_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ProviderConfig::from_env()?)
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Endpoint for one call. `None` selects the session region.
    fn endpoint(&self, id: &ResourceId, op: Operation, region: Option<&str>) -> ProviderResult<Url> {
        self.config.endpoint_for(region).map_err(|e| {
            ProviderError::new("cannot resolve the Schematics endpoint")
                .for_resource(id.clone())
                .with_operation(op)
                .with_cause(e)
        })
    }

    // =========================================================================
    // Resource Operations
    // =========================================================================

    pub async fn read_resource(
        &self,
        id: &ResourceId,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let Some(identifier) = identifier.filter(|s| !s.is_empty()) else {
            return Ok(State::not_found(id.clone()));
        };
        match id.resource_type.as_str() {
            WORKSPACE => self.read_workspace(id, identifier, None).await,
            ACTION => self.read_action(id, identifier, None).await,
            AGENT => self.read_agent(id, identifier, None).await,
            JOB => self.read_job(id, identifier, None).await,
            _ => Err(unknown_type(id, Operation::Read)),
        }
    }

    pub async fn create_resource(&self, resource: &Resource) -> ProviderResult<State> {
        match resource.id.resource_type.as_str() {
            WORKSPACE => self.create_workspace(resource).await,
            ACTION => self.create_action(resource).await,
            AGENT => self.create_agent(resource).await,
            JOB => self.create_job(resource).await,
            _ => Err(unknown_type(&resource.id, Operation::Create)),
        }
    }

    pub async fn update_resource(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        match id.resource_type.as_str() {
            WORKSPACE => self.update_workspace(id, identifier, from, to).await,
            ACTION => self.update_action(id, identifier, from, to).await,
            AGENT => self.update_agent(id, identifier, from, to).await,
            JOB => self.update_job(id, identifier, from, to).await,
            _ => Err(unknown_type(id, Operation::Update)),
        }
    }

    pub async fn delete_resource(&self, id: &ResourceId, identifier: &str) -> ProviderResult<()> {
        match id.resource_type.as_str() {
            WORKSPACE => self.delete_workspace(id, identifier).await,
            ACTION => self.delete_action(id, identifier).await,
            AGENT => self.delete_agent(id, identifier).await,
            JOB => self.delete_job(id, identifier).await,
            _ => Err(unknown_type(id, Operation::Delete)),
        }
    }

    /// Look up a data source by the id attribute in `query`.
    pub async fn lookup_data_source(&self, query: &Resource) -> ProviderResult<State> {
        match query.id.resource_type.as_str() {
            WORKSPACE => self.lookup_workspace(query).await,
            ACTION => self.lookup_action(query).await,
            AGENT => self.lookup_agent(query).await,
            JOB => self.lookup_job(query).await,
            INVENTORY => self.lookup_inventory(query).await,
            RESOURCE_QUERY => self.lookup_resource_query(query).await,
            _ => Err(unknown_type(&query.id, Operation::Read)),
        }
    }
}

fn unknown_type(id: &ResourceId, op: Operation) -> ProviderError {
    ProviderError::new(format!("Unknown resource type: {}", id.resource_type))
        .for_resource(id.clone())
        .with_operation(op)
}

/// Wrap a failed remote call.
pub(crate) fn failed(id: &ResourceId, op: Operation, call: &str, err: ClientError) -> ProviderError {
    ProviderError::new(format!("{} failed: {}", call, err))
        .for_resource(id.clone())
        .with_operation(op)
        .with_cause(err)
}

/// `Ok(None)` when the service reports the object as gone.
pub(crate) fn found<T>(
    result: ClientResult<T>,
    id: &ResourceId,
    call: &str,
) -> ProviderResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => {
            log::debug!("{}.{} no longer exists", id.resource_type, id.name);
            Ok(None)
        }
        Err(e) => Err(failed(id, Operation::Read, call, e)),
    }
}

/// Id of a freshly created object
pub(crate) fn created_id(
    id: &ResourceId,
    call: &str,
    returned: Option<String>,
) -> ProviderResult<String> {
    returned
        .filter(|s| !s.is_empty())
        .ok_or_else(|| failed(id, Operation::Create, call, ClientError::MissingId(call.to_string())))
}

/// Copy configured attributes the service never echoes back into `state`.
pub(crate) fn carry_configured(
    attributes: &mut crate::convert::AttrMap,
    desired: Option<&Resource>,
    keys: &[&str],
) {
    let Some(desired) = desired else { return };
    for key in keys {
        if let Some(value) = desired.get(key) {
            attributes.insert(key.to_string(), value.clone());
        }
    }
}

/// Drop attributes the caller did not configure, so they do not show up as drift.
pub(crate) fn keep_if_configured(
    attributes: &mut crate::convert::AttrMap,
    desired: Option<&Resource>,
    keys: &[&str],
) {
    let Some(desired) = desired else { return };
    for key in keys {
        if desired.get_ok(key).is_none() {
            attributes.remove(*key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_without_identifier_is_not_found() {
        let provider = SchematicsProvider::new(ProviderConfig::default()).unwrap();
        let id = ResourceId::new(WORKSPACE, "ws");
        let state = provider.read_resource(&id, None).await.unwrap();
        assert!(!state.exists);
        assert!(state.identifier.is_none());
    }

    #[tokio::test]
    async fn unknown_types_are_rejected() {
        let provider = SchematicsProvider::new(ProviderConfig::default()).unwrap();
        let id = ResourceId::new("ibm_schematics_cart", "c");
        let err = provider.delete_resource(&id, "x").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "[ibm_schematics_cart.c] delete: Unknown resource type: ibm_schematics_cart"
        );
    }

    #[test]
    fn missing_id_is_a_create_error() {
        let id = ResourceId::new(JOB, "j");
        let err = created_id(&id, "create job", Some(String::new())).unwrap_err();
        assert_eq!(err.operation, Some(Operation::Create));
        assert!(std::error::Error::source(&err).is_some());
    }
}
