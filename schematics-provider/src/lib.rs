//! IBM Cloud Schematics Provider
//!
//! Schemas and CRUD handlers for Schematics workspaces, actions, agents and
//! jobs, plus read-only lookups for those and for inventories and resource
//! queries.
//!
//! ## Module Structure
//!
//! - `config` - Provider settings and endpoint resolution
//! - `client` - REST client, one submodule per API area
//! - `models` - Typed request and response bodies
//! - `convert` - Flatten / Expand between models and attribute maps
//! - `schemas` - Attribute schemas of every resource and data source
//! - `validation` - Attribute validators
//! - `resources` - Resource type definitions
//! - `provider` - SchematicsProvider and its handlers

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod models;
pub mod provider;
pub mod resources;
pub mod schemas;
pub mod utils;
pub mod validation;

// Re-export main types
pub use config::{ConfigError, ProviderConfig, Visibility};
pub use error::ClientError;
pub use provider::SchematicsProvider;

use schematics_core::provider::{BoxFuture, Provider, ProviderResult, ResourceType};
use schematics_core::resource::{Resource, ResourceId, State};

// =============================================================================
// Provider Trait Implementation
// =============================================================================

impl Provider for SchematicsProvider {
    fn name(&self) -> &'static str {
        "ibm"
    }

    fn resource_types(&self) -> Vec<Box<dyn ResourceType>> {
        resources::resource_types()
    }

    fn data_source_types(&self) -> Vec<Box<dyn ResourceType>> {
        resources::data_source_types()
    }

    fn read(
        &self,
        id: &ResourceId,
        identifier: Option<&str>,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let id = id.clone();
        let identifier = identifier.map(|s| s.to_string());
        Box::pin(async move { self.read_resource(&id, identifier.as_deref()).await })
    }

    fn read_data_source(&self, query: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
        let query = query.clone();
        Box::pin(async move { self.lookup_data_source(&query).await })
    }

    fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
        let resource = resource.clone();
        Box::pin(async move { self.create_resource(&resource).await })
    }

    fn update(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        let from = from.clone();
        let to = to.clone();
        Box::pin(async move { self.update_resource(&id, &identifier, &from, &to).await })
    }

    fn delete(&self, id: &ResourceId, identifier: &str) -> BoxFuture<'_, ProviderResult<()>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        Box::pin(async move { self.delete_resource(&id, &identifier).await })
    }
}
