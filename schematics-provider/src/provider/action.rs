//! ibm_schematics_action handlers

use schematics_core::provider::{Operation, ProviderResult};
use schematics_core::resource::{Resource, ResourceId, State};

use super::{SchematicsProvider, carry_configured, created_id, failed, found, keep_if_configured};
use crate::convert::{AttrMap, Expand, Flatten, configured};
use crate::models::Action;
use crate::schemas::action::action_schema;
use crate::utils::{configured_location, region_from_identifier};

/// Attributes an update sends when they change
const UPDATABLE: &[&str] = &[
    "name",
    "description",
    "location",
    "resource_group",
    "tags",
    "user_state",
    "source_readme_url",
    "source",
    "source_type",
    "command_parameter",
    "inventory",
    "credentials",
    "bastion",
    "bastion_credential",
    "targets_ini",
    "action_inputs",
    "action_outputs",
    "settings",
];

impl SchematicsProvider {
    pub(super) async fn read_action(
        &self,
        id: &ResourceId,
        identifier: &str,
        desired: Option<&Resource>,
    ) -> ProviderResult<State> {
        let endpoint = self.endpoint(id, Operation::Read, region_from_identifier(identifier))?;
        let result = self.client.get_action(&endpoint, identifier).await;
        let Some(action) = found(result, id, "get action")? else {
            return Ok(State::not_found(id.clone()));
        };

        let mut attributes = action.flatten();
        keep_if_configured(&mut attributes, desired, &["source"]);
        carry_configured(&mut attributes, desired, &["x_github_token"]);
        Ok(State::existing(id.clone(), attributes).with_identifier(identifier))
    }

    pub(super) async fn create_action(&self, resource: &Resource) -> ProviderResult<State> {
        let id = &resource.id;
        let endpoint = self.endpoint(id, Operation::Create, configured_location(resource))?;
        let action = Action::expand(&configured(resource));

        let created = self
            .client
            .create_action(&endpoint, &action, resource.get_str("x_github_token"))
            .await
            .map_err(|e| failed(id, Operation::Create, "create action", e))?;
        let identifier = created_id(id, "create action", created.id)?;
        log::info!("created action {} as {}", id.name, identifier);

        self.read_action(id, &identifier, Some(resource)).await
    }

    pub(super) async fn update_action(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        let schema = action_schema();
        let changed: AttrMap = UPDATABLE
            .iter()
            .filter(|key| schema.has_change(from, to, key))
            .filter_map(|key| to.get(key).map(|v| (key.to_string(), v.clone())))
            .collect();
        let patch = Action::expand(&changed);

        if patch != Action::default() {
            let endpoint =
                self.endpoint(id, Operation::Update, region_from_identifier(identifier))?;
            self.client
                .update_action(&endpoint, identifier, &patch, to.get_str("x_github_token"))
                .await
                .map_err(|e| failed(id, Operation::Update, "update action", e))?;
        } else {
            log::debug!("action {} has no tracked changes", identifier);
        }

        self.read_action(id, identifier, Some(to)).await
    }

    pub(super) async fn delete_action(&self, id: &ResourceId, identifier: &str) -> ProviderResult<()> {
        let endpoint = self.endpoint(id, Operation::Delete, region_from_identifier(identifier))?;
        self.client
            .delete_action(&endpoint, identifier)
            .await
            .map_err(|e| failed(id, Operation::Delete, "delete action", e))
    }
}
