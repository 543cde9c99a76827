//! ibm_schematics_workspace handlers
//!
//! A workspace update touches up to three endpoints, one per group of
//! changed attributes: the template source is replaced with PUT, descriptive
//! fields go through PATCH, and the inputs of the first template are replaced.
//! Attributes the service fills in only count as changed when configured.

use schematics_core::provider::{Operation, ProviderResult};
use schematics_core::resource::{Resource, ResourceId, State, Value};

use super::{SchematicsProvider, carry_configured, created_id, failed, found, keep_if_configured};
use crate::convert::{
    AttrMap, Expand, Flatten, block, configured, get, template_data_request,
    template_inputs_request, template_repo_request, workspace_status_request,
};
use crate::models::{TemplateSourceDataRequest, WorkspaceRequest};
use crate::schemas::workspace::workspace_schema;
use crate::utils::{configured_location, region_from_identifier};

/// Changes here replace the template source
const REPO_GROUP: &[&str] = &[
    "catalog_ref",
    "template_type",
    "template_git_folder",
    "template_init_state_file",
    "template_uninstall_script_name",
    "template_values_metadata",
    "template_git_branch",
    "template_git_release",
    "template_git_repo_sha_value",
    "template_git_repo_url",
    "template_git_url",
    "template_git_has_uploadedgitrepotar",
];

const METADATA_GROUP: &[&str] = &[
    "description",
    "name",
    "tags",
    "frozen",
    "frozen_at",
    "frozen_by",
    "locked",
    "locked_by",
    "locked_time",
    "shared_data",
];

const INPUT_GROUP: &[&str] = &["template_env_settings", "template_values", "template_inputs"];

impl SchematicsProvider {
    pub(super) async fn read_workspace(
        &self,
        id: &ResourceId,
        identifier: &str,
        desired: Option<&Resource>,
    ) -> ProviderResult<State> {
        let endpoint = self.endpoint(id, Operation::Read, region_from_identifier(identifier))?;
        let result = self.client.get_workspace(&endpoint, identifier).await;
        let Some(workspace) = found(result, id, "get workspace")? else {
            return Ok(State::not_found(id.clone()));
        };

        let mut attributes = workspace.flatten();
        keep_if_configured(&mut attributes, desired, &["shared_data"]);
        carry_configured(&mut attributes, desired, &["x_github_token"]);
        Ok(State::existing(id.clone(), attributes).with_identifier(identifier))
    }

    pub(super) async fn create_workspace(&self, resource: &Resource) -> ProviderResult<State> {
        let id = &resource.id;
        let endpoint = self.endpoint(id, Operation::Create, configured_location(resource))?;
        let request = WorkspaceRequest::expand(&configured(resource));

        let created = self
            .client
            .create_workspace(&endpoint, &request, resource.get_str("x_github_token"))
            .await
            .map_err(|e| failed(id, Operation::Create, "create workspace", e))?;
        let identifier = created_id(id, "create workspace", created.id)?;
        log::info!("created workspace {} as {}", id.name, identifier);

        self.read_workspace(id, &identifier, Some(resource)).await
    }

    pub(super) async fn update_workspace(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        let schema = workspace_schema();
        let changed: Vec<&str> = REPO_GROUP
            .iter()
            .chain(METADATA_GROUP)
            .chain(INPUT_GROUP)
            .copied()
            .filter(|key| schema.has_change(from, to, key))
            .collect();
        let touches = |group: &[&str]| group.iter().any(|key| changed.contains(key));
        let repo_changed = touches(REPO_GROUP);
        let metadata_changed = touches(METADATA_GROUP);
        let inputs_changed = touches(INPUT_GROUP);

        if changed.is_empty() {
            log::debug!("workspace {} has no tracked changes", identifier);
            return self.read_workspace(id, identifier, Some(to)).await;
        }

        let endpoint = self.endpoint(id, Operation::Update, region_from_identifier(identifier))?;
        let desired = configured(to);
        let template_type: Option<String> = get(&desired, "template_type");
        let base = WorkspaceRequest {
            kind: template_type.clone().map(|t| vec![t]),
            template_data: Some(vec![TemplateSourceDataRequest {
                kind: template_type,
                ..Default::default()
            }]),
            ..Default::default()
        };

        if repo_changed {
            let request = WorkspaceRequest {
                catalog_ref: block(&desired, "catalog_ref"),
                template_repo: template_repo_request(&desired),
                template_data: Some(vec![template_data_request(&desired)]),
                ..base.clone()
            };
            self.client
                .replace_workspace(&endpoint, identifier, &request, to.get_str("x_github_token"))
                .await
                .map_err(|e| failed(id, Operation::Update, "replace workspace", e))?;
        }

        if metadata_changed {
            let request = metadata_request(&to.attributes, &changed, base);
            self.client
                .update_workspace(&endpoint, identifier, &request)
                .await
                .map_err(|e| failed(id, Operation::Update, "update workspace", e))?;
        }

        if inputs_changed {
            match first_template_id(from) {
                Some(template) => {
                    let request = template_inputs_request(&to.attributes);
                    self.client
                        .replace_workspace_inputs(&endpoint, identifier, &template, &request)
                        .await
                        .map_err(|e| failed(id, Operation::Update, "replace workspace inputs", e))?;
                }
                None => log::warn!(
                    "workspace {} reports no templates, input changes were not applied",
                    identifier
                ),
            }
        }

        self.read_workspace(id, identifier, Some(to)).await
    }

    pub(super) async fn delete_workspace(
        &self,
        id: &ResourceId,
        identifier: &str,
    ) -> ProviderResult<()> {
        let endpoint = self.endpoint(id, Operation::Delete, region_from_identifier(identifier))?;
        self.client
            .delete_workspace(&endpoint, identifier)
            .await
            .map_err(|e| failed(id, Operation::Delete, "delete workspace", e))
    }
}

const STATUS_KEYS: &[&str] = &[
    "frozen",
    "frozen_at",
    "frozen_by",
    "locked",
    "locked_by",
    "locked_time",
];

/// Descriptive fields for PATCH, limited to the keys in `changed`. Raw values
/// are sent so that an emptied string or list clears the field on the service.
fn metadata_request(attributes: &AttrMap, changed: &[&str], base: WorkspaceRequest) -> WorkspaceRequest {
    let is_changed = |key: &str| changed.contains(&key);
    let raw_str = |key: &str| {
        is_changed(key).then(|| {
            attributes
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        })
    };
    let tags = is_changed("tags").then(|| {
        attributes
            .get("tags")
            .and_then(Value::as_list)
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    });

    let status_changes: AttrMap = STATUS_KEYS
        .iter()
        .filter(|key| is_changed(key))
        .filter_map(|key| attributes.get(*key).map(|v| (key.to_string(), v.clone())))
        .collect();
    let workspace_status = STATUS_KEYS.iter().any(|key| is_changed(key)).then(|| {
        let mut status = workspace_status_request(&status_changes).unwrap_or_default();
        if is_changed("frozen") {
            status.frozen.get_or_insert(false);
        }
        if is_changed("locked") {
            status.locked.get_or_insert(false);
        }
        status
    });

    WorkspaceRequest {
        name: raw_str("name"),
        description: raw_str("description"),
        tags,
        shared_data: if is_changed("shared_data") {
            block(attributes, "shared_data")
        } else {
            None
        },
        workspace_status,
        ..base
    }
}

/// Id of the first template recorded in the prior state's `runtime_data`.
/// Template inputs are only ever folded from that template.
fn first_template_id(state: &State) -> Option<String> {
    state
        .get("runtime_data")
        .and_then(Value::as_list)?
        .iter()
        .filter_map(Value::as_map)
        .find_map(|m| m.get("id").and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
