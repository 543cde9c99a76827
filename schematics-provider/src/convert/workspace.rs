//! Workspace attributes do not mirror the wire shape: the first template,
//! the template repository and the workspace status are folded onto flat
//! top-level keys.

use schematics_core::resource::Value;

use super::{
    block, blocks, convert, get, json, put, put_block, put_blocks, put_json, AttrMap, Expand,
    Flatten,
};
use crate::models::{
    CatalogRef, EnvVariable, SharedTargetData, TemplateInputsRequest, TemplateRepo,
    TemplateRunTimeData, TemplateSourceDataRequest, TemplateSourceDataResponse,
    WorkspaceRequest, WorkspaceResponse, WorkspaceStatus, WorkspaceVariable,
};

convert! {
    CatalogRef {
        "dry_run" => dry_run,
        "owning_account" => owning_account,
        "item_icon_url" => item_icon_url,
        "item_id" => item_id,
        "item_name" => item_name,
        "item_readme_url" => item_readme_url,
        "item_url" => item_url,
        "launch_url" => launch_url,
        "offering_version" => offering_version,
    }
}

convert! {
    SharedTargetData {
        "cluster_created_on" => cluster_created_on,
        "cluster_id" => cluster_id,
        "cluster_name" => cluster_name,
        "cluster_type" => cluster_type,
        "entitlement_keys" => entitlement_keys: json,
        "namespace" => namespace,
        "region" => region,
        "resource_group_id" => resource_group_id,
        "worker_count" => worker_count,
        "worker_machine_type" => worker_machine_type,
    }
}

convert! {
    WorkspaceVariable {
        "name" => name,
        "value" => value,
        "type" => kind,
        "description" => description,
        "secure" => secure,
        "use_default" => use_default,
    }
}

impl Flatten for TemplateRunTimeData {
    fn flatten(&self) -> AttrMap {
        let mut map = AttrMap::new();
        put(&mut map, "id", &self.id);
        put(&mut map, "engine_cmd", &self.engine_cmd);
        put(&mut map, "engine_name", &self.engine_name);
        put(&mut map, "engine_version", &self.engine_version);
        put(&mut map, "log_store_url", &self.log_store_url);
        put(&mut map, "state_store_url", &self.state_store_url);
        put_documents(&mut map, "output_values", &self.output_values);
        put_documents(&mut map, "resources", &self.resources);
        map
    }
}

fn put_documents(map: &mut AttrMap, key: &str, docs: &Option<Vec<serde_json::Value>>) {
    if let Some(docs) = docs {
        let list = docs.iter().filter_map(Value::from_json).collect();
        map.insert(key.to_string(), Value::List(list));
    }
}

/// Each environment variable becomes a one-entry `{name: value}` map.
fn flatten_env_values(env: &[EnvVariable]) -> Value {
    Value::List(
        env.iter()
            .filter_map(|var| {
                let name = var.name.clone()?;
                let value = Value::String(var.value.clone().unwrap_or_default());
                Some(Value::Map(AttrMap::from([(name, value)])))
            })
            .collect(),
    )
}

fn flatten_template(map: &mut AttrMap, template: &TemplateSourceDataResponse) {
    if let Some(env) = &template.env_values {
        map.insert("template_env_settings".to_string(), flatten_env_values(env));
    }
    put(map, "template_git_folder", &template.folder);
    put(map, "template_init_state_file", &template.init_state_file);
    put(map, "template_type", &template.kind);
    put(map, "template_uninstall_script_name", &template.uninstall_script_name);
    put(map, "template_values", &template.values);
    put_json(map, "template_values_metadata", &template.values_metadata);
    put_blocks(map, "template_inputs", &template.variablestore);
}

fn flatten_repo(map: &mut AttrMap, repo: &TemplateRepo) {
    put(map, "template_git_branch", &repo.branch);
    put(map, "template_git_release", &repo.release);
    put(map, "template_git_repo_sha_value", &repo.repo_sha_value);
    put(map, "template_git_repo_url", &repo.repo_url);
    put(map, "template_git_url", &repo.url);
    put(map, "template_git_has_uploadedgitrepotar", &repo.has_uploadedgitrepotar);
}

fn flatten_status(map: &mut AttrMap, status: &WorkspaceStatus) {
    put(map, "frozen", &status.frozen);
    put(map, "frozen_at", &status.frozen_at);
    put(map, "frozen_by", &status.frozen_by);
    put(map, "locked", &status.locked);
    put(map, "locked_by", &status.locked_by);
    put(map, "locked_time", &status.locked_time);
}

impl Flatten for WorkspaceResponse {
    fn flatten(&self) -> AttrMap {
        let mut map = AttrMap::new();
        put(&mut map, "name", &self.name);
        put(&mut map, "description", &self.description);
        put(&mut map, "location", &self.location);
        put(&mut map, "resource_group", &self.resource_group);
        put(&mut map, "tags", &self.tags);
        put(&mut map, "applied_shareddata_ids", &self.applied_shareddata_ids);
        put(&mut map, "template_ref", &self.template_ref);
        put_block(&mut map, "catalog_ref", &self.catalog_ref);
        put_block(&mut map, "shared_data", &self.shared_data);

        // Workspaces created by the provider carry exactly one template.
        if let Some(template) = self.template_data.as_ref().and_then(|t| t.first()) {
            flatten_template(&mut map, template);
        }
        if !map.contains_key("template_type") {
            let kind = self.kind.as_ref().and_then(|k| k.first()).cloned();
            put(&mut map, "template_type", &kind);
        }
        if let Some(repo) = &self.template_repo {
            flatten_repo(&mut map, repo);
        }
        if let Some(status) = &self.workspace_status {
            flatten_status(&mut map, status);
        }
        if let Some(msg) = &self.workspace_status_msg {
            put(&mut map, "status_code", &msg.status_code);
            put(&mut map, "status_msg", &msg.status_msg);
        }

        put_blocks(&mut map, "runtime_data", &self.runtime_data);
        put(&mut map, "crn", &self.crn);
        put(&mut map, "status", &self.status);
        put(&mut map, "created_at", &self.created_at);
        put(&mut map, "created_by", &self.created_by);
        put(&mut map, "updated_at", &self.updated_at);
        put(&mut map, "updated_by", &self.updated_by);
        put(&mut map, "last_health_check_at", &self.last_health_check_at);
        map
    }
}

/// Attributes only the workspace data source reports.
pub(crate) fn flatten_lookup_extras(map: &mut AttrMap, workspace: &WorkspaceResponse) {
    if let Some(repo) = &workspace.template_repo {
        put(map, "template_git_full_url", &repo.full_url);
    }
    if let Some(status) = &workspace.workspace_status {
        put(map, "is_frozen", &status.frozen);
        put(map, "is_locked", &status.locked);
    }
}

/// Template definition from the flat `template_*` attributes.
pub(crate) fn template_data_request(map: &AttrMap) -> TemplateSourceDataRequest {
    TemplateSourceDataRequest {
        env_values: json(map, "template_env_settings"),
        folder: get(map, "template_git_folder"),
        init_state_file: get(map, "template_init_state_file"),
        kind: get(map, "template_type"),
        uninstall_script_name: get(map, "template_uninstall_script_name"),
        values: get(map, "template_values"),
        values_metadata: json(map, "template_values_metadata"),
        variablestore: blocks(map, "template_inputs"),
    }
}

/// Template repository from the `template_git_*` attributes, `None` when none is set.
pub(crate) fn template_repo_request(map: &AttrMap) -> Option<TemplateRepo> {
    let repo = TemplateRepo {
        branch: get(map, "template_git_branch"),
        release: get(map, "template_git_release"),
        repo_sha_value: get(map, "template_git_repo_sha_value"),
        repo_url: get(map, "template_git_repo_url"),
        url: get(map, "template_git_url"),
        full_url: None,
        has_uploadedgitrepotar: get(map, "template_git_has_uploadedgitrepotar"),
    };
    (repo != TemplateRepo::default()).then_some(repo)
}

pub(crate) fn workspace_status_request(map: &AttrMap) -> Option<WorkspaceStatus> {
    let status = WorkspaceStatus {
        frozen: get(map, "frozen"),
        frozen_at: get(map, "frozen_at"),
        frozen_by: get(map, "frozen_by"),
        locked: get(map, "locked"),
        locked_by: get(map, "locked_by"),
        locked_time: get(map, "locked_time"),
    };
    (status != WorkspaceStatus::default()).then_some(status)
}

pub(crate) fn template_inputs_request(map: &AttrMap) -> TemplateInputsRequest {
    TemplateInputsRequest {
        env_values: json(map, "template_env_settings"),
        values: get(map, "template_values"),
        variablestore: blocks(map, "template_inputs"),
    }
}

/// Create request from configured attributes.
impl Expand for WorkspaceRequest {
    fn expand(map: &AttrMap) -> Self {
        let template_type: Option<String> = get(map, "template_type");
        WorkspaceRequest {
            applied_shareddata_ids: get(map, "applied_shareddata_ids"),
            catalog_ref: block(map, "catalog_ref"),
            description: get(map, "description"),
            location: get(map, "location"),
            name: get(map, "name"),
            resource_group: get(map, "resource_group"),
            shared_data: block(map, "shared_data"),
            tags: get(map, "tags"),
            template_data: Some(vec![template_data_request(map)]),
            template_ref: get(map, "template_ref"),
            template_repo: template_repo_request(map),
            kind: template_type.map(|t| vec![t]),
            workspace_status: workspace_status_request(map),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    fn response() -> WorkspaceResponse {
        serde_json::from_value(serde_json::json!({
            "id": "us-south.workspace.demo.1a2b3c4d",
            "name": "demo",
            "location": "us-south",
            "type": ["terraform_v1.5"],
            "template_data": [{
                "id": "tmpl-1",
                "folder": ".",
                "type": "terraform_v1.5",
                "env_values": [{"name": "TF_LOG", "value": "debug"}],
                "variablestore": [{"name": "region", "value": "us-south", "type": "string"}]
            }],
            "template_repo": {
                "url": "https://github.com/org/tf",
                "branch": "main",
                "full_url": "https://github.com/org/tf/tree/main"
            },
            "workspace_status": {
                "frozen": false,
                "locked": true,
                "locked_by": "ops@example.com",
                "locked_time": "2024-04-01T10:00:00Z"
            },
            "workspace_status_msg": {"status_code": "200", "status_msg": "ok"},
            "runtime_data": [{"id": "tmpl-1", "engine_name": "terraform"}],
            "created_at": "2024-03-30T09:00:00.5Z"
        }))
        .unwrap()
    }

    #[test]
    fn template_fields_fold_onto_top_level_keys() {
        let map = response().flatten();
        assert_eq!(map.get("template_git_folder"), Some(&s(".")));
        assert_eq!(map.get("template_type"), Some(&s("terraform_v1.5")));
        assert_eq!(map.get("template_git_url"), Some(&s("https://github.com/org/tf")));
        assert_eq!(map.get("locked"), Some(&Value::Bool(true)));
        assert_eq!(map.get("locked_time"), Some(&s("2024-04-01T10:00:00.000Z")));
        assert_eq!(map.get("status_msg"), Some(&s("ok")));
        assert_eq!(map.get("created_at"), Some(&s("2024-03-30T09:00:00.500Z")));
        assert!(!map.contains_key("template_git_full_url"));
        assert!(!map.contains_key("frozen_at"));
    }

    #[test]
    fn env_values_become_name_value_maps() {
        let map = response().flatten();
        let env = map.get("template_env_settings").and_then(Value::as_list).unwrap();
        let entry = env[0].as_map().unwrap();
        assert_eq!(entry.get("TF_LOG"), Some(&s("debug")));
    }

    #[test]
    fn lookup_extras() {
        let ws = response();
        let mut map = ws.flatten();
        flatten_lookup_extras(&mut map, &ws);
        assert_eq!(
            map.get("template_git_full_url"),
            Some(&s("https://github.com/org/tf/tree/main"))
        );
        assert_eq!(map.get("is_locked"), Some(&Value::Bool(true)));
    }

    #[test]
    fn create_request_from_attributes() {
        let mut input = AttrMap::new();
        input.insert("name".to_string(), s("region"));
        input.insert("value".to_string(), s("eu-de"));
        input.insert("type".to_string(), s("string"));

        let mut map = AttrMap::new();
        map.insert("name".to_string(), s("demo"));
        map.insert("template_type".to_string(), s("terraform_v1.6"));
        map.insert("template_git_url".to_string(), s("https://github.com/org/tf"));
        map.insert(
            "template_inputs".to_string(),
            Value::List(vec![Value::Map(input)]),
        );

        let request = WorkspaceRequest::expand(&map);
        assert_eq!(request.kind, Some(vec!["terraform_v1.6".to_string()]));
        let template = &request.template_data.unwrap()[0];
        assert_eq!(template.kind.as_deref(), Some("terraform_v1.6"));
        assert_eq!(template.variablestore.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            request.template_repo.and_then(|r| r.url).as_deref(),
            Some("https://github.com/org/tf")
        );
        assert!(request.workspace_status.is_none());
        assert!(request.catalog_ref.is_none());
    }

    #[test]
    fn variable_round_trip() {
        let var = WorkspaceVariable {
            name: Some("count".to_string()),
            value: Some("3".to_string()),
            kind: Some("number".to_string()),
            secure: Some(false),
            ..Default::default()
        };
        assert_eq!(WorkspaceVariable::expand(&var.flatten()), var);
    }
}
