use chrono::{DateTime, Utc};

use super::RawMap;

model! {
    /// Catalog offering a workspace was created from
    pub struct CatalogRef {
        dry_run: bool,
        owning_account: String,
        item_icon_url: String,
        item_id: String,
        item_name: String,
        item_readme_url: String,
        item_url: String,
        launch_url: String,
        offering_version: String,
    }
}

model! {
    /// Cluster details shared with the template
    pub struct SharedTargetData {
        cluster_created_on: String,
        cluster_id: String,
        cluster_name: String,
        cluster_type: String,
        entitlement_keys: Vec<RawMap>,
        namespace: String,
        region: String,
        resource_group_id: String,
        worker_count: i64,
        worker_machine_type: String,
    }
}

model! {
    pub struct WorkspaceVariable {
        name: String,
        value: String,
        #[serde(rename = "type")]
        kind: String,
        description: String,
        secure: bool,
        use_default: bool,
    }
}

model! {
    pub struct EnvVariable {
        name: String,
        value: String,
        secure: bool,
        hidden: bool,
    }
}

model! {
    /// Template definition as sent on create and update
    pub struct TemplateSourceDataRequest {
        env_values: Vec<RawMap>,
        folder: String,
        init_state_file: String,
        #[serde(rename = "type")]
        kind: String,
        uninstall_script_name: String,
        values: String,
        values_metadata: Vec<RawMap>,
        variablestore: Vec<WorkspaceVariable>,
    }
}

model! {
    /// Template definition as reported by the service
    pub struct TemplateSourceDataResponse {
        id: String,
        env_values: Vec<EnvVariable>,
        folder: String,
        has_githubtoken: bool,
        init_state_file: String,
        #[serde(rename = "type")]
        kind: String,
        uninstall_script_name: String,
        values: String,
        values_metadata: Vec<RawMap>,
        values_url: String,
        variablestore: Vec<WorkspaceVariable>,
    }
}

model! {
    pub struct TemplateRepo {
        branch: String,
        release: String,
        repo_sha_value: String,
        repo_url: String,
        url: String,
        full_url: String,
        has_uploadedgitrepotar: bool,
    }
}

model! {
    pub struct WorkspaceStatus {
        frozen: bool,
        frozen_at: DateTime<Utc>,
        frozen_by: String,
        locked: bool,
        locked_by: String,
        locked_time: DateTime<Utc>,
    }
}

model! {
    pub struct WorkspaceStatusMessage {
        status_code: String,
        status_msg: String,
    }
}

model! {
    /// Engine run details of one template
    pub struct TemplateRunTimeData {
        id: String,
        engine_cmd: String,
        engine_name: String,
        engine_version: String,
        log_store_url: String,
        output_values: Vec<serde_json::Value>,
        resources: Vec<serde_json::Value>,
        state_store_url: String,
    }
}

model! {
    /// Body of workspace create, replace and update calls
    pub struct WorkspaceRequest {
        applied_shareddata_ids: Vec<String>,
        catalog_ref: CatalogRef,
        description: String,
        location: String,
        name: String,
        resource_group: String,
        shared_data: SharedTargetData,
        tags: Vec<String>,
        template_data: Vec<TemplateSourceDataRequest>,
        template_ref: String,
        template_repo: TemplateRepo,
        #[serde(rename = "type")]
        kind: Vec<String>,
        workspace_status: WorkspaceStatus,
    }
}

model! {
    pub struct WorkspaceResponse {
        id: String,
        crn: String,
        name: String,
        description: String,
        location: String,
        resource_group: String,
        tags: Vec<String>,
        applied_shareddata_ids: Vec<String>,
        catalog_ref: CatalogRef,
        shared_data: SharedTargetData,
        template_data: Vec<TemplateSourceDataResponse>,
        template_ref: String,
        template_repo: TemplateRepo,
        #[serde(rename = "type")]
        kind: Vec<String>,
        runtime_data: Vec<TemplateRunTimeData>,
        workspace_status: WorkspaceStatus,
        workspace_status_msg: WorkspaceStatusMessage,
        status: String,
        created_at: DateTime<Utc>,
        created_by: String,
        updated_at: DateTime<Utc>,
        updated_by: String,
        last_health_check_at: DateTime<Utc>,
    }
}

model! {
    /// Body of the replace-template-inputs call
    pub struct TemplateInputsRequest {
        env_values: Vec<RawMap>,
        values: String,
        variablestore: Vec<WorkspaceVariable>,
    }
}
