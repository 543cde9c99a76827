use chrono::{DateTime, Utc};

model! {
    /// Constraints and presentation hints for a variable
    pub struct VariableMetadata {
        #[serde(rename = "type")]
        kind: String,
        aliases: Vec<String>,
        description: String,
        cloud_data_type: String,
        default_value: String,
        link_status: String,
        secure: bool,
        immutable: bool,
        hidden: bool,
        required: bool,
        options: Vec<String>,
        min_value: i64,
        max_value: i64,
        min_length: i64,
        max_length: i64,
        matches: String,
        position: i64,
        group_by: String,
        source: String,
    }
}

model! {
    /// Input, output or setting of an action, agent or job
    pub struct VariableData {
        name: String,
        value: String,
        use_default: bool,
        metadata: VariableMetadata,
        link: String,
    }
}

model! {
    pub struct CredentialVariableMetadata {
        #[serde(rename = "type")]
        kind: String,
        aliases: Vec<String>,
        description: String,
        default_value: String,
        immutable: bool,
        hidden: bool,
        position: i64,
        group_by: String,
        source: String,
    }
}

model! {
    pub struct CredentialVariableData {
        name: String,
        value: String,
        use_default: bool,
        metadata: CredentialVariableMetadata,
        link: String,
    }
}

model! {
    /// Jump host used to reach targets
    pub struct BastionResourceDefinition {
        name: String,
        host: String,
    }
}

model! {
    pub struct GitSource {
        computed_git_repo_url: String,
        git_repo_url: String,
        git_token: String,
        git_repo_folder: String,
        git_release: String,
        git_branch: String,
    }
}

model! {
    pub struct CatalogSource {
        catalog_name: String,
        offering_name: String,
        offering_version: String,
        offering_kind: String,
        offering_id: String,
        offering_version_id: String,
        offering_repo_url: String,
    }
}

model! {
    /// Where an action or work item takes its template from
    pub struct ExternalSource {
        source_type: String,
        git: GitSource,
        catalog: CatalogSource,
    }
}

model! {
    /// User-defined state of an action or agent
    pub struct UserState {
        state: String,
        set_by: String,
        set_at: DateTime<Utc>,
    }
}

model! {
    pub struct SystemLock {
        sys_locked: bool,
        sys_locked_by: String,
        sys_locked_at: DateTime<Utc>,
    }
}

model! {
    pub struct ActionState {
        status_code: String,
        status_job_id: String,
        status_message: String,
    }
}
