use chrono::{DateTime, Utc};

use super::{
    ActionState, BastionResourceDefinition, CredentialVariableData, ExternalSource, SystemLock,
    UserState, VariableData,
};

model! {
    /// Ansible action, used both as request body and as response
    pub struct Action {
        id: String,
        crn: String,
        account: String,
        name: String,
        description: String,
        location: String,
        resource_group: String,
        tags: Vec<String>,
        user_state: UserState,
        source_readme_url: String,
        source: ExternalSource,
        source_type: String,
        command_parameter: String,
        inventory: String,
        credentials: Vec<CredentialVariableData>,
        bastion: BastionResourceDefinition,
        bastion_credential: CredentialVariableData,
        targets_ini: String,
        inputs: Vec<VariableData>,
        outputs: Vec<VariableData>,
        settings: Vec<VariableData>,
        state: ActionState,
        playbook_names: Vec<String>,
        sys_lock: SystemLock,
        source_created_at: DateTime<Utc>,
        source_created_by: String,
        source_updated_at: DateTime<Utc>,
        source_updated_by: String,
        created_at: DateTime<Utc>,
        created_by: String,
        updated_at: DateTime<Utc>,
        updated_by: String,
    }
}

