use chrono::{DateTime, Utc};

use super::{RawMap, UserState, VariableData};

model! {
    /// Where and how the agent runs in the user's environment
    pub struct AgentInfrastructure {
        infra_type: String,
        cluster_id: String,
        cluster_resource_group: String,
        cos_instance_name: String,
        cos_bucket_name: String,
        cos_bucket_region: String,
    }
}

model! {
    pub struct AgentMetadataInfo {
        name: String,
        value: Vec<String>,
    }
}

model! {
    pub struct AgentKpiData {
        availability_indicator: String,
        lifecycle_indicator: String,
        percent_usage_indicator: String,
        application_indicators: Vec<RawMap>,
        infra_indicators: Vec<RawMap>,
    }
}

model! {
    pub struct AgentSystemStatus {
        status_code: String,
        status_message: String,
    }
}

model! {
    /// Most recent job of one kind run against the agent
    pub struct AgentRecentJob {
        agent_id: String,
        job_id: String,
        updated_at: DateTime<Utc>,
        updated_by: String,
        is_redeployed: bool,
        agent_version: String,
        status_code: String,
        status_message: String,
        log_url: String,
    }
}

model! {
    /// Agent as returned by the service and sent on create and update
    pub struct AgentData {
        id: String,
        agent_crn: String,
        name: String,
        description: String,
        resource_group: String,
        tags: Vec<String>,
        version: String,
        schematics_location: String,
        agent_location: String,
        agent_infrastructure: AgentInfrastructure,
        agent_metadata: Vec<AgentMetadataInfo>,
        agent_inputs: Vec<VariableData>,
        user_state: UserState,
        agent_kpi: AgentKpiData,
        system_state: AgentSystemStatus,
        recent_prs_job: AgentRecentJob,
        recent_deploy_job: AgentRecentJob,
        recent_health_job: AgentRecentJob,
        recent_destroy_job: AgentRecentJob,
        created_at: DateTime<Utc>,
        creation_by: String,
        updated_at: DateTime<Utc>,
        updated_by: String,
    }
}

impl AgentData {
    /// Status code of the latest destroy-resources job, empty when unknown.
    pub fn destroy_status(&self) -> Option<&str> {
        self.recent_destroy_job
            .as_ref()
            .and_then(|job| job.status_code.as_deref())
    }
}
