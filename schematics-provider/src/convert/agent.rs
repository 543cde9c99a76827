use super::convert;
use crate::models::{
    AgentData, AgentInfrastructure, AgentKpiData, AgentMetadataInfo, AgentRecentJob,
    AgentSystemStatus,
};

convert! {
    AgentInfrastructure {
        "infra_type" => infra_type,
        "cluster_id" => cluster_id,
        "cluster_resource_group" => cluster_resource_group,
        "cos_instance_name" => cos_instance_name,
        "cos_bucket_name" => cos_bucket_name,
        "cos_bucket_region" => cos_bucket_region,
    }
}

convert! {
    AgentMetadataInfo {
        "name" => name,
        "value" => value,
    }
}

convert! {
    AgentKpiData {
        "availability_indicator" => availability_indicator,
        "lifecycle_indicator" => lifecycle_indicator,
        "percent_usage_indicator" => percent_usage_indicator,
        "application_indicators" => application_indicators: json,
        "infra_indicators" => infra_indicators: json,
    }
}

convert! {
    AgentSystemStatus {
        "status_code" => status_code,
        "status_message" => status_message,
    }
}

convert! {
    AgentRecentJob {}
    computed {
        "agent_id" => agent_id,
        "job_id" => job_id,
        "updated_at" => updated_at,
        "updated_by" => updated_by,
        "is_redeployed" => is_redeployed,
        "agent_version" => agent_version,
        "status_code" => status_code,
        "status_message" => status_message,
        "log_url" => log_url,
    }
}

convert! {
    AgentData {
        "name" => name,
        "description" => description,
        "resource_group" => resource_group,
        "tags" => tags,
        "version" => version,
        "schematics_location" => schematics_location,
        "agent_location" => agent_location,
        "agent_infrastructure" => agent_infrastructure: block,
        "agent_metadata" => agent_metadata: blocks,
        "agent_inputs" => agent_inputs: blocks,
        "user_state" => user_state: block,
    }
    computed {
        "agent_crn" => agent_crn,
        "agent_kpi" => agent_kpi: block,
        "system_state" => system_state: block,
        "recent_prs_job" => recent_prs_job: block,
        "recent_deploy_job" => recent_deploy_job: block,
        "recent_health_job" => recent_health_job: block,
        "created_at" => created_at,
        "creation_by" => creation_by,
        "updated_at" => updated_at,
        "updated_by" => updated_by,
    }
}
