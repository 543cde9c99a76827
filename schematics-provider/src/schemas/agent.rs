//! Agent schema definitions

use schematics_core::schema::{AttributeSchema, AttributeType, BlockSchema, ResourceSchema, types};

use super::variables::{user_state, variable};
use super::{AGENT, block, lookup_schema, string, string_fields};

fn infrastructure() -> BlockSchema {
    string_fields(&[
        "infra_type",
        "cluster_id",
        "cluster_resource_group",
        "cos_instance_name",
        "cos_bucket_name",
        "cos_bucket_region",
    ])
}

fn metadata() -> BlockSchema {
    BlockSchema::new()
        .attribute(string("name").with_description("Name of the metadata."))
        .attribute(
            AttributeSchema::new("value", types::string_list())
                .with_description("Value of the metadata name."),
        )
}

fn kpi() -> BlockSchema {
    string_fields(&[
        "availability_indicator",
        "lifecycle_indicator",
        "percent_usage_indicator",
    ])
    .attribute(AttributeSchema::new("application_indicators", types::string_map_list()))
    .attribute(AttributeSchema::new("infra_indicators", types::string_map_list()))
}

fn recent_job(with_redeploy: bool) -> BlockSchema {
    let fields = string_fields(&[
        "agent_id",
        "job_id",
        "updated_at",
        "updated_by",
        "agent_version",
        "status_code",
        "status_message",
        "log_url",
    ]);
    if with_redeploy {
        fields.attribute(AttributeSchema::new("is_redeployed", AttributeType::Bool))
    } else {
        fields
    }
}

/// Returns the schema for `ibm_schematics_agent`
pub fn agent_schema() -> ResourceSchema {
    ResourceSchema::new(AGENT)
        .with_description("A Schematics agent deployed into the user's own infrastructure.")
        .attribute(
            string("name")
                .required()
                .with_description("The name of the agent (must be unique, for an account)."),
        )
        .attribute(
            string("resource_group")
                .required()
                .force_new()
                .with_description("The resource-group name for the agent.  By default, agent will be registered in Default Resource Group."),
        )
        .attribute(string("version").required().with_description("Agent version."))
        .attribute(
            string("schematics_location")
                .required()
                .with_description("List of locations supported by IBM Cloud Schematics service.  While creating your workspace or action, choose the right region, since it cannot be changed.  Note, this does not limit the location of the IBM Cloud resources, provisioned using Schematics."),
        )
        .attribute(
            string("agent_location")
                .required()
                .with_description("The location where agent is deployed in the user environment."),
        )
        .attribute(
            block("agent_infrastructure", infrastructure())
                .required()
                .max_items(1)
                .with_description("The infrastructure parameters used by the agent."),
        )
        .attribute(string("description").with_description("Agent description."))
        .attribute(
            AttributeSchema::new("tags", types::string_list())
                .with_description("Tags for the agent."),
        )
        .attribute(
            block("agent_metadata", metadata())
                .with_description("The metadata of an agent."),
        )
        .attribute(
            block("agent_inputs", variable())
                .with_description("Additional input variables for the agent."),
        )
        .attribute(
            block("user_state", user_state())
                .optional_computed()
                .force_new()
                .max_items(1)
                .with_description("User defined status of the agent."),
        )
        .attribute(
            AttributeSchema::new("run_destroy_resources", AttributeType::Int)
                .with_description("Argument which helps to run destroy resources job. Increment the value to destroy resources associated with agent deployment."),
        )
        .attribute(
            block("agent_kpi", kpi())
                .computed()
                .with_description("Schematics Agent key performance indicators."),
        )
        .attribute(
            block("system_state", string_fields(&["status_code", "status_message"]))
                .computed()
                .with_description("Computed state of the agent."),
        )
        .attribute(
            block("recent_prs_job", recent_job(false))
                .computed()
                .with_description("Run a pre-requisite scanner for deploying agent."),
        )
        .attribute(
            block("recent_deploy_job", recent_job(true))
                .computed()
                .with_description("Post-installations checks for Agent health."),
        )
        .attribute(
            block("recent_health_job", recent_job(false))
                .computed()
                .with_description("Agent health check."),
        )
        .attribute(
            string("agent_crn")
                .computed()
                .with_description("The agent crn, obtained from the Schematics agent deployment configuration."),
        )
        .attribute(
            string("created_at")
                .computed()
                .with_description("The agent creation date-time."),
        )
        .attribute(
            string("creation_by")
                .computed()
                .with_description("The email address of an user who created the agent."),
        )
        .attribute(
            string("updated_at")
                .computed()
                .with_description("The agent registration updation time."),
        )
        .attribute(
            string("updated_by")
                .computed()
                .with_description("Email address of user who updated the agent registration."),
        )
}

/// Returns the schema for the `ibm_schematics_agent` data source
pub fn agent_data_source_schema() -> ResourceSchema {
    lookup_schema(agent_schema(), "agent_id", &["run_destroy_resources"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use schematics_core::resource::Value;
    use schematics_core::schema::TypeError;
    use std::collections::HashMap;

    #[test]
    fn infrastructure_is_required() {
        let attrs: HashMap<String, Value> = [
            "name",
            "resource_group",
            "version",
            "schematics_location",
            "agent_location",
        ]
        .into_iter()
        .map(|k| (k.to_string(), Value::String("x".to_string())))
        .collect();

        let errors = agent_schema().validate(&attrs).unwrap_err();
        assert!(matches!(
            &errors[..],
            [TypeError::MissingRequired { name }] if name == "agent_infrastructure"
        ));
    }

    #[test]
    fn resource_group_forces_replacement() {
        let schema = agent_schema();
        assert!(schema.get("resource_group").is_some_and(|a| a.force_new));
        assert!(!agent_data_source_schema().get("resource_group").is_some_and(|a| a.force_new));
    }
}
