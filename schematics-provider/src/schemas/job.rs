//! Job schema definitions
//!
//! `status`, `data` and `log_summary` are reported by the service and are
//! declared read-only.

use schematics_core::schema::{AttributeSchema, AttributeType, BlockSchema, ResourceSchema, types};

use super::variables::{bastion, variable};
use super::{JOB, block, float_fields, lookup_schema, string, string_fields};
use crate::validation::{job_command_name, job_command_object, job_location};

fn status_block() -> BlockSchema {
    let template = string_fields(&[
        "template_id",
        "template_name",
        "status_code",
        "status_message",
        "updated_at",
    ])
    .attribute(AttributeSchema::new("flow_index", AttributeType::Int));
    let workitem = string_fields(&[
        "workspace_id",
        "workspace_name",
        "job_id",
        "status_code",
        "status_message",
        "updated_at",
    ]);
    let flow = string_fields(&[
        "flow_id",
        "flow_name",
        "status_code",
        "status_message",
        "updated_at",
    ])
    .attribute(block("workitems", workitem));
    let workspace = string_fields(&[
        "workspace_name",
        "status_code",
        "status_message",
        "updated_at",
    ])
    .attribute(block("flow_status", flow.clone()).max_items(1))
    .attribute(block("template_status", template));
    let action = string_fields(&[
        "action_name",
        "status_code",
        "status_message",
        "bastion_status_code",
        "bastion_status_message",
        "targets_status_code",
        "targets_status_message",
        "updated_at",
    ]);
    let resource_status = string_fields(&[
        "status_code",
        "status_message",
        "schematics_resource_id",
        "updated_at",
    ]);
    let system = string_fields(&["system_status_message", "system_status_code", "updated_at"])
        .attribute(block("schematics_resource_status", resource_status));

    BlockSchema::new()
        .attribute(block("workspace_job_status", workspace).max_items(1))
        .attribute(block("action_job_status", action).max_items(1))
        .attribute(block("system_job_status", system).max_items(1))
        .attribute(block("flow_job_status", flow).max_items(1))
}

fn with_variables(fields: BlockSchema) -> BlockSchema {
    fields
        .attribute(block("inputs", variable()))
        .attribute(block("outputs", variable()))
        .attribute(block("settings", variable()))
}

fn data_block() -> BlockSchema {
    let template = with_variables(
        string_fields(&["template_id", "template_name", "updated_at"])
            .attribute(AttributeSchema::new("flow_index", AttributeType::Int)),
    );
    let workspace = with_variables(string_fields(&[
        "workspace_name",
        "flow_id",
        "flow_name",
        "updated_at",
    ]))
    .attribute(block("template_data", template));
    let inventory = string_fields(&[
        "name",
        "id",
        "description",
        "location",
        "resource_group",
        "created_at",
        "created_by",
        "updated_at",
        "updated_by",
        "inventories_ini",
    ])
    .attribute(AttributeSchema::new("resource_queries", types::string_list()));
    let action = with_variables(string_fields(&[
        "action_name",
        "updated_at",
        "materialized_inventory",
    ]))
    .attribute(block("inventory_record", inventory).max_items(1));
    let system = string_fields(&["key_id", "updated_at"])
        .attribute(AttributeSchema::new("schematics_resource_id", types::string_list()));
    let last_job = string_fields(&[
        "command_object",
        "command_object_name",
        "command_object_id",
        "command_name",
        "job_id",
        "job_status",
    ]);
    let source = string_fields(&["source_type"])
        .attribute(block("git", string_fields(&[
            "computed_git_repo_url",
            "git_repo_url",
            "git_token",
            "git_repo_folder",
            "git_release",
            "git_branch",
        ])).max_items(1))
        .attribute(block("catalog", string_fields(&[
            "catalog_name",
            "offering_name",
            "offering_version",
            "offering_kind",
            "offering_id",
            "offering_version_id",
            "offering_repo_url",
        ])).max_items(1));
    let workitem = with_variables(string_fields(&[
        "command_object_id",
        "command_object_name",
        "layers",
        "source_type",
        "updated_at",
    ]))
    .attribute(block("source", source).max_items(1))
    .attribute(block("last_job", last_job).max_items(1));
    let flow = string_fields(&["flow_id", "flow_name", "updated_at"])
        .attribute(block("workitems", workitem));

    string_fields(&["job_type"])
        .attribute(block("workspace_job_data", workspace).max_items(1))
        .attribute(block("action_job_data", action).max_items(1))
        .attribute(block("system_job_data", system).max_items(1))
        .attribute(block("flow_job_data", flow).max_items(1))
}

fn log_summary_block() -> BlockSchema {
    let log_errors = string_fields(&["error_code", "error_msg"])
        .attribute(AttributeSchema::new("error_count", AttributeType::Float));
    let repo_download = float_fields(&["scanned_file_count", "quarantined_file_count"])
        .attribute(string("detected_filetype"))
        .attribute(string("inputs_count"))
        .attribute(string("outputs_count"));
    let workspace = float_fields(&["resources_add", "resources_modify", "resources_destroy"]);
    let workitems = float_fields(&["resources_add", "resources_modify", "resources_destroy"])
        .attribute(string("workspace_id"))
        .attribute(string("job_id"))
        .attribute(string("log_url"));
    let flow = float_fields(&["workitems_completed", "workitems_pending", "workitems_failed"])
        .attribute(block("workitems", workitems));
    let recap = float_fields(&["ok", "changed", "failed", "skipped", "unreachable"])
        .attribute(AttributeSchema::new("target", types::string_list()));
    let action = float_fields(&["target_count", "task_count", "play_count"])
        .attribute(block("recap", recap).max_items(1));
    let system = float_fields(&["target_count", "success", "failed"]);

    string_fields(&["job_id", "job_type", "log_start_at", "log_analyzed_till"])
        .attribute(AttributeSchema::new("elapsed_time", AttributeType::Float))
        .attribute(block("log_errors", log_errors))
        .attribute(block("repo_download_job", repo_download).max_items(1))
        .attribute(block("workspace_job", workspace).max_items(1))
        .attribute(block("flow_job", flow).max_items(1))
        .attribute(block("action_job", action).max_items(1))
        .attribute(block("system_job", system).max_items(1))
}

/// Returns the schema for `ibm_schematics_job`
pub fn job_schema() -> ResourceSchema {
    ResourceSchema::new(JOB)
        .with_description("A Schematics job running a command against a workspace, action or the system.")
        .attribute(
            AttributeSchema::new("command_object", job_command_object())
                .required()
                .with_description("Name of the Schematics automation resource."),
        )
        .attribute(
            string("command_object_id")
                .required()
                .with_description("Job command object id (workspace-id, action-id)."),
        )
        .attribute(
            AttributeSchema::new("command_name", job_command_name())
                .required()
                .with_description("Schematics job command name."),
        )
        .attribute(
            string("command_parameter")
                .with_description("Schematics job command parameter (playbook-name)."),
        )
        .attribute(
            AttributeSchema::new("command_options", types::string_list())
                .with_description("Command line options for the command."),
        )
        .attribute(
            block("job_inputs", variable())
                .with_description("Job inputs used by Action or Workspace."),
        )
        .attribute(
            block("job_env_settings", variable())
                .with_description("Environment variables used by the Job while performing Action or Workspace."),
        )
        .attribute(
            AttributeSchema::new("tags", types::string_list())
                .with_description("User defined tags, while running the job."),
        )
        .attribute(
            AttributeSchema::new("location", job_location())
                .optional_computed()
                .with_description("List of locations supported by IBM Cloud Schematics service."),
        )
        .attribute(
            block("bastion", bastion())
                .max_items(1)
                .with_description("Describes a bastion resource."),
        )
        .attribute(
            block("status", status_block())
                .computed()
                .max_items(1)
                .with_description("Job Status."),
        )
        .attribute(
            block("data", data_block())
                .computed()
                .max_items(1)
                .with_description("Job data."),
        )
        .attribute(
            block("log_summary", log_summary_block())
                .computed()
                .max_items(1)
                .with_description("Job log summary record."),
        )
        .attribute(
            string("name")
                .computed()
                .with_description("Job name, uniquely derived from the related Workspace or Action."),
        )
        .attribute(
            string("description")
                .computed()
                .with_description("The description of your job is derived from the related action or workspace."),
        )
        .attribute(
            string("resource_group")
                .computed()
                .with_description("Resource-group name derived from the related Workspace or Action."),
        )
        .attribute(string("submitted_at").computed().with_description("Job submission time."))
        .attribute(
            string("submitted_by")
                .computed()
                .with_description("E-mail address of the user who submitted the job."),
        )
        .attribute(string("start_at").computed().with_description("Job start time."))
        .attribute(string("end_at").computed().with_description("Job end time."))
        .attribute(
            string("duration")
                .computed()
                .with_description("Duration of job execution; example 40 sec."),
        )
        .attribute(string("log_store_url").computed().with_description("Job log store URL."))
        .attribute(string("state_store_url").computed().with_description("Job state store URL."))
        .attribute(string("results_url").computed().with_description("Job results store URL."))
        .attribute(
            string("updated_at")
                .computed()
                .with_description("Job status updation timestamp."),
        )
}

/// Returns the schema for the `ibm_schematics_job` data source
pub fn job_data_source_schema() -> ResourceSchema {
    lookup_schema(job_schema(), "job_id", &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use schematics_core::resource::Value;
    use std::collections::HashMap;

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    fn job(command_name: &str, location: &str) -> HashMap<String, Value> {
        HashMap::from([
            ("command_object".to_string(), s("workspace")),
            ("command_object_id".to_string(), s("us-south.workspace.demo.1a2b")),
            ("command_name".to_string(), s(command_name)),
            ("location".to_string(), s(location)),
        ])
    }

    #[test]
    fn command_and_location_are_checked() {
        assert!(job_schema().validate(&job("workspace_plan", "us-south")).is_ok());
        assert_eq!(
            job_schema()
                .validate(&job("workspace_import", "jp-tok"))
                .unwrap_err()
                .len(),
            2
        );
    }

    #[test]
    fn status_is_read_only() {
        let mut attrs = job("workspace_plan", "us-south");
        attrs.insert("status".to_string(), Value::List(vec![]));
        assert!(job_schema().validate(&attrs).is_err());
    }
}
