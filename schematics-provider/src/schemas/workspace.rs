//! Workspace schema definitions

use schematics_core::schema::{AttributeSchema, AttributeType, BlockSchema, ResourceSchema, types};

use super::{WORKSPACE, block, lookup_schema, string, string_fields};
use crate::validation::{template_type, workspace_description, workspace_name};

fn catalog_ref() -> BlockSchema {
    string_fields(&[
        "owning_account",
        "item_icon_url",
        "item_id",
        "item_name",
        "item_readme_url",
        "item_url",
        "launch_url",
        "offering_version",
    ])
    .attribute(
        AttributeSchema::new("dry_run", AttributeType::Bool)
            .with_description("Dry run."),
    )
}

fn shared_data() -> BlockSchema {
    string_fields(&[
        "cluster_created_on",
        "cluster_id",
        "cluster_name",
        "cluster_type",
        "namespace",
        "region",
        "resource_group_id",
        "worker_machine_type",
    ])
    .attribute(
        AttributeSchema::new("entitlement_keys", types::string_map_list())
            .with_description("The entitlement key that is used to deploy the cluster."),
    )
    .attribute(
        AttributeSchema::new("worker_count", types::non_negative_int())
            .with_description("The number of worker nodes in the cluster."),
    )
}

fn template_input() -> BlockSchema {
    BlockSchema::new()
        .attribute(string("name").required().with_description("The name of the variable."))
        .attribute(
            string("value")
                .required()
                .with_description("Enter the value as a string for the primitive types such as bool, number, string, and HCL format for the complex variables."),
        )
        .attribute(
            string("type")
                .required()
                .with_description("Terraform v0.12 supports string, list, map data type."),
        )
        .attribute(
            string("description")
                .with_description("The description of your input variable."),
        )
        .attribute(
            AttributeSchema::new("secure", AttributeType::Bool)
                .with_description("If set to `true`, the value of your input variable is protected and not returned in your API or UI."),
        )
        .attribute(
            AttributeSchema::new("use_default", AttributeType::Bool)
                .with_description("Variable uses default value; and is not overridden."),
        )
}

fn values_metadata() -> BlockSchema {
    let computed = |attr: AttributeSchema| attr.computed();
    let mut fields = BlockSchema::new();
    for name in [
        "name",
        "type",
        "description",
        "cloud_data_type",
        "default",
        "link_status",
        "matches",
        "group_by",
        "source",
    ] {
        fields = fields.attribute(computed(string(name)));
    }
    for name in ["secure", "immutable", "hidden", "required"] {
        fields = fields.attribute(computed(AttributeSchema::new(name, AttributeType::Bool)));
    }
    for name in ["min_value", "max_value", "min_length", "max_length", "position"] {
        fields = fields.attribute(computed(AttributeSchema::new(name, AttributeType::Int)));
    }
    for name in ["aliases", "options"] {
        fields = fields.attribute(computed(AttributeSchema::new(name, types::string_list())));
    }
    fields
}

fn runtime_data() -> BlockSchema {
    string_fields(&[
        "engine_cmd",
        "engine_name",
        "engine_version",
        "id",
        "log_store_url",
        "state_store_url",
    ])
    .attribute(AttributeSchema::new("output_values", types::string_map_list()))
    .attribute(AttributeSchema::new("resources", types::string_map_list()))
}

/// Returns the schema for `ibm_schematics_workspace`
pub fn workspace_schema() -> ResourceSchema {
    ResourceSchema::new(WORKSPACE)
        .with_description("A Schematics workspace running Terraform templates.")
        .attribute(
            AttributeSchema::new("name", workspace_name())
                .required()
                .with_description("The name of your workspace."),
        )
        .attribute(
            AttributeSchema::new("description", workspace_description())
                .with_description("The description of the workspace."),
        )
        .attribute(
            string("location")
                .optional_computed()
                .with_description("The location where you want to create your Schematics workspace and run the Schematics jobs."),
        )
        .attribute(
            string("resource_group")
                .with_description("The ID of the resource group where you want to provision the workspace."),
        )
        .attribute(
            AttributeSchema::new("tags", types::string_list())
                .with_description("A list of tags that are associated with the workspace."),
        )
        .attribute(
            AttributeSchema::new("applied_shareddata_ids", types::string_list())
                .with_description("List of applied shared dataset ID."),
        )
        .attribute(
            block("catalog_ref", catalog_ref())
                .max_items(1)
                .with_description("Information about the software template that you chose from the IBM Cloud catalog."),
        )
        .attribute(
            block("shared_data", shared_data())
                .max_items(1)
                .with_description("Information that is shared across templates in IBM Cloud catalog offerings."),
        )
        .attribute(
            AttributeSchema::new("template_env_settings", types::string_map_list())
                .with_description("A list of environment variables that you want to apply during the execution of a bash script or Terraform job."),
        )
        .attribute(
            string("template_git_folder")
                .with_description("The subfolder in your GitHub or GitLab repository where your Terraform template is stored."),
        )
        .attribute(
            string("template_init_state_file")
                .with_description("The content of an existing Terraform statefile that you want to import in to your workspace."),
        )
        .attribute(
            AttributeSchema::new("template_type", template_type())
                .required()
                .with_description("The Terraform version that you want to use to run your Terraform code."),
        )
        .attribute(
            string("template_uninstall_script_name")
                .with_description("Uninstall script name."),
        )
        .attribute(
            string("template_values")
                .with_description("A list of variable values that you want to apply during the Helm chart installation."),
        )
        .attribute(
            block("template_values_metadata", values_metadata())
                .optional_computed()
                .with_description("List of values metadata."),
        )
        .attribute(
            block("template_inputs", template_input())
                .with_description("VariablesRequest -."),
        )
        .attribute(string("template_ref").with_description("Workspace template ref."))
        .attribute(string("template_git_branch").with_description("The repository branch."))
        .attribute(string("template_git_release").with_description("The repository release."))
        .attribute(
            string("template_git_repo_sha_value")
                .with_description("The repository SHA value."),
        )
        .attribute(string("template_git_repo_url").with_description("The repository URL."))
        .attribute(string("template_git_url").with_description("The source URL."))
        .attribute(
            AttributeSchema::new("template_git_has_uploadedgitrepotar", AttributeType::Bool)
                .optional_computed()
                .with_description("Has uploaded git repo tar."),
        )
        .attribute(
            AttributeSchema::new("frozen", AttributeType::Bool)
                .with_description("If set to true, the workspace is frozen and changes to the workspace are disabled."),
        )
        .attribute(
            string("frozen_at")
                .optional_computed()
                .with_description("The timestamp when the workspace was frozen."),
        )
        .attribute(
            string("frozen_by")
                .optional_computed()
                .with_description("The user ID that froze the workspace."),
        )
        .attribute(
            AttributeSchema::new("locked", AttributeType::Bool)
                .optional_computed()
                .with_description("If set to true, the workspace is locked and disabled for changes."),
        )
        .attribute(
            string("locked_by")
                .optional_computed()
                .with_description("The user ID that initiated a resource-related job, such as applying or destroying resources, that locked the workspace."),
        )
        .attribute(
            string("locked_time")
                .optional_computed()
                .with_description("The timestamp when the workspace was locked."),
        )
        .attribute(
            string("x_github_token")
                .sensitive()
                .with_description("The personal access token to authenticate with your private GitHub or GitLab repository and access your Terraform template."),
        )
        .attribute(string("crn").computed().with_description("The workspace CRN."))
        .attribute(
            string("created_at")
                .computed()
                .with_description("The timestamp when the workspace was created."),
        )
        .attribute(
            string("created_by")
                .computed()
                .with_description("The user ID that created the workspace."),
        )
        .attribute(
            string("last_health_check_at")
                .computed()
                .with_description("The timestamp when the last health check was performed by Schematics."),
        )
        .attribute(
            block("runtime_data", runtime_data())
                .computed()
                .with_description("Information about the provisioning engine, state file, and runtime logs."),
        )
        .attribute(string("status").computed().with_description("The status of the workspace."))
        .attribute(
            string("updated_at")
                .computed()
                .with_description("The timestamp when the workspace was last updated."),
        )
        .attribute(
            string("updated_by")
                .computed()
                .with_description("The user ID that updated the workspace."),
        )
        .attribute(
            string("status_code")
                .computed()
                .with_description("The success or error code that was returned for the last plan, apply, or destroy job that ran against your workspace."),
        )
        .attribute(
            string("status_msg")
                .computed()
                .with_description("The success or error message that was returned for the last plan, apply, or destroy job that ran against your workspace."),
        )
}

/// Returns the schema for the `ibm_schematics_workspace` data source
pub fn workspace_data_source_schema() -> ResourceSchema {
    lookup_schema(workspace_schema(), "workspace_id", &["x_github_token"])
        .attribute(
            string("template_git_full_url")
                .computed()
                .with_description("Full repository URL."),
        )
        .attribute(
            AttributeSchema::new("is_frozen", AttributeType::Bool)
                .computed()
                .deprecated("use frozen instead"),
        )
        .attribute(
            AttributeSchema::new("is_locked", AttributeType::Bool)
                .computed()
                .deprecated("use locked instead"),
        )
}
