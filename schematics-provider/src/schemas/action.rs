//! Action schema definitions

use schematics_core::schema::{AttributeSchema, AttributeType, BlockSchema, ResourceSchema, types};

use super::variables::{bastion, credential, user_state, variable};
use super::{ACTION, block, lookup_schema, string, string_fields};
use crate::validation::{action_name, action_source_type};

fn git_source() -> BlockSchema {
    string_fields(&[
        "computed_git_repo_url",
        "git_repo_url",
        "git_repo_folder",
        "git_release",
        "git_branch",
    ])
    .attribute(string("git_token").sensitive())
}

fn catalog_source() -> BlockSchema {
    string_fields(&[
        "catalog_name",
        "offering_name",
        "offering_version",
        "offering_kind",
        "offering_id",
        "offering_version_id",
        "offering_repo_url",
    ])
}

fn external_source() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::new("source_type", action_source_type())
                .required()
                .with_description("Type of source for the Template."),
        )
        .attribute(
            block("git", git_source())
                .max_items(1)
                .with_description("Connection details to Git source."),
        )
        .attribute(
            block("catalog", catalog_source())
                .max_items(1)
                .with_description("Connection details to IBM Cloud Catalog source."),
        )
}

fn action_state() -> BlockSchema {
    string_fields(&["status_code", "status_job_id", "status_message"])
}

fn sys_lock() -> BlockSchema {
    string_fields(&["sys_locked_by", "sys_locked_at"])
        .attribute(AttributeSchema::new("sys_locked", AttributeType::Bool))
}

/// Returns the schema for `ibm_schematics_action`
pub fn action_schema() -> ResourceSchema {
    ResourceSchema::new(ACTION)
        .with_description("A Schematics action running Ansible playbooks against an inventory.")
        .attribute(
            AttributeSchema::new("name", action_name())
                .required()
                .with_description("The unique name of your action. The name can be up to 128 characters long and can include alphanumeric characters, spaces, dashes, and underscores."),
        )
        .attribute(string("description").with_description("Action description."))
        .attribute(
            string("location")
                .optional_computed()
                .with_description("List of locations supported by IBM Cloud Schematics service."),
        )
        .attribute(
            string("resource_group")
                .with_description("Resource-group name for an action. By default, action is created in default resource group."),
        )
        .attribute(
            AttributeSchema::new("tags", types::string_list())
                .with_description("Action tags."),
        )
        .attribute(
            block("user_state", user_state())
                .max_items(1)
                .optional_computed()
                .with_description("User defined status of the Schematics object."),
        )
        .attribute(
            string("source_readme_url")
                .with_description("URL of the `README` file, for the source URL."),
        )
        .attribute(
            block("source", external_source())
                .max_items(1)
                .with_description("Source of templates, playbooks, or controls."),
        )
        .attribute(
            AttributeSchema::new("source_type", action_source_type())
                .with_description("Type of source for the Template."),
        )
        .attribute(
            string("command_parameter")
                .with_description("Schematics job command parameter (playbook-name)."),
        )
        .attribute(
            string("inventory")
                .with_description("Target inventory record ID, used by the action or ansible playbook."),
        )
        .attribute(
            block("credentials", credential())
                .with_description("credentials of the Action."),
        )
        .attribute(
            block("bastion", bastion())
                .max_items(1)
                .with_description("Describes a bastion resource."),
        )
        .attribute(
            block("bastion_credential", credential())
                .max_items(1)
                .with_description("User editable variable data & system generated reference to value."),
        )
        .attribute(
            string("targets_ini")
                .with_description("Inventory of host and host group for the playbook in `INI` file format."),
        )
        .attribute(
            block("action_inputs", variable())
                .with_description("Input variables for the Action."),
        )
        .attribute(
            block("action_outputs", variable())
                .with_description("Output variables for the Action."),
        )
        .attribute(
            block("settings", variable())
                .with_description("Environment variables for the Action."),
        )
        .attribute(
            string("x_github_token")
                .sensitive()
                .with_description("The personal access token to authenticate with your private GitHub or GitLab repository."),
        )
        .attribute(
            block("state", action_state())
                .computed()
                .with_description("Computed state of the Action."),
        )
        .attribute(
            block("sys_lock", sys_lock())
                .computed()
                .with_description("System lock status."),
        )
        .attribute(string("crn").computed().with_description("Action Cloud Resource Name."))
        .attribute(string("account").computed().with_description("Action account ID."))
        .attribute(
            string("source_created_at")
                .computed()
                .with_description("Action Playbook Source creation time."),
        )
        .attribute(
            string("source_created_by")
                .computed()
                .with_description("E-mail address of user who created the Action Playbook Source."),
        )
        .attribute(
            string("source_updated_at")
                .computed()
                .with_description("The action playbook updation time."),
        )
        .attribute(
            string("source_updated_by")
                .computed()
                .with_description("E-mail address of user who updated the action playbook source."),
        )
        .attribute(string("created_at").computed().with_description("Action creation time."))
        .attribute(
            string("created_by")
                .computed()
                .with_description("E-mail address of the user who created an action."),
        )
        .attribute(string("updated_at").computed().with_description("Action updation time."))
        .attribute(
            string("updated_by")
                .computed()
                .with_description("E-mail address of the user who updated an action."),
        )
        .attribute(
            AttributeSchema::new("playbook_names", types::string_list())
                .computed()
                .with_description("Playbook names retrieved from the repository."),
        )
}

/// Returns the schema for the `ibm_schematics_action` data source
pub fn action_data_source_schema() -> ResourceSchema {
    lookup_schema(action_schema(), "action_id", &["x_github_token"])
}
