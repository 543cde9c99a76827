//! Attribute types with value checks
//!
//! Each function returns an [`AttributeType::Custom`] whose validator runs
//! when a configuration is checked against its schema.

use std::sync::LazyLock;

use regex::Regex;
use schematics_core::resource::Value;
use schematics_core::schema::{AttributeType, validate_length};

static WORKSPACE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9\-_ ]*$").expect("valid regex"));

static TEMPLATE_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^terraform_v(?:1\.4|1\.5|1\.6|1\.7|1\.8|1\.9)(?:\.\d+)?$")
        .expect("valid regex")
});

pub const ACTION_SOURCE_TYPES: &[&str] = &[
    "cos_bucket",
    "external_scm",
    "git_hub",
    "git_hub_enterprise",
    "git_lab",
    "ibm_schematics_action_catalog",
    "ibm_git_lab",
    "local",
];

pub const JOB_COMMAND_OBJECTS: &[&str] = &["action", "environment", "system", "workspace"];

pub const JOB_COMMAND_NAMES: &[&str] = &[
    "ansible_playbook_check",
    "ansible_playbook_run",
    "create_action",
    "create_cart",
    "create_environment",
    "create_workspace",
    "delete_action",
    "delete_environment",
    "delete_workspace",
    "environment_init",
    "environment_install",
    "environment_uninstall",
    "patch_action",
    "patch_workspace",
    "put_action",
    "put_environment",
    "put_workspace",
    "repository_process",
    "system_key_delete",
    "system_key_disable",
    "system_key_enable",
    "system_key_restore",
    "system_key_rotate",
    "workspace_apply",
    "workspace_destroy",
    "workspace_plan",
    "workspace_refresh",
];

pub const JOB_LOCATIONS: &[&str] = &["eu-de", "eu-gb", "us-east", "us-south"];

fn string_of(value: &Value) -> Result<&str, String> {
    value.as_str().ok_or_else(|| "Expected string".to_string())
}

fn one_of(s: &str, allowed: &[&str], what: &str) -> Result<(), String> {
    if allowed.contains(&s) {
        Ok(())
    } else {
        Err(format!(
            "Invalid {} '{}', expected one of: {}",
            what,
            s,
            allowed.join(", ")
        ))
    }
}

pub fn workspace_name() -> AttributeType {
    AttributeType::Custom {
        name: "WorkspaceName".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| {
            let s = string_of(value)?;
            validate_length(s, 1, 128)?;
            if WORKSPACE_NAME.is_match(s) {
                Ok(())
            } else {
                Err(format!(
                    "Invalid workspace name '{}': must start with a letter or digit and contain only letters, digits, '-', '_' or spaces",
                    s
                ))
            }
        },
    }
}

pub fn workspace_description() -> AttributeType {
    AttributeType::Custom {
        name: "WorkspaceDescription".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| validate_length(string_of(value)?, 0, 2048),
    }
}

/// Terraform version, e.g. `terraform_v1.5` or `terraform_v1.5.7`
pub fn template_type() -> AttributeType {
    AttributeType::Custom {
        name: "TemplateType".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| {
            let s = string_of(value)?;
            if TEMPLATE_TYPE.is_match(s) {
                Ok(())
            } else {
                Err(format!(
                    "Invalid template type '{}', expected terraform_v1.4 through terraform_v1.9",
                    s
                ))
            }
        },
    }
}

pub fn action_name() -> AttributeType {
    AttributeType::Custom {
        name: "ActionName".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| validate_length(string_of(value)?, 1, 65),
    }
}

pub fn action_source_type() -> AttributeType {
    AttributeType::Custom {
        name: "ActionSourceType".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| one_of(string_of(value)?, ACTION_SOURCE_TYPES, "source type"),
    }
}

pub fn job_command_object() -> AttributeType {
    AttributeType::Custom {
        name: "JobCommandObject".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| one_of(string_of(value)?, JOB_COMMAND_OBJECTS, "command object"),
    }
}

pub fn job_command_name() -> AttributeType {
    AttributeType::Custom {
        name: "JobCommandName".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| one_of(string_of(value)?, JOB_COMMAND_NAMES, "command name"),
    }
}

pub fn job_location() -> AttributeType {
    AttributeType::Custom {
        name: "JobLocation".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| one_of(string_of(value)?, JOB_LOCATIONS, "location"),
    }
}
