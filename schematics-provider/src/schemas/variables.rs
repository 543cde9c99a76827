//! Blocks shared by several resource types: variables, credentials and user state

use schematics_core::schema::{AttributeSchema, AttributeType, BlockSchema, types};

use super::{block, string};

fn int(name: &str) -> AttributeSchema {
    AttributeSchema::new(name, AttributeType::Int)
}

fn flag(name: &str) -> AttributeSchema {
    AttributeSchema::new(name, AttributeType::Bool)
}

pub fn variable_metadata() -> BlockSchema {
    BlockSchema::new()
        .attribute(string("type").with_description("Type of the variable."))
        .attribute(
            AttributeSchema::new("aliases", types::string_list())
                .with_description("List of aliases for the variable name."),
        )
        .attribute(string("description").with_description("Description of the meta data."))
        .attribute(
            string("cloud_data_type")
                .with_description("Cloud data type of the variable. eg. resource_group_id, region, vpc_id."),
        )
        .attribute(
            string("default_value")
                .with_description("Default value for the variable only if the override value is not specified."),
        )
        .attribute(string("link_status").with_description("The status of the link."))
        .attribute(flag("secure").with_description("Is the variable secure or sensitive ?"))
        .attribute(flag("immutable").with_description("Is the variable readonly ?"))
        .attribute(
            flag("hidden")
                .with_description("If **true**, the variable is not displayed on UI or Command line."),
        )
        .attribute(flag("required").with_description("If the variable required?."))
        .attribute(
            AttributeSchema::new("options", types::string_list())
                .with_description("List of possible values for this variable."),
        )
        .attribute(
            int("min_value")
                .with_description("Minimum value of the variable. Applicable for the integer type."),
        )
        .attribute(
            int("max_value")
                .with_description("Maximum value of the variable. Applicable for the integer type."),
        )
        .attribute(
            int("min_length")
                .with_description("Minimum length of the variable value. Applicable for the string type."),
        )
        .attribute(
            int("max_length")
                .with_description("Maximum length of the variable value. Applicable for the string type."),
        )
        .attribute(string("matches").with_description("Regex for the variable value."))
        .attribute(
            int("position")
                .with_description("Relative position of this variable in a list."),
        )
        .attribute(
            string("group_by")
                .with_description("Display name of the group this variable belongs to."),
        )
        .attribute(string("source").with_description("Source of this meta-data."))
}

/// Input, output or setting
pub fn variable() -> BlockSchema {
    BlockSchema::new()
        .attribute(string("name").with_description("The name of the variable."))
        .attribute(
            string("value")
                .with_description("The value for the variable or reference to the value."),
        )
        .attribute(
            flag("use_default")
                .with_description("True, will ignore the data in the value attribute, instead the data in metadata.default_value will be used."),
        )
        .attribute(
            block("metadata", variable_metadata())
                .max_items(1)
                .with_description("An user editable metadata for the variables."),
        )
        .attribute(
            string("link")
                .computed()
                .with_description("The reference link to the variable value."),
        )
}

pub fn credential_metadata() -> BlockSchema {
    BlockSchema::new()
        .attribute(string("type").with_description("Type of the variable."))
        .attribute(AttributeSchema::new("aliases", types::string_list()))
        .attribute(string("description"))
        .attribute(string("default_value"))
        .attribute(flag("immutable"))
        .attribute(flag("hidden"))
        .attribute(int("position"))
        .attribute(string("group_by"))
        .attribute(string("source"))
}

pub fn credential() -> BlockSchema {
    BlockSchema::new()
        .attribute(string("name").with_description("The name of the credential variable."))
        .attribute(
            string("value")
                .sensitive()
                .with_description("The credential value for the variable or reference to the value."),
        )
        .attribute(flag("use_default"))
        .attribute(block("metadata", credential_metadata()).max_items(1))
        .attribute(string("link").computed())
}

pub fn user_state() -> BlockSchema {
    BlockSchema::new()
        .attribute(string("state").with_description("User-defined states."))
        .attribute(
            string("set_by")
                .computed()
                .with_description("Name of the User who set the state of the Object."),
        )
        .attribute(
            string("set_at")
                .computed()
                .with_description("When the User who set the state of the Object."),
        )
}

pub fn bastion() -> BlockSchema {
    BlockSchema::new()
        .attribute(string("name").with_description("Bastion Name; the name must be unique."))
        .attribute(
            string("host")
                .with_description("Reference to the Inventory resource definition."),
        )
}
