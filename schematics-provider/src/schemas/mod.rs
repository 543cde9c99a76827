//! Schematics resource and data source schema definitions

pub mod action;
pub mod agent;
pub mod inventory;
pub mod job;
pub mod resource_query;
pub mod variables;
pub mod workspace;

use schematics_core::schema::{AttributeSchema, AttributeType, BlockSchema, ResourceSchema};

pub const WORKSPACE: &str = "ibm_schematics_workspace";
pub const ACTION: &str = "ibm_schematics_action";
pub const AGENT: &str = "ibm_schematics_agent";
pub const JOB: &str = "ibm_schematics_job";
pub const INVENTORY: &str = "ibm_schematics_inventory";
pub const RESOURCE_QUERY: &str = "ibm_schematics_resource_query";

/// Schemas of all writable resource types
pub fn resource_schemas() -> Vec<ResourceSchema> {
    vec![
        workspace::workspace_schema(),
        action::action_schema(),
        agent::agent_schema(),
        job::job_schema(),
    ]
}

/// Schemas of all data sources
pub fn data_source_schemas() -> Vec<ResourceSchema> {
    vec![
        workspace::workspace_data_source_schema(),
        action::action_data_source_schema(),
        agent::agent_data_source_schema(),
        job::job_data_source_schema(),
        inventory::inventory_data_source_schema(),
        resource_query::resource_query_data_source_schema(),
    ]
}

pub(crate) fn string(name: &str) -> AttributeSchema {
    AttributeSchema::new(name, AttributeType::String)
}

pub(crate) fn block(name: &str, fields: BlockSchema) -> AttributeSchema {
    AttributeSchema::new(name, AttributeType::Block(fields))
}

/// Block made of plain string attributes
pub(crate) fn string_fields(names: &[&str]) -> BlockSchema {
    names
        .iter()
        .fold(BlockSchema::new(), |b, name| b.attribute(string(name)))
}

/// Block made of float attributes, as used by log summary counters
pub(crate) fn float_fields(names: &[&str]) -> BlockSchema {
    names.iter().fold(BlockSchema::new(), |b, name| {
        b.attribute(AttributeSchema::new(*name, AttributeType::Float))
    })
}

/// Derive a data source from a resource schema: every attribute becomes
/// computed, `key` identifies the object and `location` picks the region.
/// Attributes named in `skip` are left out.
pub(crate) fn lookup_schema(resource: ResourceSchema, key: &str, skip: &[&str]) -> ResourceSchema {
    let mut schema = ResourceSchema::data_source(resource.resource_type.clone());
    if let Some(desc) = resource.description {
        schema = schema.with_description(desc);
    }
    for (name, attr) in resource.attributes {
        if skip.contains(&name.as_str()) || name == "location" {
            continue;
        }
        let mut attr = attr.computed();
        attr.force_new = false;
        attr.default = None;
        schema = schema.attribute(attr);
    }
    schema
        .attribute(
            string(key)
                .required()
                .with_description("The ID of the object to look up."),
        )
        .attribute(
            string("location")
                .optional_computed()
                .with_description("Region the object lives in; the provider region when unset."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use schematics_core::schema::{Mutability, SchemaKind};

    #[test]
    fn every_type_has_a_schema() {
        let resources: Vec<_> = resource_schemas()
            .into_iter()
            .map(|s| s.resource_type)
            .collect();
        assert_eq!(resources, vec![WORKSPACE, ACTION, AGENT, JOB]);

        let lookups = data_source_schemas();
        assert_eq!(lookups.len(), 6);
        assert!(lookups.iter().all(|s| s.kind == SchemaKind::DataSource));
    }

    #[test]
    fn lookup_schema_marks_everything_computed() {
        let resource = ResourceSchema::new("thing")
            .attribute(string("name").required())
            .attribute(string("token").sensitive())
            .attribute(string("location").optional_computed());
        let lookup = lookup_schema(resource, "thing_id", &["token"]);

        assert_eq!(lookup.get("name").map(|a| a.mutability), Some(Mutability::Computed));
        assert!(lookup.get("token").is_none());
        assert_eq!(
            lookup.get("thing_id").map(|a| a.mutability),
            Some(Mutability::Required)
        );
        assert_eq!(
            lookup.get("location").map(|a| a.mutability),
            Some(Mutability::OptionalComputed)
        );
    }
}
