//! Resource and data source type definitions

use schematics_core::provider::ResourceType;
use schematics_core::schema::ResourceSchema;

use crate::schemas::{action, agent, inventory, job, resource_query, workspace};
use crate::schemas::{ACTION, AGENT, INVENTORY, JOB, RESOURCE_QUERY, WORKSPACE};

macro_rules! define_resource_type {
    ($name:ident, $type_name:expr, $schema:path) => {
        pub struct $name;
        impl ResourceType for $name {
            fn name(&self) -> &'static str {
                $type_name
            }
            fn schema(&self) -> ResourceSchema {
                $schema()
            }
        }
    };
}

define_resource_type!(WorkspaceType, WORKSPACE, workspace::workspace_schema);
define_resource_type!(ActionType, ACTION, action::action_schema);
define_resource_type!(AgentType, AGENT, agent::agent_schema);
define_resource_type!(JobType, JOB, job::job_schema);

define_resource_type!(
    WorkspaceDataSource,
    WORKSPACE,
    workspace::workspace_data_source_schema
);
define_resource_type!(ActionDataSource, ACTION, action::action_data_source_schema);
define_resource_type!(AgentDataSource, AGENT, agent::agent_data_source_schema);
define_resource_type!(JobDataSource, JOB, job::job_data_source_schema);
define_resource_type!(
    InventoryDataSource,
    INVENTORY,
    inventory::inventory_data_source_schema
);
define_resource_type!(
    ResourceQueryDataSource,
    RESOURCE_QUERY,
    resource_query::resource_query_data_source_schema
);

/// Returns all resource types supported by this provider
pub fn resource_types() -> Vec<Box<dyn ResourceType>> {
    vec![
        Box::new(WorkspaceType),
        Box::new(ActionType),
        Box::new(AgentType),
        Box::new(JobType),
    ]
}

/// Returns all data source types supported by this provider
pub fn data_source_types() -> Vec<Box<dyn ResourceType>> {
    vec![
        Box::new(WorkspaceDataSource),
        Box::new(ActionDataSource),
        Box::new(AgentDataSource),
        Box::new(JobDataSource),
        Box::new(InventoryDataSource),
        Box::new(ResourceQueryDataSource),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use schematics_core::schema::SchemaKind;

    #[test]
    fn type_names_match_schemas() {
        for t in resource_types() {
            let schema = t.schema();
            assert_eq!(schema.resource_type, t.name());
            assert_eq!(schema.kind, SchemaKind::Resource);
        }
        for t in data_source_types() {
            let schema = t.schema();
            assert_eq!(schema.resource_type, t.name());
            assert_eq!(schema.kind, SchemaKind::DataSource);
        }
    }
}
