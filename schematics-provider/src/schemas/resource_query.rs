//! Resource query data source schema

use schematics_core::schema::{AttributeSchema, BlockSchema, ResourceSchema, types};

use super::{RESOURCE_QUERY, block, string, string_fields};

fn query() -> BlockSchema {
    BlockSchema::new()
        .attribute(string("query_type").with_description("Type of the query(workspaces)."))
        .attribute(block(
            "query_condition",
            string_fields(&["name", "value", "description"]),
        ))
        .attribute(
            AttributeSchema::new("query_select", types::string_list())
                .with_description("List of query selection parameters."),
        )
}

/// Returns the schema for the `ibm_schematics_resource_query` data source
pub fn resource_query_data_source_schema() -> ResourceSchema {
    ResourceSchema::data_source(RESOURCE_QUERY)
        .with_description("Look up a saved query that selects cloud resources as inventory targets.")
        .attribute(
            string("query_id")
                .required()
                .with_description("Resource query Id.  Use `GET /v2/resource_query` API to look up the Resource query definition Ids  in your IBM Cloud account."),
        )
        .attribute(string("location").optional_computed())
        .attribute(
            string("type")
                .computed()
                .with_description("Resource type (cluster, vsi, icd, vpc)."),
        )
        .attribute(string("name").computed().with_description("Resource query name."))
        .attribute(block("queries", query()).computed())
        .attribute(
            string("created_at")
                .computed()
                .with_description("Resource query creation time."),
        )
        .attribute(
            string("created_by")
                .computed()
                .with_description("Email address of user who created the Resource query."),
        )
        .attribute(
            string("updated_at")
                .computed()
                .with_description("Resource query updation time."),
        )
        .attribute(
            string("updated_by")
                .computed()
                .with_description("Email address of user who updated the Resource query."),
        )
}
