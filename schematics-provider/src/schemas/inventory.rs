//! Inventory data source schema

use schematics_core::schema::{AttributeSchema, ResourceSchema, types};

use super::{INVENTORY, string};

/// Returns the schema for the `ibm_schematics_inventory` data source
pub fn inventory_data_source_schema() -> ResourceSchema {
    ResourceSchema::data_source(INVENTORY)
        .with_description("Look up an inventory of target hosts for Schematics actions.")
        .attribute(
            string("inventory_id")
                .required()
                .with_description("Resource Inventory Id.  Use `GET /v2/inventories` API to look up the Resource Inventory definition Ids  in your IBM Cloud account."),
        )
        .attribute(
            string("location")
                .optional_computed()
                .with_description("List of locations supported by IBM Cloud Schematics service."),
        )
        .attribute(string("name").computed().with_description("The unique name of your Inventory."))
        .attribute(
            string("description")
                .computed()
                .with_description("The description of your Inventory."),
        )
        .attribute(
            string("resource_group")
                .computed()
                .with_description("Resource-group name for the Inventory definition."),
        )
        .attribute(string("created_at").computed().with_description("Inventory creation time."))
        .attribute(
            string("created_by")
                .computed()
                .with_description("Email address of user who created the Inventory."),
        )
        .attribute(string("updated_at").computed().with_description("Inventory updation time."))
        .attribute(
            string("updated_by")
                .computed()
                .with_description("Email address of user who updated the Inventory."),
        )
        .attribute(
            string("inventories_ini")
                .computed()
                .with_description("Input inventory of host and host group for the playbook,  in the .ini file format."),
        )
        .attribute(
            AttributeSchema::new("resource_queries", types::string_list())
                .computed()
                .with_description("Input resource queries that is used to dynamically generate  the inventory of host and host group for the playbook."),
        )
}
