use super::convert;
use crate::models::InventoryResourceRecord;

convert! {
    InventoryResourceRecord {
        "name" => name,
        "description" => description,
        "location" => location,
        "resource_group" => resource_group,
        "inventories_ini" => inventories_ini,
        "resource_queries" => resource_queries,
    }
    computed {
        "created_at" => created_at,
        "created_by" => created_by,
        "updated_at" => updated_at,
        "updated_by" => updated_by,
    }
}
