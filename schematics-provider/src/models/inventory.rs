use chrono::{DateTime, Utc};

model! {
    /// Inventory of target hosts, given inline or through resource queries
    pub struct InventoryResourceRecord {
        id: String,
        name: String,
        description: String,
        location: String,
        resource_group: String,
        created_at: DateTime<Utc>,
        created_by: String,
        updated_at: DateTime<Utc>,
        updated_by: String,
        inventories_ini: String,
        resource_queries: Vec<String>,
    }
}
