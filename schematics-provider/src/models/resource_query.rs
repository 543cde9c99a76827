use chrono::{DateTime, Utc};

model! {
    pub struct ResourceQueryParam {
        name: String,
        value: String,
        description: String,
    }
}

model! {
    pub struct ResourceQuery {
        query_type: String,
        query_condition: Vec<ResourceQueryParam>,
        query_select: Vec<String>,
    }
}

model! {
    /// Saved query selecting cloud resources as inventory targets
    pub struct ResourceQueryRecord {
        id: String,
        name: String,
        #[serde(rename = "type")]
        kind: String,
        queries: Vec<ResourceQuery>,
        created_at: DateTime<Utc>,
        created_by: String,
        updated_at: DateTime<Utc>,
        updated_by: String,
    }
}
