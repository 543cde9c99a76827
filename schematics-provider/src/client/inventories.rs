//! Inventory and resource query lookups.

use reqwest::Method;
use url::Url;

use super::SchematicsClient;
use crate::error::Result;
use crate::models::{InventoryResourceRecord, ResourceQueryRecord};

impl SchematicsClient {
    pub async fn get_inventory(&self, endpoint: &Url, id: &str) -> Result<InventoryResourceRecord> {
        let builder = self.request(Method::GET, endpoint, &["v2", "inventories", id])?;
        Self::send_json(builder).await
    }

    pub async fn get_resource_query(
        &self,
        endpoint: &Url,
        id: &str,
    ) -> Result<ResourceQueryRecord> {
        let builder = self.request(Method::GET, endpoint, &["v2", "resources_query", id])?;
        Self::send_json(builder).await
    }
}
