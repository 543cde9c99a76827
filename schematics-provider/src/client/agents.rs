//! Agent endpoints.

use reqwest::Method;
use url::Url;

use super::SchematicsClient;
use crate::error::Result;
use crate::models::AgentData;

impl SchematicsClient {
    /// Fetch an agent with the detailed profile, which includes recent jobs.
    pub async fn get_agent(&self, endpoint: &Url, id: &str) -> Result<AgentData> {
        let builder = self
            .request(Method::GET, endpoint, &["v2", "agents", id])?
            .query(&[("profile", "detailed")]);
        Self::send_json(builder).await
    }

    pub async fn create_agent(&self, endpoint: &Url, agent: &AgentData) -> Result<AgentData> {
        let builder = self
            .request(Method::POST, endpoint, &["v2", "agents"])?
            .json(agent);
        Self::send_json(builder).await
    }

    pub async fn update_agent(
        &self,
        endpoint: &Url,
        id: &str,
        agent: &AgentData,
    ) -> Result<AgentData> {
        let builder = self
            .request(Method::PATCH, endpoint, &["v2", "agents", id])?
            .json(agent);
        Self::send_json(builder).await
    }

    pub async fn delete_agent(&self, endpoint: &Url, id: &str) -> Result<()> {
        let builder = self
            .request(Method::DELETE, endpoint, &["v2", "agents", id])?
            .query(&[("force", "true")]);
        Self::send_empty(builder).await
    }

    /// Start a job that destroys the resources the agent deployed.
    pub async fn delete_agent_resources(&self, endpoint: &Url, id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, endpoint, &["v2", "agents", id, "resources"])?;
        Self::send_empty(self.with_refresh_token(builder)).await
    }
}
