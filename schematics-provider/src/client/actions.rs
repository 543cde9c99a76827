//! Action endpoints.

use reqwest::Method;
use url::Url;

use super::SchematicsClient;
use crate::error::Result;
use crate::models::Action;

impl SchematicsClient {
    pub async fn get_action(&self, endpoint: &Url, id: &str) -> Result<Action> {
        let builder = self.request(Method::GET, endpoint, &["v2", "actions", id])?;
        Self::send_json(builder).await
    }

    pub async fn create_action(
        &self,
        endpoint: &Url,
        action: &Action,
        github_token: Option<&str>,
    ) -> Result<Action> {
        let builder = self.request(Method::POST, endpoint, &["v2", "actions"])?;
        let builder = Self::with_github_token(builder, github_token).json(action);
        Self::send_json(builder).await
    }

    pub async fn update_action(
        &self,
        endpoint: &Url,
        id: &str,
        action: &Action,
        github_token: Option<&str>,
    ) -> Result<Action> {
        let builder = self.request(Method::PATCH, endpoint, &["v2", "actions", id])?;
        let builder = Self::with_github_token(builder, github_token).json(action);
        Self::send_json(builder).await
    }

    pub async fn delete_action(&self, endpoint: &Url, id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, endpoint, &["v2", "actions", id])?;
        Self::send_empty(builder).await
    }
}
