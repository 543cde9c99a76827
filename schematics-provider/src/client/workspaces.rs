//! Workspace endpoints.

use reqwest::Method;
use url::Url;

use super::SchematicsClient;
use crate::error::Result;
use crate::models::{TemplateInputsRequest, WorkspaceRequest, WorkspaceResponse};

impl SchematicsClient {
    pub async fn get_workspace(&self, endpoint: &Url, id: &str) -> Result<WorkspaceResponse> {
        let builder = self.request(Method::GET, endpoint, &["v1", "workspaces", id])?;
        Self::send_json(builder).await
    }

    pub async fn create_workspace(
        &self,
        endpoint: &Url,
        request: &WorkspaceRequest,
        github_token: Option<&str>,
    ) -> Result<WorkspaceResponse> {
        let builder = self.request(Method::POST, endpoint, &["v1", "workspaces"])?;
        let builder = Self::with_github_token(builder, github_token).json(request);
        Self::send_json(builder).await
    }

    /// Full replace (PUT), used when the template source changes.
    pub async fn replace_workspace(
        &self,
        endpoint: &Url,
        id: &str,
        request: &WorkspaceRequest,
        github_token: Option<&str>,
    ) -> Result<WorkspaceResponse> {
        let builder = self.request(Method::PUT, endpoint, &["v1", "workspaces", id])?;
        let builder = Self::with_github_token(builder, github_token).json(request);
        Self::send_json(builder).await
    }

    /// Partial update (PATCH) of descriptive fields.
    pub async fn update_workspace(
        &self,
        endpoint: &Url,
        id: &str,
        request: &WorkspaceRequest,
    ) -> Result<WorkspaceResponse> {
        let builder = self
            .request(Method::PATCH, endpoint, &["v1", "workspaces", id])?
            .json(request);
        Self::send_json(builder).await
    }

    /// Replace the input values of one template.
    pub async fn replace_workspace_inputs(
        &self,
        endpoint: &Url,
        id: &str,
        template_id: &str,
        request: &TemplateInputsRequest,
    ) -> Result<()> {
        let builder = self
            .request(
                Method::PUT,
                endpoint,
                &["v1", "workspaces", id, "template_data", template_id, "values"],
            )?
            .json(request);
        Self::send_empty(builder).await
    }

    pub async fn delete_workspace(&self, endpoint: &Url, id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, endpoint, &["v1", "workspaces", id])?;
        Self::send_empty(self.with_refresh_token(builder)).await
    }
}
