//! Job endpoints. Mutating calls carry the IAM refresh token.

use reqwest::Method;
use url::Url;

use super::SchematicsClient;
use crate::error::Result;
use crate::models::Job;

impl SchematicsClient {
    pub async fn get_job(&self, endpoint: &Url, id: &str) -> Result<Job> {
        let builder = self.request(Method::GET, endpoint, &["v2", "jobs", id])?;
        Self::send_json(builder).await
    }

    pub async fn create_job(&self, endpoint: &Url, job: &Job) -> Result<Job> {
        let builder = self.request(Method::POST, endpoint, &["v2", "jobs"])?;
        Self::send_json(self.with_refresh_token(builder).json(job)).await
    }

    pub async fn update_job(&self, endpoint: &Url, id: &str, job: &Job) -> Result<Job> {
        let builder = self.request(Method::PUT, endpoint, &["v2", "jobs", id])?;
        Self::send_json(self.with_refresh_token(builder).json(job)).await
    }

    pub async fn delete_job(&self, endpoint: &Url, id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, endpoint, &["v2", "jobs", id])?;
        Self::send_empty(self.with_refresh_token(builder)).await
    }
}
