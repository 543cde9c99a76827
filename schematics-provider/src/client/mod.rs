//! Schematics REST client
//!
//! The client holds only the HTTP connection pool and credentials. Each call
//! takes the endpoint it should hit, so concurrent calls for different regions
//! share nothing mutable.

mod actions;
mod agents;
mod inventories;
mod jobs;
mod workspaces;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ProviderConfig;
use crate::error::{ClientError, Result, error_message};

const USER_AGENT_HEADER: &str = "X-Original-User-Agent";
const GITHUB_TOKEN_HEADER: &str = "X-Github-token";
const REFRESH_TOKEN_HEADER: &str = "refresh_token";

/// Shared HTTP client for the Schematics API
#[derive(Debug, Clone)]
pub struct SchematicsClient {
    http: reqwest::Client,
    refresh_token: Option<String>,
}

impl SchematicsClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT_HEADER,
            HeaderValue::from_static(concat!("schematics-provider/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(ref token) = config.iam_token {
            let bearer = if token.starts_with("Bearer ") {
                token.clone()
            } else {
                format!("Bearer {}", token)
            };
            let mut value = HeaderValue::from_str(&bearer)
                .map_err(|e| ClientError::InvalidToken(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            refresh_token: config.iam_refresh_token.clone(),
        })
    }

    /// Append path segments to `endpoint`, keeping any base path it carries.
    fn url(endpoint: &Url, segments: &[&str]) -> Result<Url> {
        let mut url = endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{} cannot be a base URL", endpoint)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, endpoint: &Url, segments: &[&str]) -> Result<RequestBuilder> {
        let url = Self::url(endpoint, segments)?;
        log::debug!("{} {}", method, url);
        Ok(self.http.request(method, url))
    }

    /// Attach the IAM refresh token the service needs to act on the caller's behalf.
    fn with_refresh_token(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.refresh_token {
            Some(ref token) => builder.header(REFRESH_TOKEN_HEADER, token),
            None => builder,
        }
    }

    fn with_github_token(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => builder.header(GITHUB_TOKEN_HEADER, token),
            None => builder,
        }
    }

    async fn execute(builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        log::debug!("{} returned {}: {}", url, status, body);

        Err(ClientError::ApiError {
            status,
            url,
            message: error_message(&body),
        })
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
        let response = Self::execute(builder).await?;
        let url = response.url().to_string();
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("{}: {}", url, e)))
    }

    async fn send_empty(builder: RequestBuilder) -> Result<()> {
        Self::execute(builder).await.map(|_| ())
    }
}
