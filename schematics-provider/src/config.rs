//! Provider configuration
//!
//! Settings come from the environment first and can be overridden with the
//! builder methods. Endpoint resolution lives here too: every call computes
//! its own base URL, nothing is mutated on a shared client.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Overrides the resolved endpoint for every region
pub const ENDPOINT_ENV: &str = "IBMCLOUD_SCHEMATICS_API_ENDPOINT";

const REGION_ENVS: &[&str] = &["IC_REGION", "IBMCLOUD_REGION"];
const VISIBILITY_ENVS: &[&str] = &["IC_VISIBILITY", "IBMCLOUD_VISIBILITY"];
const TOKEN_ENVS: &[&str] = &["IC_IAM_TOKEN", "IBMCLOUD_IAM_TOKEN"];
const REFRESH_TOKEN_ENVS: &[&str] = &["IC_IAM_REFRESH_TOKEN", "IBMCLOUD_IAM_REFRESH_TOKEN"];

pub const DEFAULT_REGION: &str = "us-south";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_DESTROY_POLL_INTERVAL: Duration = Duration::from_secs(10);
const DEFAULT_DESTROY_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid region '{0}': expected lowercase letters, digits and dashes")]
    InvalidRegion(String),

    #[error("Invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Which network the service endpoint is reached over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    PublicAndPrivate,
}

impl Visibility {
    pub fn uses_private_endpoint(&self) -> bool {
        matches!(self, Visibility::Private | Visibility::PublicAndPrivate)
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            "public-and-private" => Ok(Visibility::PublicAndPrivate),
            other => Err(format!(
                "'{}' is not one of public, private, public-and-private",
                other
            )),
        }
    }
}

/// Provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Session region, used when a call does not name one
    pub region: String,
    pub visibility: Visibility,
    /// Fixed endpoint that replaces region-based resolution
    pub endpoint_override: Option<Url>,
    /// Bearer token sent as `Authorization`
    pub iam_token: Option<String>,
    /// Sent as the `refresh_token` header on calls that need it
    pub iam_refresh_token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    pub destroy_poll_interval: Duration,
    pub destroy_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

impl ProviderConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            visibility: Visibility::Public,
            endpoint_override: None,
            iam_token: None,
            iam_refresh_token: None,
            timeout: DEFAULT_TIMEOUT,
            destroy_poll_interval: DEFAULT_DESTROY_POLL_INTERVAL,
            destroy_timeout: DEFAULT_DESTROY_TIMEOUT,
        }
    }

    /// Read an environment variable, returning None if unset, empty, or whitespace-only.
    fn env_var_or_none(keys: &[&str]) -> Option<(String, String)> {
        keys.iter().find_map(|key| {
            std::env::var(key)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|v| (key.to_string(), v))
        })
    }

    /// Read configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some((_, region)) = Self::env_var_or_none(REGION_ENVS) {
            config.region = region.trim().to_string();
        }
        if let Some((var, visibility)) = Self::env_var_or_none(VISIBILITY_ENVS) {
            config.visibility = visibility
                .parse()
                .map_err(|message| ConfigError::InvalidValue { var, message })?;
        }
        if let Some((_, endpoint)) = Self::env_var_or_none(&[ENDPOINT_ENV]) {
            config = config.with_endpoint(&endpoint)?;
        }
        if let Some((_, token)) = Self::env_var_or_none(TOKEN_ENVS) {
            config.iam_token = Some(token);
        }
        if let Some((_, token)) = Self::env_var_or_none(REFRESH_TOKEN_ENVS) {
            config.iam_refresh_token = Some(token);
        }

        Ok(config)
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            url: endpoint.to_string(),
            source,
        })?;
        self.endpoint_override = Some(url);
        Ok(self)
    }

    pub fn with_tokens(
        mut self,
        iam_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        self.iam_token = Some(iam_token.into());
        self.iam_refresh_token = Some(refresh_token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_destroy_polling(mut self, interval: Duration, timeout: Duration) -> Self {
        self.destroy_poll_interval = interval;
        self.destroy_timeout = timeout;
        self
    }

    /// Base URL for a call targeting `region` (the session region when `None`
    /// or empty).
    pub fn endpoint_for(&self, region: Option<&str>) -> Result<Url, ConfigError> {
        if let Some(ref url) = self.endpoint_override {
            return Ok(url.clone());
        }

        let region = region
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(&self.region);
        if !is_region_name(region) {
            return Err(ConfigError::InvalidRegion(region.to_string()));
        }
        let host = if self.visibility.uses_private_endpoint() {
            format!("private-{}.schematics.cloud.ibm.com", region)
        } else {
            format!("{}.schematics.cloud.ibm.com", region)
        };
        let raw = format!("https://{}", host);
        Url::parse(&raw).map_err(|source| ConfigError::InvalidEndpoint { url: raw, source })
    }
}

/// Region names end up in the endpoint host, so only `[a-z0-9-]` is allowed.
fn is_region_name(region: &str) -> bool {
    !region.is_empty()
        && region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_uses_session_region_by_default() {
        let config = ProviderConfig::new("us-south");
        let url = config.endpoint_for(None).unwrap();
        assert_eq!(url.as_str(), "https://us-south.schematics.cloud.ibm.com/");
    }

    #[test]
    fn endpoint_follows_call_region() {
        let config = ProviderConfig::new("us-south");
        let url = config.endpoint_for(Some("eu-de")).unwrap();
        assert_eq!(url.host_str(), Some("eu-de.schematics.cloud.ibm.com"));

        let url = config.endpoint_for(Some("  ")).unwrap();
        assert_eq!(url.host_str(), Some("us-south.schematics.cloud.ibm.com"));
    }

    #[test]
    fn malformed_regions_are_rejected() {
        let config = ProviderConfig::new("us-south");
        for region in ["localhost:9000/", "evil.example.com#", "EU-DE", "us south"] {
            let result = config.endpoint_for(Some(region));
            assert!(
                matches!(result, Err(ConfigError::InvalidRegion(ref r)) if r == region),
                "{region} was accepted"
            );
        }

        let config = ProviderConfig::new("attacker.example.com/");
        assert!(config.endpoint_for(None).is_err());
    }

    #[test]
    fn private_visibility_prefixes_host() {
        for visibility in [Visibility::Private, Visibility::PublicAndPrivate] {
            let config = ProviderConfig::new("us-east").with_visibility(visibility);
            let url = config.endpoint_for(Some("eu-gb")).unwrap();
            assert_eq!(url.host_str(), Some("private-eu-gb.schematics.cloud.ibm.com"));
        }
    }

    #[test]
    fn override_wins_over_region() {
        let config = ProviderConfig::new("us-south")
            .with_visibility(Visibility::Private)
            .with_endpoint("http://127.0.0.1:9000")
            .unwrap();
        let url = config.endpoint_for(Some("eu-de")).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn invalid_override_is_rejected() {
        let result = ProviderConfig::new("us-south").with_endpoint("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
    }

    #[test]
    fn visibility_parses_known_values() {
        assert_eq!("private".parse::<Visibility>(), Ok(Visibility::Private));
        assert_eq!(
            "public-and-private".parse::<Visibility>(),
            Ok(Visibility::PublicAndPrivate)
        );
        assert!("internal".parse::<Visibility>().is_err());
    }
}
