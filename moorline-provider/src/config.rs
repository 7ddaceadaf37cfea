//! Provider configuration
//!
//! Connection settings for the control plane, resolved once at startup and
//! validated before any client is built.

use moorline_client::ControlPlaneClient;

/// Provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Control plane base URL (e.g., "http://localhost:8080")
    pub url: String,

    /// Bearer token for authenticating against the control plane
    pub auth_token: Option<String>,
}

impl ProviderConfig {
    /// Creates a new configuration for the given control plane URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth_token: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - MOORLINE_URL (required)
    /// - MOORLINE_AUTH_TOKEN (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let url = std::env::var("MOORLINE_URL")
            .map_err(|_| anyhow::anyhow!("MOORLINE_URL environment variable not set"))?;

        let auth_token = std::env::var("MOORLINE_AUTH_TOKEN").ok();

        Ok(Self { url, auth_token })
    }

    /// Sets the bearer token
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.url.is_empty() {
            anyhow::bail!("url cannot be empty");
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            anyhow::bail!("url must start with http:// or https://");
        }

        if let Some(token) = &self.auth_token {
            if token.is_empty() {
                anyhow::bail!("auth_token cannot be empty when set");
            }
        }

        Ok(())
    }

    /// Builds a control plane client from this configuration
    pub fn client(&self) -> anyhow::Result<ControlPlaneClient> {
        self.validate()?;

        let client = ControlPlaneClient::new(self.url.as_str());
        Ok(match &self.auth_token {
            Some(token) => client.with_token(token.as_str()),
            None => client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = ProviderConfig::new("http://localhost:8080");

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Empty URL should fail
        config.url = String::new();
        assert!(config.validate().is_err());

        // Non-HTTP URL should fail
        config.url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.url = "https://moorline.example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_auth_token() {
        let config = ProviderConfig::new("http://localhost:8080").with_auth_token("sekrit");

        assert_eq!(config.auth_token.as_deref(), Some("sekrit"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_auth_token_rejected() {
        let config = ProviderConfig::new("http://localhost:8080").with_auth_token("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_requires_valid_config() {
        let config = ProviderConfig::new("ftp://nope");
        assert!(config.client().is_err());

        let config = ProviderConfig::new("http://localhost:8080");
        assert!(config.client().is_ok());
    }
}
