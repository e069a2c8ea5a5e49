//! Client configuration options.

use std::time::Duration;

use crate::auth::DEFAULT_REFRESH_MARGIN_SECS;
use crate::Prefer;

/// Configuration for the PayPal client.
///
/// # Example
///
/// ```
/// use paypal_rs::{ClientConfig, Prefer};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-shop/1.0")
///     .with_prefer(Prefer::Representation);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout, applied to token and API requests alike
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Seconds before expiry at which the access token is refreshed
    pub refresh_margin_secs: i64,
    /// Overrides the environment's API base URL (proxies, mock servers)
    pub base_url: Option<String>,
    /// `Prefer` header sent on every request that does not set its own
    pub prefer: Option<Prefer>,
    /// `PayPal-Partner-Attribution-Id` header (BN code) for partner integrations
    pub partner_attribution_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("paypal-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            refresh_margin_secs: DEFAULT_REFRESH_MARGIN_SECS,
            base_url: None,
            prefer: None,
            partner_attribution_id: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set how long before expiry the access token is refreshed.
    ///
    /// Must not be negative; [`PayPalClient::with_config`] rejects it
    /// otherwise.
    ///
    /// [`PayPalClient::with_config`]: crate::PayPalClient::with_config
    pub fn with_refresh_margin(mut self, secs: i64) -> Self {
        self.refresh_margin_secs = secs;
        self
    }

    /// Send requests to `base_url` instead of the environment's host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the default `Prefer` header.
    pub fn with_prefer(mut self, prefer: Prefer) -> Self {
        self.prefer = Some(prefer);
        self
    }

    /// Set the partner attribution ID.
    pub fn with_partner_attribution_id(mut self, id: impl Into<String>) -> Self {
        self.partner_attribution_id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.refresh_margin_secs, 60);
        assert!(config.base_url.is_none());
        assert!(config.user_agent.starts_with("paypal-rs/"));
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new()
            .with_base_url("http://127.0.0.1:8080")
            .with_refresh_margin(120)
            .with_partner_attribution_id("EXAMPLE_BN_CODE")
            .with_prefer(Prefer::Minimal);

        assert_eq!(config.base_url.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(config.refresh_margin_secs, 120);
        assert_eq!(config.partner_attribution_id.as_deref(), Some("EXAMPLE_BN_CODE"));
        assert_eq!(config.prefer, Some(Prefer::Minimal));
    }
}
