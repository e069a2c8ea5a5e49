//! OAuth2 client-credentials token cache.

use chrono::{DateTime, Duration, Utc};
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use url::Url;

use crate::{Error, Result};

/// Tokens expiring within this many seconds are refreshed before use.
pub const DEFAULT_REFRESH_MARGIN_SECS: i64 = 60;

/// Path of the token endpoint, relative to the API base.
pub const TOKEN_PATH: &str = "/v1/oauth2/token";

/// A bearer access token and its expiry.
///
/// The token value is held as a [`SecretString`] and never shows up in
/// `Debug` output.
#[derive(Clone)]
pub struct BearerToken {
    value: SecretString,
    token_type: String,
    expires_at: DateTime<Utc>,
    scope: Option<String>,
    app_id: Option<String>,
}

impl BearerToken {
    /// Create a token from a value obtained elsewhere, e.g. persisted from a
    /// previous run.
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: SecretString::from(value.into()),
            token_type: "Bearer".to_string(),
            expires_at,
            scope: None,
            app_id: None,
        }
    }

    /// The token value.
    pub fn secret(&self) -> &SecretString {
        &self.value
    }

    /// Token type as reported by the server, normally `Bearer`.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// When the token stops being accepted.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Space-separated scopes granted to the token.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Application ID the token was issued to.
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// Check if the token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Check if the token will expire within the given margin.
    pub fn expires_within(&self, margin: Duration) -> bool {
        match Utc::now().checked_add_signed(margin) {
            Some(deadline) => deadline >= self.expires_at,
            None => true,
        }
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.value.expose_secret())
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerToken")
            .field("value", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Caches the access token of one set of client credentials.
///
/// [`get_valid_token`](Self::get_valid_token) returns the cached token while
/// it is still valid past the refresh margin, and mints a new one otherwise.
/// The cache lock is held across the token request, so concurrent callers
/// that all find the cache stale cause exactly one request and then share
/// its result.
///
/// A failed refresh leaves the previously cached token in place.
pub struct TokenCache {
    http: reqwest::Client,
    token_url: Url,
    client_id: String,
    client_secret: SecretString,
    margin: Duration,
    current: Mutex<Option<BearerToken>>,
}

impl TokenCache {
    /// Create an empty cache.
    ///
    /// `token_url` is the full URL of the token endpoint.
    pub fn new(
        http: reqwest::Client,
        token_url: Url,
        client_id: impl Into<String>,
        client_secret: SecretString,
        margin: Duration,
    ) -> Self {
        Self {
            http,
            token_url,
            client_id: client_id.into(),
            client_secret,
            margin,
            current: Mutex::new(None),
        }
    }

    /// The client ID tokens are requested for.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The refresh margin.
    pub fn margin(&self) -> Duration {
        self.margin
    }

    /// Get a token that stays valid for at least the refresh margin,
    /// requesting a new one if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the token endpoint rejects the
    /// credentials, [`Error::Http`] on transport failure and [`Error::Json`]
    /// if the response cannot be decoded.
    pub async fn get_valid_token(&self) -> Result<BearerToken> {
        let mut current = self.current.lock().await;

        if let Some(token) = current.as_ref() {
            if !token.expires_within(self.margin) {
                return Ok(token.clone());
            }
            debug!(expires_at = %token.expires_at, "cached token is about to expire");
        }

        let token = self.request_token().await?;
        *current = Some(token.clone());
        Ok(token)
    }

    /// Request a new token regardless of the cached one.
    pub async fn refresh(&self) -> Result<BearerToken> {
        let mut current = self.current.lock().await;
        let token = self.request_token().await?;
        *current = Some(token.clone());
        Ok(token)
    }

    /// The cached token, without checking or refreshing it.
    pub async fn cached(&self) -> Option<BearerToken> {
        self.current.lock().await.clone()
    }

    /// Replace the cached token.
    pub async fn set_token(&self, token: BearerToken) {
        *self.current.lock().await = Some(token);
    }

    /// Drop the cached token so the next call requests a new one.
    pub async fn invalidate(&self) {
        if self.current.lock().await.take().is_some() {
            debug!("cached token invalidated");
        }
    }

    async fn request_token(&self) -> Result<BearerToken> {
        debug!(client_id = %self.client_id, url = %self.token_url, "requesting access token");

        let response = self
            .http
            .post(self.token_url.clone())
            .basic_auth(&self.client_id, Some(self.client_secret.expose_secret()))
            .header(ACCEPT, "application/json")
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "token request failed");
            return Err(Error::Authentication(format!(
                "Token request failed ({}): {}",
                status.as_u16(),
                describe_token_error(&body)
            )));
        }

        let body = response.bytes().await?;
        let parsed: TokenResponse = serde_json::from_slice(&body)?;

        let expires_at = Duration::try_seconds(parsed.expires_in)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                warn!(expires_in = parsed.expires_in, "token lifetime out of range");
                Error::Authentication(format!("Invalid expires_in: {}", parsed.expires_in))
            })?;

        info!(expires_in = parsed.expires_in, "obtained access token");

        Ok(BearerToken {
            value: SecretString::from(parsed.access_token),
            token_type: parsed.token_type,
            expires_at,
            scope: parsed.scope,
            app_id: parsed.app_id,
        })
    }
}

impl std::fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCache")
            .field("token_url", &self.token_url.as_str())
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("margin", &self.margin)
            .finish()
    }
}

/// Pull `error_description` (or `error`) out of an OAuth error body.
fn describe_token_error(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error_description")
                .or_else(|| v.get("error"))
                .and_then(|d| d.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    #[serde(deserialize_with = "seconds")]
    expires_in: i64,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    app_id: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// `expires_in` arrives as a number from PayPal, but some proxies and older
/// deployments send it as a string.
fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Seconds::deserialize(deserializer)? {
        Seconds::Int(n) => Ok(n),
        Seconds::Float(f) => Ok(f as i64),
        Seconds::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid expires_in: {:?}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_debug_redacts_value() {
        let token = BearerToken::new("super-secret-token", Utc::now());
        let debug_str = format!("{:?}", token);

        assert!(!debug_str.contains("super-secret-token"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn test_expires_within() {
        let soon = BearerToken::new("t", Utc::now() + Duration::seconds(30));
        assert!(soon.expires_within(Duration::seconds(60)));
        assert!(!soon.is_expired());

        let later = BearerToken::new("t", Utc::now() + Duration::hours(8));
        assert!(!later.expires_within(Duration::seconds(60)));
    }

    #[test]
    fn test_authorization_header() {
        let token = BearerToken::new("A21AAF", Utc::now());
        assert_eq!(token.authorization_header(), "Bearer A21AAF");
    }

    #[test]
    fn test_expires_in_as_number_or_string() {
        let parsed: TokenResponse = serde_json::from_str(
            r#"{"access_token":"a","token_type":"Bearer","expires_in":32400}"#,
        )
        .unwrap();
        assert_eq!(parsed.expires_in, 32400);

        let parsed: TokenResponse =
            serde_json::from_str(r#"{"access_token":"a","expires_in":"3600"}"#).unwrap();
        assert_eq!(parsed.expires_in, 3600);
        assert_eq!(parsed.token_type, "Bearer");

        assert!(serde_json::from_str::<TokenResponse>(
            r#"{"access_token":"a","expires_in":"soon"}"#
        )
        .is_err());
    }

    #[test]
    fn test_describe_token_error() {
        assert_eq!(
            describe_token_error(r#"{"error":"invalid_client","error_description":"Client Authentication failed"}"#),
            "Client Authentication failed"
        );
        assert_eq!(describe_token_error("Bad Gateway"), "Bad Gateway");
    }

    #[tokio::test]
    async fn test_set_and_invalidate() {
        let cache = TokenCache::new(
            reqwest::Client::new(),
            Url::parse("http://127.0.0.1:9/v1/oauth2/token").unwrap(),
            "client",
            SecretString::from("secret".to_string()),
            Duration::seconds(DEFAULT_REFRESH_MARGIN_SECS),
        );
        assert!(cache.cached().await.is_none());

        cache
            .set_token(BearerToken::new("seeded", Utc::now() + Duration::hours(1)))
            .await;
        let token = cache.get_valid_token().await.unwrap();
        assert_eq!(token.secret().expose_secret(), "seeded");

        cache.invalidate().await;
        assert!(cache.cached().await.is_none());
    }
}
