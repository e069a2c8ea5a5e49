//! HTTP client implementation for the PayPal REST API.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{Duration, Utc};
use reqwest::header::{HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use secrecy::SecretString;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::api::{
    AuthorizationsService, CapturesService, DisputesService, IdentityService, OrdersService,
    PartnerReferralsService, PayoutsService, RefundsService, TrackingService, WebhooksService,
};
use crate::auth::{BearerToken, TokenCache, TOKEN_PATH};
use crate::{Environment, Error, Prefer, Result};

use super::config::ClientConfig;

const PREFER: HeaderName = HeaderName::from_static("prefer");
const REQUEST_ID: HeaderName = HeaderName::from_static("paypal-request-id");
const PARTNER_ATTRIBUTION_ID: HeaderName =
    HeaderName::from_static("paypal-partner-attribution-id");

/// The main client for interacting with the PayPal REST API.
///
/// This client provides access to all API services through method calls
/// that return service structs. It owns the OAuth2 token cache; every
/// request is sent with a bearer token that is valid for at least the
/// configured refresh margin.
///
/// Cloning is cheap and clones share the token cache.
///
/// # Example
///
/// ```no_run
/// use paypal_rs::{PayPalClient, Environment, OrderId};
///
/// # async fn example() -> paypal_rs::Result<()> {
/// let client = PayPalClient::new("client-id", "client-secret", Environment::Sandbox)?;
///
/// let order = client.orders().get(&OrderId::new("5O190127TN364715T")).await?;
/// println!("{:?}", order.status);
/// # Ok(())
/// # }
/// ```
pub struct PayPalClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) tokens: TokenCache,
    pub(crate) config: ClientConfig,
    pub(crate) environment: Environment,
    pub(crate) base_url: Url,
}

impl PayPalClient {
    /// Create a client with default configuration.
    ///
    /// No network traffic happens here; the first token is requested with
    /// the first API call.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        env: Environment,
    ) -> Result<Self> {
        Self::with_config(client_id, client_secret, env, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        env: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let margin = Duration::try_seconds(config.refresh_margin_secs)
            .filter(|margin| *margin >= Duration::zero())
            .filter(|margin| Utc::now().checked_add_signed(*margin).is_some())
            .ok_or_else(|| {
                Error::Config(format!(
                    "Invalid refresh margin: {} seconds",
                    config.refresh_margin_secs
                ))
            })?;

        let mut base_url = Url::parse(config.base_url.as_deref().unwrap_or(env.api_base_url()))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let token_url = resolve_url(&base_url, TOKEN_PATH)?;

        let tokens = TokenCache::new(
            http.clone(),
            token_url,
            client_id,
            SecretString::from(client_secret.into()),
            margin,
        );

        debug!(environment = %env, base_url = %base_url, "created PayPal client");

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                tokens,
                config,
                environment: env,
                base_url,
            }),
        })
    }

    /// Create a client from environment variables.
    ///
    /// Reads `PAYPAL_CLIENT_ID` and `PAYPAL_CLIENT_SECRET` (required),
    /// `PAYPAL_ENVIRONMENT` (`sandbox` or `live`, default `sandbox`) and
    /// `PAYPAL_API_BASE` (optional base URL override).
    pub fn from_env() -> Result<Self> {
        let client_id = required_var("PAYPAL_CLIENT_ID")?;
        let client_secret = required_var("PAYPAL_CLIENT_SECRET")?;

        let env = match std::env::var("PAYPAL_ENVIRONMENT") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::default(),
        };

        let mut config = ClientConfig::default();
        if let Ok(base) = std::env::var("PAYPAL_API_BASE") {
            if !base.trim().is_empty() {
                config = config.with_base_url(base.trim());
            }
        }

        Self::with_config(client_id, client_secret, env, config)
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the authorized payments service.
    pub fn authorizations(&self) -> AuthorizationsService {
        AuthorizationsService::new(self.inner.clone())
    }

    /// Get the captured payments service.
    pub fn captures(&self) -> CapturesService {
        CapturesService::new(self.inner.clone())
    }

    /// Get the refunds service.
    pub fn refunds(&self) -> RefundsService {
        RefundsService::new(self.inner.clone())
    }

    /// Get the payouts service.
    pub fn payouts(&self) -> PayoutsService {
        PayoutsService::new(self.inner.clone())
    }

    /// Get the shipment tracking service.
    pub fn tracking(&self) -> TrackingService {
        TrackingService::new(self.inner.clone())
    }

    /// Get the disputes service.
    pub fn disputes(&self) -> DisputesService {
        DisputesService::new(self.inner.clone())
    }

    /// Get the webhook events service.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.inner.clone())
    }

    /// Get the partner referrals service.
    pub fn partner_referrals(&self) -> PartnerReferralsService {
        PartnerReferralsService::new(self.inner.clone())
    }

    /// Get the identity service.
    pub fn identity(&self) -> IdentityService {
        IdentityService::new(self.inner.clone())
    }

    /// Start an authenticated request to an endpoint without a dedicated
    /// wrapper.
    ///
    /// `path` is resolved against the API base URL; absolute URLs (such as
    /// HATEOAS links) are used as-is.
    ///
    /// ```no_run
    /// use paypal_rs::PayPalClient;
    /// use reqwest::Method;
    ///
    /// # async fn example(client: PayPalClient) -> paypal_rs::Result<()> {
    /// let balances: serde_json::Value = client
    ///     .request(Method::GET, "/v1/reporting/balances")
    ///     .query(&[("currency_code", "USD")])
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(self.inner.clone(), method, path)
    }

    /// Get an access token, requesting a new one if the cached token is
    /// missing or about to expire.
    pub async fn get_access_token(&self) -> Result<BearerToken> {
        self.inner.tokens.get_valid_token().await
    }

    /// Get the token cache.
    pub fn tokens(&self) -> &TokenCache {
        &self.inner.tokens
    }

    /// Get the environment this client talks to.
    pub fn environment(&self) -> Environment {
        self.inner.environment
    }

    /// Get the base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

/// Resolve `path` below the base URL, keeping any path prefix the base
/// carries. Absolute URLs are returned unchanged.
pub(crate) fn resolve_url(base: &Url, path: &str) -> std::result::Result<Url, url::ParseError> {
    match Url::parse(path) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => base.join(path.trim_start_matches('/')),
        Err(e) => Err(e),
    }
}

/// Escape a resource ID for use as a single path segment.
///
/// Empty IDs and the dot segments `.` and `..` are rejected. Everything else
/// is percent-encoded, `/` included.
pub(crate) fn path_segment(id: &str) -> Result<Cow<'_, str>> {
    match id {
        "" | "." | ".." => Err(Error::InvalidInput(format!(
            "Invalid resource ID: {:?}",
            id
        ))),
        _ => Ok(urlencoding::encode(id)),
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} is not set", name))),
    }
}

/// An authenticated request under construction.
///
/// Created by [`PayPalClient::request`] or by the service wrappers. Nothing
/// is sent until [`send`](Self::send) or [`send_empty`](Self::send_empty) is
/// awaited; at that point a valid token is obtained and attached.
///
/// Non-success responses become [`Error::Api`]. A `401` also drops the
/// cached token so the next request authenticates again; the failed request
/// itself is not retried.
#[must_use = "requests do nothing unless sent"]
pub struct ApiRequest {
    inner: Arc<ClientInner>,
    method: Method,
    url: Url,
    builder: reqwest::RequestBuilder,
    prefer: Option<Prefer>,
    has_body: bool,
    error: Option<Error>,
}

impl ApiRequest {
    pub(crate) fn new(inner: Arc<ClientInner>, method: Method, path: &str) -> Self {
        let (url, error) = match resolve_url(&inner.base_url, path) {
            Ok(url) => (url, None),
            Err(e) => (inner.base_url.clone(), Some(Error::from(e))),
        };
        let builder = inner.http.request(method.clone(), url.clone());

        Self {
            inner,
            method,
            url,
            builder,
            prefer: None,
            has_body: false,
            error,
        }
    }

    /// The resolved request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Add query parameters.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Self {
        self.builder = self.builder.query(query);
        self
    }

    /// Set a JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => {
                self.builder = self.builder.body(bytes);
                self.has_body = true;
            }
            Err(e) => {
                self.error.get_or_insert(Error::Json(e));
            }
        }
        self
    }

    /// Ask for a minimal or full response representation.
    pub fn prefer(mut self, prefer: Prefer) -> Self {
        self.prefer = Some(prefer);
        self
    }

    /// Set the `PayPal-Request-Id` idempotency key.
    pub fn request_id(self, id: impl AsRef<str>) -> Self {
        self.header(REQUEST_ID, id.as_ref())
    }

    /// Add an arbitrary header.
    pub fn header(mut self, name: HeaderName, value: &str) -> Self {
        match HeaderValue::from_str(value) {
            Ok(value) => self.builder = self.builder.header(name, value),
            Err(_) => {
                self.error.get_or_insert(Error::InvalidInput(format!(
                    "Invalid value for header {}",
                    name
                )));
            }
        }
        self
    }

    /// Send the request and decode the JSON response body.
    pub async fn send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.dispatch().await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send the request and discard the response body.
    ///
    /// For endpoints answering `204 No Content` or an empty `200`.
    pub async fn send_empty(self) -> Result<()> {
        let response = self.dispatch().await?;
        response.bytes().await?;
        Ok(())
    }

    async fn dispatch(self) -> Result<reqwest::Response> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let token = self.inner.tokens.get_valid_token().await?;

        let mut builder = self
            .builder
            .header(AUTHORIZATION, token.authorization_header())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        if let Some(prefer) = self.prefer.or(self.inner.config.prefer) {
            builder = builder.header(PREFER, prefer.header_value());
        }

        if let Some(ref bn_code) = self.inner.config.partner_attribution_id {
            builder = builder.header(PARTNER_ATTRIBUTION_ID, bn_code.as_str());
        }

        debug!(method = %self.method, url = %self.url, body = self.has_body, "sending request");
        let response = builder.send().await?;

        let status = response.status();
        debug!(method = %self.method, url = %self.url, status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            warn!(url = %self.url, "request rejected as unauthorized; dropping cached token");
            self.inner.tokens.invalidate().await;
        }

        let bytes = response.bytes().await.unwrap_or_default();
        let body = serde_json::from_slice::<Value>(&bytes).unwrap_or_else(|_| {
            if bytes.is_empty() {
                Value::Null
            } else {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            }
        });

        let err = Error::from_api_response(status.as_u16(), body);
        if let Error::Api { ref name, ref debug_id, .. } = err {
            warn!(
                method = %self.method,
                url = %self.url,
                status = status.as_u16(),
                name = %name,
                debug_id = ?debug_id,
                "PayPal API error"
            );
        }
        Err(err)
    }
}

impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("prefer", &self.prefer)
            .finish()
    }
}

impl Clone for PayPalClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for PayPalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayPalClient")
            .field("environment", &self.inner.environment)
            .field("base_url", &self.inner.base_url.as_str())
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PayPalClient {
        PayPalClient::with_config(
            "id",
            "secret",
            Environment::Sandbox,
            ClientConfig::default().with_base_url("http://127.0.0.1:9"),
        )
        .unwrap()
    }

    #[test]
    fn test_base_url_override() {
        let client = PayPalClient::new("id", "secret", Environment::Live).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api-m.paypal.com/");
        assert!(client.environment().is_live());

        assert_eq!(self::client().base_url().as_str(), "http://127.0.0.1:9/");
    }

    #[test]
    fn test_request_url_resolution() {
        let client = client();
        let req = client.request(Method::GET, "/v2/checkout/orders/ABC");
        assert_eq!(req.url().as_str(), "http://127.0.0.1:9/v2/checkout/orders/ABC");

        let next = "https://api-m.sandbox.paypal.com/v1/customer/disputes?next_page_token=x";
        let req = client.request(Method::GET, next);
        assert_eq!(req.url().as_str(), next);
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let client = PayPalClient::with_config(
            "id",
            "secret",
            Environment::Sandbox,
            ClientConfig::default().with_base_url("https://proxy.example/paypal"),
        )
        .unwrap();
        assert_eq!(client.base_url().as_str(), "https://proxy.example/paypal/");

        let req = client.request(Method::GET, "/v2/checkout/orders/ABC");
        assert_eq!(
            req.url().as_str(),
            "https://proxy.example/paypal/v2/checkout/orders/ABC"
        );
    }

    #[test]
    fn test_path_segment_escaping() {
        assert_eq!(path_segment("5O190127TN364715T").unwrap(), "5O190127TN364715T");
        assert_eq!(path_segment("a/../b").unwrap(), "a%2F..%2Fb");
        assert_eq!(path_segment("x?y#z").unwrap(), "x%3Fy%23z");
        for id in ["", ".", ".."] {
            assert!(matches!(path_segment(id), Err(Error::InvalidInput(_))));
        }
    }

    #[test]
    fn test_debug_hides_secret() {
        let debug_str = format!("{:?}", client());
        assert!(!debug_str.contains("secret\""));
        assert!(debug_str.contains("PayPalClient"));
    }

    #[tokio::test]
    async fn test_invalid_header_fails_before_sending() {
        let err = client()
            .request(Method::GET, "/v1/identity/oauth2/userinfo")
            .request_id("bad\nvalue")
            .send_empty()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
