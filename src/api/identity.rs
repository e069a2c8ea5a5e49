//! Identity service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{ApiRequest, ClientInner};
use crate::models::UserInfo;
use crate::Result;

/// Service for the identity API.
pub struct IdentityService {
    inner: Arc<ClientInner>,
}

impl IdentityService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the profile of the account the access token was issued for.
    pub async fn user_info(&self) -> Result<UserInfo> {
        ApiRequest::new(
            self.inner.clone(),
            Method::GET,
            "/v1/identity/oauth2/userinfo",
        )
        .query(&[("schema", "paypalv1.1")])
        .send()
        .await
    }
}
