//! Services for authorized payments, captures and refunds (`/v2/payments`).

use std::sync::Arc;

use reqwest::Method;

use crate::client::{path_segment, ApiRequest, ClientInner};
use crate::models::{
    payment::ReauthorizeRequest, Authorization, AuthorizationId, Capture, CaptureId, Money,
    PaymentCaptureRequest, PaymentCaptureResponse, RefundId, RefundRequest, RefundResponse,
};
use crate::{Prefer, Result};

/// Service for authorized payments.
///
/// An authorization holds funds on the payer's account; capture it to
/// settle, or void it to release the hold.
pub struct AuthorizationsService {
    inner: Arc<ClientInner>,
}

impl AuthorizationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(self.inner.clone(), method, path)
    }

    /// Get an authorization by ID.
    pub async fn get(&self, id: &AuthorizationId) -> Result<Authorization> {
        let id = path_segment(id.as_str())?;
        self.request(Method::GET, &format!("/v2/payments/authorizations/{}", id))
            .send()
            .await
    }

    /// Capture an authorization, fully or in part.
    ///
    /// The full capture resource is requested so the response carries the
    /// seller receivable breakdown.
    pub async fn capture(
        &self,
        id: &AuthorizationId,
        request: PaymentCaptureRequest,
    ) -> Result<PaymentCaptureResponse> {
        let id = path_segment(id.as_str())?;
        self.request(
            Method::POST,
            &format!("/v2/payments/authorizations/{}/capture", id),
        )
        .prefer(Prefer::Representation)
        .json(&request)
        .send()
        .await
    }

    /// Void an authorization. Fully captured authorizations cannot be voided.
    pub async fn void(&self, id: &AuthorizationId) -> Result<()> {
        let id = path_segment(id.as_str())?;
        self.request(
            Method::POST,
            &format!("/v2/payments/authorizations/{}/void", id),
        )
        .send_empty()
        .await
    }

    /// Reauthorize an authorization after its honor period, optionally for a
    /// different amount.
    pub async fn reauthorize(
        &self,
        id: &AuthorizationId,
        amount: Option<Money>,
    ) -> Result<Authorization> {
        let id = path_segment(id.as_str())?;
        self.request(
            Method::POST,
            &format!("/v2/payments/authorizations/{}/reauthorize", id),
        )
        .json(&ReauthorizeRequest { amount })
        .send()
        .await
    }
}

/// Service for captured payments.
pub struct CapturesService {
    inner: Arc<ClientInner>,
}

impl CapturesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a captured payment by ID.
    pub async fn get(&self, id: &CaptureId) -> Result<Capture> {
        let id = path_segment(id.as_str())?;
        ApiRequest::new(
            self.inner.clone(),
            Method::GET,
            &format!("/v2/payments/captures/{}", id),
        )
        .send()
        .await
    }

    /// Refund a captured payment. An empty request refunds everything.
    pub async fn refund(&self, id: &CaptureId, request: RefundRequest) -> Result<RefundResponse> {
        let id = path_segment(id.as_str())?;
        ApiRequest::new(
            self.inner.clone(),
            Method::POST,
            &format!("/v2/payments/captures/{}/refund", id),
        )
        .prefer(Prefer::Representation)
        .json(&request)
        .send()
        .await
    }
}

/// Service for refunds.
pub struct RefundsService {
    inner: Arc<ClientInner>,
}

impl RefundsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a refund by ID.
    pub async fn get(&self, id: &RefundId) -> Result<RefundResponse> {
        let id = path_segment(id.as_str())?;
        ApiRequest::new(
            self.inner.clone(),
            Method::GET,
            &format!("/v2/payments/refunds/{}", id),
        )
        .send()
        .await
    }
}
