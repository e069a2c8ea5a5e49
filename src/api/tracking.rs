//! Shipment tracking service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{ApiRequest, ClientInner};
use crate::models::{TrackersRequest, TrackersResponse};
use crate::{Error, Result};

/// Service for adding shipment tracking to transactions.
pub struct TrackingService {
    inner: Arc<ClientInner>,
}

impl TrackingService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Add tracking information for one or more transactions.
    ///
    /// Trackers rejected individually are listed in the response's `errors`;
    /// the call itself still succeeds.
    pub async fn add_trackers(&self, request: TrackersRequest) -> Result<TrackersResponse> {
        if request.trackers.is_empty() {
            return Err(Error::InvalidInput("No trackers given".to_string()));
        }

        ApiRequest::new(self.inner.clone(), Method::POST, "/v1/shipping/trackers-batch")
            .json(&request)
            .send()
            .await
    }
}
