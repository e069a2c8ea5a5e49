//! Disputes service (`/v1/customer/disputes`).

use std::sync::Arc;

use reqwest::Method;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::{path_segment, ApiRequest, ClientInner};
use crate::models::{Dispute, DisputeId, DisputeList, DisputeSummary, DisputesQuery};
use crate::Result;

const DISPUTES_PATH: &str = "/v1/customer/disputes";

/// Service for customer disputes.
pub struct DisputesService {
    inner: Arc<ClientInner>,
}

impl DisputesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List one page of disputes.
    ///
    /// Use [`list_stream`](Self::list_stream) to walk every page.
    pub async fn list(&self, query: DisputesQuery) -> Result<DisputeList> {
        ApiRequest::new(self.inner.clone(), Method::GET, DISPUTES_PATH)
            .query(&query)
            .send()
            .await
    }

    /// Stream disputes across all pages.
    pub fn list_stream(&self, query: DisputesQuery) -> PaginatedStream<DisputeSummary> {
        PaginatedStreamBuilder::new(self.inner.clone(), DISPUTES_PATH).build_with_query(query)
    }

    /// Get full details of a dispute.
    pub async fn get(&self, id: &DisputeId) -> Result<Dispute> {
        let id = path_segment(id.as_str())?;
        ApiRequest::new(
            self.inner.clone(),
            Method::GET,
            &format!("{}/{}", DISPUTES_PATH, id),
        )
        .send()
        .await
    }
}
