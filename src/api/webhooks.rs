//! Webhook events service (`/v1/notifications/webhooks-events`).

use std::sync::Arc;

use reqwest::Method;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::{path_segment, ApiRequest, ClientInner};
use crate::models::{WebhookEvent, WebhookEventsQuery};
use crate::Result;

const EVENTS_PATH: &str = "/v1/notifications/webhooks-events";

/// Service for webhook event notifications.
///
/// To decode an event pushed to your listener, use
/// [`WebhookEvent::parse`] on the request body.
pub struct WebhooksService {
    inner: Arc<ClientInner>,
}

impl WebhooksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get an event by ID.
    pub async fn get_event(&self, event_id: &str) -> Result<WebhookEvent> {
        let event_id = path_segment(event_id)?;
        ApiRequest::new(
            self.inner.clone(),
            Method::GET,
            &format!("{}/{}", EVENTS_PATH, event_id),
        )
        .send()
        .await
    }

    /// Stream past events across all pages.
    pub fn list_events(&self, query: WebhookEventsQuery) -> PaginatedStream<WebhookEvent> {
        PaginatedStreamBuilder::new(self.inner.clone(), EVENTS_PATH).build_with_query(query)
    }

    /// Ask PayPal to deliver an event to its listeners again.
    pub async fn resend_event(&self, event_id: &str) -> Result<WebhookEvent> {
        let event_id = path_segment(event_id)?;
        ApiRequest::new(
            self.inner.clone(),
            Method::POST,
            &format!("{}/{}/resend", EVENTS_PATH, event_id),
        )
        .json(&serde_json::json!({}))
        .send()
        .await
    }
}
