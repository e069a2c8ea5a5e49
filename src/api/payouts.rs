//! Payouts service (`/v1/payments/payouts`).

use std::sync::Arc;

use reqwest::Method;

use crate::client::{path_segment, ApiRequest, ClientInner};
use crate::models::{Payout, PayoutBatchId, PayoutItemId, PayoutItemResponse, PayoutResponse};
use crate::{Error, Result};

/// PayPal accepts at most this many items in one payout batch.
pub const MAX_PAYOUT_ITEMS: usize = 15_000;

/// Service for batch payouts.
///
/// # Example
///
/// ```no_run
/// use paypal_rs::models::{Payout, PayoutAmount, PayoutItem, SenderBatchHeader};
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: paypal_rs::PayPalClient) -> paypal_rs::Result<()> {
/// let payout = Payout {
///     sender_batch_header: SenderBatchHeader {
///         sender_batch_id: Some("batch-2024-06-01".into()),
///         email_subject: Some("You have a payout!".into()),
///         ..Default::default()
///     },
///     items: vec![PayoutItem::email("seller@example.com", PayoutAmount::new("USD", dec!(12.50)))],
/// };
///
/// let created = client.payouts().create(payout).await?;
/// println!("batch {}", created.batch_header.payout_batch_id);
/// # Ok(())
/// # }
/// ```
pub struct PayoutsService {
    inner: Arc<ClientInner>,
}

impl PayoutsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(self.inner.clone(), method, path)
    }

    /// Create a payout batch.
    ///
    /// The batch is processed asynchronously; the response only carries its
    /// header. Poll [`get`](Self::get) for item results.
    pub async fn create(&self, payout: Payout) -> Result<PayoutResponse> {
        if payout.items.is_empty() {
            return Err(Error::InvalidInput(
                "Payout must contain at least one item".to_string(),
            ));
        }
        if payout.items.len() > MAX_PAYOUT_ITEMS {
            return Err(Error::InvalidInput(format!(
                "Payout has {} items; at most {} are allowed",
                payout.items.len(),
                MAX_PAYOUT_ITEMS
            )));
        }

        self.request(Method::POST, "/v1/payments/payouts")
            .json(&payout)
            .send()
            .await
    }

    /// Get a payout batch with its items.
    pub async fn get(&self, batch_id: &PayoutBatchId) -> Result<PayoutResponse> {
        let batch_id = path_segment(batch_id.as_str())?;
        self.request(Method::GET, &format!("/v1/payments/payouts/{}", batch_id))
            .send()
            .await
    }

    /// Get a single payout item.
    pub async fn get_item(&self, item_id: &PayoutItemId) -> Result<PayoutItemResponse> {
        let item_id = path_segment(item_id.as_str())?;
        self.request(
            Method::GET,
            &format!("/v1/payments/payouts-item/{}", item_id),
        )
        .send()
        .await
    }

    /// Cancel an unclaimed payout item, returning the funds to the sender.
    pub async fn cancel_item(&self, item_id: &PayoutItemId) -> Result<PayoutItemResponse> {
        let item_id = path_segment(item_id.as_str())?;
        self.request(
            Method::POST,
            &format!("/v1/payments/payouts-item/{}/cancel", item_id),
        )
        .send()
        .await
    }
}
