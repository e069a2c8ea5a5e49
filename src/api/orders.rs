//! Orders service for checkout order creation and settlement.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{path_segment, ApiRequest, ClientInner};
use crate::models::{
    AuthorizeOrderRequest, AuthorizeOrderResponse, CaptureOrderRequest, CaptureOrderResponse,
    CreateOrderRequest, Order, OrderId, PatchOperation,
};
use crate::Result;

/// Service for checkout orders (`/v2/checkout/orders`).
///
/// # Example
///
/// ```no_run
/// use paypal_rs::models::{
///     CaptureOrderRequest, CreateOrderBuilder, Money, PaymentIntent, PurchaseUnitRequest,
/// };
/// use paypal_rs::OrderId;
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: paypal_rs::PayPalClient) -> paypal_rs::Result<()> {
/// let order = CreateOrderBuilder::new(PaymentIntent::Capture)
///     .purchase_unit(PurchaseUnitRequest::new(Money::new("USD", dec!(7.00))))
///     .build()?;
///
/// let created = client.orders().create(order).await?;
/// println!("Approve at {:?}", created.approve_url());
///
/// // Once the payer has approved
/// let id = OrderId::new(&created.id);
/// let captured = client.orders().capture(&id, CaptureOrderRequest::default()).await?;
/// println!("{:?}", captured.status);
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(self.inner.clone(), method, path)
    }

    /// Create an order.
    pub async fn create(&self, order: CreateOrderRequest) -> Result<Order> {
        self.request(Method::POST, "/v2/checkout/orders")
            .json(&order)
            .send()
            .await
    }

    /// Create an order with an idempotency key.
    ///
    /// Repeating the call with the same `request_id` returns the order
    /// created by the first call instead of creating another.
    pub async fn create_with_request_id(
        &self,
        order: CreateOrderRequest,
        request_id: &str,
    ) -> Result<Order> {
        self.request(Method::POST, "/v2/checkout/orders")
            .request_id(request_id)
            .json(&order)
            .send()
            .await
    }

    /// Get an order by ID.
    pub async fn get(&self, order_id: &OrderId) -> Result<Order> {
        let id = path_segment(order_id.as_str())?;
        self.request(Method::GET, &format!("/v2/checkout/orders/{}", id))
            .send()
            .await
    }

    /// Update an order with JSON Patch operations.
    ///
    /// Only orders in `CREATED` or `APPROVED` status can be updated.
    pub async fn update(&self, order_id: &OrderId, operations: Vec<PatchOperation>) -> Result<()> {
        let id = path_segment(order_id.as_str())?;
        self.request(Method::PATCH, &format!("/v2/checkout/orders/{}", id))
            .json(&operations)
            .send_empty()
            .await
    }

    /// Authorize payment for an approved order.
    pub async fn authorize(
        &self,
        order_id: &OrderId,
        request: AuthorizeOrderRequest,
    ) -> Result<AuthorizeOrderResponse> {
        let id = path_segment(order_id.as_str())?;
        self.request(Method::POST, &format!("/v2/checkout/orders/{}/authorize", id))
        .json(&request)
        .send()
        .await
    }

    /// Capture payment for an approved order.
    pub async fn capture(
        &self,
        order_id: &OrderId,
        request: CaptureOrderRequest,
    ) -> Result<CaptureOrderResponse> {
        let id = path_segment(order_id.as_str())?;
        self.request(Method::POST, &format!("/v2/checkout/orders/{}/capture", id))
        .json(&request)
        .send()
        .await
    }
}
