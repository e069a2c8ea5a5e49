//! # paypal-rs
//!
//! An async Rust client for the PayPal REST API.
//!
//! This crate covers checkout orders, authorizations, captures and refunds,
//! payouts, disputes, shipment tracking, webhook events, partner referrals
//! and the identity API.
//!
//! ## Features
//!
//! - **Authentication**: OAuth2 client credentials with a shared token cache
//!   that refreshes a minute before expiry
//! - **Checkout**: Create, update, authorize and capture orders
//! - **Payments**: Capture, void and reauthorize authorizations; refund captures
//! - **Payouts**: Batch payouts and per-item status
//! - **Disputes and webhooks**: Paginated listings as lazy streams
//! - **Type Safety**: Strongly-typed models and identifier newtypes
//! - **Lenient timestamps**: [`PayPalTime`](models::PayPalTime) accepts every
//!   timestamp layout PayPal emits
//! - **Async-first**: Built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paypal_rs::{PayPalClient, Environment};
//! use paypal_rs::models::{CreateOrderBuilder, Money, PaymentIntent, PurchaseUnitRequest};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> paypal_rs::Result<()> {
//!     let client = PayPalClient::new("client-id", "client-secret", Environment::Sandbox)?;
//!
//!     let order = CreateOrderBuilder::new(PaymentIntent::Capture)
//!         .purchase_unit(
//!             PurchaseUnitRequest::new(Money::new("USD", dec!(19.99)))
//!                 .description("Blue mug"),
//!         )
//!         .build()?;
//!
//!     let created = client.orders().create(order).await?;
//!     println!("Order {} created, approve at {:?}", created.id, created.approve_url());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use paypal_rs::{Error, OrderId, PayPalClient};
//!
//! # async fn example(client: PayPalClient) {
//! match client.orders().get(&OrderId::new("UNKNOWN")).await {
//!     Ok(order) => println!("{:?}", order.status),
//!     Err(err) if err.is_not_found() => println!("no such order"),
//!     Err(Error::Api { name, debug_id, .. }) => println!("{} (debug id {:?})", name, debug_id),
//!     Err(err) => println!("request failed: {}", err),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, ErrorDetail, Result};
pub use models::{
    AuthorizationId, CaptureId, DisputeId, Environment, OrderId, PayPalTime, PayoutBatchId,
    PayoutItemId, Prefer, RefundId,
};
pub use client::{ApiRequest, ClientConfig, PayPalClient};
pub use auth::{BearerToken, TokenCache};

/// Prelude module for convenient imports.
///
/// ```rust
/// use paypal_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        AuthorizationId, CaptureId, DisputeId, Environment, OrderId, PayoutBatchId,
        PayoutItemId, Prefer, RefundId, PayPalTime,
        // Enums
        AuthorizationStatus, CaptureStatus, DisputeStatus, OrderStatus, PaymentIntent,
        RefundStatus,
        // Common
        AmountWithBreakdown, Link, Money, Page, PatchOperation, PayoutAmount,
        // Orders and payments
        AuthorizeOrderRequest, Authorization, CaptureOrderRequest, Capture,
        CreateOrderBuilder, CreateOrderRequest, Item, Order, PaymentCaptureRequest,
        PurchaseUnitRequest, Refund, RefundRequest,
        // Other resources
        Dispute, DisputeSummary, DisputesQuery, Payout, PayoutItem, PayoutResponse,
        Tracker, TrackersRequest, UserInfo, WebhookEvent, WebhookEventsQuery,
    };
    pub use crate::client::{ClientConfig, PaginatedStream, PayPalClient};
    pub use crate::auth::BearerToken;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_creation() {
        let id = OrderId::new("5O190127TN364715T");
        assert_eq!(id.as_str(), "5O190127TN364715T");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(Environment::Live.api_base_url(), "https://api-m.paypal.com");
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://api-m.sandbox.paypal.com"
        );
    }

    #[test]
    fn test_timestamp_error_converts() {
        let err: Error = PayPalTime::parse("not-a-date").unwrap_err().into();
        assert!(matches!(err, Error::Timestamp(_)));
        assert!(err.is_client_error());
    }
}
