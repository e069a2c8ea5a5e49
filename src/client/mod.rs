//! HTTP client and service layer for the PayPal REST API.
//!
//! This module provides the main entry point [`PayPalClient`] for
//! interacting with the PayPal REST API.
//!
//! # Example
//!
//! ```no_run
//! use paypal_rs::{PayPalClient, Environment};
//! use paypal_rs::models::DisputesQuery;
//!
//! # async fn example() -> paypal_rs::Result<()> {
//! let client = PayPalClient::new("client-id", "client-secret", Environment::Sandbox)?;
//!
//! // First page of open disputes
//! let disputes = client.disputes().list(DisputesQuery::default()).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;

pub use config::ClientConfig;
pub use http::{ApiRequest, PayPalClient};
pub use paginated::PaginatedStream;
pub(crate) use http::{path_segment, resolve_url, ClientInner};
