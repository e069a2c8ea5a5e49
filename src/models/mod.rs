//! Data models for the PayPal REST API.
//!
//! These are the wire shapes of the endpoints this crate wraps, organized by
//! resource:
//!
//! - [`primitives`] - Identifier newtypes, `Environment`, `Prefer`
//! - [`time`] - `PayPalTime`, the lenient timestamp type
//! - [`enums`] - Status and option enums
//! - [`common`] - Money, links, addresses and other shared shapes
//! - [`order`] - Checkout orders
//! - [`payment`] - Authorizations, captures and refunds
//! - [`payout`] - Payout batches
//! - [`dispute`] - Customer disputes
//! - [`tracking`] - Shipment trackers
//! - [`webhook`] - Webhook events
//! - [`referral`] - Partner referrals
//! - [`identity`] - User info

pub mod primitives;
pub mod time;
pub mod enums;
pub mod common;
pub mod order;
pub mod payment;
pub mod payout;
pub mod dispute;
pub mod tracking;
pub mod webhook;
pub mod referral;
pub mod identity;

// Re-export commonly used types
pub use primitives::*;
pub use time::*;
pub use enums::*;
pub use common::*;
pub use order::*;
pub use payment::*;
pub use payout::*;
pub use dispute::*;
pub use tracking::*;
pub use webhook::*;
pub use referral::*;
pub use identity::*;
