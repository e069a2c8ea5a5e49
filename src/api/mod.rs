//! API service modules for PayPal REST endpoints.
//!
//! Each service provides methods for interacting with one resource of the
//! PayPal REST API. Services are obtained from [`PayPalClient`](crate::PayPalClient)
//! and share its token cache.

mod disputes;
mod identity;
mod orders;
mod payments;
mod payouts;
mod referrals;
mod tracking;
mod webhooks;

pub use disputes::DisputesService;
pub use identity::IdentityService;
pub use orders::OrdersService;
pub use payments::{AuthorizationsService, CapturesService, RefundsService};
pub use payouts::{PayoutsService, MAX_PAYOUT_ITEMS};
pub use referrals::PartnerReferralsService;
pub use tracking::TrackingService;
pub use webhooks::WebhooksService;
