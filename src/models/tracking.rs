//! Shipment tracking information attached to captured transactions.

use serde::{Deserialize, Serialize};

use super::common::Link;
use super::enums::TrackingStatus;

/// Tracking information for one shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracker {
    /// PayPal transaction (capture) ID
    pub transaction_id: String,
    /// Carrier tracking number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    /// Shipment status
    pub status: TrackingStatus,
    /// Carrier code, e.g. `UPS`, or `OTHER`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Carrier name when `carrier` is `OTHER`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_name_other: Option<String>,
    /// Notify the buyer by email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_buyer: Option<bool>,
}

impl Tracker {
    /// A shipped tracker for a transaction.
    pub fn shipped(
        transaction_id: impl Into<String>,
        tracking_number: impl Into<String>,
        carrier: impl Into<String>,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            tracking_number: Some(tracking_number.into()),
            status: TrackingStatus::Shipped,
            carrier: Some(carrier.into()),
            carrier_name_other: None,
            notify_buyer: None,
        }
    }
}

/// Body of `POST /v1/shipping/trackers-batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackersRequest {
    /// Trackers to add
    pub trackers: Vec<Tracker>,
}

/// Error reported for one tracker in a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerError {
    /// Error name
    #[serde(default)]
    pub name: String,
    /// Message
    #[serde(default)]
    pub message: String,
    /// Correlation ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_id: Option<String>,
    /// Documentation link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information_link: Option<String>,
}

/// Identifies a tracker accepted by the batch endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingIdentifier {
    /// Transaction ID
    #[serde(default)]
    pub transaction_id: String,
    /// Tracking number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    /// HATEOAS links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Response of the trackers batch endpoint.
///
/// The batch call succeeds even when single trackers are rejected; those
/// show up in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackersResponse {
    /// Accepted trackers
    #[serde(default, rename = "tracker_identifiers")]
    pub identifiers: Vec<TrackingIdentifier>,
    /// Rejected trackers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<TrackerError>,
    /// HATEOAS links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}
