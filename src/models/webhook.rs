//! Webhook event notifications.
//!
//! PayPal posts events to a registered listener URL. [`WebhookEvent::parse`]
//! decodes such a body; the resource it carries is left as raw JSON until the
//! caller asks for a concrete type with [`WebhookEvent::resource_as`].
//!
//! Signatures are not verified here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::common::Link;
use super::enums::WebhookResourceType;
use super::time::PayPalTime;

/// Well-known values of [`WebhookEvent::event_type`].
pub mod event_types {
    /// An order was approved by the payer.
    pub const CHECKOUT_ORDER_APPROVED: &str = "CHECKOUT.ORDER.APPROVED";
    /// An order was completed.
    pub const CHECKOUT_ORDER_COMPLETED: &str = "CHECKOUT.ORDER.COMPLETED";
    /// A payment was authorized.
    pub const PAYMENT_AUTHORIZATION_CREATED: &str = "PAYMENT.AUTHORIZATION.CREATED";
    /// An authorization was voided.
    pub const PAYMENT_AUTHORIZATION_VOIDED: &str = "PAYMENT.AUTHORIZATION.VOIDED";
    /// A capture completed.
    pub const PAYMENT_CAPTURE_COMPLETED: &str = "PAYMENT.CAPTURE.COMPLETED";
    /// A capture was denied.
    pub const PAYMENT_CAPTURE_DENIED: &str = "PAYMENT.CAPTURE.DENIED";
    /// A capture is pending.
    pub const PAYMENT_CAPTURE_PENDING: &str = "PAYMENT.CAPTURE.PENDING";
    /// A capture was refunded.
    pub const PAYMENT_CAPTURE_REFUNDED: &str = "PAYMENT.CAPTURE.REFUNDED";
    /// A capture was reversed.
    pub const PAYMENT_CAPTURE_REVERSED: &str = "PAYMENT.CAPTURE.REVERSED";
    /// A payout batch was processed.
    pub const PAYMENT_PAYOUTSBATCH_SUCCESS: &str = "PAYMENT.PAYOUTSBATCH.SUCCESS";
    /// A dispute was opened.
    pub const CUSTOMER_DISPUTE_CREATED: &str = "CUSTOMER.DISPUTE.CREATED";
    /// A dispute was resolved.
    pub const CUSTOMER_DISPUTE_RESOLVED: &str = "CUSTOMER.DISPUTE.RESOLVED";
    /// A dispute was updated.
    pub const CUSTOMER_DISPUTE_UPDATED: &str = "CUSTOMER.DISPUTE.UPDATED";
    /// A merchant finished partner onboarding.
    pub const MERCHANT_ONBOARDING_COMPLETED: &str = "MERCHANT.ONBOARDING.COMPLETED";
    /// A partner consent was revoked.
    pub const MERCHANT_PARTNER_CONSENT_REVOKED: &str = "MERCHANT.PARTNER-CONSENT.REVOKED";
}

/// A webhook event notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event ID
    #[serde(default)]
    pub id: String,
    /// When the event was created
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub create_time: PayPalTime,
    /// Kind of resource carried
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<WebhookResourceType>,
    /// Event type, see [`event_types`]
    #[serde(default)]
    pub event_type: String,
    /// Human-readable summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// The resource that triggered the event, as raw JSON
    #[serde(default)]
    pub resource: serde_json::Value,
    /// Event schema version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_version: Option<String>,
    /// Resource schema version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    /// HATEOAS links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl WebhookEvent {
    /// Decode a webhook request body.
    pub fn parse(body: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Decode the carried resource into a concrete type, e.g.
    /// [`Capture`](super::Capture) for `PAYMENT.CAPTURE.*` events.
    pub fn resource_as<T: DeserializeOwned>(&self) -> crate::Result<T> {
        Ok(T::deserialize(&self.resource)?)
    }

    /// Returns `true` if the event has the given type.
    pub fn is(&self, event_type: &str) -> bool {
        self.event_type == event_type
    }
}

/// A page of webhook events.
pub type WebhookEventList = super::common::Page<WebhookEvent>;

/// Filters for listing webhook events.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WebhookEventsQuery {
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Only events created at or after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<PayPalTime>,
    /// Only events created before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<PayPalTime>,
    /// Only events for this transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Only events of this type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Capture, CaptureStatus};

    const BODY: &str = r#"{
        "id": "WH-58D329510W468432D-8HN650336L201105X",
        "create_time": "2019-02-14T21:50:07.940Z",
        "resource_type": "capture",
        "event_type": "PAYMENT.CAPTURE.COMPLETED",
        "summary": "Payment completed for $ 2.51 USD",
        "resource": {
            "id": "27M47624FP291604U",
            "status": "COMPLETED",
            "amount": {"currency_code": "USD", "value": "2.51"},
            "final_capture": true,
            "create_time": "2019-02-14T21:49:58Z",
            "update_time": "2019-02-14T21:49:58Z"
        },
        "event_version": "1.0",
        "resource_version": "2.0",
        "links": [
            {"href": "https://api.paypal.com/v1/notifications/webhooks-events/WH-58D329510W468432D-8HN650336L201105X", "rel": "self", "method": "GET"}
        ]
    }"#;

    #[test]
    fn test_parse_capture_event() {
        let event = WebhookEvent::parse(BODY.as_bytes()).unwrap();
        assert!(event.is(event_types::PAYMENT_CAPTURE_COMPLETED));
        assert_eq!(event.resource_type, Some(WebhookResourceType::Capture));

        let capture: Capture = event.resource_as().unwrap();
        assert_eq!(capture.id, "27M47624FP291604U");
        assert_eq!(capture.status, Some(CaptureStatus::Completed));
    }

    #[test]
    fn test_unknown_resource_type_is_tolerated() {
        let event = WebhookEvent::parse(
            br#"{"id":"WH-1","event_type":"BILLING.SUBSCRIPTION.CREATED","resource_type":"subscription","resource":{}}"#,
        )
        .unwrap();
        assert_eq!(event.resource_type, Some(WebhookResourceType::Unknown));
    }

    #[test]
    fn test_malformed_body_is_json_error() {
        let err = WebhookEvent::parse(b"not json").unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }
}
