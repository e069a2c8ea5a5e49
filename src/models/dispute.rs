//! Customer disputes (v1).

use serde::{Deserialize, Serialize};

use super::common::{Link, Money, Page};
use super::enums::{DisputeReason, DisputeStage, DisputeStatus, TransactionStatus};
use super::time::PayPalTime;

/// A dispute as it appears in the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisputeSummary {
    /// Dispute ID
    #[serde(default)]
    pub dispute_id: String,
    /// Reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<DisputeReason>,
    /// Status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DisputeStatus>,
    /// Amount in dispute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_amount: Option<Money>,
    /// Lifecycle stage
    #[serde(
        default,
        rename = "dispute_life_cycle_stage",
        skip_serializing_if = "Option::is_none"
    )]
    pub stage: Option<DisputeStage>,
    /// Channel the dispute was raised through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_channel: Option<String>,
    /// HATEOAS links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    /// Creation time
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub create_time: PayPalTime,
    /// Last update time
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub update_time: PayPalTime,
}

/// A page of disputes.
pub type DisputeList = Page<DisputeSummary>;

/// Buyer side of a disputed transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeBuyer {
    /// Buyer name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Seller side of a disputed transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeSeller {
    /// Seller email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Seller merchant ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    /// Seller name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A transaction under dispute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisputeTransaction {
    /// Seller-side transaction ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_transaction_id: Option<String>,
    /// Transaction status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_status: Option<TransactionStatus>,
    /// Invoice number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// Gross amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<Money>,
    /// Buyer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<DisputeBuyer>,
    /// Seller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<DisputeSeller>,
    /// Transaction time
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub create_time: PayPalTime,
}

/// How a dispute was resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeOutcome {
    /// e.g. `RESOLVED_BUYER_FAVOUR`
    #[serde(default)]
    pub outcome_code: String,
    /// Amount refunded to the buyer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_refunded: Option<Money>,
}

/// A message posted on a dispute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisputeMessage {
    /// `BUYER`, `SELLER` or `ARBITER`
    #[serde(default)]
    pub posted_by: String,
    /// When it was posted
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub time_posted: PayPalTime,
    /// Message text
    #[serde(default)]
    pub content: String,
}

/// Details of a service that was not as described.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetails {
    /// Sub-reasons, e.g. `INCOMPLETE`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_reasons: Vec<String>,
    /// Where the service was purchased
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_url: Option<String>,
}

/// Merchandise-specific dispute properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchandiseDisputeProperties {
    /// `PRODUCT` or `SERVICE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    /// Service details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_details: Option<ServiceDetails>,
}

/// Reason-specific extensions of a dispute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeExtensions {
    /// Merchandise properties (the wire name is misspelled by PayPal)
    #[serde(
        default,
        rename = "merchandize_dispute_properties",
        skip_serializing_if = "Option::is_none"
    )]
    pub merchandise_properties: Option<MerchandiseDisputeProperties>,
}

/// Offer made in the course of a dispute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeOffer {
    /// Amount the buyer asks for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_requested_amount: Option<Money>,
}

/// Full dispute details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    /// Dispute ID
    #[serde(default)]
    pub dispute_id: String,
    /// Disputed transactions
    #[serde(default, rename = "disputed_transactions", skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<DisputeTransaction>,
    /// Reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<DisputeReason>,
    /// Status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DisputeStatus>,
    /// Amount in dispute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_amount: Option<Money>,
    /// Outcome, once resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_outcome: Option<DisputeOutcome>,
    /// Lifecycle stage
    #[serde(
        default,
        rename = "dispute_life_cycle_stage",
        skip_serializing_if = "Option::is_none"
    )]
    pub stage: Option<DisputeStage>,
    /// Channel the dispute was raised through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_channel: Option<String>,
    /// Messages between the parties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<DisputeMessage>,
    /// Reason-specific details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<DisputeExtensions>,
    /// Offer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<DisputeOffer>,
    /// HATEOAS links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    /// Creation time
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub create_time: PayPalTime,
    /// Last update time
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub update_time: PayPalTime,
}

/// Filters for listing disputes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisputesQuery {
    /// Only disputes created at or after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<PayPalTime>,
    /// Only disputes on this transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disputed_transaction_id: Option<String>,
    /// `REQUIRED_ACTION`, `UNDER_PAYPAL_REVIEW`, `RESOLVED`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispute_state: Option<String>,
    /// Items per page, at most 50
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Token of the page to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl DisputesQuery {
    /// Restrict to disputes created at or after `start_time`.
    pub fn start_time(mut self, start_time: impl Into<PayPalTime>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Restrict to disputes in the given state.
    pub fn dispute_state(mut self, state: impl Into<String>) -> Self {
        self.dispute_state = Some(state.into());
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_dispute_decodes() {
        let dispute: Dispute = serde_json::from_value(serde_json::json!({
            "dispute_id": "PP-D-4012",
            "create_time": "2019-04-11T04:18:00.000Z",
            "update_time": "2019-04-21T04:19:08.000Z",
            "disputed_transactions": [{
                "seller_transaction_id": "3BC38643YC807283D",
                "create_time": "2019-04-11T04:16:58.000Z",
                "transaction_status": "REVERSED",
                "gross_amount": {"currency_code": "USD", "value": "192.00"},
                "buyer": {"name": "Lupe Justin"},
                "seller": {"email": "merchant@example.com", "merchant_id": "5U29WL78XSAEL", "name": "Lesley Paul"}
            }],
            "reason": "MERCHANDISE_OR_SERVICE_NOT_AS_DESCRIBED",
            "status": "RESOLVED",
            "dispute_amount": {"currency_code": "USD", "value": "96.00"},
            "dispute_outcome": {
                "outcome_code": "RESOLVED_BUYER_FAVOUR",
                "amount_refunded": {"currency_code": "USD", "value": "96.00"}
            },
            "dispute_life_cycle_stage": "CHARGEBACK",
            "dispute_channel": "INTERNAL",
            "messages": [{
                "posted_by": "BUYER",
                "time_posted": "2019-04-11T04:18:04.000Z",
                "content": "SNAD case created through automation"
            }],
            "extensions": {
                "merchandize_dispute_properties": {
                    "issue_type": "SERVICE",
                    "service_details": {"sub_reasons": ["INCOMPLETE"], "purchase_url": "https://ebay.in"}
                }
            },
            "offer": {"buyer_requested_amount": {"currency_code": "USD", "value": "96.00"}},
            "links": [{"href": "https://api.sandbox.paypal.com/v1/customer/disputes/PP-D-4012", "rel": "self", "method": "GET"}]
        }))
        .unwrap();

        assert_eq!(dispute.status, Some(DisputeStatus::Resolved));
        assert_eq!(dispute.stage, Some(DisputeStage::Chargeback));
        assert_eq!(dispute.transactions[0].transaction_status, Some(TransactionStatus::Reversed));
        assert_eq!(dispute.dispute_amount.unwrap().value, dec!(96.00));
        let props = dispute.extensions.unwrap().merchandise_properties.unwrap();
        assert_eq!(props.service_details.unwrap().sub_reasons, vec!["INCOMPLETE"]);
        assert_eq!(dispute.messages[0].posted_by, "BUYER");
    }

    #[test]
    fn test_query_skips_unset_filters() {
        let query = DisputesQuery::default().page_size(10).dispute_state("REQUIRED_ACTION");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({"dispute_state": "REQUIRED_ACTION", "page_size": 10}));
    }
}
