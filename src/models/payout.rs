//! Payouts (v1): sending money to many recipients in one batch.

use serde::{Deserialize, Serialize};

use super::common::{Link, PayoutAmount};
use super::enums::{BatchStatus, RecipientType, TransactionStatus};
use super::time::PayPalTime;

/// Header set by the sender on a payout batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderBatchHeader {
    /// Subject of the notification email recipients get
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    /// Message of the notification email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
    /// Sender-side batch ID; PayPal rejects duplicates within 30 days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_batch_id: Option<String>,
    /// Default recipient type for items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<RecipientType>,
}

/// One payment in a payout batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutItem {
    /// How `receiver` is interpreted
    pub recipient_type: RecipientType,
    /// Email, phone or PayPal ID of the recipient
    pub receiver: String,
    /// Amount to send
    pub amount: PayoutAmount,
    /// Note to the recipient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Sender-side item ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_item_id: Option<String>,
}

impl PayoutItem {
    /// A payout to an email address.
    pub fn email(receiver: impl Into<String>, amount: PayoutAmount) -> Self {
        Self {
            recipient_type: RecipientType::Email,
            receiver: receiver.into(),
            amount,
            note: None,
            sender_item_id: None,
        }
    }

    /// Set the note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the sender item ID.
    pub fn sender_item_id(mut self, id: impl Into<String>) -> Self {
        self.sender_item_id = Some(id.into());
        self
    }
}

/// Body of `POST /v1/payments/payouts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    /// Batch header
    pub sender_batch_header: SenderBatchHeader,
    /// Items
    pub items: Vec<PayoutItem>,
}

/// Header of a payout batch as reported by PayPal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchHeader {
    /// Batch ID
    #[serde(default)]
    pub payout_batch_id: String,
    /// Batch status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_status: Option<BatchStatus>,
    /// Total amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<PayoutAmount>,
    /// Total fees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<PayoutAmount>,
    /// When the batch was created
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub time_created: PayPalTime,
    /// When the batch finished processing
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub time_completed: PayPalTime,
    /// Header as sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_batch_header: Option<SenderBatchHeader>,
}

/// Error attached to a failed payout item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutItemError {
    /// Error name
    #[serde(default)]
    pub name: String,
    /// Message
    #[serde(default)]
    pub message: String,
    /// Documentation link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information_link: Option<String>,
}

/// A payout item as reported by PayPal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutItemResponse {
    /// Item ID
    #[serde(default)]
    pub payout_item_id: String,
    /// Transaction ID, once one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Item status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_status: Option<TransactionStatus>,
    /// Parent batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_batch_id: Option<String>,
    /// Fee for this item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_item_fee: Option<PayoutAmount>,
    /// Item as sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_item: Option<PayoutItem>,
    /// When the item was processed
    #[serde(default, skip_serializing_if = "PayPalTime::is_zero")]
    pub time_processed: PayPalTime,
    /// Failure details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<PayoutItemError>,
    /// HATEOAS links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// A payout batch with its items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutResponse {
    /// Batch header
    pub batch_header: BatchHeader,
    /// Items; empty in the create response
    #[serde(default)]
    pub items: Vec<PayoutItemResponse>,
    /// HATEOAS links
    #[serde(default)]
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payout_wire_shape() {
        let payout = Payout {
            sender_batch_header: SenderBatchHeader {
                sender_batch_id: Some("batch-2024-01".into()),
                email_subject: Some("You have a payout".into()),
                ..Default::default()
            },
            items: vec![PayoutItem::email(
                "receiver@example.com",
                PayoutAmount::new("USD", dec!(9.87)),
            )
            .note("Thanks")],
        };

        let json = serde_json::to_value(&payout).unwrap();
        assert_eq!(json["items"][0]["recipient_type"], "EMAIL");
        assert_eq!(json["items"][0]["amount"]["currency"], "USD");
        assert_eq!(json["items"][0]["amount"]["value"], "9.87");
    }

    #[test]
    fn test_payout_response_decodes() {
        let resp: PayoutResponse = serde_json::from_value(serde_json::json!({
            "batch_header": {
                "payout_batch_id": "FYXMPQTX4JC9N",
                "batch_status": "PENDING",
                "time_created": "2014-01-27T10:17:00Z",
                "sender_batch_header": {"sender_batch_id": "batch-2024-01"}
            },
            "links": [
                {"href": "https://api-m.sandbox.paypal.com/v1/payments/payouts/FYXMPQTX4JC9N", "rel": "self", "method": "GET"}
            ]
        }))
        .unwrap();

        assert_eq!(resp.batch_header.batch_status, Some(BatchStatus::Pending));
        assert!(resp.items.is_empty());
        assert!(!resp.batch_header.time_created.is_zero());
        assert!(resp.batch_header.time_completed.is_zero());
    }
}
