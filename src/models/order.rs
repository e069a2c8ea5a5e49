//! Checkout order models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{
    find_link, AddressPortable, AmountWithBreakdown, Link, Money, Name, Payee, PayerName,
    PhoneWithType,
};
use super::enums::*;
use super::payment::{Authorization, Capture, Refund};
use super::time::PayPalTime;

/// PayPal rejects orders with more purchase units than this.
pub const MAX_PURCHASE_UNITS: usize = 10;

/// A line item in a purchase unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name
    pub name: String,
    /// Quantity, as a string of digits
    pub quantity: String,
    /// Price of one unit
    pub unit_amount: Money,
    /// Tax for one unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,
    /// Stock keeping unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Physical, digital or donation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ItemCategory>,
}

impl Item {
    /// An item with the required fields set.
    pub fn new(name: impl Into<String>, quantity: u32, unit_amount: Money) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.to_string(),
            unit_amount,
            tax: None,
            sku: None,
            description: None,
            category: None,
        }
    }
}

/// Shipping name and address of a purchase unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetail {
    /// Recipient name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    /// Destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressPortable>,
}

/// A purchase unit as sent when creating an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUnitRequest {
    /// Merchant reference; required when an order has several units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Total amount
    pub amount: AmountWithBreakdown,
    /// Merchant receiving the payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<Payee>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Merchant-side identifier, echoed in reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Merchant invoice number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    /// Text shown on the payer's card statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_descriptor: Option<String>,
    /// Line items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Shipping details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetail>,
}

impl PurchaseUnitRequest {
    /// A purchase unit for the given amount.
    pub fn new(amount: impl Into<AmountWithBreakdown>) -> Self {
        Self {
            reference_id: None,
            amount: amount.into(),
            payee: None,
            description: None,
            custom_id: None,
            invoice_id: None,
            soft_descriptor: None,
            items: Vec::new(),
            shipping: None,
        }
    }

    /// Set the reference ID.
    pub fn reference_id(mut self, id: impl Into<String>) -> Self {
        self.reference_id = Some(id.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the invoice ID.
    pub fn invoice_id(mut self, invoice_id: impl Into<String>) -> Self {
        self.invoice_id = Some(invoice_id.into());
        self
    }

    /// Set the custom ID.
    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    /// Add a line item.
    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Set the shipping details.
    pub fn shipping(mut self, shipping: ShippingDetail) -> Self {
        self.shipping = Some(shipping);
        self
    }
}

/// Payments recorded against a purchase unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseUnitPayments {
    /// Authorizations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authorizations: Vec<Authorization>,
    /// Captures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub captures: Vec<Capture>,
    /// Refunds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refunds: Vec<Refund>,
}

/// A purchase unit as returned on an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseUnit {
    /// Merchant reference
    #[serde(default)]
    pub reference_id: String,
    /// Total amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<AmountWithBreakdown>,
    /// Merchant receiving the payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<Payee>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Merchant-side identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Merchant invoice number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    /// Statement descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_descriptor: Option<String>,
    /// Line items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Shipping details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetail>,
    /// Authorizations, captures and refunds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<PurchaseUnitPayments>,
}

/// Tax identifier of a payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInfo {
    /// Tax ID
    pub tax_id: String,
    /// `BR_CPF` or `BR_CNPJ`
    pub tax_id_type: String,
}

/// The customer paying for an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    /// Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<PayerName>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// PayPal-assigned payer ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,
    /// Phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneWithType>,
    /// Birth date, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Tax information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_info: Option<TaxInfo>,
    /// Address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressPortable>,
}

/// Customizes the payer's experience at PayPal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationContext {
    /// Brand name shown to the payer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    /// BCP-47 locale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Landing page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_page: Option<LandingPage>,
    /// Shipping address source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_preference: Option<ShippingPreference>,
    /// Approval button label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_action: Option<UserAction>,
    /// Where the payer goes after approving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Where the payer goes after cancelling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

/// Billing address of a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBillingAddress {
    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    /// Suite, apartment, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_area_2: Option<String>,
    /// State or province
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_area_1: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country code
    pub country_code: String,
}

/// A payment card used as payment source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSourceCard {
    /// Vault ID of a stored card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Cardholder name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Primary account number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Expiry, `YYYY-MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    /// CVV
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_code: Option<String>,
    /// Last digits (responses only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_digits: Option<String>,
    /// Card brand (responses only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    /// Billing address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<CardBillingAddress>,
}

/// A token used as payment source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSourceToken {
    /// Token ID
    pub id: String,
    /// Token type, e.g. `BILLING_AGREEMENT`
    #[serde(rename = "type")]
    pub token_type: String,
}

/// How an order is paid, when not through the PayPal wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSource {
    /// Card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<PaymentSourceCard>,
    /// Token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<PaymentSourceToken>,
}

/// Body of `POST /v2/checkout/orders`.
///
/// Use [`CreateOrderBuilder`] to build one with validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Capture or authorize
    pub intent: PaymentIntent,
    /// Payer details known up front
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<Payer>,
    /// Purchase units, at least one
    pub purchase_units: Vec<PurchaseUnitRequest>,
    /// Payer experience customization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_context: Option<ApplicationContext>,
}

/// Builder for [`CreateOrderRequest`].
///
/// # Example
///
/// ```
/// use paypal_rs::models::{CreateOrderBuilder, Money, PaymentIntent, PurchaseUnitRequest};
/// use rust_decimal_macros::dec;
///
/// let order = CreateOrderBuilder::new(PaymentIntent::Capture)
///     .purchase_unit(PurchaseUnitRequest::new(Money::new("USD", dec!(25.00))))
///     .build()
///     .unwrap();
/// assert_eq!(order.purchase_units.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CreateOrderBuilder {
    intent: PaymentIntent,
    payer: Option<Payer>,
    purchase_units: Vec<PurchaseUnitRequest>,
    application_context: Option<ApplicationContext>,
}

impl CreateOrderBuilder {
    /// Start an order with the given intent.
    pub fn new(intent: PaymentIntent) -> Self {
        Self {
            intent,
            payer: None,
            purchase_units: Vec::new(),
            application_context: None,
        }
    }

    /// Add a purchase unit.
    pub fn purchase_unit(mut self, unit: PurchaseUnitRequest) -> Self {
        self.purchase_units.push(unit);
        self
    }

    /// Set the payer.
    pub fn payer(mut self, payer: Payer) -> Self {
        self.payer = Some(payer);
        self
    }

    /// Set the application context.
    pub fn application_context(mut self, ctx: ApplicationContext) -> Self {
        self.application_context = Some(ctx);
        self
    }

    /// Build the request, validating purchase units.
    pub fn build(self) -> crate::Result<CreateOrderRequest> {
        if self.purchase_units.is_empty() {
            return Err(crate::Error::InvalidInput(
                "Order must have at least one purchase unit".to_string(),
            ));
        }

        if self.purchase_units.len() > MAX_PURCHASE_UNITS {
            return Err(crate::Error::InvalidInput(format!(
                "Order has {} purchase units; at most {} are allowed",
                self.purchase_units.len(),
                MAX_PURCHASE_UNITS
            )));
        }

        if self.purchase_units.len() > 1
            && self.purchase_units.iter().any(|u| u.reference_id.is_none())
        {
            return Err(crate::Error::InvalidInput(
                "reference_id is required on every purchase unit when there are several"
                    .to_string(),
            ));
        }

        if let Some(unit) = self
            .purchase_units
            .iter()
            .find(|u| u.amount.value < Decimal::ZERO)
        {
            return Err(crate::Error::InvalidInput(format!(
                "Purchase unit amount must not be negative: {}",
                unit.amount.value
            )));
        }

        Ok(CreateOrderRequest {
            intent: self.intent,
            payer: self.payer,
            purchase_units: self.purchase_units,
            application_context: self.application_context,
        })
    }
}

/// A checkout order.
///
/// Also the response shape of the authorize and capture order endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order ID
    #[serde(default)]
    pub id: String,
    /// Status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Intent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<PaymentIntent>,
    /// Payer, once known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<Payer>,
    /// Purchase units
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub purchase_units: Vec<PurchaseUnit>,
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

impl Order {
    /// URL the payer must visit to approve the order.
    pub fn approve_url(&self) -> Option<&str> {
        find_link(&self.links, "approve")
            .or_else(|| find_link(&self.links, "payer-action"))
            .map(|l| l.href.as_str())
    }

    /// All captures across purchase units.
    pub fn captures(&self) -> impl Iterator<Item = &Capture> {
        self.purchase_units
            .iter()
            .filter_map(|u| u.payments.as_ref())
            .flat_map(|p| p.captures.iter())
    }

    /// All authorizations across purchase units.
    pub fn authorizations(&self) -> impl Iterator<Item = &Authorization> {
        self.purchase_units
            .iter()
            .filter_map(|u| u.payments.as_ref())
            .flat_map(|p| p.authorizations.iter())
    }
}

/// Body of `POST /v2/checkout/orders/{id}/authorize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeOrderRequest {
    /// Payment source, when not paying through the wallet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<PaymentSource>,
}

/// Body of `POST /v2/checkout/orders/{id}/capture`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOrderRequest {
    /// Payment source, when not paying through the wallet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<PaymentSource>,
}

/// Response of the authorize order endpoint.
pub type AuthorizeOrderResponse = Order;

/// Response of the capture order endpoint.
pub type CaptureOrderResponse = Order;
