//! Checkout example.
//!
//! Creates an order, waits for the buyer to approve it in a browser and then
//! captures the payment.
//!
//! Run with: cargo run --example create_order

use std::io::BufRead;

use paypal_rs::models::{
    CaptureOrderRequest, CreateOrderBuilder, Item, Money, PaymentIntent, PurchaseUnitRequest,
};
use paypal_rs::{OrderId, PayPalClient};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> paypal_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = PayPalClient::from_env()?;

    let order = CreateOrderBuilder::new(PaymentIntent::Capture)
        .purchase_unit(
            PurchaseUnitRequest::new(Money::new("USD", dec!(24.00)))
                .reference_id("mugs")
                .description("Two blue mugs")
                .item(Item::new("Blue mug", 2, Money::new("USD", dec!(12.00)))),
        )
        .build()?;

    let created = client
        .orders()
        .create_with_request_id(order, &format!("demo-{}", chrono::Utc::now().timestamp()))
        .await?;

    println!("Created order {} ({:?})", created.id, created.status);
    match created.approve_url() {
        Some(url) => println!("Approve it at:\n  {}", url),
        None => println!("PayPal returned no approval link"),
    }

    println!("\nPress enter once the order is approved...");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).ok();

    let order_id = OrderId::new(&created.id);
    match client
        .orders()
        .capture(&order_id, CaptureOrderRequest::default())
        .await
    {
        Ok(order) => {
            for capture in order.captures() {
                println!(
                    "Captured {} {:?} ({:?})",
                    capture.id,
                    capture.amount.as_ref().map(|m| m.value),
                    capture.status
                );
            }
        }
        Err(err) => {
            println!("Capture failed: {}", err);
            for detail in err.api_details() {
                println!("  {}: {}", detail.issue, detail.description.as_deref().unwrap_or(""));
            }
        }
    }

    Ok(())
}
