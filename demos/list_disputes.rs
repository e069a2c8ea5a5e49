//! Walk every open dispute and print a summary line for each.
//!
//! Run with: cargo run --example list_disputes

use futures_util::StreamExt;
use paypal_rs::models::DisputesQuery;
use paypal_rs::PayPalClient;

#[tokio::main]
async fn main() -> paypal_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = PayPalClient::from_env()?;

    let since = chrono::Utc::now() - chrono::Duration::days(90);
    let query = DisputesQuery::default().start_time(since).page_size(20);

    let mut stream = client.disputes().list_stream(query);
    let mut count = 0;

    while let Some(result) = stream.next().await {
        let dispute = result?;
        count += 1;
        println!(
            "{:<22} {:<28} {:>10} {}",
            dispute.dispute_id,
            format!("{:?}", dispute.status),
            dispute
                .dispute_amount
                .as_ref()
                .map(|m| format!("{} {}", m.value, m.currency_code))
                .unwrap_or_default(),
            dispute.create_time,
        );
    }

    println!("\n{} dispute(s) in the last 90 days", count);
    Ok(())
}
