//! Basic authentication example.
//!
//! This example obtains an access token with the client credentials grant
//! and prints the profile of the account it belongs to.
//!
//! Environment variables:
//! - PAYPAL_CLIENT_ID, PAYPAL_CLIENT_SECRET (required)
//! - PAYPAL_ENVIRONMENT: "sandbox" (default) or "live"
//!
//! Run with: cargo run --example basic_auth

use paypal_rs::PayPalClient;

#[tokio::main]
async fn main() -> paypal_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = PayPalClient::from_env()?;
    println!("Connecting to PayPal {}...", client.environment());

    let token = client.get_access_token().await?;
    println!("Successfully authenticated!");
    println!("  Token type: {}", token.token_type());
    println!("  Expires at: {}", token.expires_at());
    if let Some(app_id) = token.app_id() {
        println!("  App ID:     {}", app_id);
    }

    // The second call is served from the cache
    let again = client.get_access_token().await?;
    assert_eq!(token.expires_at(), again.expires_at());

    match client.identity().user_info().await {
        Ok(info) => {
            println!("\nAccount:");
            println!("  Name:     {}", info.name.as_deref().unwrap_or("-"));
            println!("  Email:    {}", info.email.as_deref().unwrap_or("-"));
            println!("  Payer ID: {}", info.payer_id.as_deref().unwrap_or("-"));
            println!("  Verified: {}", info.verified_account);
        }
        // Apps without the identity scope get a 403 here
        Err(err) => println!("\nUser info unavailable: {}", err),
    }

    println!("\nDone!");
    Ok(())
}
