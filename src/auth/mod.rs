//! Access tokens for the PayPal REST API.
//!
//! PayPal uses the OAuth2 client-credentials grant: the client ID and secret
//! are exchanged at `POST /v1/oauth2/token` for a bearer token valid for
//! several hours. [`TokenCache`] keeps that token and refreshes it shortly
//! before it expires.
//!
//! The client owns a cache and uses it for every request, so most code never
//! touches this module directly. It is useful to inspect or seed the token:
//!
//! ```no_run
//! use paypal_rs::{PayPalClient, Environment};
//!
//! # async fn example() -> paypal_rs::Result<()> {
//! let client = PayPalClient::new("client-id", "client-secret", Environment::Sandbox)?;
//!
//! let token = client.get_access_token().await?;
//! println!("token valid until {}", token.expires_at());
//! # Ok(())
//! # }
//! ```

mod token;

pub use token::{BearerToken, TokenCache, DEFAULT_REFRESH_MARGIN_SECS, TOKEN_PATH};
