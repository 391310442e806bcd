//! REST API client for the EXX cryptocurrency exchange
//!
//! This crate provides a thin client for EXX's REST API: public market data
//! and authenticated order management.
//!
//! # Features
//!
//! - **Market Data**: Markets, tickers, order book, recent trades
//! - **Trading**: Place, cancel and query orders
//! - **Account**: Balances
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Requests are signed with
//! HMAC-SHA512 over the key-sorted query string, see [`exx_auth`].
//!
//! # Responses
//!
//! Every endpoint returns the raw JSON payload as a [`serde_json::Value`].
//! Typed views of the documented payloads live in [`types`] and can be
//! obtained with [`ExxRestClient::decode`].
//!
//! Failures are reported as [`RestError::Api`] when the exchange rejected the
//! call (non-2xx status, an `error` field, or a `code` other than the number
//! `100`) and
//! as [`RestError::InvalidResponse`] when the body is not JSON.
//!
//! # Example
//!
//! ```no_run
//! use exx_rest::{Credentials, ExxRestClient, Side};
//! use exx_rest::types::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = ExxRestClient::new()?;
//!     let ticker = client.get_ticker("eth_hsr").await?;
//!     println!("ETH/HSR: {}", ticker);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = ExxRestClient::with_credentials(creds)?;
//!     let order = auth_client
//!         .create_order("eth_hsr", Side::Buy, Decimal::new(12, 4), Decimal::new(10232, 1))
//!         .await?;
//!     println!("Order: {}", order);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Limitations
//!
//! Parameter values are not percent-encoded before signing. Values containing
//! reserved characters (`&`, `=`, spaces, ...) are sent as-is.
//!
//! Every endpoint method is `async` and needs an async runtime such as
//! `tokio`. There is no blocking variant; wrap calls in
//! `Runtime::block_on` from synchronous code.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod response;

// Re-export main types
pub use client::{ClientConfig, ExxRestClient};
pub use error::{RestError, RestResult};
pub use request::{Endpoint, Host, RequestDescriptor};
pub use response::validate_response;

// Re-export auth and shared types
pub use exx_auth::{Credentials, ParamValue, Params};
pub use exx_types as types;
pub use exx_types::Side;
