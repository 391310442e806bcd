//! Shared types for the EXX exchange REST API
//!
//! The REST client returns raw [`serde_json::Value`] payloads. The structs in
//! this crate describe the documented shape of those payloads and can be
//! decoded from them when a typed view is more convenient.
//!
//! # Key Types
//!
//! - [`Side`] - Order side (`buy` / `sell`)
//! - [`MarketInfo`], [`TickerInfo`], [`OrderBook`], [`Trade`] - Public market data
//! - [`Order`], [`OrderAck`], [`Balance`] - Private account and trading data

pub mod account;
pub mod enums;
pub mod level;
pub mod market;

// Re-export commonly used types
pub use account::*;
pub use enums::*;
pub use level::*;
pub use market::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
