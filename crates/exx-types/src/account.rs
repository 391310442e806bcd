//! Private trading and account payloads

use crate::enums::Side;
use crate::level::deserialize_decimal;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Acknowledgement returned by `order` and `cancel`
///
/// `code` is the number `100` on success. It is kept as raw JSON because the
/// exchange may also send it as a string, which the client rejects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderAck {
    /// Result code
    pub code: serde_json::Value,
    /// Human-readable result message
    #[serde(default)]
    pub message: String,
    /// ID of the created order (absent for cancellations)
    #[serde(default)]
    pub id: Option<String>,
}

/// Order details from `getOrder` and `getOpenOrders`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Order {
    /// Order ID
    pub id: String,
    /// Trading pair
    pub currency: String,
    /// Order side
    #[serde(rename = "type")]
    pub side: Side,
    /// Limit price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub price: Decimal,
    /// Original amount
    #[serde(deserialize_with = "deserialize_decimal")]
    pub total_amount: Decimal,
    /// Filled amount
    #[serde(deserialize_with = "deserialize_decimal")]
    pub trade_amount: Decimal,
    /// Filled notional
    #[serde(deserialize_with = "deserialize_decimal")]
    pub trade_money: Decimal,
    /// Fees paid
    #[serde(deserialize_with = "deserialize_decimal")]
    pub fees: Decimal,
    /// Order time in milliseconds
    pub trade_date: u64,
    /// Exchange status code
    pub status: i32,
}

impl Order {
    /// Amount still open on the book
    pub fn remaining_amount(&self) -> Decimal {
        self.total_amount - self.trade_amount
    }
}

/// Balance of one asset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    /// Total holdings
    #[serde(deserialize_with = "deserialize_decimal")]
    pub total: Decimal,
    /// Amount locked in open orders
    #[serde(deserialize_with = "deserialize_decimal")]
    pub freeze: Decimal,
    /// Available amount
    #[serde(deserialize_with = "deserialize_decimal")]
    pub balance: Decimal,
    /// Asset symbol
    pub prop_tag: String,
    /// Margin credit limit
    #[serde(rename = "credit_quota", deserialize_with = "deserialize_decimal")]
    pub credit_quota: Decimal,
    /// Margin credit in use
    #[serde(rename = "credit_borrowed", deserialize_with = "deserialize_decimal")]
    pub credit_borrowed: Decimal,
    /// Accrued margin interest
    #[serde(rename = "credit_interest", deserialize_with = "deserialize_decimal")]
    pub credit_interest: Decimal,
}

/// Margin credit settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credit {
    /// Margin ratio at which positions are liquidated
    #[serde(deserialize_with = "deserialize_decimal")]
    pub flat_ratio: Decimal,
    /// Current margin ratio of the account
    #[serde(deserialize_with = "deserialize_decimal")]
    pub user_ratio: Decimal,
    /// Margin ratio at which a warning is issued
    #[serde(deserialize_with = "deserialize_decimal")]
    pub notice_ratio: Decimal,
    /// Leverage level
    pub levels: u32,
    /// Liquidation price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub flat_price: Decimal,
}

/// Response of `getBalance`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Balance {
    /// Margin credit settings
    #[serde(default)]
    pub credits: Vec<Credit>,
    /// Per-asset balances keyed by asset symbol
    pub funds: HashMap<String, Fund>,
}

impl Balance {
    /// Available balance for an asset, if the account holds it
    pub fn available(&self, asset: &str) -> Option<Decimal> {
        self.funds.get(asset).map(|fund| fund.balance)
    }
}
