//! Public market data payloads

use crate::enums::Side;
use crate::level::{deserialize_decimal, BookLevel};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Trading rules for one market, keyed by pair in the `markets` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInfo {
    /// Decimal places allowed in order amounts
    pub amount_scale: u32,
    /// Decimal places allowed in order prices
    pub price_scale: u32,
    /// Maximum leverage levels (0 when margin is disabled)
    pub max_levels: u32,
    /// Whether the market is open for trading
    pub is_open: bool,
}

/// All markets, keyed by pair (e.g. `eth_hsr`)
pub type Markets = HashMap<String, MarketInfo>;

/// 24h ticker statistics
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerInfo {
    /// 24h volume
    #[serde(deserialize_with = "deserialize_decimal")]
    pub vol: Decimal,
    /// Last trade price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub last: Decimal,
    /// Best ask
    #[serde(deserialize_with = "deserialize_decimal")]
    pub sell: Decimal,
    /// Best bid
    #[serde(deserialize_with = "deserialize_decimal")]
    pub buy: Decimal,
    /// 24h high
    #[serde(deserialize_with = "deserialize_decimal")]
    pub high: Decimal,
    /// 24h low
    #[serde(deserialize_with = "deserialize_decimal")]
    pub low: Decimal,
    /// 24h change in percent
    #[serde(deserialize_with = "deserialize_decimal")]
    pub rise_rate: Decimal,
    /// 7d change in percent
    #[serde(deserialize_with = "deserialize_decimal")]
    pub week_rise_rate: Decimal,
    /// 30d change in percent
    #[serde(deserialize_with = "deserialize_decimal")]
    pub month_rise_rate: Decimal,
}

impl TickerInfo {
    /// Mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Decimal {
        (self.buy + self.sell) / Decimal::TWO
    }

    /// Spread between best ask and best bid
    pub fn spread(&self) -> Decimal {
        self.sell - self.buy
    }
}

/// All tickers, keyed by pair
pub type Tickers = HashMap<String, TickerInfo>;

/// Response of the single-pair `ticker` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TickerResponse {
    /// Ticker statistics
    pub ticker: TickerInfo,
    /// Server timestamp in milliseconds, sent as a string
    pub date: String,
}

/// Order book snapshot from the `depth` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderBook {
    /// Ask levels
    pub asks: Vec<BookLevel>,
    /// Bid levels
    pub bids: Vec<BookLevel>,
    /// Snapshot timestamp
    #[serde(default)]
    pub timestamp: Option<u64>,
}

impl OrderBook {
    /// Lowest ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.iter().map(BookLevel::price).min()
    }

    /// Highest bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.iter().map(BookLevel::price).max()
    }
}

/// A public trade from the `trades` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trade {
    /// Traded amount
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: Decimal,
    /// Trade price
    #[serde(deserialize_with = "deserialize_decimal")]
    pub price: Decimal,
    /// Trade ID
    pub tid: u64,
    /// Taker side
    #[serde(rename = "type")]
    pub side: Side,
    /// Trade time
    pub date: u64,
    /// Book side that was hit (`ask` / `bid`)
    pub trade_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_markets_decode() {
        let json = r#"{
            "eos_btc": {"amountScale": 2, "priceScale": 6, "maxLevels": 0, "isOpen": false},
            "etc_hsr": {"amountScale": 3, "priceScale": 3, "maxLevels": 0, "isOpen": true}
        }"#;
        let markets: Markets = serde_json::from_str(json).unwrap();

        assert_eq!(markets.len(), 2);
        assert!(markets["etc_hsr"].is_open);
        assert_eq!(markets["eos_btc"].price_scale, 6);
    }

    #[test]
    fn test_ticker_response_with_string_prices() {
        let json = r#"{
            "ticker": {
                "vol": "1447.851",
                "last": "30.487000000",
                "sell": "30.499",
                "buy": "30.487",
                "weekRiseRate": -1.17,
                "riseRate": 9.45,
                "high": "30.812",
                "low": "27.855",
                "monthRiseRate": -0.99
            },
            "date": "1510383406453"
        }"#;
        let response: TickerResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.ticker.buy, dec!(30.487));
        assert_eq!(response.ticker.week_rise_rate, dec!(-1.17));
        assert_eq!(response.ticker.spread(), dec!(0.012));
        assert_eq!(response.date, "1510383406453");
    }

    #[test]
    fn test_tickers_with_numeric_prices() {
        let json = r#"{
            "bts_btc": {
                "vol": 0.0, "last": 0, "sell": 0.0, "buy": 0.0,
                "weekRiseRate": 0.0, "riseRate": 0.0, "high": 0.0, "low": 0,
                "monthRiseRate": 0.0
            }
        }"#;
        let tickers: Tickers = serde_json::from_str(json).unwrap();
        assert_eq!(tickers["bts_btc"].last, Decimal::ZERO);
    }

    #[test]
    fn test_order_book_best_prices() {
        let json = r#"{
            "asks": [["32.831", "0.083"], ["32.900", "1.0"]],
            "bids": [["30.434", "10.766"], ["30.100", "2.5"]],
            "timestamp": 1510383406
        }"#;
        let book: OrderBook = serde_json::from_str(json).unwrap();

        assert_eq!(book.best_ask(), Some(dec!(32.831)));
        assert_eq!(book.best_bid(), Some(dec!(30.434)));
        assert_eq!(book.timestamp, Some(1510383406));
    }

    #[test]
    fn test_trade_decode() {
        let json = r#"{
            "amount": 0.933, "price": 31.595, "tid": 2583932,
            "type": "sell", "date": 2583932, "trade_type": "ask"
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();

        assert_eq!(trade.side, Side::Sell);
        assert_eq!(trade.price, dec!(31.595));
        assert_eq!(trade.trade_type, "ask");
    }
}
