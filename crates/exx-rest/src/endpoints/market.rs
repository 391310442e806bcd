//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use super::require;
use crate::client::ExxRestClient;
use crate::error::RestResult;
use crate::request::Endpoint;
use exx_auth::Params;
use serde_json::Value;
use tracing::{debug, instrument};

pub const MARKETS: Endpoint = Endpoint::public("markets");
pub const TICKERS: Endpoint = Endpoint::public("tickers");
pub const TICKER: Endpoint = Endpoint::public("ticker");
pub const DEPTH: Endpoint = Endpoint::public("depth");
pub const TRADES: Endpoint = Endpoint::public("trades");

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a ExxRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a ExxRestClient) -> Self {
        Self { client }
    }

    /// List all markets
    ///
    /// Returns a map of pair to trading rules, see [`exx_types::MarketInfo`].
    #[instrument(skip(self))]
    pub async fn get_markets(&self) -> RestResult<Value> {
        debug!("Fetching markets");
        self.client.execute(&MARKETS, Params::new()).await
    }

    /// Get tickers for all markets
    ///
    /// Returns a map of pair to [`exx_types::TickerInfo`].
    #[instrument(skip(self))]
    pub async fn get_tickers(&self) -> RestResult<Value> {
        debug!("Fetching all tickers");
        self.client.execute(&TICKERS, Params::new()).await
    }

    /// Get the ticker for a trading pair
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "eth_hsr")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, symbol: &str) -> RestResult<Value> {
        debug!("Fetching ticker for {}", symbol);
        self.client.execute(&TICKER, pair_params(symbol)?).await
    }

    /// Get the bids and asks for a trading pair
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, symbol: &str) -> RestResult<Value> {
        debug!("Fetching order book for {}", symbol);
        self.client.execute(&DEPTH, pair_params(symbol)?).await
    }

    /// Get recent trades for a trading pair
    #[instrument(skip(self))]
    pub async fn get_market_trades(&self, symbol: &str) -> RestResult<Value> {
        debug!("Fetching recent trades for {}", symbol);
        self.client.execute(&TRADES, pair_params(symbol)?).await
    }
}

fn pair_params(symbol: &str) -> RestResult<Params> {
    Ok(Params::new().with("currency", require("symbol", symbol)?))
}
