//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use super::require;
use crate::client::ExxRestClient;
use crate::error::RestResult;
use crate::request::Endpoint;
use exx_auth::Params;
use exx_types::{Decimal, Side};
use serde_json::Value;
use tracing::{debug, instrument};

pub const ORDER: Endpoint = Endpoint::private("order");
pub const CANCEL: Endpoint = Endpoint::private("cancel");
pub const GET_ORDER: Endpoint = Endpoint::private("getOrder");
pub const GET_OPEN_ORDERS: Endpoint = Endpoint::private("getOpenOrders");

/// First page of `getOpenOrders`
pub const DEFAULT_PAGE_INDEX: u32 = 1;

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a ExxRestClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a ExxRestClient) -> Self {
        Self { client }
    }

    /// Place a limit order
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "eth_hsr")
    /// * `side` - Buy or sell
    /// * `price` - Limit price
    /// * `amount` - Order amount
    ///
    /// # Returns
    /// Acknowledgement with the new order ID, see [`exx_types::OrderAck`]
    #[instrument(skip(self))]
    pub async fn create_order(
        &self,
        symbol: &str,
        side: Side,
        price: Decimal,
        amount: Decimal,
    ) -> RestResult<Value> {
        let params = create_order_params(symbol, side, price, amount)?;
        debug!("Placing {} order for {} {} @ {}", side, amount, symbol, price);
        self.client.execute(&ORDER, params).await
    }

    /// Cancel an order
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `order_id` - ID of the order to cancel
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, symbol: &str, order_id: &str) -> RestResult<Value> {
        let params = order_params(symbol, order_id)?;
        debug!("Cancelling order {}", order_id);
        self.client.execute(&CANCEL, params).await
    }

    /// Get an order
    ///
    /// Returns the order details, see [`exx_types::Order`].
    #[instrument(skip(self))]
    pub async fn get_order(&self, symbol: &str, order_id: &str) -> RestResult<Value> {
        let params = order_params(symbol, order_id)?;
        debug!("Fetching order {}", order_id);
        self.client.execute(&GET_ORDER, params).await
    }

    /// List open orders, 10 at a time
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `side` - Only orders of this side; all orders when `None`
    /// * `page` - Page index starting at 1; `None` means the first page
    #[instrument(skip(self))]
    pub async fn get_open_orders(
        &self,
        symbol: &str,
        side: Option<Side>,
        page: Option<u32>,
    ) -> RestResult<Value> {
        let params = open_orders_params(symbol, side, page)?;
        debug!("Fetching open orders for {}", symbol);
        self.client.execute(&GET_OPEN_ORDERS, params).await
    }
}

fn create_order_params(
    symbol: &str,
    side: Side,
    price: Decimal,
    amount: Decimal,
) -> RestResult<Params> {
    Ok(Params::new()
        .with("currency", require("symbol", symbol)?)
        .with("type", side.as_str())
        .with("price", price)
        .with("amount", amount))
}

fn order_params(symbol: &str, order_id: &str) -> RestResult<Params> {
    Ok(Params::new()
        .with("currency", require("symbol", symbol)?)
        .with("id", require("order_id", order_id)?))
}

fn open_orders_params(symbol: &str, side: Option<Side>, page: Option<u32>) -> RestResult<Params> {
    let mut params = Params::new()
        .with("currency", require("symbol", symbol)?)
        .with("pageIndex", page.unwrap_or(DEFAULT_PAGE_INDEX));
    params.insert_opt("type", side.map(|side| side.as_str()));
    Ok(params)
}
