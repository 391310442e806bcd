//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::request::{self, Endpoint, Host, RequestDescriptor, PRIVATE_URL, PUBLIC_URL};
use crate::response::validate_response;
use exx_auth::{Credentials, Params};
use exx_types::{Decimal, Side};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent
const DEFAULT_USER_AGENT: &str = concat!("exx-rest/", env!("CARGO_PKG_VERSION"));

/// EXX REST API client
///
/// Provides access to both public and private endpoints. The client holds
/// only immutable configuration and a `reqwest` handle, so it is cheap to
/// clone and safe to share between tasks.
///
/// # Example
///
/// ```no_run
/// use exx_rest::{Credentials, ExxRestClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = ExxRestClient::new()?;
///     let ticker = client.get_ticker("eth_hsr").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = ExxRestClient::with_credentials(creds)?;
///     let balance = auth_client.get_balance().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ExxRestClient {
    http_client: Client,
    config: ClientConfig,
}

impl ExxRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()?;

        Ok(Self::with_http_client(http_client, config))
    }

    /// Create a client around an existing `reqwest` client
    ///
    /// `timeout_secs` and `user_agent` from the configuration are ignored;
    /// the supplied client's own settings apply.
    pub fn with_http_client(http_client: Client, config: ClientConfig) -> Self {
        debug!(
            has_credentials = config.credentials.is_some(),
            "Created EXX REST client"
        );

        Self {
            http_client,
            config,
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.config.credentials.is_some()
    }

    /// Build the request an endpoint call would send, without sending it
    pub fn build_request(&self, endpoint: &Endpoint, params: Params) -> RequestDescriptor {
        request::build_request(&self.config, endpoint, params)
    }

    /// Send one request and validate the response
    pub(crate) async fn execute(&self, endpoint: &Endpoint, params: Params) -> RestResult<Value> {
        let request = self.build_request(endpoint, params);

        debug!(
            path = endpoint.path,
            host = ?endpoint.host,
            signed = request.is_signed(),
            "Sending request"
        );

        let response = self
            .http_client
            .request(request.method.clone(), request.url())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        validate_response(status, &body)
    }

    /// Decode a raw payload into one of the typed response structs
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: exx_rest::ExxRestClient) -> exx_rest::RestResult<()> {
    /// use exx_rest::types::TickerResponse;
    ///
    /// let raw = client.get_ticker("eth_hsr").await?;
    /// let ticker: TickerResponse = exx_rest::ExxRestClient::decode(raw)?;
    /// println!("mid: {}", ticker.ticker.mid_price());
    /// # Ok(())
    /// # }
    /// ```
    pub fn decode<T: DeserializeOwned>(value: Value) -> RestResult<T> {
        Ok(serde_json::from_value(value)?)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// List all markets and their trading rules
    pub async fn get_markets(&self) -> RestResult<Value> {
        self.market().get_markets().await
    }

    /// Get tickers for all markets
    pub async fn get_tickers(&self) -> RestResult<Value> {
        self.market().get_tickers().await
    }

    /// Get the ticker for a trading pair
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "eth_hsr")
    pub async fn get_ticker(&self, symbol: &str) -> RestResult<Value> {
        self.market().get_ticker(symbol).await
    }

    /// Get the order book for a trading pair
    pub async fn get_order_book(&self, symbol: &str) -> RestResult<Value> {
        self.market().get_order_book(symbol).await
    }

    /// Get recent trades for a trading pair
    pub async fn get_market_trades(&self, symbol: &str) -> RestResult<Value> {
        self.market().get_market_trades(symbol).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(TradingEndpoints::new(self))
    }

    /// Place a limit order
    pub async fn create_order(
        &self,
        symbol: &str,
        side: Side,
        price: Decimal,
        amount: Decimal,
    ) -> RestResult<Value> {
        self.trading()?.create_order(symbol, side, price, amount).await
    }

    /// Cancel an order by ID
    pub async fn cancel_order(&self, symbol: &str, order_id: &str) -> RestResult<Value> {
        self.trading()?.cancel_order(symbol, order_id).await
    }

    /// Get an order by ID
    pub async fn get_order(&self, symbol: &str, order_id: &str) -> RestResult<Value> {
        self.trading()?.get_order(symbol, order_id).await
    }

    /// List open orders, 10 per page
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `side` - Only orders of this side (optional)
    /// * `page` - Page index starting at 1 (default 1)
    pub async fn get_open_orders(
        &self,
        symbol: &str,
        side: Option<Side>,
        page: Option<u32>,
    ) -> RestResult<Value> {
        self.trading()?.get_open_orders(symbol, side, page).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(AccountEndpoints::new(self))
    }

    /// Get account balance
    pub async fn get_balance(&self) -> RestResult<Value> {
        self.account()?.get_balance().await
    }
}

impl std::fmt::Debug for ExxRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExxRestClient")
            .field("public_url", &self.config.public_url)
            .field("private_url", &self.config.private_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Base URL of the public market data host
    pub public_url: String,
    /// Base URL of the private trading host
    pub private_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            public_url: PUBLIC_URL.to_string(),
            private_url: PRIVATE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the public host base URL
    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the private host base URL
    pub fn with_private_url(mut self, url: impl Into<String>) -> Self {
        self.private_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Base URL for a host
    pub fn base_url(&self, host: Host) -> &str {
        match host {
            Host::Public => &self.public_url,
            Host::Private => &self.private_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = ExxRestClient::new().unwrap();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_user_agent("test-agent")
            .with_public_url("http://localhost:8080/")
            .with_private_url("http://localhost:9090");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(config.base_url(Host::Public), "http://localhost:8080");
        assert_eq!(config.base_url(Host::Private), "http://localhost:9090");
    }

    #[test]
    fn test_default_hosts() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(Host::Public), "https://api.exx.com/data/v1");
        assert_eq!(config.base_url(Host::Private), "https://trade.exx.com/api");
    }

    #[test]
    fn test_auth_required_error() {
        let client = ExxRestClient::new().unwrap();
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client =
            ExxRestClient::with_credentials(Credentials::new("api_key", "api_secret")).unwrap();
        let debug = format!("{:?}", client);

        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("api_secret"));
    }

    #[test]
    fn test_decode_typed_payload() {
        let raw = serde_json::json!({
            "eth_hsr": {"amountScale": 3, "priceScale": 3, "maxLevels": 0, "isOpen": true}
        });
        let markets: exx_types::Markets = ExxRestClient::decode(raw).unwrap();
        assert!(markets["eth_hsr"].is_open);

        let err = ExxRestClient::decode::<exx_types::Markets>(serde_json::json!([1, 2]));
        assert!(matches!(err, Err(RestError::Decode(_))));
    }
}
