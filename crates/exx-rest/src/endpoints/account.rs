//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::client::ExxRestClient;
use crate::error::RestResult;
use crate::request::Endpoint;
use exx_auth::Params;
use serde_json::Value;
use tracing::{debug, instrument};

pub const GET_BALANCE: Endpoint = Endpoint::private("getBalance");

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a ExxRestClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a ExxRestClient) -> Self {
        Self { client }
    }

    /// Get account balance
    ///
    /// Returns per-asset funds and margin credit settings, see
    /// [`exx_types::Balance`].
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> RestResult<Value> {
        debug!("Fetching account balance");
        self.client.execute(&GET_BALANCE, Params::new()).await
    }
}
