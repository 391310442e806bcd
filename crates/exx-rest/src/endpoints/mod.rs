//! API endpoint implementations

pub mod account;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

use crate::error::{RestError, RestResult};

/// Reject a blank required parameter
pub(crate) fn require<'v>(name: &str, value: &'v str) -> RestResult<&'v str> {
    if value.trim().is_empty() {
        return Err(RestError::InvalidParameter(format!("{} is required", name)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        assert_eq!(require("symbol", "eth_hsr").unwrap(), "eth_hsr");
        assert!(matches!(
            require("symbol", "  "),
            Err(RestError::InvalidParameter(msg)) if msg == "symbol is required"
        ));
    }
}
