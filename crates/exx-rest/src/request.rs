//! Request construction
//!
//! Every EXX call is a GET with all parameters in the query string, including
//! order placement and cancellation.

use crate::client::ClientConfig;
use exx_auth::{Params, RequestSigner};
use reqwest::Method;

/// Public market data host
pub const PUBLIC_URL: &str = "https://api.exx.com/data/v1";

/// Private trading host
pub const PRIVATE_URL: &str = "https://trade.exx.com/api";

/// Which EXX host an endpoint lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    /// Market data host, no authentication
    Public,
    /// Trading host, authenticated
    Private,
}

/// Static description of one API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the host base URL
    pub path: &'static str,
    /// Target host
    pub host: Host,
    /// Whether the request must carry `nonce`, `accesskey` and `signature`
    pub signed: bool,
}

impl Endpoint {
    /// Unsigned endpoint on the public host
    pub const fn public(path: &'static str) -> Self {
        Self {
            path,
            host: Host::Public,
            signed: false,
        }
    }

    /// Signed endpoint on the private host
    pub const fn private(path: &'static str) -> Self {
        Self {
            path,
            host: Host::Private,
            signed: true,
        }
    }
}

/// A fully formed request, ready to hand to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method (always GET for EXX)
    pub method: Method,
    /// Target host
    pub host: Host,
    /// Base URL of the host
    pub base_url: String,
    /// Endpoint path
    pub path: String,
    /// Final query string, signature included
    pub query: String,
    /// Whether `nonce`, `accesskey` and `signature` were added
    pub signed: bool,
}

impl RequestDescriptor {
    /// Full request URL
    ///
    /// The `?` is always present, even with an empty query.
    pub fn url(&self) -> String {
        format!("{}/{}?{}", self.base_url, self.path, self.query)
    }

    /// Check whether the request was signed
    pub fn is_signed(&self) -> bool {
        self.signed
    }
}

/// Build the request for an endpoint
///
/// Signed endpoints get a fresh nonce when the configuration holds
/// credentials. Without credentials the auth fields are simply omitted.
pub fn build_request(config: &ClientConfig, endpoint: &Endpoint, params: Params) -> RequestDescriptor {
    let signer = match (endpoint.signed, config.credentials.as_ref()) {
        (true, Some(credentials)) => Some(RequestSigner::new(credentials)),
        _ => None,
    };

    build_request_with_signer(config.base_url(endpoint.host), endpoint, params, signer.as_ref())
}

/// Build the request for an endpoint with an explicit signer
///
/// The signature covers the canonical query without itself and is appended
/// last.
pub fn build_request_with_signer(
    base_url: &str,
    endpoint: &Endpoint,
    mut params: Params,
    signer: Option<&RequestSigner<'_>>,
) -> RequestDescriptor {
    if let Some(signer) = signer {
        signer.authenticate(&mut params);
    }

    let mut query = if params.is_empty() {
        String::new()
    } else {
        params.canonical_query()
    };

    if let Some(signer) = signer {
        let signature = signer.sign(&query);
        query.push_str("&signature=");
        query.push_str(&signature);
    }

    RequestDescriptor {
        method: Method::GET,
        host: endpoint.host,
        base_url: base_url.to_string(),
        path: endpoint.path.to_string(),
        query,
        signed: signer.is_some(),
    }
}
