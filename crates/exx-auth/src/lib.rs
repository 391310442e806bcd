//! Authentication primitives for the EXX REST API
//!
//! Private EXX endpoints are authenticated by adding `nonce` and `accesskey`
//! to the request parameters, rendering them as a key-sorted query string and
//! appending an HMAC-SHA512 `signature` of that string.
//!
//! # Example
//!
//! ```
//! use exx_auth::{Credentials, Params, RequestSigner};
//!
//! let creds = Credentials::new("my-access-key", "my-secret-key");
//! let signer = RequestSigner::with_nonce(&creds, 1_510_383_406_453);
//!
//! let mut params = Params::new().with("currency", "eth_hsr");
//! signer.authenticate(&mut params);
//!
//! let query = params.canonical_query();
//! assert_eq!(
//!     query,
//!     "accesskey=my-access-key&currency=eth_hsr&nonce=1510383406453"
//! );
//! assert_eq!(signer.sign(&query).len(), 128);
//! ```

mod credentials;
mod error;
mod params;

pub use credentials::{Credentials, RequestSigner};
pub use error::{AuthError, AuthResult};
pub use params::{canonical_query, ParamValue, Params};
