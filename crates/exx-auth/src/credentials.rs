//! Authentication credentials for the EXX API
//!
//! Implements the HMAC-SHA512 query signing required by EXX's private
//! endpoints.
//!
//! # Security
//!
//! The secret key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha512;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, AuthResult};
use crate::params::Params;

type HmacSha512 = Hmac<Sha512>;

/// Highest nonce handed out so far, keeps nonces non-decreasing if the wall
/// clock steps backwards
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

const ACCESS_KEY_VAR: &str = "EXX_ACCESS_KEY";
const SECRET_KEY_VAR: &str = "EXX_SECRET_KEY";

/// API credentials for authenticated requests
///
/// The secret key is automatically zeroized when the Credentials are dropped.
pub struct Credentials {
    /// Access key (public)
    access_key: String,
    /// Secret key bytes (zeroized on drop)
    secret_key: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an access key and secret key
    pub fn new(access_key: impl Into<String>, secret_key: impl AsRef<str>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: SecretBox::new(Box::new(secret_key.as_ref().as_bytes().to_vec())),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `EXX_ACCESS_KEY` and `EXX_SECRET_KEY` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let access_key = std::env::var(ACCESS_KEY_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(ACCESS_KEY_VAR.to_string()))?;
        let secret_key = std::env::var(SECRET_KEY_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(SECRET_KEY_VAR.to_string()))?;

        if access_key.trim().is_empty() || secret_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials(format!(
                "{} and {} must not be empty",
                ACCESS_KEY_VAR, SECRET_KEY_VAR
            )));
        }

        Ok(Self::new(access_key, secret_key))
    }

    /// Get the access key
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Generate a nonce for a signed request
    ///
    /// Current epoch milliseconds, never lower than a nonce previously
    /// returned by this process.
    pub fn generate_nonce() -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();

        let previous = LAST_NONCE.fetch_max(now, Ordering::SeqCst);
        previous.max(now)
    }

    /// Sign a canonical query string
    ///
    /// Returns the lowercase hex HMAC-SHA512 of `query`, keyed by the secret.
    pub fn sign(&self, query: &str) -> String {
        // expose_secret() provides controlled access to the key
        let mut mac = HmacSha512::new_from_slice(self.secret_key.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(query.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            access_key: self.access_key.clone(),
            secret_key: SecretBox::new(Box::new(self.secret_key.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible: String = self.access_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("access_key", &format!("{}...", visible))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Signs one request with a fixed nonce
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    nonce: u64,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with a fresh nonce
    pub fn new(credentials: &'a Credentials) -> Self {
        Self::with_nonce(credentials, Credentials::generate_nonce())
    }

    /// Create a request signer with an explicit nonce
    pub fn with_nonce(credentials: &'a Credentials, nonce: u64) -> Self {
        Self { credentials, nonce }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Get the access key
    pub fn access_key(&self) -> &str {
        self.credentials.access_key()
    }

    /// Add the `nonce` and `accesskey` fields to the request parameters
    pub fn authenticate(&self, params: &mut Params) {
        params.insert("nonce", self.nonce);
        params.insert("accesskey", self.access_key());
    }

    /// Sign the canonical query string of the request
    pub fn sign(&self, query: &str) -> String {
        self.credentials.sign(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_is_non_decreasing() {
        let nonce1 = Credentials::generate_nonce();
        let nonce2 = Credentials::generate_nonce();
        assert!(nonce2 >= nonce1);
    }

    #[test]
    fn test_nonce_is_epoch_millis() {
        // 2017-11-01 in milliseconds; anything smaller is seconds, not millis
        assert!(Credentials::generate_nonce() > 1_509_494_400_000);
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let creds = Credentials::new("test_access_key", "test_secret_key");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("test_secret_key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_signature_known_vector() {
        // RFC 4231 test case 2
        let creds = Credentials::new("access", "Jefe");
        assert_eq!(
            creds.sign("what do ya want for nothing?"),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_signing_consistency() {
        let creds = Credentials::new("api_key", "api_secret");
        let query = "accesskey=api_key&currency=eth_hsr&nonce=1510383406453";

        let signature = creds.sign(query);
        assert_eq!(signature.len(), 128);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(signature, creds.sign(query));
    }

    #[test]
    fn test_signature_changes_with_input_or_secret() {
        let creds = Credentials::new("api_key", "api_secret");
        let other = Credentials::new("api_key", "api_secreT");
        let query = "currency=eth_hsr&nonce=1";

        assert_ne!(creds.sign(query), creds.sign("currency=eth_hsr&nonce=2"));
        assert_ne!(creds.sign(query), other.sign(query));
    }

    #[test]
    fn test_request_signer_injects_auth_fields() {
        let creds = Credentials::new("my-key", "secret");
        let signer = RequestSigner::with_nonce(&creds, 42);
        let mut params = Params::new().with("currency", "eth_hsr");

        signer.authenticate(&mut params);

        assert_eq!(
            params.canonical_query(),
            "accesskey=my-key&currency=eth_hsr&nonce=42"
        );
        assert!(!params.contains_key("signature"));
    }
}
