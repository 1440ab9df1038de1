//! Process configuration and the loader that populates it.
//!
//! A [`Configuration`] is built once at startup from an [`EnvSource`] and is
//! read-only afterwards. Share it behind an `Arc` when several components
//! need it.

mod audit;
pub mod keys;
mod loader;
mod mode;
mod source;
mod summary;

pub use audit::{audit, placeholder_fields};
pub use loader::{ConfigLoader, FieldOrigin, Resolved, get_with_default, load, load_from};
pub use mode::RunMode;
pub use source::{EnvSource, ProcessEnv};
pub use summary::{ConfigSummary, FieldSummary};

use secrecy::{ExposeSecret, SecretString};

/// Startup settings: connection credentials and server URLs.
///
/// Secret fields are held as [`SecretString`] so `Debug` output never
/// prints them.
#[derive(Debug, Clone)]
pub struct Configuration {
    port: u16,
    service_base_url: String,
    public_api_key: SecretString,
    privileged_api_key: SecretString,
    signing_secret: SecretString,
    payment_provider_api_key: SecretString,
    payment_provider_collection_id: String,
    public_server_url: String,
}

impl Configuration {
    /// Port the server listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Backing-service endpoint.
    pub fn service_base_url(&self) -> &str {
        &self.service_base_url
    }

    /// Public (anonymous) backing-service credential.
    pub fn public_api_key(&self) -> &SecretString {
        &self.public_api_key
    }

    /// Elevated-privilege backing-service credential. Empty if unset.
    pub fn privileged_api_key(&self) -> &SecretString {
        &self.privileged_api_key
    }

    /// Token-signing secret.
    pub fn signing_secret(&self) -> &SecretString {
        &self.signing_secret
    }

    /// Payment gateway credential. Empty if unset.
    pub fn payment_provider_api_key(&self) -> &SecretString {
        &self.payment_provider_api_key
    }

    /// Payment gateway collection identifier. Empty if unset.
    pub fn payment_provider_collection_id(&self) -> &str {
        &self.payment_provider_collection_id
    }

    /// Externally advertised URL of this server.
    pub fn public_server_url(&self) -> &str {
        &self.public_server_url
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.port == other.port
            && self.service_base_url == other.service_base_url
            && self.public_api_key.expose_secret() == other.public_api_key.expose_secret()
            && self.privileged_api_key.expose_secret() == other.privileged_api_key.expose_secret()
            && self.signing_secret.expose_secret() == other.signing_secret.expose_secret()
            && self.payment_provider_api_key.expose_secret()
                == other.payment_provider_api_key.expose_secret()
            && self.payment_provider_collection_id == other.payment_provider_collection_id
            && self.public_server_url == other.public_server_url
    }
}

impl Eq for Configuration {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_debug_redacts_secrets() {
        let env: HashMap<String, String> = [
            ("SIGNING_SECRET", "top-secret-signing-value"),
            ("PAYMENT_PROVIDER_API_KEY", "pk_live_123456"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = load_from(&env);
        let debug = format!("{config:?}");

        assert!(!debug.contains("top-secret-signing-value"));
        assert!(!debug.contains("pk_live_123456"));
        assert!(debug.contains("http://localhost:8080"));
    }

    #[test]
    fn test_equality_compares_secret_values() {
        let mut a: HashMap<String, String> = HashMap::new();
        a.insert("SIGNING_SECRET".to_string(), "one".to_string());
        let mut b = a.clone();
        b.insert("SIGNING_SECRET".to_string(), "two".to_string());

        assert_eq!(load_from(&a), load_from(&a.clone()));
        assert_ne!(load_from(&a), load_from(&b));
    }
}
