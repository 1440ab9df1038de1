//! Redacted view of a resolved configuration, for startup output.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::fmt;

use super::keys;
use super::loader::{FieldOrigin, Resolved};
use super::mode::RunMode;
use crate::error::ConfigError;

const REDACTED: &str = "<redacted>";
const EMPTY: &str = "<empty>";

/// One configuration field as shown to an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSummary {
    pub field: &'static str,
    pub var: &'static str,
    pub origin: FieldOrigin,
    pub value: String,
}

impl FieldSummary {
    fn new(resolved: &Resolved, field: &'static str, var: &'static str, value: String) -> Self {
        Self {
            field,
            var,
            origin: resolved.origin(var).unwrap_or(FieldOrigin::Default),
            value,
        }
    }
}

/// Every field of a [`Resolved`] configuration, with secrets masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub mode: RunMode,
    pub fields: Vec<FieldSummary>,
}

impl ConfigSummary {
    pub fn new(resolved: &Resolved, mode: RunMode) -> Self {
        let config = resolved.config();
        let plain =
            |field, var, value: &str| FieldSummary::new(resolved, field, var, value.to_string());
        let masked =
            |field, var, value: &SecretString| FieldSummary::new(resolved, field, var, mask(value));

        let fields = vec![
            plain("port", keys::PORT, &config.port().to_string()),
            plain("service_base_url", keys::SERVICE_BASE_URL, config.service_base_url()),
            masked("public_api_key", keys::SERVICE_PUBLIC_KEY, config.public_api_key()),
            masked(
                "privileged_api_key",
                keys::SERVICE_PRIVILEGED_KEY,
                config.privileged_api_key(),
            ),
            masked("signing_secret", keys::SIGNING_SECRET, config.signing_secret()),
            masked(
                "payment_provider_api_key",
                keys::PAYMENT_PROVIDER_API_KEY,
                config.payment_provider_api_key(),
            ),
            plain(
                "payment_provider_collection_id",
                keys::PAYMENT_PROVIDER_COLLECTION_ID,
                config.payment_provider_collection_id(),
            ),
            plain("public_server_url", keys::PUBLIC_SERVER_URL, config.public_server_url()),
        ];

        Self { mode, fields }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ConfigSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mode: {}", self.mode)?;
        for field in &self.fields {
            let origin = match field.origin {
                FieldOrigin::Environment => "env",
                FieldOrigin::Default => "default",
                FieldOrigin::Ignored => "ignored",
            };
            writeln!(
                f,
                "{:<32} {:<32} {:<8} {}",
                field.field, field.var, origin, field.value
            )?;
        }
        Ok(())
    }
}

fn mask(secret: &SecretString) -> String {
    if secret.expose_secret().is_empty() {
        EMPTY.to_string()
    } else {
        REDACTED.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::collections::HashMap;

    fn summary(vars: &[(&str, &str)]) -> ConfigSummary {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigSummary::new(&ConfigLoader::new(env).resolve(), RunMode::Production)
    }

    #[test]
    fn test_secrets_never_rendered() {
        let summary = summary(&[
            ("SERVICE_PUBLIC_KEY", "anon-key-value"),
            ("SIGNING_SECRET", "signing-secret-value"),
            ("PAYMENT_PROVIDER_API_KEY", "payment-key-value"),
        ]);
        let text = summary.to_string();
        let json = summary.to_json().unwrap();

        for secret in ["anon-key-value", "signing-secret-value", "payment-key-value"] {
            assert!(!text.contains(secret));
            assert!(!json.contains(secret));
        }
        assert!(!text.contains("dev-public-key-change-me"));
    }

    #[test]
    fn test_empty_secret_marked_empty() {
        let summary = summary(&[]);
        let field = summary
            .fields
            .iter()
            .find(|f| f.var == "SERVICE_PRIVILEGED_KEY")
            .unwrap();

        assert_eq!(field.value, "<empty>");
        assert_eq!(field.origin, FieldOrigin::Default);
    }

    #[test]
    fn test_json_shape() {
        let summary = summary(&[("PUBLIC_SERVER_URL", "https://app.example.com")]);
        let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();

        assert_eq!(json["mode"], "production");
        assert_eq!(json["fields"].as_array().unwrap().len(), 8);
        assert_eq!(json["fields"][7]["value"], "https://app.example.com");
        assert_eq!(json["fields"][7]["origin"], "environment");
        assert_eq!(json["fields"][0]["value"], "8080");
    }
}
