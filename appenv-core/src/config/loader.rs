//! Environment lookup with fallback defaults.
//!
//! Invariants:
//! - Loading never fails. A missing variable selects the fallback.
//! - A variable set to the empty string is treated exactly as unset.
//! - Non-empty values are used verbatim: no trimming, no coercion, no
//!   format checks.
//! - `PORT` is read but not applied unless the port override is enabled.

use secrecy::SecretString;

use super::Configuration;
use super::keys;
use super::source::{EnvSource, ProcessEnv};

/// Where a field's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrigin {
    /// Taken verbatim from the environment.
    Environment,
    /// Variable unset or empty; the fallback was used.
    Default,
    /// Variable set, but its value was not applied.
    Ignored,
}

/// A loaded configuration together with the origin of each field.
#[derive(Debug, Clone)]
pub struct Resolved {
    config: Configuration,
    origins: Vec<(&'static str, FieldOrigin)>,
}

impl Resolved {
    /// The loaded configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Origin of the field read from variable `name`, if it is recognized.
    pub fn origin(&self, name: &str) -> Option<FieldOrigin> {
        self.origins
            .iter()
            .find(|(var, _)| *var == name)
            .map(|(_, origin)| *origin)
    }

    /// Origins of every field, in field order.
    pub fn origins(&self) -> &[(&'static str, FieldOrigin)] {
        &self.origins
    }

    /// Discard the origins and keep the configuration.
    pub fn into_config(self) -> Configuration {
        self.config
    }
}

/// Look up `name` in `source`, returning `fallback` when it is unset or empty.
pub fn get_with_default(source: &impl EnvSource, name: &str, fallback: &str) -> String {
    lookup(source, name, fallback).0
}

/// Read `name` once and report both the value used and where it came from.
fn lookup(source: &impl EnvSource, name: &str, fallback: &str) -> (String, FieldOrigin) {
    match source.var(name) {
        Some(value) if !value.is_empty() => (value, FieldOrigin::Environment),
        _ => (fallback.to_string(), FieldOrigin::Default),
    }
}

/// Load the configuration from the process environment.
pub fn load() -> Configuration {
    ConfigLoader::new(ProcessEnv).load()
}

/// Load the configuration from an injected source.
pub fn load_from(source: &impl EnvSource) -> Configuration {
    ConfigLoader::new(source).load()
}

/// Builds a [`Configuration`] from an [`EnvSource`].
#[derive(Debug, Clone)]
pub struct ConfigLoader<S> {
    source: S,
    apply_port_override: bool,
}

impl<S: EnvSource> ConfigLoader<S> {
    /// Create a loader reading from `source`. The port override is off.
    pub fn new(source: S) -> Self {
        Self {
            source,
            apply_port_override: false,
        }
    }

    /// Apply a `PORT` value that parses as a port number.
    ///
    /// Off by default, in which case `PORT` is read but the port stays at
    /// its default. An unparsable value also leaves the default in place.
    pub fn apply_port_override(mut self, enabled: bool) -> Self {
        self.apply_port_override = enabled;
        self
    }

    /// Load the configuration.
    pub fn load(&self) -> Configuration {
        self.resolve().into_config()
    }

    /// Load the configuration and record where each field came from.
    pub fn resolve(&self) -> Resolved {
        let mut origins = Vec::with_capacity(keys::ALL.len());

        let (port, port_origin) = self.port();
        origins.push((keys::PORT, port_origin));

        let mut string = |name: &'static str, fallback: &str| {
            let (value, origin) = lookup(&self.source, name, fallback);
            origins.push((name, origin));
            value
        };

        let service_base_url = string(keys::SERVICE_BASE_URL, keys::DEFAULT_SERVICE_BASE_URL);
        let public_api_key = string(keys::SERVICE_PUBLIC_KEY, keys::DEFAULT_SERVICE_PUBLIC_KEY);
        let privileged_api_key = string(keys::SERVICE_PRIVILEGED_KEY, "");
        let signing_secret = string(keys::SIGNING_SECRET, keys::DEFAULT_SIGNING_SECRET);
        let payment_provider_api_key = string(keys::PAYMENT_PROVIDER_API_KEY, "");
        let payment_provider_collection_id = string(keys::PAYMENT_PROVIDER_COLLECTION_ID, "");
        let public_server_url = string(keys::PUBLIC_SERVER_URL, keys::DEFAULT_PUBLIC_SERVER_URL);

        Resolved {
            config: Configuration {
                port,
                service_base_url,
                public_api_key: secret(public_api_key),
                privileged_api_key: secret(privileged_api_key),
                signing_secret: secret(signing_secret),
                payment_provider_api_key: secret(payment_provider_api_key),
                payment_provider_collection_id,
                public_server_url,
            },
            origins,
        }
    }

    fn port(&self) -> (u16, FieldOrigin) {
        let raw = get_with_default(&self.source, keys::PORT, "");
        if raw.is_empty() {
            return (keys::DEFAULT_PORT, FieldOrigin::Default);
        }
        if !self.apply_port_override {
            return (keys::DEFAULT_PORT, FieldOrigin::Ignored);
        }
        match raw.parse::<u16>() {
            Ok(port) => (port, FieldOrigin::Environment),
            Err(_) => (keys::DEFAULT_PORT, FieldOrigin::Ignored),
        }
    }
}

fn secret(value: String) -> SecretString {
    SecretString::new(value.into())
}
