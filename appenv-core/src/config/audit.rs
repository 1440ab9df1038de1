//! Startup audit of fallback defaults.
//!
//! The public key and signing secret fall back to literal placeholders that
//! are only fit for local development. In production mode the audit warns
//! about them, or refuses them when strict.

use super::keys;
use super::loader::{FieldOrigin, Resolved};
use super::mode::RunMode;
use crate::error::ConfigError;

/// Variables whose fallback is a non-empty development placeholder.
const PLACEHOLDER_VARS: [&str; 2] = [keys::SERVICE_PUBLIC_KEY, keys::SIGNING_SECRET];

/// Secret variables with no fallback. Left unset they resolve to "".
const OPTIONAL_SECRET_VARS: [&str; 2] =
    [keys::SERVICE_PRIVILEGED_KEY, keys::PAYMENT_PROVIDER_API_KEY];

/// Variables whose development placeholder is still in effect.
pub fn placeholder_fields(resolved: &Resolved) -> Vec<&'static str> {
    PLACEHOLDER_VARS
        .into_iter()
        .filter(|name| resolved.origin(name) == Some(FieldOrigin::Default))
        .collect()
}

/// Report fallback defaults for the given run mode.
///
/// Returns [`ConfigError::PlaceholderDefaults`] only when `strict` is set,
/// the mode is production and at least one placeholder is active.
pub fn audit(resolved: &Resolved, mode: RunMode, strict: bool) -> Result<(), ConfigError> {
    if resolved.origin(keys::PORT) == Some(FieldOrigin::Ignored) {
        tracing::info!(
            port = resolved.config().port(),
            "PORT is set but not applied; listening port left at its default"
        );
    }

    let placeholders = placeholder_fields(resolved);

    if !mode.is_production() {
        for var in &placeholders {
            tracing::debug!(var, "using development placeholder default");
        }
        return Ok(());
    }

    for var in OPTIONAL_SECRET_VARS {
        if resolved.origin(var) == Some(FieldOrigin::Default) {
            tracing::info!(var, "secret not set; dependent features will be unavailable");
        }
    }

    if placeholders.is_empty() {
        return Ok(());
    }

    if strict {
        tracing::error!(
            fields = ?placeholders,
            "refusing to start in production with development placeholder defaults"
        );
        return Err(ConfigError::PlaceholderDefaults {
            fields: placeholders,
        });
    }

    for var in &placeholders {
        tracing::warn!(var, "development placeholder default active in production");
    }
    Ok(())
}
