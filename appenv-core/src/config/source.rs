//! Key-value lookup capability the loader reads from.
//!
//! The loader never touches `std::env` directly; it is handed an
//! [`EnvSource`]. [`ProcessEnv`] reads the real process environment, and the
//! map implementations let callers (and tests) supply a fixed snapshot.

use std::collections::{BTreeMap, HashMap};

/// A read-only source of environment-style variables.
pub trait EnvSource: Send + Sync {
    /// Look up `name`. Returns `None` if the variable is not set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
///
/// A set value that is not valid unicode is still a set value: invalid
/// sequences are replaced with U+FFFD rather than dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_map_lookup() {
        let mut env: HashMap<String, String> = HashMap::new();
        env.insert("SIGNING_SECRET".to_string(), "s3cret".to_string());

        assert_eq!(env.var("SIGNING_SECRET").as_deref(), Some("s3cret"));
        assert_eq!(env.var("PORT"), None);
    }

    #[test]
    #[serial]
    fn test_process_env_reads_real_environment() {
        temp_env::with_vars(
            [
                ("APPENV_SOURCE_TEST", Some("value")),
                ("APPENV_SOURCE_UNSET", None),
            ],
            || {
                assert_eq!(ProcessEnv.var("APPENV_SOURCE_TEST").as_deref(), Some("value"));
                assert_eq!(ProcessEnv.var("APPENV_SOURCE_UNSET"), None);
            },
        );
    }
}
