use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::env_store::EnvStore;
use crate::domain::error::ConfigurationError;
use crate::domain::validated_config::ValidatedConfig;
use crate::infrastructure::env::ProcessEnv;

/// Checks required variables against an [`EnvStore`].
pub struct ConfigValidator<S> {
    store: S,
}

impl<S: EnvStore> ConfigValidator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Looks up every key and returns their trimmed values, or one error
    /// naming every key that was absent or blank.
    ///
    /// The whole list is scanned before deciding. Repeated keys are looked up
    /// once and reported at most once.
    pub fn validate<K: AsRef<str>>(
        &self,
        required_keys: &[K],
    ) -> Result<ValidatedConfig, ConfigurationError> {
        let mut config = ValidatedConfig::default();
        let mut missing = Vec::new();
        let mut seen = HashSet::new();

        for key in required_keys {
            let key = key.as_ref();
            if !seen.insert(key) {
                continue;
            }

            match self.store.var(key).as_deref().map(trim_value) {
                Some(value) if !value.is_empty() => {
                    debug!(key, "required variable present");
                    config.insert(key, value);
                }
                _ => missing.push(key.to_string()),
            }
        }

        if !missing.is_empty() {
            warn!(missing = %missing.join(", "), "required variables missing or empty");
            return Err(ConfigurationError::new(missing));
        }

        Ok(config)
    }
}

/// Strips surrounding whitespace, including byte-order marks left behind by
/// editors that save `.env` files as UTF-8 with BOM.
fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Validates `required_keys` against an arbitrary store.
pub fn validate_with<S: EnvStore, K: AsRef<str>>(
    store: S,
    required_keys: &[K],
) -> Result<ValidatedConfig, ConfigurationError> {
    ConfigValidator::new(store).validate(required_keys)
}

/// Validates `required_keys` against the process environment.
///
/// Load any `.env` file first (see [`crate::load_env_file`]); this only reads.
pub fn load_and_validate_config<K: AsRef<str>>(
    required_keys: &[K],
) -> Result<ValidatedConfig, ConfigurationError> {
    validate_with(ProcessEnv, required_keys)
}
