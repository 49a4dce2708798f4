use thiserror::Error;

/// One or more required variables were absent or blank.
///
/// The message is a single report naming every offending key, so a
/// misconfigured deployment can be fixed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "\n--- FATAL CONFIGURATION ERROR ---\n\
     The following essential environment variables are missing or empty: \n\
     [ {} ]\n\
     Please update your .env file and try again.",
    .missing.join(", ")
)]
pub struct ConfigurationError {
    missing: Vec<String>,
}

impl ConfigurationError {
    pub(crate) fn new(missing: Vec<String>) -> Self {
        Self { missing }
    }

    /// Offending keys, in the order they were requested.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }
}
