//! Startup check for required environment variables.
//!
//! Every requested key is looked up, blank values count as missing, and the
//! result is either all values (trimmed) or one error naming every problem.
//!
//! ```no_run
//! envcheck::load_env_file(None)?;
//! let config = envcheck::load_and_validate_config(&["PORT", "HOST"])?;
//! println!("listening on {}", config.require("PORT")?);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{load_and_validate_config, validate_with, ConfigValidator};
pub use domain::env_store::EnvStore;
pub use domain::error::ConfigurationError;
pub use domain::validated_config::ValidatedConfig;
pub use infrastructure::config::Manifest;
pub use infrastructure::env::{load_env_file, ProcessEnv};
