pub mod env_store;
pub mod error;
pub mod validated_config;
