//! Error types. The analytics API itself is total and returns no errors;
//! only the configuration layer can fail.

pub mod config_error;

pub use config_error::ConfigError;
