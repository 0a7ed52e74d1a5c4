//! Configuration for quire sites, loaded from `quire.toml`.

pub mod config;
pub mod error;
pub mod templates;

pub use config::{CONFIG_FILE_NAME, Config};
pub use error::ConfigError;
