//! Configuration module for xflconv
//!
//! Provides types and parsing for `xfl.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, CliOverrides, ConfigError};
pub use schema::*;
