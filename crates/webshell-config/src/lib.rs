//! Webshell configuration system.
//!
//! A single immutable [`ShellConfig`] describes the window, the page-side
//! bridge and the script-injection pipe. It is read once from TOML, merged
//! with command-line overrides, validated, and then handed to the window
//! constructor. Every section uses serde defaults so partial files work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use webshell_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.app.title);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    AppConfig, BridgeConfig, LoggingConfig, MalformedCallPolicy, PipeConfig, ShellConfig,
    WindowConfig,
};

use webshell_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
