pub mod errors;

pub use errors::{ConfigError, PlatformError, ShellError};
