//! Configuration schema types for webshell.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod app;
mod bridge;
mod logging;
mod pipe;
mod window;

pub use app::*;
pub use bridge::*;
pub use logging::*;
pub use pipe::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for a webshell window.
///
/// Built once at startup and never mutated after the window is realized.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShellConfig {
    pub app: AppConfig,
    pub window: WindowConfig,
    pub bridge: BridgeConfig,
    pub pipe: PipeConfig,
    pub logging: LoggingConfig,
}
