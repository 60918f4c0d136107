//! External script-injection pipe settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default FIFO location. Anything written here is evaluated in the page.
pub const DEFAULT_PIPE_PATH: &str = "/tmp/webapp.pipe";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(DEFAULT_PIPE_PATH),
        }
    }
}
