//! Application-level settings: what page to open and how to label it.

use serde::{Deserialize, Serialize};

/// The page to host and the window title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// URL or local file path of the page to open.
    pub index: Option<String>,
    /// Enable the engine's developer tools.
    pub devtools: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Application".into(),
            index: None,
            devtools: cfg!(debug_assertions),
        }
    }
}
