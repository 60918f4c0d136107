//! Window placement and decoration settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Native window settings, read once when the window is built.
///
/// Position and size are in logical pixels. When `centered` is set it wins
/// over an explicit `x`/`y`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub centered: bool,
    pub maximized: bool,
    /// Draw the window manager's title bar and borders.
    pub decorations: bool,
    /// Show the window in the taskbar.
    pub taskbar: bool,
    /// Path to a PNG used as the window icon.
    pub icon: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            width: None,
            height: None,
            centered: false,
            maximized: false,
            decorations: true,
            taskbar: true,
            icon: None,
        }
    }
}

impl WindowConfig {
    /// Both dimensions, if both were given.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }

    /// Explicit position, if both coordinates were given.
    pub fn position(&self) -> Option<(i32, i32)> {
        self.x.zip(self.y)
    }
}

// =============================================================================
// Tests
// =============================================================================
