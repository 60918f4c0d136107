//! Initial window position.

use webshell_config::WindowConfig;

/// A monitor's work area in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Top-left corner that centres a `size` window on `monitor`.
///
/// Windows larger than the monitor are pinned to its top-left corner.
pub fn centered_origin(size: (f64, f64), monitor: MonitorArea) -> (f64, f64) {
    let x = monitor.x + ((monitor.width - size.0) / 2.0).max(0.0);
    let y = monitor.y + ((monitor.height - size.1) / 2.0).max(0.0);
    (x, y)
}

/// Position to request at window creation.
///
/// `centered` wins over an explicit position but needs both a configured
/// size and a known monitor; otherwise the explicit position (if any) is used.
pub fn initial_position(window: &WindowConfig, monitor: Option<MonitorArea>) -> Option<(f64, f64)> {
    if window.centered {
        if let (Some((w, h)), Some(m)) = (window.size(), monitor) {
            return Some(centered_origin((w as f64, h as f64), m));
        }
    }
    window.position().map(|(x, y)| (x as f64, y as f64))
}
