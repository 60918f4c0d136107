//! Window creation, webview setup, and the script-injection pipe.

use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use webshell_bridge::{BridgeEvent, WebViewConfig, WebViewHandle};
use webshell_config::ShellConfig;
use webshell_platform::{expand_home, PipeListener};

use crate::icon::load_icon;
use crate::placement::{centered_origin, initial_position, MonitorArea};

use super::core::ShellApp;
use super::toolkit;

impl ShellApp {
    /// Create the window and the webview inside it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let Some(index) = self.config.app.index.as_deref() else {
            tracing::error!("No index page configured");
            return false;
        };
        let url = index_url(index);

        if let Err(e) = toolkit::init() {
            tracing::error!("Failed to initialize the GUI toolkit: {e}");
            return false;
        }

        let monitor = primary_monitor_area(event_loop);
        let attrs = window_attributes(&self.config, monitor);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        // Without a configured size the window's own size is only known now.
        if self.config.window.centered && self.config.window.size().is_none() {
            if let Some(m) = monitor {
                let size = window.outer_size().to_logical::<f64>(window.scale_factor());
                let (x, y) = centered_origin((size.width, size.height), m);
                window.set_outer_position(LogicalPosition::new(x, y));
            }
        }

        let webview_config = WebViewConfig {
            url,
            devtools: self.config.app.devtools,
            bridge: self.config.bridge.clone(),
        };

        match WebViewHandle::build(&window, webview_config, self.events_tx.clone()) {
            Ok(handle) => {
                tracing::info!(url = %handle.url(), "WebView opened");
                self.webview = Some(handle);
            }
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("Window created");
        true
    }

    /// Start the background reader on the injection FIFO, if enabled.
    pub(super) fn start_pipe(&mut self) {
        if !self.config.pipe.enabled || self.pipe.is_some() {
            return;
        }

        let path = expand_home(&self.config.pipe.path.to_string_lossy());
        let tx = self.events_tx.clone();
        match PipeListener::spawn(&path, move |script| {
            tx.send(BridgeEvent::Script(script)).is_ok()
        }) {
            Ok(listener) => self.pipe = Some(listener),
            Err(e) => tracing::warn!("Script injection pipe unavailable: {e}"),
        }
    }
}

/// Logical work area of the primary monitor, if the platform reports one.
fn primary_monitor_area(event_loop: &ActiveEventLoop) -> Option<MonitorArea> {
    let monitor = event_loop.primary_monitor()?;
    let scale = monitor.scale_factor();
    let size = monitor.size().to_logical::<f64>(scale);
    let pos = monitor.position().to_logical::<f64>(scale);
    Some(MonitorArea {
        x: pos.x,
        y: pos.y,
        width: size.width,
        height: size.height,
    })
}

/// Translate the window section of the config into winit attributes.
fn window_attributes(config: &ShellConfig, monitor: Option<MonitorArea>) -> WindowAttributes {
    let window = &config.window;

    let mut attrs = WindowAttributes::default()
        .with_title(config.app.title.clone())
        .with_maximized(window.maximized)
        .with_decorations(window.decorations);

    if let Some((w, h)) = window.size() {
        attrs = attrs.with_inner_size(LogicalSize::new(w as f64, h as f64));
    }

    if let Some((x, y)) = initial_position(window, monitor) {
        attrs = attrs.with_position(LogicalPosition::new(x, y));
    }

    if let Some(path) = &window.icon {
        match load_icon(path) {
            Ok(icon) => attrs = attrs.with_window_icon(Some(icon)),
            Err(e) => tracing::warn!("Window icon not loaded: {e}"),
        }
    }

    #[cfg(target_os = "windows")]
    let attrs = {
        use winit::platform::windows::WindowAttributesExtWindows;
        attrs.with_skip_taskbar(!window.taskbar)
    };

    #[cfg(not(target_os = "windows"))]
    if !window.taskbar {
        tracing::debug!("taskbar = false is only honoured on Windows");
    }

    attrs
}

/// Turn the configured index into something the engine can load.
///
/// Anything with a scheme is used verbatim; everything else is treated as
/// a local path and becomes a `file://` URL.
pub(super) fn index_url(index: &str) -> String {
    if has_scheme(index) {
        return index.to_string();
    }

    let path = expand_home(index);
    let path = std::fs::canonicalize(&path).unwrap_or(path);
    let encoded: Vec<String> = path
        .to_string_lossy()
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("file://{}", encoded.join("/"))
}

fn has_scheme(index: &str) -> bool {
    match index.split_once(':') {
        Some((scheme, _)) => {
            scheme.len() > 1
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
