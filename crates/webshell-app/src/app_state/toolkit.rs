//! Native toolkit integration.
//!
//! On Linux wry hosts WebKitGTK, which needs GTK initialized on the UI
//! thread before the webview is built and its main context iterated from
//! the winit loop. Elsewhere the engine runs on the platform's own loop and
//! these are no-ops.

/// Initialize the toolkit on the calling (UI) thread.
#[cfg(target_os = "linux")]
pub(super) fn init() -> Result<(), String> {
    gtk::init().map_err(|e| e.to_string())
}

#[cfg(not(target_os = "linux"))]
pub(super) fn init() -> Result<(), String> {
    Ok(())
}

/// Run pending toolkit events without blocking.
///
/// Webview callbacks and `evaluate_script` only make progress while this
/// is called. Does nothing until [`init`] has succeeded on this thread.
#[cfg(target_os = "linux")]
pub(super) fn pump_events() {
    if !gtk::is_initialized_main_thread() {
        return;
    }
    while gtk::events_pending() {
        gtk::main_iteration_do(false);
    }
}

#[cfg(not(target_os = "linux"))]
pub(super) fn pump_events() {}
