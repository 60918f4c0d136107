//! Teardown: stop accepting injected scripts, then release the view.

use super::core::ShellApp;

impl ShellApp {
    /// Release the pipe, the webview and the window, in that order.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating shutdown");

        // Removes the FIFO; the reader thread stays parked until exit.
        self.pipe = None;
        self.webview = None;
        self.window = None;

        tracing::info!("Shutdown complete");
    }
}
