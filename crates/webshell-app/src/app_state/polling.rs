//! Periodic draining of the bridge queue.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use webshell_bridge::{BridgeEvent, PageLoadState};

use super::core::ShellApp;
use super::toolkit;
use super::types::POLL_INTERVAL;

impl ShellApp {
    /// Run queued bridge work and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        toolkit::pump_events();

        let now = Instant::now();
        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_bridge_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Evaluate pipe scripts and dispatch host calls queued since the last
    /// poll. Nothing is drained until the webview exists.
    pub(super) fn poll_bridge_events(&mut self) {
        let Some(webview) = &self.webview else {
            return;
        };

        for event in self.pump.pump(&mut self.host, webview) {
            match event {
                BridgeEvent::PageLoad {
                    state: PageLoadState::Finished,
                    url,
                } => {
                    tracing::info!(url = %url, "Page loaded");
                }
                BridgeEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "Page load event");
                }
                BridgeEvent::TitleChanged(title) => {
                    tracing::debug!(title = %title, "Document title changed");
                }
                BridgeEvent::Call(_) | BridgeEvent::Script(_) => {}
            }
        }
    }
}
