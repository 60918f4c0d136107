//! WebView construction with the bridge hooks attached.

use tracing::{debug, error, warn};
use webshell_config::{BridgeConfig, MalformedCallPolicy};
use wry::dpi::{PhysicalPosition, PhysicalSize};
use wry::raw_window_handle;
use wry::{Rect, WebView, WebViewBuilder};

use crate::client::client_init_script;
use crate::codec::parse_call;
use crate::events::{BridgeEvent, EventSender, PageLoadState};
use crate::pump::{ScriptError, ScriptTarget};

/// Configuration for the hosted webview.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Page to open.
    pub url: String,
    pub devtools: bool,
    pub bridge: BridgeConfig,
}

/// Decide the fate of a navigation to `uri`.
///
/// Host calls are queued on `tx` and blocked. Returns `true` when the
/// engine should go ahead and load `uri`.
pub fn intercept_navigation(uri: &str, policy: MalformedCallPolicy, tx: &EventSender) -> bool {
    match parse_call(uri) {
        Ok(None) => true,
        Ok(Some(call)) => {
            debug!(name = %call.name, "host call intercepted");
            if tx.send(BridgeEvent::Call(call)).is_err() {
                warn!("host call dropped: main loop is gone");
            }
            false
        }
        Err(e) => match policy {
            MalformedCallPolicy::Reject => {
                error!(error = %e, "rejecting malformed host call");
                false
            }
            MalformedCallPolicy::PassThrough => {
                warn!(error = %e, "malformed host call passed through to the engine");
                true
            }
        },
    }
}

/// The single webview filling the shell window.
pub struct WebViewHandle {
    webview: WebView,
    url: String,
}

impl WebViewHandle {
    /// Build a webview covering `window` and wire its callbacks to `tx`.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        config: WebViewConfig,
        tx: EventSender,
    ) -> Result<Self, wry::Error> {
        let policy = config.bridge.on_malformed;

        let mut builder = WebViewBuilder::new()
            .with_devtools(config.devtools)
            .with_url(&config.url);

        if config.bridge.inject_client {
            let script = client_init_script(&config.bridge.callback_hook);
            builder = builder.with_initialization_script(&script);
        }

        let nav_tx = tx.clone();
        builder = builder.with_navigation_handler(move |url| {
            let allow = intercept_navigation(&url, policy, &nav_tx);
            if allow {
                debug!(url = %url, "navigation allowed");
            }
            allow
        });

        // The client posts the bare fragment; pages may also post full URIs.
        let ipc_tx = tx.clone();
        builder = builder.with_ipc_handler(move |request| {
            let body = request.body();
            if !crate::codec::is_api_call(body) {
                warn!(body_len = body.len(), "IPC message ignored: not a host call");
                return;
            }
            intercept_navigation(body, policy, &ipc_tx);
        });

        let load_tx = tx.clone();
        builder = builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            let _ = load_tx.send(BridgeEvent::PageLoad { state, url });
        });

        let title_tx = tx;
        builder = builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            let _ = title_tx.send(BridgeEvent::TitleChanged(title));
        });

        let webview = builder.build(window)?;
        debug!(url = %config.url, "WebView created");

        Ok(Self {
            webview,
            url: config.url,
        })
    }

    /// The URL the webview was opened with.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Stretch the webview over a `width` x `height` physical-pixel window.
    ///
    /// Needed on X11, where the engine does not follow the window size.
    pub fn resize(&self, width: u32, height: u32) -> Result<(), wry::Error> {
        self.webview.set_bounds(fill_bounds(width, height))
    }
}

/// Bounds covering the whole client area.
fn fill_bounds(width: u32, height: u32) -> Rect {
    Rect {
        position: PhysicalPosition::new(0, 0).into(),
        size: PhysicalSize::new(width, height).into(),
    }
}

impl ScriptTarget for WebViewHandle {
    fn evaluate_script(&self, js: &str) -> Result<(), ScriptError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| ScriptError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CallDescriptor;
    use crate::events::event_channel;

    #[test]
    fn bounds_cover_the_window() {
        let rect = fill_bounds(1024, 768);
        assert_eq!(
            rect.position,
            wry::dpi::Position::Physical(PhysicalPosition::new(0, 0))
        );
        assert_eq!(
            rect.size,
            wry::dpi::Size::Physical(PhysicalSize::new(1024, 768))
        );
    }

    #[test]
    fn ordinary_navigation_is_allowed() {
        let (tx, rx) = event_channel();
        assert!(intercept_navigation(
            "https://world.kano.me/",
            MalformedCallPolicy::Reject,
            &tx
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn host_call_is_queued_and_blocked() {
        let (tx, rx) = event_channel();
        let allowed = intercept_navigation(
            "file:///app/index.html#api:greet[42]/Kano%20World",
            MalformedCallPolicy::Reject,
            &tx,
        );
        assert!(!allowed);
        assert_eq!(
            rx.try_recv().unwrap(),
            BridgeEvent::Call(
                CallDescriptor::new("greet")
                    .with_timestamp("42")
                    .with_args(["Kano World"])
            )
        );
    }

    #[test]
    fn malformed_call_rejected_by_default_policy() {
        let (tx, rx) = event_channel();
        assert!(!intercept_navigation(
            "#api:bad-name",
            MalformedCallPolicy::Reject,
            &tx
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn malformed_call_can_pass_through() {
        let (tx, rx) = event_channel();
        assert!(intercept_navigation(
            "#api:bad-name",
            MalformedCallPolicy::PassThrough,
            &tx
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn call_is_consumed_even_when_queue_is_gone() {
        let (tx, rx) = event_channel();
        drop(rx);
        assert!(!intercept_navigation(
            "#api:ping",
            MalformedCallPolicy::Reject,
            &tx
        ));
    }
}
