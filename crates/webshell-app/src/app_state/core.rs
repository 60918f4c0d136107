//! ShellApp struct definition and constructor.

use std::time::Instant;

use winit::window::Window;

use webshell_bridge::{event_channel, DispatchError, Dispatcher, EventPump, EventSender, WebViewHandle};
use webshell_config::ShellConfig;
use webshell_platform::PipeListener;

use crate::host::{builtin_registry, ShellHost};

/// Top-level application state.
pub struct ShellApp {
    pub(super) config: ShellConfig,

    // Declared before `window` so it is dropped first.
    pub(super) webview: Option<WebViewHandle>,
    pub(super) window: Option<Window>,

    // Bridge
    pub(super) host: ShellHost,
    pub(super) pump: EventPump<ShellHost>,
    pub(super) events_tx: EventSender,

    // Script-injection pipe; dropping it removes the FIFO.
    pub(super) pipe: Option<PipeListener>,

    pub(super) last_poll: Instant,
}

impl ShellApp {
    pub fn new(config: ShellConfig) -> Result<Self, DispatchError> {
        let registry = builtin_registry()?;
        tracing::info!(
            methods = ?registry.names().collect::<Vec<_>>(),
            "host methods registered"
        );

        let dispatcher = Dispatcher::new(registry, config.bridge.callback_hook.clone());
        let (events_tx, events_rx) = event_channel();

        Ok(Self {
            config,
            webview: None,
            window: None,
            host: ShellHost::default(),
            pump: EventPump::new(dispatcher, events_rx),
            events_tx,
            pipe: None,
            last_poll: Instant::now(),
        })
    }
}
