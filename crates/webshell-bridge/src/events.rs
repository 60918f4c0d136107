//! Events funneled from webview callbacks and the pipe thread to the main loop.

use std::sync::mpsc;

use crate::codec::CallDescriptor;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Work for the main loop, processed strictly in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeEvent {
    /// A decoded host call from the page.
    Call(CallDescriptor),
    /// A script to evaluate in the page (from the injection pipe).
    Script(String),
    PageLoad { state: PageLoadState, url: String },
    TitleChanged(String),
}

pub type EventSender = mpsc::Sender<BridgeEvent>;
pub type EventReceiver = mpsc::Receiver<BridgeEvent>;

/// Create the unbounded FIFO between producers and the main loop.
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::channel()
}
