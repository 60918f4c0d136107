//! Page-to-host call bridge for an embedded webview.
//!
//! Page script invokes host methods by navigating to (or posting) a URI
//! fragment of the form `#api:<name>[<timestamp>]/<arg0>/<arg1>/...`.
//! The host decodes it, looks the name up in an explicit capability table,
//! runs the handler on the main loop, and, when a timestamp was given,
//! answers through a callback hook evaluated in the page.
//!
//! - [`codec`]: fragment decoding and callback encoding
//! - [`dispatcher`]: capability table and invocation
//! - [`events`] / [`pump`]: the FIFO queue drained by the main loop
//! - [`client`]: the `window.backend` script injected into pages
//! - [`manager`]: `wry` webview construction with the interception hooks

pub mod client;
pub mod codec;
pub mod dispatcher;
pub mod events;
pub mod manager;
pub mod pump;

pub use codec::{encode_callback, parse_call, CallDescriptor, CallError};
pub use dispatcher::{arg, DispatchError, Dispatcher, HostError, HostRegistry, HostResult};
pub use events::{event_channel, BridgeEvent, EventReceiver, EventSender, PageLoadState};
pub use manager::{intercept_navigation, WebViewConfig, WebViewHandle};
pub use pump::{EventPump, ScriptError, ScriptTarget};
