//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the webview, the host context and the
//! script-injection pipe.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod toolkit;
mod types;

pub use core::ShellApp;
