//! Background reader for the script-injection FIFO.
//!
//! Each writer that opens the pipe, writes, and closes delivers exactly one
//! snippet. The reader thread never touches the webview; it hands snippets
//! to a caller-supplied sink, which is expected to forward them to the main
//! loop.
//!
//! A writer that never closes its end keeps the thread blocked in `read`.
//! Opening the pipe also blocks until a writer appears, so the thread
//! cannot be joined; it lives until the process exits.
//!
//! Between seeing end-of-stream and closing the pipe for the next round the
//! reader still holds its end open. A writer that opens in that window either
//! has its bytes appended to the snippet just read or lost when the read end
//! is closed. Writers should wait for the previous write to be consumed.

use std::io::Read;
use std::path::Path;
use std::thread;

use tracing::{debug, error, info, warn};
use webshell_common::PlatformError;

use crate::fifo::{ensure_fifo, FifoGuard};

/// Name of the reader thread, visible in debuggers and panic messages.
const THREAD_NAME: &str = "pipe-listener";

/// Owns the FIFO for as long as the listener should be reachable.
///
/// Dropping it removes the FIFO; the reader thread is detached.
#[derive(Debug)]
pub struct PipeListener {
    guard: FifoGuard,
}

impl PipeListener {
    /// Create the FIFO at `path` and start reading from it.
    ///
    /// `sink` receives every non-empty snippet in the order it was read and
    /// returns `false` once nobody is listening, which stops the thread.
    pub fn spawn<F>(path: &Path, sink: F) -> Result<Self, PlatformError>
    where
        F: FnMut(String) -> bool + Send + 'static,
    {
        let guard = ensure_fifo(path)?;
        let thread_path = path.to_path_buf();

        thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || read_loop(&thread_path, sink))
            .map_err(|e| PlatformError::ThreadError(e.to_string()))?;

        info!(path = %path.display(), "script injection pipe listening");
        Ok(Self { guard })
    }

    pub fn path(&self) -> &Path {
        self.guard.path()
    }
}

fn read_loop<F>(path: &Path, mut sink: F)
where
    F: FnMut(String) -> bool,
{
    loop {
        let data = match read_one(path) {
            Ok(d) => d,
            Err(ReadFailure::Open(e)) => {
                error!(path = %path.display(), error = %e, "failed to open pipe, listener stopping");
                return;
            }
            Err(ReadFailure::Read(e)) => {
                warn!(path = %path.display(), error = %e, "failed to read from pipe");
                continue;
            }
        };

        let snippet = strip_line_terminator(&data);
        if snippet.is_empty() {
            continue;
        }

        debug!(len = snippet.len(), "script received from pipe");
        if !sink(snippet.to_string()) {
            debug!("pipe sink closed, listener stopping");
            return;
        }
    }
}

enum ReadFailure {
    Open(std::io::Error),
    Read(std::io::Error),
}

/// Open the pipe, read until every writer has closed, and close it again.
fn read_one(path: &Path) -> Result<String, ReadFailure> {
    let mut file = std::fs::File::open(path).map_err(ReadFailure::Open)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(ReadFailure::Read)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Remove one trailing `\n` or `\r\n`.
pub fn strip_line_terminator(s: &str) -> &str {
    match s.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => s,
    }
}
