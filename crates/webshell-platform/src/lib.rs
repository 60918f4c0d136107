//! OS plumbing for webshell: home-relative paths and the named pipe used
//! for out-of-process script injection.

pub mod fifo;
pub mod paths;
pub mod pipe_listener;

pub use fifo::{ensure_fifo, FifoGuard};
pub use paths::expand_home;
pub use pipe_listener::{strip_line_terminator, PipeListener};
