//! Internal constants for the app state module.

use std::time::Duration;

/// How often the main loop drains the bridge queue (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);
