//! Configuration validation.
//!
//! Checks window geometry, the callback hook name, and the pipe path.

use std::sync::LazyLock;

use regex::Regex;
use webshell_common::ConfigError;

use crate::schema::ShellConfig;

/// Largest accepted window dimension, in logical pixels.
const MAX_DIMENSION: u32 = 16_384;

/// A dotted JavaScript property path such as `backend.trigger_cb`.
static HOOK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$").unwrap()
});

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_dimension(&mut errors, "window.width", config.window.width);
    validate_dimension(&mut errors, "window.height", config.window.height);

    if !is_valid_hook(&config.bridge.callback_hook) {
        errors.push(format!(
            "bridge.callback_hook = {:?} is not a JavaScript property path",
            config.bridge.callback_hook
        ));
    }

    if config.pipe.enabled && config.pipe.path.as_os_str().is_empty() {
        errors.push("pipe.path must not be empty when the pipe is enabled".into());
    }

    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Whether `hook` can be spliced into a script as a function reference.
pub fn is_valid_hook(hook: &str) -> bool {
    HOOK_RE.is_match(hook)
}

fn validate_dimension(errors: &mut Vec<String>, name: &str, value: Option<u32>) {
    if let Some(v) = value {
        if v == 0 || v > MAX_DIMENSION {
            errors.push(format!("{name} = {v} is out of range [1, {MAX_DIMENSION}]"));
        }
    }
}
