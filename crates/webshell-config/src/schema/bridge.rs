//! Page-to-host call bridge settings.

use serde::{Deserialize, Serialize};

/// What to do with a navigation that carries the `#api:` marker but does
/// not parse as a call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MalformedCallPolicy {
    /// Log the error and consume the navigation.
    #[default]
    Reject,
    /// Let the engine load the URI as an ordinary navigation.
    PassThrough,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Page-side function invoked with `(name, timestamp, value)` results.
    pub callback_hook: String,
    /// Inject the `window.backend` client script into every page.
    pub inject_client: bool,
    pub on_malformed: MalformedCallPolicy,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            callback_hook: "backend.trigger_cb".into(),
            inject_client: true,
            on_malformed: MalformedCallPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_policy_serialization() {
        let json = serde_json::to_string(&MalformedCallPolicy::PassThrough).unwrap();
        assert_eq!(json, "\"pass_through\"");
        let parsed: MalformedCallPolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(parsed, MalformedCallPolicy::Reject);
    }

    #[test]
    fn bridge_config_partial_toml() {
        let config: BridgeConfig = toml::from_str("on_malformed = \"pass_through\"").unwrap();
        assert_eq!(config.on_malformed, MalformedCallPolicy::PassThrough);
        assert_eq!(config.callback_hook, "backend.trigger_cb");
        assert!(config.inject_client);
    }
}
