/// Default TOML config content. Every value is commented out so the
/// file documents the defaults without pinning them.
pub(super) fn default_config_toml() -> &'static str {
    r##"# webshell configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[app]
# title = "Application"
# index = "https://example.org/"   # URL or local path
# devtools = false

[window]
# x = 0
# y = 0
# width = 1024
# height = 768
# centered = false       # wins over x/y
# maximized = false
# decorations = true
# taskbar = true
# icon = "/path/to/icon.png"

[bridge]
# callback_hook = "backend.trigger_cb"
# inject_client = true
# on_malformed = "reject"  # reject, pass_through

[pipe]
# enabled = true
# path = "/tmp/webapp.pipe"

[logging]
# level = "webshell=info"
"##
}
