//! Page-side half of the bridge.

use serde_json::Value;

/// Replaced with the configured hook path as a JS string literal.
const HOOK_PLACEHOLDER: &str = "__WEBSHELL_HOOK__";

/// Defines `window.backend` in every page.
///
/// `backend.call(name, args, cb)` posts `#api:name[ts]/arg...` over the IPC
/// channel; when `cb` is given a timestamp is allocated so the host answers
/// through the callback hook, `hook(name, ts, value)`. String results arrive
/// percent-encoded and are decoded before reaching `cb`.
///
/// The resolver is installed both as `backend.trigger_cb` and at `hook`,
/// creating intermediate objects along the dotted path as needed.
pub fn client_init_script(hook: &str) -> String {
    let literal = Value::String(hook.to_string()).to_string();
    CLIENT_TEMPLATE.replace(HOOK_PLACEHOLDER, &literal)
}

const CLIENT_TEMPLATE: &str = r#"
(function() {
    var backend = window.backend = window.backend || {};
    var pending = {};
    var nextTs = 1;

    backend.call = function(name, args, cb) {
        var uri = '#api:' + name;
        if (typeof cb === 'function') {
            var ts = nextTs++;
            pending[ts] = cb;
            uri += '[' + ts + ']';
        }
        args = args || [];
        for (var i = 0; i < args.length; i++) {
            uri += '/' + encodeURIComponent(String(args[i]));
        }
        if (args.length > 0 && String(args[args.length - 1]) === '') {
            uri += '/';
        }
        window.ipc.postMessage(uri);
    };

    var resolve = function(name, ts, value) {
        var cb = pending[ts];
        if (!cb) {
            return;
        }
        delete pending[ts];
        cb(typeof value === 'string' ? decodeURIComponent(value) : value);
    };
    backend.trigger_cb = resolve;

    var path = __WEBSHELL_HOOK__.split('.');
    if (path[0] === 'window') {
        path.shift();
    }
    if (path.length > 0) {
        var owner = window;
        for (var i = 0; i < path.length - 1; i++) {
            owner = owner[path[i]] = owner[path[i]] || {};
        }
        owner[path[path.length - 1]] = resolve;
    }
})();
"#;
