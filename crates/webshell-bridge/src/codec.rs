//! Encoding of host calls into URI fragments and of results into callbacks.
//!
//! Decoding: `#api:<name>[<ts>](/<segment>)*`, anchored to the end of the
//! input. Each segment is percent-decoded into one positional argument. A
//! single trailing `/` is dropped; interior empty segments are kept.
//!
//! Encoding: `<hook>("<name>", <ts>, <value>);` where value is `null`, a
//! bare number, or a double-quoted percent-encoded string.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Substring that marks a URI as a host call.
pub const CALL_MARKER: &str = "#api:";

static CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#api:([A-Za-z0-9_]+)(?:\[([0-9]+)\])?((?:/[^/]*)*)$")
        .expect("codec: static call pattern must compile")
});

/// A decoded host call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallDescriptor {
    pub name: String,
    /// Present when the page expects the result through the callback hook.
    pub timestamp: Option<String>,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    #[error("malformed call uri: {0}")]
    Malformed(String),

    #[error("unsupported return type: {0}")]
    UnsupportedReturn(&'static str),
}

impl CallDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: None,
            args: Vec::new(),
        }
    }

    pub fn with_timestamp(mut self, ts: impl Into<String>) -> Self {
        self.timestamp = Some(ts.into());
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Render back to `#api:name[ts]/arg...`.
    ///
    /// A trailing empty argument gets an extra `/` so that the single
    /// trailing slash dropped by the decoder does not swallow it.
    pub fn to_fragment(&self) -> String {
        let mut out = format!("{CALL_MARKER}{}", self.name);
        if let Some(ts) = &self.timestamp {
            out.push('[');
            out.push_str(ts);
            out.push(']');
        }
        for a in &self.args {
            out.push('/');
            out.push_str(&urlencoding::encode(a));
        }
        if self.args.last().is_some_and(|a| a.is_empty()) {
            out.push('/');
        }
        out
    }
}

/// Whether `uri` carries the call marker at all.
pub fn is_api_call(uri: &str) -> bool {
    uri.contains(CALL_MARKER)
}

/// Decode a host call from `uri`.
///
/// Returns `Ok(None)` when the marker is absent, meaning the input is an
/// ordinary navigation.
pub fn parse_call(uri: &str) -> Result<Option<CallDescriptor>, CallError> {
    if !is_api_call(uri) {
        return Ok(None);
    }

    let caps = CALL_RE
        .captures(uri)
        .ok_or_else(|| CallError::Malformed(uri.to_string()))?;

    let name = caps[1].to_string();
    let timestamp = caps.get(2).map(|m| m.as_str().to_string());
    let args = split_args(caps.get(3).map_or("", |m| m.as_str()));

    Ok(Some(CallDescriptor {
        name,
        timestamp,
        args,
    }))
}

fn split_args(tail: &str) -> Vec<String> {
    let Some(body) = tail.strip_prefix('/') else {
        return Vec::new();
    };
    if body.is_empty() {
        return Vec::new();
    }
    let body = body.strip_suffix('/').unwrap_or(body);
    body.split('/').map(percent_decode).collect()
}

fn percent_decode(segment: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(segment.as_bytes())).into_owned()
}

/// Render a handler's return value as a script literal.
pub fn encode_return_value(value: &Value) -> Result<String, CallError> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(format!("\"{}\"", urlencoding::encode(s))),
        Value::Bool(_) => Err(CallError::UnsupportedReturn("boolean")),
        Value::Array(_) => Err(CallError::UnsupportedReturn("array")),
        Value::Object(_) => Err(CallError::UnsupportedReturn("object")),
    }
}

/// Build the statement that delivers `value` to the page's callback hook.
pub fn encode_callback(
    hook: &str,
    name: &str,
    timestamp: &str,
    value: &Value,
) -> Result<String, CallError> {
    let rendered = encode_return_value(value)?;
    Ok(format!("{hook}(\"{name}\", {timestamp}, {rendered});"))
}
