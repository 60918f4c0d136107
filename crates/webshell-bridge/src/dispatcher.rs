//! Capability table and call dispatch.
//!
//! Only names registered at startup are callable from the page. Handlers
//! are plain functions over a host context `C` owned by the main loop, so
//! they run on the thread that owns the webview.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::codec::{encode_callback, CallDescriptor, CallError};

/// What a host handler hands back to the page.
pub type HostResult = Result<Value, HostError>;

type HostFn<C> = Box<dyn Fn(&mut C, &[String]) -> HostResult>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("missing argument {index}")]
    MissingArgument { index: usize },

    #[error("{0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("API method '{0}' doesn't exist")]
    MethodNotFound(String),

    #[error("'{name}' is not a callable method name")]
    InvalidName { name: String },

    #[error("API method '{name}' failed: {source}")]
    Host { name: String, source: HostError },

    #[error("API method '{name}' result could not be encoded: {source}")]
    Encode { name: String, source: CallError },
}

/// Fetch positional argument `index`.
pub fn arg(args: &[String], index: usize) -> Result<&str, HostError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(HostError::MissingArgument { index })
}

/// Name-to-handler table.
pub struct HostRegistry<C> {
    methods: BTreeMap<String, HostFn<C>>,
}

impl<C> HostRegistry<C> {
    pub fn new() -> Self {
        Self {
            methods: BTreeMap::new(),
        }
    }

    /// Register `handler` under `name`, replacing any previous handler.
    ///
    /// The name must consist of ASCII letters, digits and `_`, the only
    /// characters the call fragment can carry.
    pub fn register<F>(&mut self, name: &str, handler: F) -> Result<&mut Self, DispatchError>
    where
        F: Fn(&mut C, &[String]) -> HostResult + 'static,
    {
        let callable = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_');
        if !callable {
            return Err(DispatchError::InvalidName {
                name: name.to_string(),
            });
        }

        if self
            .methods
            .insert(name.to_string(), Box::new(handler))
            .is_some()
        {
            warn!(name, "host method registered twice, keeping the newer one");
        }
        Ok(self)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    fn get(&self, name: &str) -> Option<&HostFn<C>> {
        self.methods.get(name)
    }
}

impl<C> Default for HostRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves calls against a [`HostRegistry`] and encodes their results.
pub struct Dispatcher<C> {
    registry: HostRegistry<C>,
    hook: String,
}

impl<C> Dispatcher<C> {
    /// `hook` is the page-side function that receives results.
    pub fn new(registry: HostRegistry<C>, hook: impl Into<String>) -> Self {
        Self {
            registry,
            hook: hook.into(),
        }
    }

    /// Invoke the handler for `call`.
    ///
    /// Returns the callback script to evaluate in the page when the call
    /// carried a timestamp, `None` when the result is to be discarded.
    pub fn dispatch(
        &self,
        ctx: &mut C,
        call: &CallDescriptor,
    ) -> Result<Option<String>, DispatchError> {
        let handler = self
            .registry
            .get(&call.name)
            .ok_or_else(|| DispatchError::MethodNotFound(call.name.clone()))?;

        debug!(name = %call.name, argc = call.args.len(), "dispatching host call");

        let value = handler(ctx, &call.args).map_err(|source| DispatchError::Host {
            name: call.name.clone(),
            source,
        })?;

        let Some(ts) = &call.timestamp else {
            return Ok(None);
        };

        encode_callback(&self.hook, &call.name, ts, &value)
            .map(Some)
            .map_err(|source| DispatchError::Encode {
                name: call.name.clone(),
                source,
            })
    }
}
