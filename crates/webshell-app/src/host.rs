//! Host methods exposed to the page.
//!
//! This is the complete callable surface: anything not registered in
//! [`builtin_registry`] is answered with "method not found".

use serde_json::{json, Value};
use webshell_bridge::{arg, DispatchError, HostRegistry, HostResult};
use webshell_platform::expand_home;

/// State the host methods may touch. Owned by the main loop.
#[derive(Debug, Default)]
pub struct ShellHost {
    exit_requested: bool,
}

impl ShellHost {
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

/// Build the capability table.
pub fn builtin_registry() -> Result<HostRegistry<ShellHost>, DispatchError> {
    let mut registry = HostRegistry::new();
    registry
        .register("exit", exit)?
        .register("error", error)?
        .register("readFile", read_file)?
        .register("ping", ping)?;
    Ok(registry)
}

fn exit(host: &mut ShellHost, _args: &[String]) -> HostResult {
    tracing::info!("exit requested by page");
    host.exit_requested = true;
    Ok(Value::Null)
}

/// Page-reported error, logged on the host side.
fn error(_host: &mut ShellHost, args: &[String]) -> HostResult {
    let msg = arg(args, 0)?;
    tracing::error!("Error: {msg}");
    Ok(Value::Null)
}

/// Return a file's contents, or `""` if it cannot be read.
fn read_file(_host: &mut ShellHost, args: &[String]) -> HostResult {
    let path = expand_home(arg(args, 0)?);
    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(json!(contents)),
        Err(e) => {
            tracing::error!(error = %e, "Unable to open file '{}'.", path.display());
            Ok(json!(""))
        }
    }
}

fn ping(_host: &mut ShellHost, _args: &[String]) -> HostResult {
    Ok(json!("pong"))
}
