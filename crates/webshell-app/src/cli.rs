use std::path::PathBuf;

use clap::Parser;
use webshell_config::ShellConfig;

/// webshell: host a web page in a native window with a host-call bridge.
#[derive(Parser, Debug)]
#[command(name = "webshell", version, about)]
pub struct Args {
    /// Page to open: a URL or a local HTML file.
    pub index: Option<String>,

    /// Window title.
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Script-injection pipe location.
    #[arg(long, value_name = "PATH")]
    pub pipe: Option<PathBuf>,

    /// Do not create the script-injection pipe.
    #[arg(long, conflicts_with = "pipe")]
    pub no_pipe: bool,

    /// Enable the web inspector.
    #[arg(long)]
    pub devtools: bool,
}

impl Args {
    /// Overlay command-line values on a loaded config.
    pub fn apply_to(&self, mut config: ShellConfig) -> ShellConfig {
        if let Some(index) = &self.index {
            config.app.index = Some(index.clone());
        }
        if let Some(title) = &self.title {
            config.app.title = title.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(pipe) = &self.pipe {
            config.pipe.enabled = true;
            config.pipe.path = pipe.clone();
        }
        if self.no_pipe {
            config.pipe.enabled = false;
        }
        if self.devtools {
            config.app.devtools = true;
        }
        config
    }
}

pub fn parse() -> Args {
    Args::parse()
}
