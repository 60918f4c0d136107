mod app_state;
mod cli;
mod host;
mod icon;
mod placement;

use std::path::Path;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use webshell_config::{toml_loader, validation, ShellConfig};

fn init_logging(directive: &str) {
    let directive = directive
        .parse::<Directive>()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so its level can apply; report afterwards
    let loaded = match &args.config {
        Some(path) => toml_loader::load_from_path(Path::new(path)),
        None => webshell_config::load_config(),
    };

    let directive = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| ShellConfig::default().logging.level);
    init_logging(&directive);

    tracing::info!("webshell v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ShellConfig::default()
    });
    let config = args.apply_to(config);

    if let Err(e) = validation::validate(&config) {
        tracing::error!("Invalid configuration: {e}");
        std::process::exit(2);
    }
    if config.app.index.is_none() {
        tracing::error!("No page to open: pass INDEX or set app.index in the config");
        std::process::exit(2);
    }

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    let mut app = match app_state::ShellApp::new(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to register host methods: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    drop(app);
    tracing::info!("Shutdown complete");
}
