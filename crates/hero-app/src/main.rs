mod app_state;
mod cli;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use hero_config::schema::HeroConfig;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so `logging.level` can pick the filter;
    // the failure is reported once the subscriber is up.
    let loaded = match args.config {
        Some(ref path) => hero_config::load_config_from(path),
        None => hero_config::load_config(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (HeroConfig::default(), Some(e)),
    };
    args.apply_overrides(&mut config);

    if args.print_config {
        println!("{}", hero_config::config_to_json(&config));
        return;
    }

    // Initialize logging
    let directive = args.log_directive(config.logging.level);
    let parsed: Directive = match directive.parse() {
        Ok(d) => d,
        Err(_) => LevelFilter::INFO.into(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(parsed))
        .init();

    tracing::info!("Hero v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!(
        preset = ?config.scene.preset,
        time_mode = ?config.animation.time_mode,
        "Config loaded"
    );

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::HeroApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
