//! Q Tech Digital site - the company's marketing site as a terminal app
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use qtech_app::config::{self, Settings, TransportKind};
use qtech_app::Transport;
use qtech_core::Route;
use tracing::{info, warn};

/// Q Tech Digital LLC - Full Stack Consulting & Development
#[derive(Parser, Debug)]
#[command(name = "qtech")]
#[command(about = "Browse the Q Tech Digital site in your terminal", long_about = None)]
struct Args {
    /// Page to open first: home, portfolio, contact or about
    #[arg(long, value_name = "ID")]
    page: Option<String>,

    /// Settings file (defaults to <config dir>/qtech-site/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Post contact submissions to this mail-dispatch endpoint
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Delay of the simulated submission, in milliseconds
    #[arg(long, value_name = "MS")]
    send_delay_ms: Option<u64>,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        return init_config(args.config);
    }

    if let Err(e) = qtech_core::logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let settings = resolve_settings(&args)?;
    let start_page = args
        .page
        .as_deref()
        .unwrap_or(settings.ui.start_page.as_str())
        .to_string();
    let route = Route::from_id(&start_page);
    if route.page().is_none() {
        warn!("Unknown start page {:?}", start_page);
    }

    let transport = Transport::from_settings(&settings.contact)?;
    qtech_tui::run(settings, route, transport).await?;
    Ok(())
}

/// Load the settings file and apply command-line overrides
fn resolve_settings(args: &Args) -> qtech_core::Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => config::load_settings_strict(path)?,
        None => match config::default_config_path() {
            Some(path) => config::load_settings(&path),
            None => Settings::default(),
        },
    };

    if let Some(endpoint) = &args.endpoint {
        settings.contact.transport = TransportKind::Http;
        settings.contact.endpoint = Some(endpoint.clone());
    }
    if let Some(delay) = args.send_delay_ms {
        settings.contact.simulated_delay_ms = delay;
    }

    config::validate_settings(&settings)?;
    info!(
        "Settings: start_page={} transport={:?}",
        settings.ui.start_page, settings.contact.transport
    );
    Ok(settings)
}

fn init_config(path: Option<PathBuf>) -> color_eyre::Result<()> {
    let Some(path) = path.or_else(config::default_config_path) else {
        color_eyre::eyre::bail!("No config directory on this platform; pass --config <PATH>");
    };

    if config::init_config_file(&path)? {
        println!("Wrote {}", path.display());
    } else {
        println!("{} already exists", path.display());
    }
    Ok(())
}
