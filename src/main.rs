use clap::Parser;
use linkstatus::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkstatus", about = "Pending-link indicators for a navigation sidebar")]
struct Args {
    /// Simulated navigation time in milliseconds
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Path the session starts on
    #[arg(short, long)]
    initial_path: Option<String>,

    /// Config file (defaults to ~/.linkstatus/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to activate on startup, configured as a link or not
    #[arg(short, long)]
    open: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to linkstatus.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("linkstatus.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("linkstatus starting up");

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path, false),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::LinkStatusConfig::default()
    });

    let resolved = config::resolve(&file_config, args.delay_ms, args.initial_path.as_deref());
    log::info!(
        "Resolved config: initial path {}, navigation delay {:?}, {} links",
        resolved.initial_path,
        resolved.navigation_delay,
        resolved.links.len()
    );

    linkstatus::tui::run(resolved, args.open)
}
