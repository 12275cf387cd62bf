use std::fs::{self, File};
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use zenith::core::config;
use zenith::tui;

#[derive(Parser)]
#[command(name = "zenith", about = "A retro terminal journal for your thoughts")]
struct Args {
    /// Directory holding thoughts.json and prefs.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Config file to read instead of ~/.zenith/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to ~/.zenith/zenith.log
    let app_dir = config::app_dir();
    fs::create_dir_all(&app_dir)?;
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(app_dir.join("zenith.log")) {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let config_path = args.config.unwrap_or_else(config::config_path);
    let file_config = match config::load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load {}: {}", config_path.display(), e);
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.data_dir.as_deref());
    log::set_max_level(resolved.log_level);

    log::info!(
        "Zenith starting up (data dir {}, log level {})",
        resolved.data_dir.display(),
        resolved.log_level
    );

    tui::run(resolved)
}
