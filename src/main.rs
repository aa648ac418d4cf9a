use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use termfolio::core::config::{self, CliOverrides, FolioConfig};
use termfolio::core::content::Content;
use termfolio::core::theme::Theme;
use termfolio::tui;

#[derive(Parser)]
#[command(name = "termfolio", version, about = "Interactive terminal portfolio")]
struct Args {
    /// Colour theme
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,
    /// Skip the boot splash
    #[arg(long)]
    no_splash: bool,
    /// Portfolio content file (TOML) replacing the built-in content
    #[arg(short, long)]
    content: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to termfolio.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("termfolio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        FolioConfig::default()
    });
    let cli = CliOverrides {
        theme: args.theme,
        no_splash: args.no_splash,
        content: args.content,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!(
        "termfolio starting up (theme: {:?}, splash: {})",
        resolved.theme,
        resolved.show_splash
    );

    let content = Content::load(resolved.content_path.as_deref()).map_err(std::io::Error::other)?;

    tui::run(resolved, content)
}
