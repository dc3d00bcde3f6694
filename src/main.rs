use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use pager::app::App;
use pager::config::Config;
use pager::error::{AppError, AppResult};
use pager::logging::init_logging;
use pager::page::Page;

#[derive(Debug, Parser)]
#[command(name = "pager")]
#[command(version, about = "Swipeable multi-page popover in the terminal", long_about = None)]
struct Cli {
    /// Config file (defaults to $PAGER_CONFIG_PATH or the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Popover content width in points
    #[arg(long)]
    width: Option<f32>,
    /// Replace slides with instant cuts
    #[arg(long)]
    reduce_motion: bool,
    /// Page to open on
    #[arg(long)]
    page: Option<String>,
    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    let config = apply_overrides(config, &cli)?;
    info!(
        width = config.popover.width,
        reduce_motion = config.motion.reduce_motion,
        start_page = %config.popover.start_page,
        "starting pager"
    );

    let mut app = App::new_with_config(config)?;
    app.run().await
}

fn apply_overrides(mut config: Config, cli: &Cli) -> AppResult<Config> {
    if let Some(width) = cli.width {
        if !width.is_finite() || width <= 0.0 {
            return Err(AppError::invalid_argument(format!(
                "--width must be a positive number of points, got {width}"
            )));
        }
        config.popover.width = width;
    }
    if cli.reduce_motion {
        config.motion.reduce_motion = true;
    }
    if let Some(page) = &cli.page {
        config.popover.start_page = Page::parse(page)?.id().to_string();
    }
    Ok(config)
}
