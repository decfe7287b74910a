use anyhow::{Context, Result};
use clap::Parser;
use snack::assets::load_food_sprites;
use snack::audio::BackgroundMusic;
use snack::game::{GameConfig, MAX_GRID_SIDE, MIN_GRID_SIDE};
use snack::modes::HumanMode;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snack")]
#[command(version, about = "Grid snake arcade game for the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range((MIN_GRID_SIDE as i64)..=(MAX_GRID_SIDE as i64)))]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value = "15", value_parser = clap::value_parser!(u32).range((MIN_GRID_SIDE as i64)..=(MAX_GRID_SIDE as i64)))]
    height: u32,

    /// Game ticks per second
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=60))]
    tick_rate: u32,

    /// Directory holding the food sprites and the music track
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,

    /// Do not play background music
    #[arg(long)]
    mute: bool,

    /// Log file; the terminal itself is used by the game
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("snack.log"));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(path)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_path = init_logging(cli.log_file)?;

    // Create game configuration from CLI arguments
    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        tick_rate: cli.tick_rate,
        ..GameConfig::with_assets_dir(&cli.assets_dir)
    };
    info!(log = %log_path.display(), ?config, "starting");

    // Every sprite must be ready before the first tick
    let sprites = load_food_sprites(&config.food_assets)
        .await
        .context("Failed to load game assets")?;
    info!(count = sprites.len(), "food sprites loaded");

    let music = BackgroundMusic::new(config.music.clone(), cli.mute);
    let mut human_mode = HumanMode::new(config, sprites, music)?;
    human_mode.run().await?;

    info!("bye");
    Ok(())
}
