use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use meander::config::AppConfig;
use meander::path::{enumerate_paths, RandomWalker};
use meander::render;

/// Generate grid paths without the interactive UI.
#[derive(Parser)]
#[command(name = "solve", about = "Walk or enumerate grid paths headlessly")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "meander.toml")]
    config: PathBuf,

    /// What to generate: a single 'random' walk or 'all' valid paths
    #[arg(long, default_value = "random")]
    mode: String,

    /// Override grid height
    #[arg(long)]
    height: Option<usize>,

    /// Override grid width
    #[arg(long)]
    width: Option<usize>,

    /// Override start column
    #[arg(long)]
    start_x: Option<usize>,

    /// Override start row
    #[arg(long)]
    start_y: Option<usize>,

    /// Override end column
    #[arg(long)]
    end_x: Option<usize>,

    /// Override end row
    #[arg(long)]
    end_y: Option<usize>,

    /// Override RNG seed for the random walk
    #[arg(long)]
    seed: Option<u64>,

    /// Print at most this many paths in 'all' mode
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validate mode
    match cli.mode.as_str() {
        "random" | "all" => {}
        other => bail!("unknown mode '{}' (expected 'random' or 'all')", other),
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        config.grid.height = height;
    }
    if let Some(width) = cli.width {
        config.grid.width = width;
    }
    if let Some(start_x) = cli.start_x {
        config.grid.start_x = start_x;
    }
    if let Some(start_y) = cli.start_y {
        config.grid.start_y = start_y;
    }
    if let Some(end_x) = cli.end_x {
        config.grid.end_x = end_x;
    }
    if let Some(end_y) = cli.end_y {
        config.grid.end_y = end_y;
    }
    if let Some(seed) = cli.seed {
        config.walk.seed = Some(seed);
    }

    let grid = config.grid.build_grid().context("building grid")?;

    match cli.mode.as_str() {
        "random" => {
            let mut walker = match config.walk.seed {
                Some(seed) => RandomWalker::from_seed(seed),
                None => RandomWalker::new(),
            };
            let mut walked = grid;
            walker.walk(&mut walked);
            print!("{}", render::to_text(&walked));
        }
        _ => {
            let solutions = enumerate_paths(&grid);
            let shown = cli.limit.unwrap_or(solutions.len()).min(solutions.len());
            for (i, solution) in solutions.iter().take(shown).enumerate() {
                println!("Solution {}:", i + 1);
                print!("{}", render::to_text(solution));
            }
            if shown < solutions.len() {
                println!("... and {} more", solutions.len() - shown);
            }
            println!("{} paths in total", solutions.len());
        }
    }

    Ok(())
}
