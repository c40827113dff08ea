//! Demarc CLI - border detection for elevation grids

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use demarc_algorithms::strata::{detect_borders_with, label_strata, BorderParams, MinimaPolicy};
use demarc_core::Grid;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "demarc")]
#[command(author, version, about = "Border detection for elevation grids", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about an elevation grid file
    Info {
        /// Input grid file (JSON array of arrays of integers)
        input: PathBuf,
    },
    /// Print the stratum-id grid
    Strata {
        /// Input grid file
        input: PathBuf,
    },
    /// Detect borders and print the 0/1 mask
    Borders {
        /// Input grid file
        input: PathBuf,
        /// Write the mask as JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Require strictly lower elevation than every neighbor
        /// (isolated-pit detection) instead of the default tie-tolerant test
        #[arg(long)]
        strict: bool,
    },
}

// ─── Commands ───────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Info { input } => {
            let grid = read_grid(&input)?;
            let stats = grid.statistics();
            let strata = label_strata(&grid)?;

            println!("File: {}", input.display());
            println!(
                "Dimensions: {} x {} ({} cells)",
                grid.rows(),
                grid.cols(),
                grid.len()
            );
            println!("Strata: {}", strata.count());
            if let Some(min) = stats.min {
                println!("Min elevation: {}", min);
            }
            if let Some(max) = stats.max {
                println!("Max elevation: {}", max);
            }
            if let Some(mean) = stats.mean {
                println!("Mean elevation: {:.4}", mean);
            }
        }

        Commands::Strata { input } => {
            let grid = read_grid(&input)?;
            let strata = label_strata(&grid)?;
            info!("{} strata", strata.count());
            println!("{}", strata.labels);
        }

        Commands::Borders {
            input,
            output,
            strict,
        } => {
            let grid = read_grid(&input)?;
            let params = BorderParams {
                policy: if strict {
                    MinimaPolicy::Strict
                } else {
                    MinimaPolicy::NonStrict
                },
            };

            let start = Instant::now();
            let strata = label_strata(&grid)?;
            let mask = detect_borders_with(&grid, &strata, params)?;
            debug!(
                "classified {} strata in {:.2?}",
                strata.count(),
                start.elapsed()
            );

            let border_cells = mask.data().iter().filter(|&&v| v == 1).count();
            info!("{} of {} cells are border", border_cells, mask.len());

            match output {
                Some(path) => write_mask(&path, &mask)?,
                None => print_mask(&mask),
            }
        }
    }

    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn read_grid(path: &Path) -> Result<Grid<i64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let rows: Vec<Vec<i64>> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of integer arrays", path.display()))?;
    let grid = Grid::from_rows(rows).context("Invalid grid shape")?;
    info!("Input: {} x {}", grid.rows(), grid.cols());
    Ok(grid)
}

fn print_mask(mask: &Grid<u8>) {
    for row in mask.data().rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        println!("{}", line.join(" "));
    }
}

fn write_mask(path: &Path, mask: &Grid<u8>) -> Result<()> {
    let json = serde_json::to_string(&mask.to_rows()).context("Failed to serialize mask")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
