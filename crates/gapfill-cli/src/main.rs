//! gapfill CLI - Fill hand-drawn outlines that are not quite closed

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use gapfill_core::{Mask, Raster, SeedPoint};
use gapfill_region::{DEFAULT_GAP_WIDTH, FillOutcome, GapFill, GapFillOptions, GapFillStages};

#[derive(Parser)]
#[command(name = "gapfill")]
#[command(author, version, about = "Gap-aware seeded fill", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about an image
    Info {
        /// Input PNG
        input: PathBuf,
    },
    /// Fill the region around a seed and write the stencil mask
    Fill {
        /// Input PNG with the outline drawn in a single color
        input: PathBuf,
        /// Output mask PNG
        output: PathBuf,
        /// Seed row
        #[arg(short, long)]
        row: i64,
        /// Seed column
        #[arg(short, long)]
        col: i64,
        /// Widest outline break to bridge, in pixels
        #[arg(short, long, default_value_t = DEFAULT_GAP_WIDTH as i64)]
        gap: i64,
        /// Also write every intermediate mask into this directory
        #[arg(long)]
        stages: Option<PathBuf>,
    },
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")
}

fn read_input(path: &Path) -> Result<Raster> {
    let raster = gapfill_io::read_raster(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    info!("Input: {} x {}", raster.width(), raster.height());
    Ok(raster)
}

fn write_mask(mask: &Mask, path: &Path) -> Result<()> {
    gapfill_io::write_mask(mask, path)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn write_stages(stages: &GapFillStages, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let named = [
        ("naive", &stages.naive),
        ("eroded", &stages.eroded),
        ("inside_eroded", &stages.inside_eroded),
        ("residual", &stages.residual),
        ("restored", &stages.restored),
        ("patched", &stages.patched),
    ];
    for (i, (name, mask)) in named.iter().enumerate() {
        let path = dir.join(format!("{}_{}.png", i + 1, name));
        write_mask(mask, &path)?;
        info!("Stage {} ({} pixels) -> {}", name, mask.count(), path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Info { input } => {
            let raster = read_input(&input)?;
            println!("File: {}", input.display());
            println!(
                "Dimensions: {} x {} ({} pixels)",
                raster.width(),
                raster.height(),
                raster.data().len()
            );
            println!("Distinct colors: {}", raster.distinct_values());
        }

        Commands::Fill {
            input,
            output,
            row,
            col,
            gap,
            stages,
        } => {
            let raster = read_input(&input)?;
            let options = GapFillOptions::new(gap).context("Invalid gap width")?;
            let fill = GapFill::new(options);
            let seed = SeedPoint::new(row, col);
            if !seed.is_inside(raster.width(), raster.height()) {
                bail!(
                    "Seed {} is outside the {} x {} image",
                    seed,
                    raster.width(),
                    raster.height()
                );
            }

            let start = Instant::now();
            let computed = fill.stages(&raster, seed).context("Fill failed")?;
            let result = fill.finish(&computed, seed).context("Fill failed")?;
            let elapsed = start.elapsed();

            if let Some(dir) = stages {
                write_stages(&computed, &dir)?;
            }

            match result.outcome {
                FillOutcome::Enclosed => info!("Region is enclosed"),
                FillOutcome::ReachesBorder => {
                    warn!("Region reaches the image border; the outline may be open")
                }
                FillOutcome::Collapsed => {
                    warn!("Gap width {} is too large for this region; mask is empty", gap)
                }
            }

            write_mask(&result.mask, &output)?;
            println!("Mask saved to: {}", output.display());
            println!("  Filled pixels: {}", result.filled_count());
            println!("  Radius: {}", computed.radius);
            println!("  Processing time: {:.2?}", elapsed);
        }
    }

    Ok(())
}
