use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf};
use sunplan_core::{timeseries, SolarEngineBuilder};
use tracing::Level;

mod config;
mod plotting;
mod report;

#[derive(Debug, Parser)]
#[command(name = "sunplan", version, about = "Size a residential solar system and project its savings")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a calculation request and write the report files
    Calculate {
        /// Request file (YAML)
        #[arg(short, long)]
        request: PathBuf,
        /// Directory holding locations/, pricing.yaml and assumptions.yaml
        #[arg(long)]
        reference_dir: Option<PathBuf>,
        #[arg(short, long, default_value = "./data/runs")]
        output_dir: PathBuf,
        /// Skip PNG chart generation
        #[arg(long)]
        no_plots: bool,
    },
    /// Print the active location table
    Locations {
        #[arg(long)]
        reference_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();

    match cli.command {
        Command::Calculate {
            request,
            reference_dir,
            output_dir,
            no_plots,
        } => run_calculation(request, reference_dir, output_dir, no_plots),
        Command::Locations { reference_dir } => list_locations(reference_dir),
    }
}

fn load_reference(reference_dir: Option<PathBuf>) -> Result<config::ReferenceData> {
    match reference_dir {
        Some(dir) => config::ReferenceData::load(&dir),
        None => Ok(config::ReferenceData::builtin()),
    }
}

fn run_calculation(
    request_path: PathBuf,
    reference_dir: Option<PathBuf>,
    output_dir: PathBuf,
    no_plots: bool,
) -> Result<()> {
    println!("--- Sunplan ---");

    let request = config::load_request(&request_path)?;
    let reference = load_reference(reference_dir)?;

    let engine = SolarEngineBuilder::new()
        .with_location_table(reference.locations)
        .with_pricing(reference.pricing)
        .with_assumptions(reference.assumptions)
        .build()
        .context("Invalid reference data")?;

    let (result, years) = engine.calculate_detailed(&request.input);

    let label = request.label.clone().unwrap_or_else(|| request.input.location_code.clone());
    let run_dir = output_dir.join(format!("{}_{}", label, chrono::Utc::now().format("%Y%m%d_%H%M%S")));
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create output directory: {}", run_dir.display()))?;

    // Copy the request file to the output directory for traceability
    fs::copy(&request_path, run_dir.join("request.yaml"))?;

    let rows = timeseries::projection_rows(&years, &result.projection);
    let rows = report::write_outputs(&run_dir, &result, &rows)?;

    if !no_plots {
        let run_dir_str = run_dir.to_string_lossy();
        plotting::generate_all_plots(&run_dir_str, &rows, &result.costs)?;
    }

    report::print_summary_report(&label, &result);

    println!("\nCalculation complete. Results are in '{}'", run_dir.display());
    Ok(())
}

fn list_locations(reference_dir: Option<PathBuf>) -> Result<()> {
    let reference = load_reference(reference_dir)?;
    let table = &reference.locations;

    println!("{:<8} {:<22} {:>9} {:<10} {:>8}", "Code", "Name", "Sun hrs", "Tier", "$/kWh");
    for entry in table.entries() {
        println!(
            "{:<8} {:<22} {:>9.1} {:<10} {:>8.3}",
            entry.code,
            entry.name.as_deref().unwrap_or(""),
            entry.sun_hours_per_day,
            format!("{:?}", entry.quality_tier),
            entry.utility_rate
        );
    }
    let fallback = table.default_entry();
    println!(
        "Unknown codes use {:.1} sun hrs ({:?}) at ${:.3}/kWh",
        fallback.sun_hours_per_day, fallback.quality_tier, fallback.utility_rate
    );
    Ok(())
}
