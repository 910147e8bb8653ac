//! MarketLens CLI — run the pipeline and export filtered CSV views.
//!
//! Commands:
//! - `run` — fetch all sources, run the pipeline, print quality reports
//! - `export` — run the pipeline and write the combined-campaign and
//!   business tables as CSV, with optional date/platform/state filters
//! - `sources` — list the configured source URLs

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use marketlens_core::{
    default_sources, export, pipeline, quality, HttpProvider, Platform, StderrProgress,
    ViewFilter,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marketlens", about = "MarketLens — marketing analytics data pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all sources, run the pipeline, and print quality reports.
    Run,
    /// Run the pipeline and write the campaign and business tables as CSV.
    Export {
        /// Output directory for the CSV files.
        #[arg(long, default_value = "exports")]
        output_dir: PathBuf,

        /// Keep only records on or after this date (YYYY-MM-DD).
        #[arg(long)]
        start: Option<String>,

        /// Keep only records on or before this date (YYYY-MM-DD).
        #[arg(long)]
        end: Option<String>,

        /// Keep only these platforms (facebook, google, tiktok). Repeatable.
        #[arg(long)]
        platform: Vec<String>,

        /// Keep only these states. Repeatable.
        #[arg(long)]
        state: Vec<String>,
    },
    /// List the configured source URLs.
    Sources,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => cmd_run(),
        Commands::Export {
            output_dir,
            start,
            end,
            platform,
            state,
        } => cmd_export(output_dir, start, end, platform, state),
        Commands::Sources => cmd_sources(),
    }
}

fn run_pipeline() -> Result<marketlens_core::PipelineOutput> {
    let provider = HttpProvider::new().context("failed to build HTTP client")?;
    let sources = default_sources();
    pipeline::run(&provider, &sources, &StderrProgress).context("pipeline run failed")
}

fn cmd_run() -> Result<()> {
    let output = run_pipeline()?;

    println!("{}", quality::business_report(&output.business));
    for (platform, records) in &output.platforms {
        println!("{}", quality::combined_report(platform.as_str(), records));
    }
    println!(
        "{}",
        quality::combined_report("combined", &output.combined)
    );
    println!("unified: {} daily records", output.unified.len());

    Ok(())
}

fn cmd_export(
    output_dir: PathBuf,
    start: Option<String>,
    end: Option<String>,
    platform: Vec<String>,
    state: Vec<String>,
) -> Result<()> {
    let filter = ViewFilter {
        start: parse_date(start.as_deref())?,
        end: parse_date(end.as_deref())?,
        platforms: platform
            .iter()
            .map(|p| p.parse::<Platform>().map_err(anyhow::Error::msg))
            .collect::<Result<_>>()?,
        states: state.into_iter().collect(),
    };

    let output = run_pipeline()?;
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let campaigns = output_dir.join("campaign_performance.csv");
    std::fs::write(&campaigns, export::combined_csv(&output.combined, &filter)?)
        .with_context(|| format!("failed to write {}", campaigns.display()))?;

    let business = output_dir.join("business_metrics.csv");
    std::fs::write(&business, export::business_csv(&output.business, &filter)?)
        .with_context(|| format!("failed to write {}", business.display()))?;

    println!("wrote {}", campaigns.display());
    println!("wrote {}", business.display());
    Ok(())
}

fn cmd_sources() -> Result<()> {
    let sources = default_sources();
    for spec in sources.all() {
        println!("{:10} {}", spec.kind.label(), spec.url);
    }
    println!("fingerprint: {}", sources.fingerprint());
    Ok(())
}

fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d")
                .with_context(|| format!("invalid date '{v}' (expected YYYY-MM-DD)"))
        })
        .transpose()
}
