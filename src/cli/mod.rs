//! Command-line interface for transpose-ped.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **transpose**: Convert a PED/MAP pair into TPED/TFAM
//! - **inspect**: Load and validate a PED/MAP pair without writing output
//!
//! ## Usage
//!
//! ```text
//! # Write study.tped and study.tfam
//! transpose-ped transpose --map study.map --ped study.ped --out study
//!
//! # Prefix family ids and recode status by individual id parity
//! transpose-ped transpose -m study.map -p study.ped -o out/study \
//!     --fam-prefix INCH_ --recode-status --except-id 27
//!
//! # Check that a pair lines up, JSON summary for scripting
//! transpose-ped inspect -m study.map -p study.ped.gz --format json
//! ```

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::parsing::{map::parse_map_file, ped::parse_ped_file};
use crate::transpose::{ConversionSummary, TranspositionEngine};

pub mod inspect;
pub mod transpose;

#[derive(Parser)]
#[command(name = "transpose-ped")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Transpose PLINK PED/MAP genotype files into TPED/TFAM")]
#[command(
    long_about = "transpose-ped converts individual-major PED/MAP data into marker-major TPED/TFAM.\n\nGenotype columns of each PED line are matched to MAP rows by position, so both files must describe the same markers in the same order. Optionally:\n- Prefix every family id\n- Recode affection status from the parity of numeric individual ids"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Summary output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a PED/MAP pair into TPED/TFAM files
    Transpose(transpose::TransposeArgs),

    /// Load and validate a PED/MAP pair and report what it contains
    Inspect(inspect::InspectArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Read both inputs and build the engine, MAP first
fn load_engine(map: &Path, ped: &Path) -> anyhow::Result<TranspositionEngine> {
    let map_records = parse_map_file(map)
        .with_context(|| format!("Failed to read MAP file {}", map.display()))?;
    let ped_records = parse_ped_file(ped)
        .with_context(|| format!("Failed to read PED file {}", ped.display()))?;

    let engine = TranspositionEngine::load(map_records, ped_records).with_context(|| {
        format!(
            "Failed to load {} against {}",
            ped.display(),
            map.display()
        )
    })?;

    tracing::info!(
        markers = engine.catalog().len(),
        samples = engine.samples().len(),
        "Loaded PED/MAP"
    );
    Ok(engine)
}

fn print_summary(summary: &ConversionSummary, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_summary(summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Tsv => print_tsv_summary(summary),
    }
    Ok(())
}

fn print_text_summary(summary: &ConversionSummary) {
    println!("Conversion Summary");
    println!("{}", "=".repeat(60));

    println!("\nInput:");
    println!("  Markers: {}", summary.marker_count);
    println!("  Samples: {}", summary.sample_count);
    println!("  Genotypes: {}", summary.genotype_count());
    println!("  Chromosomes: {}", summary.chromosomes.join(", "));

    if summary.family_prefix.is_some() || summary.status_rule.is_some() {
        println!("\nEdits:");
        if let Some(prefix) = &summary.family_prefix {
            println!("  Family prefix: {prefix}");
        }
        if let Some(rule) = &summary.status_rule {
            println!(
                "  Status recode: even -> {}, odd -> {}{}",
                rule.even_code,
                rule.odd_code,
                rule.except_id
                    .as_ref()
                    .map(|id| format!(" (except {id})"))
                    .unwrap_or_default()
            );
            println!("  Statuses changed: {}", summary.statuses_recoded);
        }
    }

    if let (Some(tped), Some(tfam)) = (&summary.tped_path, &summary.tfam_path) {
        println!("\nOutput:");
        println!("  TPED: {tped}");
        println!("  TFAM: {tfam}");
    }
}

fn print_tsv_summary(summary: &ConversionSummary) {
    println!("markers\tsamples\tchromosomes\tstatuses_recoded\ttped\ttfam");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        summary.marker_count,
        summary.sample_count,
        summary.chromosomes.join(","),
        summary.statuses_recoded,
        summary.tped_path.as_deref().unwrap_or("-"),
        summary.tfam_path.as_deref().unwrap_or("-"),
    );
}
