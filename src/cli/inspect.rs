use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_engine, print_summary, OutputFormat};
use crate::transpose::ConversionSummary;

#[derive(Args)]
pub struct InspectArgs {
    /// MAP file (tab-delimited, optionally gzipped)
    #[arg(short, long, required = true)]
    pub map: PathBuf,

    /// PED file (whitespace-delimited, optionally gzipped)
    #[arg(short, long, required = true)]
    pub ped: PathBuf,
}

pub fn run(args: InspectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let engine = load_engine(&args.map, &args.ped)?;

    if verbose {
        eprintln!(
            "{}: {} markers, {}: {} samples",
            args.map.display(),
            engine.catalog().len(),
            args.ped.display(),
            engine.samples().len()
        );
    }

    print_summary(&ConversionSummary::from_engine(&engine), format)
}
