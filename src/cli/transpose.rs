use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tempfile::NamedTempFile;

use crate::cli::{load_engine, print_summary, OutputFormat};
use crate::core::error::TransposeError;
use crate::transpose::{ConversionSummary, ParityRule};
use crate::utils::validation::validate_token;

#[derive(Args)]
pub struct TransposeArgs {
    /// MAP file (tab-delimited, optionally gzipped)
    #[arg(short, long, required = true)]
    pub map: PathBuf,

    /// PED file to be transposed (whitespace-delimited, optionally gzipped)
    #[arg(short, long, required = true)]
    pub ped: PathBuf,

    /// Output prefix; writes <PREFIX>.tped and <PREFIX>.tfam
    #[arg(short, long, required = true)]
    pub out: PathBuf,

    /// Prepend this string to every family id
    #[arg(long)]
    pub fam_prefix: Option<String>,

    /// Recode status from the parity of numeric individual ids
    #[arg(long)]
    pub recode_status: bool,

    /// Status code for even individual ids
    #[arg(long, default_value = "2")]
    pub even_status: String,

    /// Status code for odd individual ids
    #[arg(long, default_value = "1")]
    pub odd_status: String,

    /// Individual id whose status is never recoded
    #[arg(long, requires = "recode_status")]
    pub except_id: Option<String>,
}

impl TransposeArgs {
    fn status_rule(&self) -> Option<ParityRule> {
        if !self.recode_status {
            return None;
        }
        let rule = ParityRule::new(&self.even_status, &self.odd_status);
        Some(match &self.except_id {
            Some(id) => rule.with_except_id(id),
            None => rule,
        })
    }

    fn validate(&self) -> Result<(), TransposeError> {
        if let Some(prefix) = &self.fam_prefix {
            validate_token("family prefix", prefix, true)?;
        }
        if self.recode_status {
            validate_token("even status code", &self.even_status, false)?;
            validate_token("odd status code", &self.odd_status, false)?;
        }
        Ok(())
    }
}

pub fn run(args: TransposeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    args.validate()?;

    let mut engine = load_engine(&args.map, &args.ped)?;

    if let Some(prefix) = &args.fam_prefix {
        engine.prefix_family_ids(prefix);
    }

    let status_rule = args.status_rule();
    let mut statuses_recoded = 0;
    if let Some(rule) = &status_rule {
        if let Some(except_id) = &rule.except_id {
            if !engine.samples().iter().any(|s| &s.individual_id == except_id) {
                tracing::warn!(
                    except_id = %except_id,
                    "No sample has the excepted individual id"
                );
            }
        }
        statuses_recoded = engine.recode_status(rule);
    }

    let tped_path = with_suffix(&args.out, ".tped");
    let tfam_path = with_suffix(&args.out, ".tfam");

    // Render both files before either lands at its final path
    let tped = render_to_temp(&tped_path, |w| engine.render_marker_major(w))?;
    let tfam = render_to_temp(&tfam_path, |w| engine.render_sample_metadata(w))?;

    tped.persist(&tped_path)
        .with_context(|| format!("Failed to write {}", tped_path.display()))?;
    tfam.persist(&tfam_path)
        .with_context(|| format!("Failed to write {}", tfam_path.display()))?;

    tracing::info!(tped = %tped_path.display(), tfam = %tfam_path.display(), "Wrote output");

    if verbose {
        eprintln!(
            "Wrote {} markers x {} samples",
            engine.catalog().len(),
            engine.samples().len()
        );
    }

    let summary = ConversionSummary {
        family_prefix: args.fam_prefix.clone(),
        status_rule,
        statuses_recoded,
        tped_path: Some(tped_path.display().to_string()),
        tfam_path: Some(tfam_path.display().to_string()),
        ..ConversionSummary::from_engine(&engine)
    };
    print_summary(&summary, format)
}

/// `out/study` + `.tped` -> `out/study.tped`, keeping any dots already in the prefix
fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(prefix.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// Render into a temp file next to `dest`, so a failed run leaves nothing behind
fn render_to_temp<F>(dest: &Path, render: F) -> anyhow::Result<NamedTempFile>
where
    F: FnOnce(&mut BufWriter<&File>) -> Result<(), TransposeError>,
{
    let dir = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        render(&mut writer).with_context(|| format!("Failed to render {}", dest.display()))?;
        writer.flush()?;
    }
    Ok(tmp)
}
