use std::path::Path;

use crate::core::error::TransposeError;
use crate::parsing::{data_lines, read_input, Record};

/// Parse a PED file into one record per sample
///
/// # Errors
///
/// Returns `TransposeError::Io` if the file cannot be read.
pub fn parse_ped_file(path: &Path) -> Result<Vec<Record>, TransposeError> {
    let content = read_input(path)?;
    Ok(parse_ped_text(&content))
}

/// Parse whitespace-delimited PED text
///
/// Each record holds the six pedigree fields followed by the genotype tokens
/// exactly as they appear on the line. Only blank lines are skipped; a line
/// starting with `#` is a sample whose family id starts with `#`.
#[must_use]
pub fn parse_ped_text(text: &str) -> Vec<Record> {
    data_lines(text, false)
        .map(|(line, content)| Record::new(line, content.split_whitespace()))
        .collect()
}
