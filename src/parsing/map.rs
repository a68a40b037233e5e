use std::path::Path;

use crate::core::error::TransposeError;
use crate::parsing::{data_lines, read_input, Record};

/// Parse a MAP file into one record per marker
///
/// # Errors
///
/// Returns `TransposeError::Io` if the file cannot be read.
pub fn parse_map_file(path: &Path) -> Result<Vec<Record>, TransposeError> {
    let content = read_input(path)?;
    Ok(parse_map_text(&content))
}

/// Parse tab-delimited MAP text: chromosome, marker id, genetic distance, position
///
/// Field counts are not checked here; the marker catalog rejects records
/// that do not have exactly four fields.
#[must_use]
pub fn parse_map_text(text: &str) -> Vec<Record> {
    data_lines(text, true)
        .map(|(line, content)| {
            Record::new(line, content.trim_end().split('\t').map(str::trim))
        })
        .collect()
}
