//! Readers that turn MAP and PED text into field records.
//!
//! This module provides tokenizers for:
//!
//! - **MAP files**: tab-delimited, four fields per marker
//! - **PED files**: whitespace-delimited, six pedigree fields followed by
//!   two allele tokens per marker
//!
//! Both readers accept plain or gzip-compressed input; compression is detected
//! from the file content rather than the extension. Blank lines are skipped in
//! both, `#` comment lines only in MAP files (a PED family id may start with
//! `#`). Every [`Record`] remembers its 1-based line number for error messages.
//!
//! ## Example
//!
//! ```rust
//! use transpose_ped::parsing::{map::parse_map_text, ped::parse_ped_text};
//!
//! let markers = parse_map_text("1\trs1\t0\t100\n1\trs2\t0\t200\n");
//! let samples = parse_ped_text("FAM1 IND1 0 0 1 1 A A C T\n");
//!
//! assert_eq!(markers.len(), 2);
//! assert_eq!(samples[0].fields.len(), 10);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::core::error::TransposeError;

pub mod map;
pub mod ped;

/// One input line split into fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based source line number
    pub line: usize,
    pub fields: Vec<String>,
}

impl Record {
    pub fn new<I, S>(line: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            line,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Open a file for reading, transparently decoding gzip (including BGZF)
///
/// # Errors
///
/// Returns `TransposeError::Io` if the file cannot be opened or read.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, TransposeError> {
    let mut reader = BufReader::new(File::open(path)?);

    // GZIP magic: 1f 8b
    let is_gzip = {
        let buf = reader.fill_buf()?;
        buf.len() >= 2 && buf[0] == 0x1f && buf[1] == 0x8b
    };

    if is_gzip {
        tracing::debug!(path = %path.display(), "Detected gzip input");
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// Read a whole (possibly compressed) file into a string
pub(crate) fn read_input(path: &Path) -> Result<String, TransposeError> {
    let mut content = String::new();
    open_input(path)?.read_to_string(&mut content)?;
    Ok(content)
}

/// Lines that carry data, with their 1-based line numbers
///
/// Blank lines are always dropped; lines starting with `#` only when
/// `skip_comments` is set.
fn data_lines(text: &str, skip_comments: bool) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(move |(i, line)| {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || (skip_comments && line.trim_start().starts_with('#')) {
            None
        } else {
            Some((i + 1, line))
        }
    })
}
