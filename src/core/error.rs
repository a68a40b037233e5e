use thiserror::Error;

use crate::utils::validation::{MAX_MARKERS, MAX_SAMPLES};

#[derive(Error, Debug)]
pub enum TransposeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        line: usize,
        expected: String,
        found: usize,
    },

    #[error(
        "Invalid {field} on line {line}: '{value}' (must be non-empty without whitespace)"
    )]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error(
        "Duplicate marker id '{marker_id}' on line {line} (first seen on line {first_line})"
    )]
    DuplicateMarkerId {
        marker_id: String,
        first_line: usize,
        line: usize,
    },

    #[error(
        "Sample '{sample}' on line {line} has {found} genotype tokens, expected {expected} (2 per marker)"
    )]
    ShapeMismatch {
        sample: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Sample '{sample}' has no genotype for marker '{marker_id}'")]
    MissingGenotypeEntry { marker_id: String, sample: String },

    #[error("Invalid {what}: '{value}'")]
    InvalidToken { what: &'static str, value: String },

    #[error("Too many markers: {0} exceeds maximum allowed ({max})", max = MAX_MARKERS)]
    TooManyMarkers(usize),

    #[error("Too many samples: {0} exceeds maximum allowed ({max})", max = MAX_SAMPLES)]
    TooManySamples(usize),
}
