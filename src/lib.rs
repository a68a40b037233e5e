//! # transpose-ped
//!
//! A library for converting PLINK PED/MAP genotype files into marker-major
//! TPED/TFAM files.
//!
//! A PED file stores one line per individual with every genotype inline, while
//! its companion MAP file lists the markers. Many downstream tools want the
//! opposite layout: one line per marker with the genotypes of all individuals.
//!
//! `transpose-ped` loads both files into memory, joins each individual's
//! genotype columns to the markers by position, and writes the transposed
//! data alongside the pedigree metadata.
//!
//! ## Features
//!
//! - **Strict positional join**: Every PED line must carry exactly two allele
//!   tokens per MAP row, or loading fails
//! - **Duplicate detection**: Repeated marker ids are rejected at load time
//! - **Bulk edits**: Family-id prefixing and parity-based status recoding
//! - **Gzip input**: Compressed PED/MAP files are detected and decoded
//! - **Atomic output**: A failed run never leaves partial TPED/TFAM files
//!
//! ## Example
//!
//! ```rust
//! use transpose_ped::{MarkerCatalog, SampleCollection, TranspositionEngine};
//! use transpose_ped::parsing::{map::parse_map_text, ped::parse_ped_text};
//!
//! let catalog = MarkerCatalog::load(parse_map_text("1\trs1\t0\t100\n1\trs2\t0\t200\n")).unwrap();
//! let samples = SampleCollection::load(
//!     parse_ped_text("FAM1 IND1 0 0 1 1 A A C T\n"),
//!     &catalog,
//! )
//! .unwrap();
//!
//! let engine = TranspositionEngine::new(catalog, samples);
//! for row in engine.marker_major_rows().unwrap() {
//!     println!("{row}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Markers, samples and the error type
//! - [`parsing`]: MAP and PED readers
//! - [`transpose`]: Transposition engine, status rules and run summaries
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod transpose;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::error::TransposeError;
pub use crate::core::marker::{Marker, MarkerCatalog};
pub use crate::core::sample::{GenotypePair, Sample, SampleCollection};
pub use crate::transpose::{ConversionSummary, ParityRule, StatusRule, TranspositionEngine};
