//! Marker-major transposition of PED/MAP data.
//!
//! This module provides the conversion pipeline:
//!
//! - [`TranspositionEngine`]: Owns the catalog and samples, applies bulk edits
//!   and renders TPED/TFAM output
//! - [`StatusRule`] and [`ParityRule`]: Status recoding from individual ids
//! - [`ConversionSummary`]: What a run loaded, changed and wrote
//!
//! ## Pipeline
//!
//! 1. **Load**: MAP records into a [`MarkerCatalog`], then PED records into a
//!    [`SampleCollection`] sliced in catalog order
//! 2. **Mutate**: any number of family-id prefixes and status recodes
//! 3. **Render**: TPED (one row per marker) and TFAM (one row per sample)
//!
//! ## Example
//!
//! ```rust
//! use transpose_ped::parsing::{map::parse_map_text, ped::parse_ped_text};
//! use transpose_ped::transpose::{ParityRule, TranspositionEngine};
//!
//! let markers = parse_map_text("1\trs1\t0\t100\n1\trs2\t0\t200\n");
//! let samples = parse_ped_text("FAM1 4 0 0 1 1 A A C T\n");
//!
//! let mut engine = TranspositionEngine::load(markers, samples).unwrap();
//! engine.prefix_family_ids("INCH_");
//! engine.recode_status(&ParityRule::new("2", "1"));
//!
//! let mut tped = Vec::new();
//! engine.render_marker_major(&mut tped).unwrap();
//! assert_eq!(String::from_utf8(tped).unwrap(), "1 rs1 0 100 A A\n1 rs2 0 200 C T\n");
//!
//! let mut tfam = Vec::new();
//! engine.render_sample_metadata(&mut tfam).unwrap();
//! assert_eq!(String::from_utf8(tfam).unwrap(), "INCH_FAM1 4 0 0 1 2\n");
//! ```
//!
//! [`MarkerCatalog`]: crate::core::marker::MarkerCatalog
//! [`SampleCollection`]: crate::core::sample::SampleCollection

pub mod engine;
pub mod recode;
pub mod summary;

pub use engine::TranspositionEngine;
pub use recode::{ParityRule, StatusRule};
pub use summary::ConversionSummary;
