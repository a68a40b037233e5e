//! Core data types for PED/MAP transposition.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Marker`]: A single genetic marker (chromosome, id, genetic distance, position)
//! - [`MarkerCatalog`]: The ordered set of markers loaded from a MAP file
//! - [`Sample`]: A genotyped individual with its pedigree metadata and genotypes
//! - [`SampleCollection`]: The ordered set of samples loaded from a PED file
//! - [`TransposeError`]: Everything that can go wrong while loading or rendering
//!
//! ## Ordering Contract
//!
//! PED files carry no marker identifiers: the genotype columns of every sample
//! line are laid out in exactly the order of the MAP file rows.
//!
//! | MAP row | PED genotype columns |
//! |---------|----------------------|
//! | 0       | 7, 8                 |
//! | 1       | 9, 10                |
//! | i       | 7 + 2i, 8 + 2i       |
//!
//! The catalog order is therefore authoritative, and samples can only be built
//! against a fully loaded catalog.
//!
//! [`Marker`]: marker::Marker
//! [`MarkerCatalog`]: marker::MarkerCatalog
//! [`Sample`]: sample::Sample
//! [`SampleCollection`]: sample::SampleCollection
//! [`TransposeError`]: error::TransposeError

pub mod error;
pub mod marker;
pub mod sample;
