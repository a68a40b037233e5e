use std::io::Write;

use rayon::prelude::*;

use crate::core::error::TransposeError;
use crate::core::marker::{Marker, MarkerCatalog};
use crate::core::sample::SampleCollection;
use crate::parsing::Record;
use crate::transpose::recode::StatusRule;

/// Field separator for TPED and TFAM output
pub const OUTPUT_DELIMITER: &str = " ";

/// Joins a marker catalog with its samples and writes them marker-major
pub struct TranspositionEngine {
    catalog: MarkerCatalog,
    samples: SampleCollection,
}

impl TranspositionEngine {
    /// Take ownership of an already loaded catalog and collection
    ///
    /// `samples` is expected to have been loaded against `catalog`; a sample
    /// lacking one of the catalog's markers fails at render time.
    pub fn new(catalog: MarkerCatalog, samples: SampleCollection) -> Self {
        Self { catalog, samples }
    }

    /// Load the catalog from MAP records, then the samples from PED records
    ///
    /// # Errors
    ///
    /// Returns any `TransposeError` raised while loading either input.
    pub fn load<M, P>(map_records: M, ped_records: P) -> Result<Self, TransposeError>
    where
        M: IntoIterator<Item = Record>,
        P: IntoIterator<Item = Record>,
    {
        let catalog = MarkerCatalog::load(map_records)?;
        let samples = SampleCollection::load(ped_records, &catalog)?;
        Ok(Self::new(catalog, samples))
    }

    #[must_use]
    pub fn catalog(&self) -> &MarkerCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn samples(&self) -> &SampleCollection {
        &self.samples
    }

    pub fn prefix_family_ids(&mut self, prefix: &str) {
        self.samples.prefix_family_ids(prefix);
        tracing::debug!(prefix, samples = self.samples.len(), "Prefixed family ids");
    }

    /// Recode every sample's status; returns how many statuses changed
    pub fn recode_status<R: StatusRule + ?Sized>(&mut self, rule: &R) -> usize {
        let recoded = self.samples.recode_status(rule);
        tracing::debug!(recoded, samples = self.samples.len(), "Recoded status");
        recoded
    }

    /// Assemble one TPED line (without newline) per marker, in catalog order
    ///
    /// Rows are built in parallel; every row is checked before any is returned.
    ///
    /// # Errors
    ///
    /// Returns `TransposeError::MissingGenotypeEntry` if a sample has no
    /// genotype for one of the catalog's markers.
    pub fn marker_major_rows(&self) -> Result<Vec<String>, TransposeError> {
        self.catalog
            .markers()
            .par_iter()
            .map(|marker| self.marker_row(marker))
            .collect()
    }

    fn marker_row(&self, marker: &Marker) -> Result<String, TransposeError> {
        let mut row = [
            marker.chromosome.as_str(),
            marker.marker_id.as_str(),
            marker.genetic_distance.as_str(),
            marker.position.as_str(),
        ]
        .join(OUTPUT_DELIMITER);

        for sample in &self.samples {
            let pair = sample.genotype(&marker.marker_id).ok_or_else(|| {
                TransposeError::MissingGenotypeEntry {
                    marker_id: marker.marker_id.clone(),
                    sample: sample.individual_id.clone(),
                }
            })?;
            row.push_str(OUTPUT_DELIMITER);
            row.push_str(&pair.allele_a);
            row.push_str(OUTPUT_DELIMITER);
            row.push_str(&pair.allele_b);
        }

        Ok(row)
    }

    /// Write the TPED rendering to `sink`
    ///
    /// Nothing is written if any row fails to assemble.
    ///
    /// # Errors
    ///
    /// Returns `TransposeError::MissingGenotypeEntry` (see
    /// [`Self::marker_major_rows`]) or `TransposeError::Io` on write failure.
    pub fn render_marker_major<W: Write>(&self, sink: &mut W) -> Result<(), TransposeError> {
        for row in self.marker_major_rows()? {
            writeln!(sink, "{row}")?;
        }
        sink.flush()?;
        Ok(())
    }

    /// One TFAM line (without newline) per sample, in collection order
    #[must_use]
    pub fn sample_metadata_rows(&self) -> Vec<String> {
        self.samples
            .iter()
            .map(|sample| sample.metadata_fields().join(OUTPUT_DELIMITER))
            .collect()
    }

    /// Write the TFAM rendering to `sink`
    ///
    /// # Errors
    ///
    /// Returns `TransposeError::Io` on write failure.
    pub fn render_sample_metadata<W: Write>(&self, sink: &mut W) -> Result<(), TransposeError> {
        for row in self.sample_metadata_rows() {
            writeln!(sink, "{row}")?;
        }
        sink.flush()?;
        Ok(())
    }
}
