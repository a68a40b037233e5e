use serde::Serialize;

use crate::transpose::engine::TranspositionEngine;
use crate::transpose::recode::ParityRule;

/// What a conversion loaded, changed and wrote
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub marker_count: usize,
    pub sample_count: usize,

    /// Distinct chromosomes in MAP order
    pub chromosomes: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_rule: Option<ParityRule>,

    pub statuses_recoded: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tped_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tfam_path: Option<String>,
}

impl ConversionSummary {
    #[must_use]
    pub fn from_engine(engine: &TranspositionEngine) -> Self {
        Self {
            marker_count: engine.catalog().len(),
            sample_count: engine.samples().len(),
            chromosomes: engine
                .catalog()
                .chromosomes()
                .into_iter()
                .map(String::from)
                .collect(),
            family_prefix: None,
            status_rule: None,
            statuses_recoded: 0,
            tped_path: None,
            tfam_path: None,
        }
    }

    /// Number of genotype calls (two alleles each) in the dataset
    #[must_use]
    pub fn genotype_count(&self) -> usize {
        self.marker_count * self.sample_count
    }
}
