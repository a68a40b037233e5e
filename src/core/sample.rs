use std::collections::HashMap;

use crate::core::error::TransposeError;
use crate::core::marker::MarkerCatalog;
use crate::parsing::Record;
use crate::transpose::recode::StatusRule;
use crate::utils::validation::check_sample_limit;

/// Number of leading pedigree fields on a PED line
pub const PED_METADATA_FIELDS: usize = 6;

/// The two allele tokens observed at one marker for one sample.
///
/// Allele order is preserved exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypePair {
    pub allele_a: String,
    pub allele_b: String,
}

impl GenotypePair {
    pub fn new(allele_a: impl Into<String>, allele_b: impl Into<String>) -> Self {
        Self {
            allele_a: allele_a.into(),
            allele_b: allele_b.into(),
        }
    }
}

/// A genotyped individual from a PED file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub family_id: String,
    pub individual_id: String,
    pub father_id: String,
    pub mother_id: String,
    pub sex: String,
    pub status: String,

    /// Genotype per marker id, one entry for every marker of the catalog the
    /// sample was built against
    genotypes: HashMap<String, GenotypePair>,
}

impl Sample {
    /// Build a sample from a PED record, slicing its genotype tokens in catalog order
    ///
    /// # Errors
    ///
    /// Returns `TransposeError::MalformedRecord` if the record has fewer than
    /// six fields, or `TransposeError::ShapeMismatch` if the number of
    /// genotype tokens is not exactly twice the number of markers.
    pub fn from_record(record: Record, catalog: &MarkerCatalog) -> Result<Self, TransposeError> {
        let Record { line, mut fields } = record;

        // Short records keep all their fields here and fail the conversion below
        let tokens = fields.split_off(PED_METADATA_FIELDS.min(fields.len()));
        let [family_id, individual_id, father_id, mother_id, sex, status] =
            <[String; PED_METADATA_FIELDS]>::try_from(fields).map_err(|fields| {
                TransposeError::MalformedRecord {
                    line,
                    expected: format!("at least {PED_METADATA_FIELDS}"),
                    found: fields.len(),
                }
            })?;

        let Some(pairs) = zip_genotypes(catalog.marker_ids(), &tokens) else {
            return Err(TransposeError::ShapeMismatch {
                sample: individual_id,
                line,
                expected: 2 * catalog.len(),
                found: tokens.len(),
            });
        };

        let genotypes = pairs
            .into_iter()
            .map(|(id, pair)| (id.to_string(), pair))
            .collect();

        Ok(Self {
            family_id,
            individual_id,
            father_id,
            mother_id,
            sex,
            status,
            genotypes,
        })
    }

    #[must_use]
    pub fn genotype(&self, marker_id: &str) -> Option<&GenotypePair> {
        self.genotypes.get(marker_id)
    }

    #[must_use]
    pub fn genotype_count(&self) -> usize {
        self.genotypes.len()
    }

    /// Pedigree fields in TFAM column order
    #[must_use]
    pub fn metadata_fields(&self) -> [&str; PED_METADATA_FIELDS] {
        [
            &self.family_id,
            &self.individual_id,
            &self.father_id,
            &self.mother_id,
            &self.sex,
            &self.status,
        ]
    }
}

/// Pair genotype tokens with marker ids by position.
///
/// Tokens are consumed two at a time, the i-th pair belonging to the i-th
/// marker id. Returns `None` unless there are exactly two tokens per marker.
pub fn zip_genotypes<'m, I>(
    marker_ids: I,
    tokens: &[String],
) -> Option<Vec<(&'m str, GenotypePair)>>
where
    I: ExactSizeIterator<Item = &'m str>,
{
    if tokens.len() != 2 * marker_ids.len() {
        return None;
    }

    Some(
        marker_ids
            .zip(tokens.chunks_exact(2))
            .map(|(id, pair)| (id, GenotypePair::new(pair[0].as_str(), pair[1].as_str())))
            .collect(),
    )
}

/// Ordered set of samples; insertion order is file order
#[derive(Debug, Clone, Default)]
pub struct SampleCollection {
    samples: Vec<Sample>,
}

impl SampleCollection {
    /// Load samples in input order against a fully loaded catalog
    ///
    /// # Errors
    ///
    /// Returns the first `TransposeError` raised by [`Sample::from_record`], or
    /// `TransposeError::TooManySamples` if the limit is exceeded.
    pub fn load<I>(records: I, catalog: &MarkerCatalog) -> Result<Self, TransposeError>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut samples = Vec::new();

        for record in records {
            if check_sample_limit(samples.len()).is_some() {
                return Err(TransposeError::TooManySamples(samples.len() + 1));
            }
            samples.push(Sample::from_record(record, catalog)?);
        }

        tracing::debug!(
            samples = samples.len(),
            markers = catalog.len(),
            "Loaded sample collection"
        );
        Ok(Self { samples })
    }

    /// Prepend `prefix` to every family id.
    ///
    /// Applying the same prefix twice prefixes twice.
    pub fn prefix_family_ids(&mut self, prefix: &str) {
        for sample in &mut self.samples {
            sample.family_id.insert_str(0, prefix);
        }
    }

    /// Recompute every status from the individual id; returns how many changed
    pub fn recode_status<R: StatusRule + ?Sized>(&mut self, rule: &R) -> usize {
        let mut recoded = 0;
        for sample in &mut self.samples {
            if let Some(status) = rule.status_for(&sample.individual_id) {
                if status != sample.status {
                    recoded += 1;
                }
                sample.status = status;
            }
        }
        recoded
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Sample> {
        self.samples.iter_mut()
    }
}

impl<'a> IntoIterator for &'a SampleCollection {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpose::recode::ParityRule;

    fn catalog(ids: &[&str]) -> MarkerCatalog {
        let records = ids
            .iter()
            .enumerate()
            .map(|(i, id)| Record::new(i + 1, ["1", *id, "0", "100"]));
        MarkerCatalog::load(records).unwrap()
    }

    fn ped(line: usize, text: &str) -> Record {
        Record::new(line, text.split_whitespace())
    }

    #[test]
    fn test_zip_genotypes_is_positional() {
        let tokens: Vec<String> = ["A", "G", "C", "T", "0", "0"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let pairs = zip_genotypes(["rs9", "rs1", "rs5"].into_iter(), &tokens).unwrap();

        assert_eq!(pairs[0], ("rs9", GenotypePair::new("A", "G")));
        assert_eq!(pairs[1], ("rs1", GenotypePair::new("C", "T")));
        assert_eq!(pairs[2], ("rs5", GenotypePair::new("0", "0")));
    }

    #[test]
    fn test_zip_genotypes_rejects_odd_lengths() {
        let tokens: Vec<String> = vec!["A".into(), "G".into(), "C".into()];
        assert!(zip_genotypes(["rs1", "rs2"].into_iter(), &tokens).is_none());
        assert!(zip_genotypes(["rs1"].into_iter(), &tokens).is_none());
    }

    #[test]
    fn test_sample_from_record() {
        let catalog = catalog(&["rs1", "rs2"]);
        let sample = Sample::from_record(ped(1, "FAM1 IND1 0 0 1 1 A A C T"), &catalog).unwrap();

        assert_eq!(
            sample.metadata_fields(),
            ["FAM1", "IND1", "0", "0", "1", "1"]
        );
        assert_eq!(sample.genotype("rs1"), Some(&GenotypePair::new("A", "A")));
        assert_eq!(sample.genotype("rs2"), Some(&GenotypePair::new("C", "T")));
        assert_eq!(sample.genotype_count(), 2);
    }

    #[test]
    fn test_allele_order_preserved() {
        let catalog = catalog(&["rs1"]);
        let sample = Sample::from_record(ped(1, "F I 0 0 2 -9 T C"), &catalog).unwrap();
        let pair = sample.genotype("rs1").unwrap();
        assert_eq!(pair.allele_a, "T");
        assert_eq!(pair.allele_b, "C");
    }

    #[test]
    fn test_shape_mismatch_extra_token() {
        let catalog = catalog(&["rs1", "rs2"]);
        let err = Sample::from_record(ped(4, "F IND9 0 0 1 1 A A C T G"), &catalog).unwrap_err();
        match err {
            TransposeError::ShapeMismatch {
                sample,
                line,
                expected,
                found,
            } => {
                assert_eq!(sample, "IND9");
                assert_eq!(line, 4);
                assert_eq!(expected, 4);
                assert_eq!(found, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_shape_mismatch_missing_token() {
        let catalog = catalog(&["rs1", "rs2"]);
        let err = Sample::from_record(ped(1, "F I 0 0 1 1 A A C"), &catalog).unwrap_err();
        assert!(matches!(
            err,
            TransposeError::ShapeMismatch {
                expected: 4,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_too_few_metadata_fields() {
        let catalog = catalog(&[]);
        let err = Sample::from_record(ped(2, "F I 0 0 1"), &catalog).unwrap_err();
        assert!(matches!(
            err,
            TransposeError::MalformedRecord {
                line: 2,
                found: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_catalog_requires_no_genotypes() {
        let catalog = catalog(&[]);
        let sample = Sample::from_record(ped(1, "F I 0 0 1 1"), &catalog).unwrap();
        assert_eq!(sample.genotype_count(), 0);
        assert!(Sample::from_record(ped(1, "F I 0 0 1 1 A A"), &catalog).is_err());
    }

    #[test]
    fn test_collection_stops_at_first_bad_record() {
        let catalog = catalog(&["rs1"]);
        let records = vec![
            ped(1, "F1 I1 0 0 1 1 A A"),
            ped(2, "F2 I2 0 0 1 1 A"),
            ped(3, "F3 I3 0 0 1 1 C C"),
        ];
        let err = SampleCollection::load(records, &catalog).unwrap_err();
        assert!(matches!(err, TransposeError::ShapeMismatch { line: 2, .. }));
    }

    #[test]
    fn test_prefix_family_ids_twice() {
        let catalog = catalog(&["rs1"]);
        let mut samples = SampleCollection::load(
            vec![ped(1, "X I1 0 0 1 1 A A"), ped(2, "Y I2 0 0 1 1 A A")],
            &catalog,
        )
        .unwrap();

        samples.prefix_family_ids("INCH_");
        let fams: Vec<&str> = samples.iter().map(|s| s.family_id.as_str()).collect();
        assert_eq!(fams, vec!["INCH_X", "INCH_Y"]);

        samples.prefix_family_ids("INCH_");
        let fams: Vec<&str> = samples.iter().map(|s| s.family_id.as_str()).collect();
        assert_eq!(fams, vec!["INCH_INCH_X", "INCH_INCH_Y"]);
    }

    #[test]
    fn test_recode_status_counts_changes() {
        let catalog = catalog(&[]);
        let mut samples = SampleCollection::load(
            vec![
                ped(1, "F 4 0 0 1 1"),
                ped(2, "F 27 0 0 1 1"),
                ped(3, "F 5 0 0 1 1"),
                ped(4, "F 6 0 0 1 2"),
            ],
            &catalog,
        )
        .unwrap();

        let rule = ParityRule::new("2", "1").with_except_id("27");
        let recoded = samples.recode_status(&rule);

        let statuses: Vec<&str> = samples.iter().map(|s| s.status.as_str()).collect();
        assert_eq!(statuses, vec!["2", "1", "1", "2"]);
        // "5" already had odd code "1", "6" already had even code "2"
        assert_eq!(recoded, 1);
    }
}
