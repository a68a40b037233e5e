use std::collections::HashMap;

use crate::core::error::TransposeError;
use crate::parsing::Record;
use crate::utils::validation::{check_marker_limit, is_valid_field};

/// Number of fields in a MAP record
pub const MAP_FIELDS: usize = 4;

/// A single genetic marker from a MAP file
///
/// Genetic distance and position are carried as the original tokens and
/// written back out unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub chromosome: String,
    pub marker_id: String,
    pub genetic_distance: String,
    pub position: String,
}

impl Marker {
    pub fn new(
        chromosome: impl Into<String>,
        marker_id: impl Into<String>,
        genetic_distance: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            chromosome: chromosome.into(),
            marker_id: marker_id.into(),
            genetic_distance: genetic_distance.into(),
            position: position.into(),
        }
    }

    /// Build a marker from a MAP record with exactly four fields
    ///
    /// Every field is written back out as a single column of space-delimited
    /// output, so empty fields and fields holding whitespace are rejected.
    ///
    /// # Errors
    ///
    /// Returns `TransposeError::MalformedRecord` if the record does not have
    /// exactly four fields, or `TransposeError::InvalidField` if a field is
    /// empty or contains whitespace.
    pub fn from_record(record: Record) -> Result<Self, TransposeError> {
        let line = record.line;
        let found = record.fields.len();
        let Ok([chromosome, marker_id, genetic_distance, position]) =
            <[String; MAP_FIELDS]>::try_from(record.fields)
        else {
            return Err(TransposeError::MalformedRecord {
                line,
                expected: MAP_FIELDS.to_string(),
                found,
            });
        };

        for (field, value) in [
            ("chromosome", &chromosome),
            ("marker id", &marker_id),
            ("genetic distance", &genetic_distance),
            ("position", &position),
        ] {
            if value.is_empty() || !is_valid_field(value) {
                return Err(TransposeError::InvalidField {
                    line,
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(Self {
            chromosome,
            marker_id,
            genetic_distance,
            position,
        })
    }
}

/// Ordered set of markers; insertion order is file order
#[derive(Debug, Clone, Default)]
pub struct MarkerCatalog {
    markers: Vec<Marker>,

    /// Index: marker id -> index in markers vec
    id_to_index: HashMap<String, usize>,
}

impl MarkerCatalog {
    /// Load markers in input order, rejecting duplicate ids
    ///
    /// # Errors
    ///
    /// Returns the first `TransposeError` raised by [`Marker::from_record`],
    /// `TransposeError::DuplicateMarkerId` when an id repeats, or
    /// `TransposeError::TooManyMarkers` if the limit is exceeded.
    pub fn load<I>(records: I) -> Result<Self, TransposeError>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut catalog = Self::default();
        // Source line of each marker, parallel to `markers`
        let mut lines: Vec<usize> = Vec::new();

        for record in records {
            let line = record.line;
            let marker = Marker::from_record(record)?;

            if let Some(&idx) = catalog.id_to_index.get(&marker.marker_id) {
                return Err(TransposeError::DuplicateMarkerId {
                    marker_id: marker.marker_id,
                    first_line: lines[idx],
                    line,
                });
            }

            if check_marker_limit(catalog.markers.len()).is_some() {
                return Err(TransposeError::TooManyMarkers(catalog.markers.len() + 1));
            }

            lines.push(line);
            catalog
                .id_to_index
                .insert(marker.marker_id.clone(), catalog.markers.len());
            catalog.markers.push(marker);
        }

        tracing::debug!(markers = catalog.markers.len(), "Loaded marker catalog");
        Ok(catalog)
    }

    /// Marker ids in catalog order
    pub fn marker_ids(&self) -> impl ExactSizeIterator<Item = &str> + Clone {
        self.markers.iter().map(|m| m.marker_id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn get(&self, marker_id: &str) -> Option<&Marker> {
        self.id_to_index.get(marker_id).map(|&idx| &self.markers[idx])
    }

    /// Distinct chromosome tokens in first-seen order
    #[must_use]
    pub fn chromosomes(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.markers
            .iter()
            .map(|m| m.chromosome.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

impl<'a> IntoIterator for &'a MarkerCatalog {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_records(rows: &[[&str; 4]]) -> Vec<Record> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| Record::new(i + 1, row.iter().copied()))
            .collect()
    }

    #[test]
    fn test_load_preserves_order() {
        let catalog = MarkerCatalog::load(map_records(&[
            ["1", "rs3", "0", "300"],
            ["1", "rs1", "0", "100"],
            ["2", "rs2", "0.5", "200"],
        ]))
        .unwrap();

        assert_eq!(catalog.len(), 3);
        let ids: Vec<&str> = catalog.marker_ids().collect();
        assert_eq!(ids, vec!["rs3", "rs1", "rs2"]);
        assert_eq!(catalog.get("rs2"), Some(&Marker::new("2", "rs2", "0.5", "200")));
        assert!(catalog.get("rs9").is_none());
    }

    #[test]
    fn test_duplicate_marker_id_rejected() {
        let err = MarkerCatalog::load(map_records(&[
            ["1", "rs1", "0", "100"],
            ["1", "rs2", "0", "200"],
            ["1", "rs1", "0", "300"],
        ]))
        .unwrap_err();

        match err {
            TransposeError::DuplicateMarkerId {
                marker_id,
                first_line,
                line,
            } => {
                assert_eq!(marker_id, "rs1");
                assert_eq!(first_line, 1);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        let records = vec![Record::new(7, ["1", "rs1", "100"])];
        let err = MarkerCatalog::load(records).unwrap_err();
        assert!(matches!(
            err,
            TransposeError::MalformedRecord {
                line: 7,
                found: 3,
                ..
            }
        ));

        let records = vec![Record::new(1, ["1", "rs1", "0", "100", "extra"])];
        assert!(MarkerCatalog::load(records).is_err());
    }

    #[test]
    fn test_empty_field_rejected() {
        let records = vec![Record::new(2, ["1", "rs1", "", "100"])];
        let err = MarkerCatalog::load(records).unwrap_err();
        match err {
            TransposeError::InvalidField { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, "genetic distance");
                assert_eq!(value, "");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_field_with_space_rejected() {
        let records = vec![
            Record::new(1, ["1", "rs1", "0", "100"]),
            Record::new(2, ["1", "rs 2", "0", "200"]),
        ];
        let err = MarkerCatalog::load(records).unwrap_err();
        assert!(matches!(
            err,
            TransposeError::InvalidField {
                line: 2,
                field: "marker id",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MarkerCatalog::load(Vec::<Record>::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.marker_ids().len(), 0);
    }

    #[test]
    fn test_chromosomes_first_seen_order() {
        let catalog = MarkerCatalog::load(map_records(&[
            ["2", "a", "0", "1"],
            ["1", "b", "0", "2"],
            ["2", "c", "0", "3"],
            ["X", "d", "0", "4"],
        ]))
        .unwrap();
        assert_eq!(catalog.chromosomes(), vec!["2", "1", "X"]);
    }
}
