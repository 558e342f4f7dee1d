//! # Shared Data Model
//!
//! Data types shared across the fabric water-use visualization: the material
//! records the chart is bound to, the validated dataset wrapper, and the
//! error taxonomy for malformed input.
//!
//! ## Validation:
//! The original data file was consumed without any validation, so a missing
//! or negative `water_use` silently produced broken geometry. Here the
//! dataset fails fast at load time instead: `Dataset::from_json_str` rejects
//! empty, duplicated, and out-of-range records with a `DatasetError` naming
//! the offending entry.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One fabric material and its water footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Material name, unique within a dataset (e.g. "Cotton")
    pub material: String,
    /// Water use in liters per kg of fabric (non-negative)
    pub water_use: f64,
}

/// Errors raised while loading the material dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The input was not valid JSON for a list of material records
    #[error("failed to parse material dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dataset contained no records; the chart scales need at least one
    #[error("material dataset is empty")]
    Empty,

    /// Two records share the same material name
    #[error("duplicate material in dataset: {0}")]
    DuplicateMaterial(String),

    /// A record carried a negative or non-finite water-use value
    #[error("invalid water_use {value} for material {material}")]
    InvalidWaterUse { material: String, value: f64 },
}

/// An ordered, validated, non-empty collection of material records.
///
/// Record order is preserved from the source file; the chart's band scale
/// domain and the animation stagger both follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<MaterialRecord>,
}

impl Dataset {
    /// Parse and validate a dataset from its JSON source text.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<MaterialRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Validate an already-deserialized list of records.
    pub fn from_records(records: Vec<MaterialRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.material.as_str()) {
                return Err(DatasetError::DuplicateMaterial(record.material.clone()));
            }
            if !record.water_use.is_finite() || record.water_use < 0.0 {
                return Err(DatasetError::InvalidWaterUse {
                    material: record.material.clone(),
                    value: record.water_use,
                });
            }
        }

        Ok(Self { records })
    }

    /// Records in source order.
    pub fn records(&self) -> &[MaterialRecord] {
        &self.records
    }

    /// Number of records (always ≥ 1).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// A validated dataset is never empty; kept for clippy's sake.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Largest water-use value in the dataset.
    pub fn max_water_use(&self) -> f64 {
        self.records
            .iter()
            .map(|r| r.water_use)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(material: &str, water_use: f64) -> MaterialRecord {
        MaterialRecord {
            material: material.to_string(),
            water_use,
        }
    }

    #[test]
    fn test_parse_valid_dataset_preserves_order() {
        let json = r#"[
            {"material": "Cotton", "water_use": 100},
            {"material": "Wool", "water_use": 62.5}
        ]"#;

        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].material, "Cotton");
        assert_eq!(dataset.records()[0].water_use, 100.0);
        assert_eq!(dataset.records()[1].material, "Wool");
        assert_eq!(dataset.records()[1].water_use, 62.5);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let result = Dataset::from_json_str("[]");
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Dataset::from_json_str("not json"),
            Err(DatasetError::Parse(_))
        ));
        // A record missing water_use is a parse error, not silent corruption
        assert!(matches!(
            Dataset::from_json_str(r#"[{"material": "Cotton"}]"#),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn test_duplicate_material_rejected() {
        let result = Dataset::from_records(vec![record("Cotton", 100.0), record("Cotton", 50.0)]);
        match result {
            Err(DatasetError::DuplicateMaterial(name)) => assert_eq!(name, "Cotton"),
            other => panic!("expected DuplicateMaterial, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_water_use_rejected() {
        let result = Dataset::from_records(vec![record("Wool", -1.0)]);
        match result {
            Err(DatasetError::InvalidWaterUse { material, value }) => {
                assert_eq!(material, "Wool");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected InvalidWaterUse, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_water_use_rejected() {
        let result = Dataset::from_records(vec![record("Hemp", f64::NAN)]);
        assert!(matches!(result, Err(DatasetError::InvalidWaterUse { .. })));
    }

    #[test]
    fn test_max_water_use() {
        let dataset = Dataset::from_records(vec![
            record("Cotton", 100.0),
            record("Polyester", 12.0),
            record("Hemp", 27.0),
        ])
        .unwrap();
        assert_eq!(dataset.max_water_use(), 100.0);
    }
}
