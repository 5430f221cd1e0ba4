use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::data::DataError;
use crate::utils::{position, Position};

/// A design value: either a plain scalar or an `[x, z]` station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Scalar(f64),
    Position([f64; 2]),
}

/// Source of design values addressed by `(category, field)`.
///
/// Anything able to answer these lookups can feed a CG build-up; the
/// aggregation itself never talks to a provider directly.
pub trait DataProvider {
    fn value(&self, category: &str, field: &str) -> Option<DataValue>;

    fn scalar(&self, category: &str, field: &str) -> Result<f64, DataError> {
        match self.value(category, field) {
            Some(DataValue::Scalar(v)) => Ok(v),
            Some(DataValue::Position(_)) => Err(DataError::TypeMismatch {
                category: category.to_string(),
                field: field.to_string(),
                expected: "scalar",
            }),
            None => Err(DataError::MissingField {
                category: category.to_string(),
                field: field.to_string(),
            }),
        }
    }

    fn position(&self, category: &str, field: &str) -> Result<Position, DataError> {
        match self.value(category, field) {
            Some(DataValue::Position([x, z])) => Ok(position(x, z)),
            Some(DataValue::Scalar(_)) => Err(DataError::TypeMismatch {
                category: category.to_string(),
                field: field.to_string(),
                expected: "position",
            }),
            None => Err(DataError::MissingField {
                category: category.to_string(),
                field: field.to_string(),
            }),
        }
    }
}

/// In-memory design data, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignData {
    categories: BTreeMap<String, BTreeMap<String, DataValue>>,
}

impl DesignData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads design data from disk. `.json` files are parsed as JSON,
    /// everything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)?;
        let data: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&file_contents)?,
            _ => serde_yaml::from_str(&file_contents)?,
        };
        debug!(
            "Loaded {} design data categories from {}",
            data.categories.len(),
            path.display()
        );
        Ok(data)
    }

    pub fn insert(
        &mut self,
        category: impl Into<String>,
        field: impl Into<String>,
        value: DataValue,
    ) -> Option<DataValue> {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(field.into(), value)
    }

    pub fn with_scalar(
        mut self,
        category: impl Into<String>,
        field: impl Into<String>,
        value: f64,
    ) -> Self {
        self.insert(category, field, DataValue::Scalar(value));
        self
    }

    pub fn with_position(
        mut self,
        category: impl Into<String>,
        field: impl Into<String>,
        x: f64,
        z: f64,
    ) -> Self {
        self.insert(category, field, DataValue::Position([x, z]));
        self
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

impl DataProvider for DesignData {
    fn value(&self, category: &str, field: &str) -> Option<DataValue> {
        self.categories.get(category)?.get(field).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const YAML: &str = r#"
Structures:
  Max_fuselage_length: 9.0
  "Wing_weight [N]": 1200.0
"C&S":
  Wing: [3.1, 0.8]
"#;

    #[test]
    fn test_yaml_values() {
        let data: DesignData = serde_yaml::from_str(YAML).unwrap();
        assert_eq!(data.scalar("Structures", "Max_fuselage_length").unwrap(), 9.0);
        assert_eq!(data.position("C&S", "Wing").unwrap(), position(3.1, 0.8));
        assert_eq!(data.categories().collect::<Vec<_>>(), vec!["C&S", "Structures"]);
    }

    #[test]
    fn test_type_mismatch() {
        let data: DesignData = serde_yaml::from_str(YAML).unwrap();
        assert!(matches!(
            data.position("Structures", "Max_fuselage_length"),
            Err(DataError::TypeMismatch { expected: "position", .. })
        ));
        assert!(matches!(
            data.scalar("C&S", "Wing"),
            Err(DataError::TypeMismatch { expected: "scalar", .. })
        ));
    }

    #[test]
    fn test_missing_field() {
        let data = DesignData::new().with_scalar("Aero", "Wing chord", 1.2);
        assert!(matches!(
            data.scalar("Aero", "Wing span"),
            Err(DataError::MissingField { .. })
        ));
        assert!(matches!(
            data.scalar("Weights", "WPL [N]"),
            Err(DataError::MissingField { .. })
        ));
    }

    #[test]
    fn test_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design.json");
        std::fs::write(&path, r#"{"Aero": {"Wing chord": 1.5, "LEMAC": [2.0, 0.5]}}"#).unwrap();
        let data = DesignData::from_file(&path).unwrap();
        assert_eq!(data.scalar("Aero", "Wing chord").unwrap(), 1.5);
        assert_eq!(data.position("Aero", "LEMAC").unwrap(), position(2.0, 0.5));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            DesignData::from_file("does/not/exist.yaml"),
            Err(DataError::FileError(_))
        ));
    }
}
