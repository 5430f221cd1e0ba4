use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::{default_bindings, ComponentBinding, FieldRef};
use crate::report::RenderConfig;
use crate::utils::linspace;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid study configuration: {0}")]
    ValidationError(String),
}

/// Range of wing stations, as fractions of fuselage length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f64,
    pub stop: f64,
    pub samples: usize,
}

impl Default for SweepRange {
    fn default() -> Self {
        Self {
            start: 0.2,
            stop: 0.7,
            samples: 50,
        }
    }
}

impl SweepRange {
    pub fn fractions(&self) -> Vec<f64> {
        linspace(self.start, self.stop, self.samples)
    }
}

/// Study configuration as written in YAML. Everything except the data file
/// is optional.
#[derive(Debug, Deserialize)]
pub struct RawStudyConfig {
    pub name: Option<String>,
    /// Design data file, relative to the config file.
    pub data: PathBuf,
    pub components: Option<Vec<ComponentBinding>>,
    /// Distance from the nose to the leading edge of the mean aerodynamic chord.
    pub lemac_datum: Option<f64>,
    pub wing: Option<String>,
    pub payload: Option<String>,
    pub fuselage_length: Option<FieldRef>,
    pub fuselage_height: Option<FieldRef>,
    pub wing_chord: Option<FieldRef>,
    pub sweep: Option<SweepRange>,
    /// Class II parameter file, relative to the config file.
    pub class_ii: Option<PathBuf>,
    pub render: Option<RenderConfig>,
}

/// Validated study configuration with paths resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
    pub name: String,
    pub data: PathBuf,
    pub bindings: Vec<ComponentBinding>,
    pub lemac_datum: Option<f64>,
    pub wing: String,
    pub payload: String,
    pub fuselage_length: FieldRef,
    pub fuselage_height: Option<FieldRef>,
    pub wing_chord: FieldRef,
    pub sweep: SweepRange,
    pub class_ii: Option<PathBuf>,
    pub render: RenderConfig,
}

impl StudyConfig {
    /// Reads a study configuration from a YAML file.
    ///
    /// Relative `data` and `class_ii` paths are resolved against the
    /// directory holding the config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)?;
        let raw_config: RawStudyConfig = serde_yaml::from_str(&file_contents)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_raw_config(raw_config, base_dir)
    }

    pub fn from_raw_config(raw: RawStudyConfig, base_dir: &Path) -> Result<Self, ConfigError> {
        let sweep = raw.sweep.unwrap_or_default();
        if sweep.samples == 0 {
            return Err(ConfigError::ValidationError(
                "sweep needs at least one sample".to_string(),
            ));
        }
        if !(sweep.start.is_finite() && sweep.stop.is_finite()) || sweep.start > sweep.stop {
            return Err(ConfigError::ValidationError(format!(
                "sweep range [{}, {}] is not ordered",
                sweep.start, sweep.stop
            )));
        }

        let render = raw.render.unwrap_or_default();
        if render.width == 0 || render.height == 0 {
            return Err(ConfigError::ValidationError(
                "render size must be non-zero".to_string(),
            ));
        }

        if let Some(datum) = raw.lemac_datum {
            if !datum.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "lemac_datum {} is not finite",
                    datum
                )));
            }
        }

        let bindings = raw.components.unwrap_or_else(default_bindings);
        if bindings.is_empty() {
            return Err(ConfigError::ValidationError(
                "no components are bound".to_string(),
            ));
        }

        Ok(Self {
            name: raw.name.unwrap_or_else(|| "Study".to_string()),
            data: base_dir.join(raw.data),
            bindings,
            lemac_datum: raw.lemac_datum,
            wing: raw.wing.unwrap_or_else(|| "Wing".to_string()),
            payload: raw.payload.unwrap_or_else(|| "Payload".to_string()),
            fuselage_length: raw
                .fuselage_length
                .unwrap_or_else(|| FieldRef::new("Structures", "Max_fuselage_length")),
            fuselage_height: raw.fuselage_height,
            wing_chord: raw
                .wing_chord
                .unwrap_or_else(|| FieldRef::new("Aero", "Wing chord")),
            sweep,
            class_ii: raw.class_ii.map(|p| base_dir.join(p)),
            render,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(yaml: &str) -> Result<StudyConfig, ConfigError> {
        let raw: RawStudyConfig = serde_yaml::from_str(yaml)?;
        StudyConfig::from_raw_config(raw, Path::new("studies"))
    }

    #[test]
    fn test_defaults() {
        let config = parse("data: design.yaml\n").unwrap();
        assert_eq!(config.name, "Study");
        assert_eq!(config.data, PathBuf::from("studies/design.yaml"));
        assert_eq!(config.bindings, default_bindings());
        assert_eq!(config.sweep, SweepRange::default());
        assert_eq!(config.wing_chord, FieldRef::new("Aero", "Wing chord"));
        assert_eq!(config.render, RenderConfig::default());
        assert!(config.class_ii.is_none());
        assert!(config.fuselage_height.is_none());
    }

    #[test]
    fn test_overrides() {
        let yaml = r#"
name: Freighter
data: design.json
lemac_datum: 3.4
payload: Cargo
class_ii: class_ii.yaml
sweep:
  start: 0.3
  stop: 0.5
  samples: 5
components:
  - name: Cargo
    weight: { category: Weights, field: Cargo }
    position: { category: Stations, field: Cargo }
"#;
        let config = parse(yaml).unwrap();
        assert_eq!(config.name, "Freighter");
        assert_eq!(config.payload, "Cargo");
        assert_eq!(config.lemac_datum, Some(3.4));
        assert_eq!(config.bindings.len(), 1);
        assert_eq!(config.sweep.fractions().len(), 5);
        assert_eq!(config.class_ii, Some(PathBuf::from("studies/class_ii.yaml")));
    }

    #[test]
    fn test_rejects_empty_sweep() {
        let err =
            parse("data: d.yaml\nsweep: { start: 0.2, stop: 0.7, samples: 0 }\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_reversed_sweep() {
        let err =
            parse("data: d.yaml\nsweep: { start: 0.7, stop: 0.2, samples: 4 }\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_empty_bindings() {
        let err = parse("data: d.yaml\ncomponents: []\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_data_path() {
        assert!(matches!(parse("name: x\n"), Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_from_file_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("study.yaml");
        std::fs::write(&path, "data: design.yaml\nclass_ii: weights.yaml\n").unwrap();
        let config = StudyConfig::from_file(&path).unwrap();
        assert_eq!(config.data, dir.path().join("design.yaml"));
        assert_eq!(config.class_ii, Some(dir.path().join("weights.yaml")));
    }
}
