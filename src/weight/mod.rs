mod params;
pub mod raymer;

pub use params::{
    ClassIIParameters, DesignParameters, EngineControlParameters, FuelSystemParameters,
    FuselageParameters, HorizontalTailParameters, MainGearParameters, NacelleParameters,
    NoseGearParameters, SystemsParameters, VerticalTailParameters, WingParameters,
};
pub use raymer::ClassIIEstimate;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeightError {
    #[error("Failed to read parameter file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid parameter '{name}' with value {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}
