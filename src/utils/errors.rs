use thiserror::Error;

use crate::cg::CgError;
use crate::config::ConfigError;
use crate::data::DataError;
use crate::report::ReportError;
use crate::weight::WeightError;

#[derive(Error, Debug)]
pub enum SizingError {
    #[error("CG error: {0}")]
    Cg(#[from] CgError),

    #[error("Weight estimation error: {0}")]
    Weight(#[from] WeightError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}
