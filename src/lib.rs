pub mod cg;
pub mod config;
pub mod data;
pub mod report;
pub mod study;
pub mod utils;
pub mod weight;

pub use cg::{CgCalculation, CgError, Component, ComponentSet};
pub use config::StudyConfig;
pub use data::{DataProvider, DesignData};
pub use study::{run_study, run_study_with, StudyReport};
pub use utils::{position, Position, SizingError};
pub use weight::{ClassIIEstimate, ClassIIParameters};
