mod calculation;
mod component;
mod errors;
mod sweep;

pub use calculation::CgCalculation;
pub use component::{Component, ComponentSet};
pub use errors::CgError;
pub use sweep::{
    Sweep, SweepConfig, SweepPoint, SweepVariant, WingPositioning, WingPositioningStudy,
};
