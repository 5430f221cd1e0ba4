use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CgError {
    #[error("Cannot compute CG of an empty component set")]
    EmptyComponentSet,
    #[error("Cannot compute CG: total weight is zero")]
    ZeroTotalWeight,
    #[error("Invalid component '{name}': {reason}")]
    InvalidComponent { name: String, reason: String },
    #[error("Unknown component: {0}")]
    UnknownComponent(String),
    #[error("CG aggregate overflowed: {0}")]
    AggregateOverflow(String),
    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),
}
