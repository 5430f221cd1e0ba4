mod layout;
mod renderer;
mod sweep;

pub use layout::{fuselage_outline, ComponentMarker, LayoutPlot};
pub use renderer::{PlotRenderer, RenderConfig};
pub use sweep::{SweepCurve, SweepPlot};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Render error: {0}")]
    RenderError(String),
}
