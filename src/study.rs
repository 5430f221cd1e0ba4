use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::cg::{CgCalculation, WingPositioning, WingPositioningStudy};
use crate::config::StudyConfig;
use crate::data::{build_components, DataProvider, DesignData};
use crate::report::{
    fuselage_outline, LayoutPlot, PlotRenderer, RenderConfig, ReportError, SweepPlot,
};
use crate::utils::{position, Position, SizingError};
use crate::weight::{ClassIIEstimate, ClassIIParameters};

/// Everything a study produces. Parts that could not be computed are `None`.
#[derive(Debug, Clone, Serialize)]
pub struct StudyReport {
    pub name: String,
    pub total_weight: f64,
    pub cg: Option<Position>,
    pub cg_lemac: Option<Position>,
    pub wing_positioning: Option<WingPositioning>,
    pub class_ii: Option<ClassIIEstimate>,
    pub layout: LayoutPlot,
    pub sweep_plot: Option<SweepPlot>,
}

/// Runs a study against the design data file named in the config.
pub fn run_study(config: &StudyConfig) -> Result<StudyReport, SizingError> {
    let data = DesignData::from_file(&config.data)?;
    run_study_with(config, &data)
}

/// Runs a study against any design data provider.
pub fn run_study_with<D: DataProvider + ?Sized>(
    config: &StudyConfig,
    data: &D,
) -> Result<StudyReport, SizingError> {
    let components = build_components(data, &config.bindings)?;
    let calc = CgCalculation::new(components)?;
    info!(
        "Study '{}': {} components, total weight {:.1}",
        config.name,
        calc.len(),
        calc.total_weight()
    );

    let cg = match calc.compute_cg() {
        Ok(cg) => {
            info!("CG at x = {:.3}, z = {:.3}", cg.x, cg.y);
            Some(cg)
        }
        Err(err) => {
            warn!("CG unavailable: {}", err);
            None
        }
    };

    let cg_lemac = match config.lemac_datum {
        Some(datum) => calc.reference_frame_offset(datum).ok(),
        None => None,
    };

    let fuselage_length = config.fuselage_length.scalar(data)?;
    let chord = config.wing_chord.scalar(data)?;
    let study = WingPositioningStudy::new(fuselage_length, chord)
        .with_components(config.wing.clone(), config.payload.clone())
        .with_fractions(config.sweep.fractions());
    let wing_positioning = match calc.wing_positioning(&study) {
        Ok(result) => Some(result),
        Err(err) => {
            warn!("Skipping wing positioning study: {}", err);
            None
        }
    };
    let sweep_plot = wing_positioning.as_ref().map(SweepPlot::from_wing_positioning);

    let mut layout = LayoutPlot::from_calculation(&calc);
    if let Some(height) = &config.fuselage_height {
        let height = height.scalar(data)?;
        let outline = fuselage_outline(fuselage_length, height, position(0.0, 0.0));
        layout = layout.with_outline(outline);
    }

    let class_ii = match &config.class_ii {
        Some(path) => Some(ClassIIParameters::from_file(path)?.estimate()?),
        None => None,
    };

    Ok(StudyReport {
        name: config.name.clone(),
        total_weight: calc.total_weight(),
        cg,
        cg_lemac,
        wing_positioning,
        class_ii,
        layout,
        sweep_plot,
    })
}

impl StudyReport {
    /// Writes the layout and sweep plots plus a JSON summary into `dir`.
    pub fn write_outputs<P: AsRef<Path>>(
        &self,
        dir: P,
        render: RenderConfig,
    ) -> Result<Vec<PathBuf>, ReportError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let renderer = PlotRenderer::new(render);
        let mut written = Vec::new();

        let layout_path = dir.join("cg_layout.png");
        PlotRenderer::save_png(&renderer.render_layout(&self.layout)?, &layout_path)?;
        written.push(layout_path);

        if let Some(sweep_plot) = &self.sweep_plot {
            let sweep_path = dir.join("wing_positioning.png");
            PlotRenderer::save_png(&renderer.render_sweep(sweep_plot)?, &sweep_path)?;
            written.push(sweep_path);
        }

        let summary_path = dir.join("summary.json");
        std::fs::write(&summary_path, serde_json::to_string_pretty(self)?)?;
        written.push(summary_path);

        info!("Wrote {} report files to {}", written.len(), dir.display());
        Ok(written)
    }
}
