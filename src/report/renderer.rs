use serde::{Deserialize, Serialize};
use std::path::Path;
use tiny_skia::*;
use tracing::debug;

use crate::report::{LayoutPlot, ReportError, SweepPlot};
use crate::utils::{position, Position};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Blank border around the plot area (px).
    pub margin: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 40.0,
        }
    }
}

/// Maps plot coordinates onto the canvas with the vertical axis pointing up.
struct Viewport {
    min: Position,
    max: Position,
    config: RenderConfig,
}

impl Viewport {
    fn fit(points: impl Iterator<Item = Position>, config: RenderConfig) -> Option<Self> {
        let mut bounds: Option<(Position, Position)> = None;
        for p in points.filter(|p| p.iter().all(|v| v.is_finite())) {
            bounds = Some(match bounds {
                Some((min, max)) => (
                    position(min.x.min(p.x), min.y.min(p.y)),
                    position(max.x.max(p.x), max.y.max(p.y)),
                ),
                None => (p, p),
            });
        }
        let (mut min, mut max) = bounds?;

        for axis in 0..2 {
            let span = max[axis] - min[axis];
            let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
            min[axis] -= pad;
            max[axis] += pad;
        }

        Some(Self { min, max, config })
    }

    fn to_screen(&self, p: Position) -> (f32, f32) {
        let margin = self.config.margin;
        let width = self.config.width as f32 - 2.0 * margin;
        let height = self.config.height as f32 - 2.0 * margin;
        let u = ((p.x - self.min.x) / (self.max.x - self.min.x)) as f32;
        let v = ((p.y - self.min.y) / (self.max.y - self.min.y)) as f32;
        (margin + u * width, self.config.height as f32 - margin - v * height)
    }
}

/// Draws layout and sweep plots onto `tiny_skia` pixmaps.
pub struct PlotRenderer {
    config: RenderConfig,
}

impl PlotRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn render_layout(&self, plot: &LayoutPlot) -> Result<Pixmap, ReportError> {
        let mut canvas = self.canvas()?;
        let viewport = match Viewport::fit(plot.points(), self.config) {
            Some(viewport) => viewport,
            None => return Ok(canvas),
        };
        self.draw_grid(&mut canvas);

        if let Some(outline) = &plot.outline {
            let screen: Vec<(f32, f32)> = outline.iter().map(|p| viewport.to_screen(*p)).collect();
            if let Some(path) = polyline(&screen) {
                let mut paint = Paint::default();
                paint.set_color_rgba8(0, 0, 0, 255);
                paint.anti_alias = true;
                let stroke = Stroke {
                    width: 1.5,
                    ..Stroke::default()
                };
                canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }

        let max_size = plot
            .markers
            .iter()
            .map(|m| m.size)
            .fold(0.0_f64, f64::max);
        let mut marker_paint = Paint::default();
        marker_paint.set_color_rgba8(0, 0, 0, 255);
        marker_paint.anti_alias = true;
        for marker in &plot.markers {
            let radius = if max_size > 0.0 {
                3.0 + 12.0 * (marker.size / max_size) as f32
            } else {
                3.0
            };
            let (x, y) = viewport.to_screen(marker.position);
            fill_circle(&mut canvas, x, y, radius, &marker_paint);
        }

        if let Some(cg) = plot.cg {
            let mut cg_paint = Paint::default();
            cg_paint.set_color_rgba8(255, 0, 0, 255);
            cg_paint.anti_alias = true;
            let (x, y) = viewport.to_screen(cg);
            fill_circle(&mut canvas, x, y, 6.0, &cg_paint);
        }

        Ok(canvas)
    }

    pub fn render_sweep(&self, plot: &SweepPlot) -> Result<Pixmap, ReportError> {
        const COLOURS: [(u8, u8, u8); 2] = [(255, 0, 0), (0, 0, 255)];

        let mut canvas = self.canvas()?;
        let viewport = match Viewport::fit(plot.points(), self.config) {
            Some(viewport) => viewport,
            None => return Ok(canvas),
        };
        self.draw_grid(&mut canvas);

        let stroke = Stroke {
            width: 2.0,
            ..Stroke::default()
        };
        for (curve, (r, g, b)) in plot.curves.iter().zip(COLOURS.iter().cycle()) {
            let screen: Vec<(f32, f32)> =
                curve.points.iter().map(|p| viewport.to_screen(*p)).collect();
            let mut paint = Paint::default();
            paint.set_color_rgba8(*r, *g, *b, 255);
            paint.anti_alias = true;
            match polyline(&screen) {
                Some(path) => {
                    canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None)
                }
                None => {
                    for (x, y) in screen {
                        fill_circle(&mut canvas, x, y, 2.0, &paint);
                    }
                }
            }
        }

        Ok(canvas)
    }

    pub fn save_png<P: AsRef<Path>>(canvas: &Pixmap, path: P) -> Result<(), ReportError> {
        let path = path.as_ref();
        canvas.save_png(path).map_err(|err| {
            ReportError::RenderError(format!("Failed to save PNG {}: {}", path.display(), err))
        })?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    fn canvas(&self) -> Result<Pixmap, ReportError> {
        let mut canvas = Pixmap::new(self.config.width, self.config.height).ok_or_else(|| {
            ReportError::RenderError(format!(
                "Invalid canvas size {}x{}",
                self.config.width, self.config.height
            ))
        })?;
        canvas.fill(Color::WHITE);
        Ok(canvas)
    }

    fn draw_grid(&self, canvas: &mut Pixmap) {
        const DIVISIONS: usize = 5;

        let margin = self.config.margin;
        let right = self.config.width as f32 - margin;
        let bottom = self.config.height as f32 - margin;

        let mut paint = Paint::default();
        paint.set_color_rgba8(200, 200, 200, 255);
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };

        let mut pb = PathBuilder::new();
        for i in 0..=DIVISIONS {
            let t = i as f32 / DIVISIONS as f32;
            let x = margin + t * (right - margin);
            let y = margin + t * (bottom - margin);
            pb.move_to(x, margin);
            pb.line_to(x, bottom);
            pb.move_to(margin, y);
            pb.line_to(right, y);
        }
        if let Some(path) = pb.finish() {
            canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

fn polyline(points: &[(f32, f32)]) -> Option<tiny_skia::Path> {
    let ((x0, y0), rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(*x0, *y0);
    for (x, y) in rest {
        pb.line_to(*x, *y);
    }
    pb.finish()
}

fn fill_circle(canvas: &mut Pixmap, x: f32, y: f32, radius: f32, paint: &Paint) {
    if let Some(circle) = PathBuilder::from_circle(x, y, radius) {
        canvas.fill_path(&circle, paint, FillRule::Winding, Transform::identity(), None);
    }
}
