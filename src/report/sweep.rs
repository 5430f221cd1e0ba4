use serde::Serialize;

use crate::cg::{SweepVariant, WingPositioning};
use crate::utils::{position, Position};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepCurve {
    pub label: String,
    /// `(x_cg / MAC, x_LEMAC / l_fus)` pairs in sweep order.
    pub points: Vec<Position>,
}

/// CG travel against wing placement, one curve per payload variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub curves: Vec<SweepCurve>,
}

impl SweepPlot {
    pub fn from_wing_positioning(result: &WingPositioning) -> Self {
        let curves = [SweepVariant::EmptyPayload, SweepVariant::FullPayload]
            .iter()
            .map(|variant| SweepCurve {
                label: variant.label().to_string(),
                points: result
                    .points(*variant)
                    .iter()
                    .zip(&result.fractions)
                    .map(|(point, fraction)| position(point.ratio, *fraction))
                    .collect(),
            })
            .collect();

        let title = match result.payload_fraction {
            Some(fraction) => format!("Payload @ {:.2}", fraction),
            None => "Wing positioning".to_string(),
        };

        Self {
            title,
            x_label: "x_cg/MAC".to_string(),
            y_label: "x_LEMAC/l_fus".to_string(),
            curves,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Position> + '_ {
        self.curves.iter().flat_map(|c| c.points.iter().copied())
    }
}
