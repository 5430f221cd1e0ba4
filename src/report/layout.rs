use serde::Serialize;
use std::f64::consts::FRAC_PI_2;
use tracing::warn;

use crate::cg::CgCalculation;
use crate::utils::{linspace, position, Position};

/// Offset of a label from its marker, in plot units.
const LABEL_OFFSET: f64 = 0.1;

/// Plot marker for a single component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentMarker {
    pub name: String,
    pub position: Position,
    /// Marker size, proportional to the square root of the weight.
    pub size: f64,
    pub label_position: Position,
}

/// Side view of the component layout with the aircraft CG.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutPlot {
    pub markers: Vec<ComponentMarker>,
    /// Missing when the CG could not be computed.
    pub cg: Option<Position>,
    pub outline: Option<Vec<Position>>,
}

impl LayoutPlot {
    /// Builds the layout from the current component set.
    ///
    /// Components sharing a station get their label pushed further out so
    /// they don't overlap.
    pub fn from_calculation(calc: &CgCalculation) -> Self {
        let mut seen: Vec<Position> = Vec::with_capacity(calc.len());
        let markers = calc
            .components()
            .iter()
            .map(|(name, component)| {
                let step = if seen.contains(&component.position) {
                    3.0
                } else {
                    1.0
                };
                seen.push(component.position);
                let offset = step * LABEL_OFFSET;
                ComponentMarker {
                    name: name.clone(),
                    position: component.position,
                    size: component.weight.sqrt(),
                    label_position: component.position + position(offset, offset),
                }
            })
            .collect();

        let cg = match calc.compute_cg() {
            Ok(cg) => Some(cg),
            Err(err) => {
                warn!("Omitting CG marker from layout: {}", err);
                None
            }
        };

        Self {
            markers,
            cg,
            outline: None,
        }
    }

    pub fn with_outline(mut self, outline: Vec<Position>) -> Self {
        self.outline = Some(outline);
        self
    }

    /// Every point drawn by the plot.
    pub fn points(&self) -> impl Iterator<Item = Position> + '_ {
        self.markers
            .iter()
            .map(|m| m.position)
            .chain(self.cg)
            .chain(self.outline.iter().flatten().copied())
    }
}

/// Closed side-view outline of a fuselage with rounded ends.
///
/// # Arguments
/// * `length` - Overall fuselage length.
/// * `height` - Fuselage height; the nose and tail radius is half of it.
/// * `offset` - Station of the nose tip on the centreline.
pub fn fuselage_outline(length: f64, height: f64, offset: Position) -> Vec<Position> {
    let radius = height / 2.0;
    let mut upper = Vec::with_capacity(120);

    for theta in linspace(0.0, FRAC_PI_2, 10) {
        upper.push(position(radius - theta.cos() * radius, theta.sin() * radius));
    }
    for x in linspace(radius, length - radius, 100) {
        upper.push(position(x, radius));
    }
    for theta in linspace(FRAC_PI_2, 0.0, 10) {
        upper.push(position(
            length - radius + theta.cos() * radius,
            theta.sin() * radius,
        ));
    }

    let lower: Vec<Position> = upper.iter().rev().map(|p| position(p.x, -p.y)).collect();

    upper
        .into_iter()
        .chain(lower)
        .map(|p| p + offset)
        .collect()
}
