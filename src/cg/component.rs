use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cg::CgError;
use crate::utils::{position, Position};

/// Named components of the aircraft, keyed by name.
///
/// Ordering only affects reporting, never the aggregated result. Reports walk
/// the set in name order, so of two components sharing a station the one
/// whose name sorts later gets the shifted layout label.
pub type ComponentSet = BTreeMap<String, Component>;

/// A point mass contributing to the aircraft centre of gravity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Weight of the component, in any unit consistent across the set.
    pub weight: f64,
    /// Station of the component as `[x, z]`.
    pub position: Position,
}

impl Component {
    pub fn new(weight: f64, x: f64, z: f64) -> Self {
        Self {
            weight,
            position: position(x, z),
        }
    }

    pub fn at(weight: f64, position: Position) -> Self {
        Self { weight, position }
    }

    /// Longitudinal station.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Vertical station.
    pub fn z(&self) -> f64 {
        self.position.y
    }

    /// First moment of the component about the datum.
    pub fn moment(&self) -> Position {
        self.position * self.weight
    }

    /// Checks that the component describes a physical point mass.
    ///
    /// Zero weight is accepted so that removed payload or fuel can stay in
    /// the set; negative or non-finite values are rejected.
    pub fn validate(&self, name: &str) -> Result<(), CgError> {
        if !self.weight.is_finite() {
            return Err(CgError::InvalidComponent {
                name: name.to_string(),
                reason: format!("weight {} is not finite", self.weight),
            });
        }
        if self.weight < 0.0 {
            return Err(CgError::InvalidComponent {
                name: name.to_string(),
                reason: format!("weight {} is negative", self.weight),
            });
        }
        if !self.position.iter().all(|p| p.is_finite()) {
            return Err(CgError::InvalidComponent {
                name: name.to_string(),
                reason: format!(
                    "position ({}, {}) is not finite",
                    self.position.x, self.position.y
                ),
            });
        }
        Ok(())
    }
}
