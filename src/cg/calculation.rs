use tracing::debug;

use crate::cg::{CgError, Component, ComponentSet};
use crate::utils::Position;

/// Centre of gravity build-up over a set of named components.
///
/// The CG is never stored: every query reduces the current component set, so
/// a result can't go stale after [`CgCalculation::add_component`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CgCalculation {
    components: ComponentSet,
}

impl CgCalculation {
    /// Creates a calculation from a pre-built component set.
    ///
    /// # Arguments
    /// * `components` - Component name mapped to its weight and `[x, z]` station.
    ///
    /// # Returns
    /// An error if any component has a negative or non-finite weight, or a
    /// non-finite station. An empty set is accepted; aggregating it is not.
    pub fn new(components: ComponentSet) -> Result<Self, CgError> {
        for (name, component) in &components {
            component.validate(name)?;
        }
        debug!("CG calculation created with {} components", components.len());
        Ok(Self { components })
    }

    /// Inserts the component, replacing any existing entry with the same name.
    pub fn add_component(
        &mut self,
        name: impl Into<String>,
        weight: f64,
        position: Position,
    ) -> Result<(), CgError> {
        let name = name.into();
        let component = Component::at(weight, position);
        component.validate(&name)?;
        if self.components.insert(name.clone(), component).is_some() {
            debug!("Replaced component '{}'", name);
        } else {
            debug!("Added component '{}'", name);
        }
        Ok(())
    }

    /// Weighted average station of all components.
    pub fn compute_cg(&self) -> Result<Position, CgError> {
        Self::cg_of(&self.components)
    }

    /// CG expressed relative to a reference station, usually the leading edge
    /// of the mean aerodynamic chord.
    ///
    /// # Arguments
    /// * `d_ref` - Distance from the datum (nose tip) to the reference station.
    pub fn reference_frame_offset(&self, d_ref: f64) -> Result<Position, CgError> {
        let cg = self.compute_cg()?;
        Ok(Position::new(cg.x - d_ref, cg.y))
    }

    pub fn components(&self) -> &ComponentSet {
        &self.components
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.components.values().map(|c| c.weight).sum()
    }

    pub(crate) fn cg_of(components: &ComponentSet) -> Result<Position, CgError> {
        if components.is_empty() {
            return Err(CgError::EmptyComponentSet);
        }

        let total_weight: f64 = components.values().map(|c| c.weight).sum();
        if total_weight <= 0.0 {
            return Err(CgError::ZeroTotalWeight);
        }

        if !total_weight.is_finite() {
            return Err(CgError::AggregateOverflow(format!(
                "total weight {} is not finite",
                total_weight
            )));
        }

        let moment = components
            .values()
            .fold(Position::zeros(), |acc, c| acc + c.moment());
        if !moment.iter().all(|m| m.is_finite()) {
            return Err(CgError::AggregateOverflow(format!(
                "moment ({}, {}) is not finite",
                moment.x, moment.y
            )));
        }

        Ok(moment / total_weight)
    }
}
