use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cg::{CgCalculation, CgError, Component, ComponentSet};
use crate::utils::{linspace, Position};

/// Placement study for a single component.
///
/// For each candidate station the nominated component is moved to
/// `candidate + placement_offset` (its vertical station is kept) and the
/// resulting CG is reported as `(cg_x - candidate) / reference_length`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Component moved through the candidate stations.
    pub component: String,
    /// Ordered candidate stations.
    pub candidates: Vec<f64>,
    /// Length the CG offset is normalised by, e.g. the mean aerodynamic chord.
    pub reference_length: f64,
    /// Offset between the candidate station and the component's own station.
    #[serde(default)]
    pub placement_offset: f64,
    /// Component whose weight is zeroed for the whole sweep.
    #[serde(default)]
    pub zeroed: Option<String>,
}

impl SweepConfig {
    pub fn new(component: impl Into<String>, candidates: Vec<f64>, reference_length: f64) -> Self {
        Self {
            component: component.into(),
            candidates,
            reference_length,
            placement_offset: 0.0,
            zeroed: None,
        }
    }

    pub fn with_placement_offset(mut self, offset: f64) -> Self {
        self.placement_offset = offset;
        self
    }

    pub fn with_zeroed(mut self, component: impl Into<String>) -> Self {
        self.zeroed = Some(component.into());
        self
    }
}

/// One sample of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub candidate: f64,
    pub cg: Position,
    pub ratio: f64,
}

/// Lazy, ordered sweep over a private copy of the component set.
#[derive(Debug, Clone)]
pub struct Sweep {
    components: ComponentSet,
    component: String,
    weight: f64,
    z: f64,
    candidates: std::vec::IntoIter<f64>,
    reference_length: f64,
    placement_offset: f64,
}

impl Iterator for Sweep {
    type Item = Result<SweepPoint, CgError>;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.candidates.next()?;
        let moved = Component::new(self.weight, candidate + self.placement_offset, self.z);
        if let Err(err) = moved.validate(&self.component) {
            return Some(Err(err));
        }
        self.components.insert(self.component.clone(), moved);

        Some(CgCalculation::cg_of(&self.components).map(|cg| SweepPoint {
            candidate,
            cg,
            ratio: (cg.x - candidate) / self.reference_length,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.candidates.size_hint()
    }
}

impl ExactSizeIterator for Sweep {}

impl CgCalculation {
    /// Starts a placement sweep. The calculation itself is left untouched.
    pub fn sweep(&self, config: &SweepConfig) -> Result<Sweep, CgError> {
        if !config.reference_length.is_finite() || config.reference_length <= 0.0 {
            return Err(CgError::InvalidSweep(format!(
                "reference length must be positive, got {}",
                config.reference_length
            )));
        }

        let swept = self
            .component(&config.component)
            .ok_or_else(|| CgError::UnknownComponent(config.component.clone()))?;

        let mut components = self.components().clone();
        if let Some(zeroed) = &config.zeroed {
            let entry = components
                .get_mut(zeroed)
                .ok_or_else(|| CgError::UnknownComponent(zeroed.clone()))?;
            entry.weight = 0.0;
        }

        let weight = components
            .get(&config.component)
            .map_or(swept.weight, |c| c.weight);

        debug!(
            "Sweeping '{}' over {} stations",
            config.component,
            config.candidates.len()
        );

        Ok(Sweep {
            components,
            component: config.component.clone(),
            weight,
            z: swept.z(),
            candidates: config.candidates.clone().into_iter(),
            reference_length: config.reference_length,
            placement_offset: config.placement_offset,
        })
    }

    /// Runs both payload variants of a wing placement study.
    pub fn wing_positioning(
        &self,
        study: &WingPositioningStudy,
    ) -> Result<WingPositioning, CgError> {
        if !study.fuselage_length.is_finite() || study.fuselage_length <= 0.0 {
            return Err(CgError::InvalidSweep(format!(
                "fuselage length must be positive, got {}",
                study.fuselage_length
            )));
        }

        let empty = self
            .sweep(&study.sweep_config(SweepVariant::EmptyPayload))?
            .collect::<Result<Vec<_>, _>>()?;
        let full = self
            .sweep(&study.sweep_config(SweepVariant::FullPayload))?
            .collect::<Result<Vec<_>, _>>()?;

        let payload_fraction = self
            .component(&study.payload)
            .map(|payload| payload.x() / study.fuselage_length);

        info!(
            "Wing positioning study complete: {} stations per variant",
            study.fractions.len()
        );

        Ok(WingPositioning {
            fractions: study.fractions.clone(),
            empty,
            full,
            payload_fraction,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepVariant {
    EmptyPayload,
    FullPayload,
}

impl SweepVariant {
    pub fn label(&self) -> &'static str {
        match self {
            SweepVariant::EmptyPayload => "Empty Payload",
            SweepVariant::FullPayload => "Full Payload",
        }
    }
}

/// Wing placement along the fuselage, expressed as fractions of its length.
///
/// At fraction `f` the leading edge of the mean aerodynamic chord sits at
/// `f * fuselage_length` and the wing mass at half a chord ahead of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingPositioningStudy {
    pub wing: String,
    pub payload: String,
    pub fuselage_length: f64,
    pub chord: f64,
    pub fractions: Vec<f64>,
}

impl WingPositioningStudy {
    pub fn new(fuselage_length: f64, chord: f64) -> Self {
        Self {
            wing: "Wing".to_string(),
            payload: "Payload".to_string(),
            fuselage_length,
            chord,
            fractions: linspace(0.2, 0.7, 50),
        }
    }

    pub fn with_fractions(mut self, fractions: Vec<f64>) -> Self {
        self.fractions = fractions;
        self
    }

    pub fn with_components(mut self, wing: impl Into<String>, payload: impl Into<String>) -> Self {
        self.wing = wing.into();
        self.payload = payload.into();
        self
    }

    pub fn sweep_config(&self, variant: SweepVariant) -> SweepConfig {
        let candidates = self
            .fractions
            .iter()
            .map(|f| f * self.fuselage_length)
            .collect();
        let config = SweepConfig::new(self.wing.clone(), candidates, self.chord)
            .with_placement_offset(-self.chord / 2.0);
        match variant {
            SweepVariant::EmptyPayload => config.with_zeroed(self.payload.clone()),
            SweepVariant::FullPayload => config,
        }
    }
}

/// Result of a [`WingPositioningStudy`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WingPositioning {
    pub fractions: Vec<f64>,
    pub empty: Vec<SweepPoint>,
    pub full: Vec<SweepPoint>,
    /// Payload station over fuselage length, if the payload is in the set.
    pub payload_fraction: Option<f64>,
}

impl WingPositioning {
    pub fn points(&self, variant: SweepVariant) -> &[SweepPoint] {
        match variant {
            SweepVariant::EmptyPayload => &self.empty,
            SweepVariant::FullPayload => &self.full,
        }
    }
}
