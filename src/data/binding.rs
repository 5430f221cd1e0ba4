use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cg::{Component, ComponentSet};
use crate::data::{DataError, DataProvider};

/// Address of a single design value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    pub category: String,
    pub field: String,
}

impl FieldRef {
    pub fn new(category: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            field: field.into(),
        }
    }

    pub fn scalar<D: DataProvider + ?Sized>(&self, data: &D) -> Result<f64, DataError> {
        data.scalar(&self.category, &self.field)
    }
}

/// Where a component's weight and station live in the design data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentBinding {
    pub name: String,
    pub weight: FieldRef,
    pub position: FieldRef,
}

impl ComponentBinding {
    pub fn new(name: impl Into<String>, weight: FieldRef, position: FieldRef) -> Self {
        Self {
            name: name.into(),
            weight,
            position,
        }
    }
}

/// Bindings for the standard cargo aircraft layout. Fuel is carried in the
/// wing and shares its station.
pub fn default_bindings() -> Vec<ComponentBinding> {
    vec![
        ComponentBinding::new(
            "Fuselage",
            FieldRef::new("Structures", "Fuselage_weight [N]"),
            FieldRef::new("C&S", "Fuselage"),
        ),
        ComponentBinding::new(
            "Wing",
            FieldRef::new("Structures", "Wing_weight [N]"),
            FieldRef::new("C&S", "Wing"),
        ),
        ComponentBinding::new(
            "Engine",
            FieldRef::new("FPP", "Engine Weight [N]"),
            FieldRef::new("C&S", "Engine"),
        ),
        ComponentBinding::new(
            "Horizontal Tail",
            FieldRef::new("Structures", "HTail_weight [N]"),
            FieldRef::new("C&S", "H Wing"),
        ),
        ComponentBinding::new(
            "Vertical Tail",
            FieldRef::new("Structures", "VTail_weight [N]"),
            FieldRef::new("C&S", "V Wing"),
        ),
        ComponentBinding::new(
            "Payload",
            FieldRef::new("Weights", "WPL [N]"),
            FieldRef::new("C&S", "Payload"),
        ),
        ComponentBinding::new(
            "Fuel",
            FieldRef::new("Weights", "WF [N]"),
            FieldRef::new("C&S", "Wing"),
        ),
    ]
}

/// Resolves every binding against the provider into a component set.
pub fn build_components<D: DataProvider + ?Sized>(
    data: &D,
    bindings: &[ComponentBinding],
) -> Result<ComponentSet, DataError> {
    let mut components = ComponentSet::new();
    for binding in bindings {
        let weight = binding.weight.scalar(data)?;
        let position = data.position(&binding.position.category, &binding.position.field)?;
        if components
            .insert(binding.name.clone(), Component::at(weight, position))
            .is_some()
        {
            return Err(DataError::DuplicateComponent(binding.name.clone()));
        }
    }
    debug!("Bound {} components from design data", components.len());
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DesignData;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_single_component() {
        let data = DesignData::new()
            .with_scalar("Weights", "WPL [N]", 5000.0)
            .with_position("C&S", "Payload", 4.0, 0.2);
        let bindings = vec![ComponentBinding::new(
            "Payload",
            FieldRef::new("Weights", "WPL [N]"),
            FieldRef::new("C&S", "Payload"),
        )];
        let components = build_components(&data, &bindings).unwrap();
        assert_eq!(components["Payload"], Component::new(5000.0, 4.0, 0.2));
    }

    #[test]
    fn test_missing_binding_field() {
        let data = DesignData::new().with_scalar("Weights", "WPL [N]", 5000.0);
        let err = build_components(&data, &default_bindings()).unwrap_err();
        assert!(matches!(err, DataError::MissingField { .. }));
    }

    #[test]
    fn test_duplicate_binding() {
        let data = DesignData::new()
            .with_scalar("Weights", "WF [N]", 100.0)
            .with_position("C&S", "Wing", 1.0, 0.0);
        let binding = ComponentBinding::new(
            "Fuel",
            FieldRef::new("Weights", "WF [N]"),
            FieldRef::new("C&S", "Wing"),
        );
        let err = build_components(&data, &[binding.clone(), binding]).unwrap_err();
        assert!(matches!(err, DataError::DuplicateComponent(name) if name == "Fuel"));
    }

    #[test]
    fn test_default_bindings_share_wing_station() {
        let bindings = default_bindings();
        assert_eq!(bindings.len(), 7);
        let wing = bindings.iter().find(|b| b.name == "Wing").unwrap();
        let fuel = bindings.iter().find(|b| b.name == "Fuel").unwrap();
        assert_eq!(wing.position, fuel.position);
    }
}
