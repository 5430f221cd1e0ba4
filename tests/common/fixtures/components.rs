use airframe::{position, CgCalculation, Component, ComponentSet};

/// Cargo aircraft component build-up, weights in N and stations in m.
pub fn create_cargo_components() -> ComponentSet {
    let mut components = ComponentSet::new();
    components.insert("Fuselage".to_string(), Component::new(4120.0, 4.3, 0.0));
    components.insert("Wing".to_string(), Component::new(3350.0, 4.1, 0.55));
    components.insert("Engine".to_string(), Component::new(2150.0, 1.2, 0.1));
    components.insert("Horizontal Tail".to_string(), Component::new(410.0, 8.5, 0.4));
    components.insert("Vertical Tail".to_string(), Component::new(260.0, 8.4, 0.9));
    components.insert("Payload".to_string(), Component::new(7850.0, 4.0, -0.1));
    components.insert("Fuel".to_string(), Component::new(2900.0, 4.1, 0.55));
    components
}

pub fn create_cargo_calculation() -> CgCalculation {
    CgCalculation::new(create_cargo_components()).expect("fixture components are valid")
}

/// Assorted valid component sets, including zero-weight and negative stations.
pub fn create_component_sets() -> Vec<CgCalculation> {
    let mut sets = vec![create_cargo_calculation()];

    let mut single = CgCalculation::default();
    single.add_component("Only", 12.0, position(-3.0, 7.5)).unwrap();
    sets.push(single);

    let mut spread = CgCalculation::default();
    for i in 0..20 {
        let i = i as f64;
        spread
            .add_component(format!("Item {}", i), 1.0 + i * i, position(i - 10.0, (i * 0.7).sin()))
            .unwrap();
    }
    sets.push(spread);

    let mut with_empty = CgCalculation::default();
    with_empty.add_component("Payload", 0.0, position(100.0, 100.0)).unwrap();
    with_empty.add_component("Structure", 50.0, position(2.0, 1.0)).unwrap();
    sets.push(with_empty);

    sets
}
