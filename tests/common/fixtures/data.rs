use airframe::DesignData;

/// Design data matching [`super::create_cargo_components`].
pub fn create_cargo_design_data() -> DesignData {
    DesignData::new()
        .with_scalar("Structures", "Max_fuselage_length", 9.0)
        .with_scalar("Structures", "Max_fuselage_height", 1.6)
        .with_scalar("Structures", "Fuselage_weight [N]", 4120.0)
        .with_scalar("Structures", "Wing_weight [N]", 3350.0)
        .with_scalar("Structures", "HTail_weight [N]", 410.0)
        .with_scalar("Structures", "VTail_weight [N]", 260.0)
        .with_scalar("Aero", "Wing chord", 1.45)
        .with_scalar("FPP", "Engine Weight [N]", 2150.0)
        .with_scalar("Weights", "WPL [N]", 7850.0)
        .with_scalar("Weights", "WF [N]", 2900.0)
        .with_position("C&S", "Fuselage", 4.3, 0.0)
        .with_position("C&S", "Wing", 4.1, 0.55)
        .with_position("C&S", "Engine", 1.2, 0.1)
        .with_position("C&S", "H Wing", 8.5, 0.4)
        .with_position("C&S", "V Wing", 8.4, 0.9)
        .with_position("C&S", "Payload", 4.0, -0.1)
}
