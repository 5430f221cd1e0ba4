use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::weight::WeightError;

/// Input to the Raymer Class II cargo/transport equations.
///
/// All values are in Raymer's imperial units: lb, ft, ft², gal, kt and
/// degrees for sweep angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassIIParameters {
    pub design: DesignParameters,
    pub wing: WingParameters,
    pub horizontal_tail: HorizontalTailParameters,
    pub vertical_tail: VerticalTailParameters,
    pub fuselage: FuselageParameters,
    pub main_gear: MainGearParameters,
    pub nose_gear: NoseGearParameters,
    pub nacelle: NacelleParameters,
    pub engine_controls: EngineControlParameters,
    pub fuel_system: FuelSystemParameters,
    pub systems: SystemsParameters,
}

impl ClassIIParameters {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WeightError> {
        let file_contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&file_contents)?)
    }
}

/// Parameters shared by several weight groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignParameters {
    /// Design gross weight, W_dg (lb).
    pub design_gross_weight: f64,
    /// Ultimate load factor, N_z = 1.5 × limit load factor.
    pub ultimate_load_factor: f64,
    /// Landing design gross weight, W_l (lb).
    pub landing_gross_weight: f64,
    /// Ultimate landing load factor, N_l = 1.5 × gear load factor.
    pub landing_load_factor: f64,
    /// Number of engines, N_en.
    pub num_engines: f64,
    /// Total fuselage length, L_f (ft).
    pub fuselage_length: f64,
    /// Wing span, B_w (ft).
    pub wing_span: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingParameters {
    /// Trapezoidal wing area, S_w (ft²).
    pub area: f64,
    /// Aspect ratio, A.
    pub aspect_ratio: f64,
    /// Thickness to chord ratio at the root.
    pub thickness_ratio_root: f64,
    /// Taper ratio, λ.
    pub taper_ratio: f64,
    /// Quarter chord sweep (deg).
    pub sweep: f64,
    /// Wing mounted control surface area, S_csw (ft²).
    pub control_surface_area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalTailParameters {
    /// 1.143 for an all-moving tail, 1.0 otherwise.
    pub k_uht: f64,
    /// Fuselage width at the horizontal tail intersection, F_w (ft).
    pub fuselage_width: f64,
    /// Horizontal tail span, B_h (ft).
    pub span: f64,
    /// Horizontal tail area, S_ht (ft²).
    pub area: f64,
    /// Tail arm from wing quarter chord to tail quarter chord, L_t (ft).
    pub tail_arm: f64,
    /// Pitching radius of gyration, K_y ≈ 0.3 L_t (ft).
    pub k_y: f64,
    /// Quarter chord sweep (deg).
    pub sweep: f64,
    /// Aspect ratio, A_h.
    pub aspect_ratio: f64,
    /// Elevator area, S_e (ft²).
    pub elevator_area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalTailParameters {
    /// Height of the horizontal tail above the fuselage, H_t (ft). Zero for a conventional tail.
    pub horizontal_tail_height: f64,
    /// Height of the vertical tail above the fuselage, H_v (ft).
    pub height: f64,
    /// Tail arm, L_t (ft).
    pub tail_arm: f64,
    /// Vertical tail area, S_vt (ft²).
    pub area: f64,
    /// Yawing radius of gyration, K_z ≈ L_t (ft).
    pub k_z: f64,
    /// Quarter chord sweep (deg).
    pub sweep: f64,
    /// Aspect ratio, A_v.
    pub aspect_ratio: f64,
    /// Thickness to chord ratio at the root.
    pub thickness_ratio_root: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuselageParameters {
    /// Cargo door factor, K_door.
    pub k_door: f64,
    /// 1.12 for fuselage mounted main gear, 1.0 otherwise.
    pub k_lg: f64,
    /// Fuselage structural length, L (ft).
    pub structural_length: f64,
    /// Fuselage wetted area, S_f (ft²).
    pub wetted_area: f64,
    /// Fuselage structural depth, D (ft).
    pub depth: f64,
    /// Wing sweep/taper factor, K_ws.
    pub k_ws: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainGearParameters {
    /// 1.126 for kneeling gear, 1.0 otherwise.
    pub k_mp: f64,
    /// Extended length of the main gear, L_m (in).
    pub length: f64,
    /// Number of main wheels, N_mw.
    pub num_wheels: f64,
    /// Number of main gear shock struts, N_mss.
    pub num_shock_struts: f64,
    /// Stall speed, V_stall (ft/s).
    pub stall_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoseGearParameters {
    /// 1.15 for kneeling gear, 1.0 otherwise.
    pub k_np: f64,
    /// Extended nose gear length, L_n (in).
    pub length: f64,
    /// Number of nose wheels, N_nw.
    pub num_wheels: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NacelleParameters {
    /// 1.017 for pylon mounted nacelles, 1.0 otherwise.
    pub k_ng: f64,
    /// Nacelle length, N_Lt (ft).
    pub length: f64,
    /// Nacelle width, N_w (ft).
    pub width: f64,
    /// Weight of engine and contents per nacelle, W_ec (lb).
    pub engine_weight: f64,
    /// Nacelle wetted area, S_n (ft²).
    pub wetted_area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineControlParameters {
    /// Engine controls routing distance, L_ec (ft).
    pub routing_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelSystemParameters {
    /// Total fuel volume, V_t (gal).
    pub total_volume: f64,
    /// Integral tank volume, V_i (gal).
    pub integral_volume: f64,
    /// Self-sealing protected tank volume, V_p (gal).
    pub protected_volume: f64,
    /// Number of fuel tanks, N_t.
    pub num_tanks: f64,
    /// Total control surface area, S_cs (ft²).
    pub control_surface_area: f64,
    /// Yawing moment of inertia, I_y (lb·ft²).
    pub yaw_inertia: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemsParameters {
    /// 1.133 for reciprocating engines, 1.0 otherwise.
    pub k_r: f64,
    /// 0.793 for turboprops, 1.0 otherwise.
    pub k_tp: f64,
    /// Number of crew, N_c.
    pub num_crew: f64,
    /// Number of hydraulic functions, N_f.
    pub num_hydraulic_functions: f64,
    /// System electrical rating, R_kva.
    pub electrical_rating: f64,
    /// Electrical routing distance, L_a (ft).
    pub electrical_routing_length: f64,
    /// Number of generators, N_gen.
    pub num_generators: f64,
    /// Uninstalled avionics weight, W_uav (lb).
    pub uninstalled_avionics_weight: f64,
}
