//! Raymer Class II group weight equations for cargo/transport aircraft.
//!
//! Every equation returns a group weight in lb. Inputs are checked before
//! evaluation so that a bad parameter surfaces as [`WeightError`] instead of
//! a NaN or infinite weight.

use serde::Serialize;
use tracing::debug;

use crate::utils::deg_to_rad;
use crate::weight::{
    ClassIIParameters, DesignParameters, EngineControlParameters, FuelSystemParameters,
    FuselageParameters, HorizontalTailParameters, MainGearParameters, NacelleParameters,
    NoseGearParameters, SystemsParameters, VerticalTailParameters, WeightError, WingParameters,
};

fn positive(name: &'static str, value: f64) -> Result<f64, WeightError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WeightError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<f64, WeightError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WeightError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        })
    }
}

/// Cosine of a sweep angle given in degrees.
fn sweep_cosine(name: &'static str, sweep_deg: f64) -> Result<f64, WeightError> {
    if sweep_deg.is_finite() && sweep_deg.abs() < 90.0 {
        Ok(deg_to_rad(sweep_deg).cos())
    } else {
        Err(WeightError::InvalidParameter {
            name,
            value: sweep_deg,
            reason: "sweep must lie strictly between -90 and 90 degrees",
        })
    }
}

pub fn wing(design: &DesignParameters, wing: &WingParameters) -> Result<f64, WeightError> {
    let w_dg = positive("design_gross_weight", design.design_gross_weight)?;
    let n_z = positive("ultimate_load_factor", design.ultimate_load_factor)?;
    let s_w = positive("wing.area", wing.area)?;
    let a = positive("wing.aspect_ratio", wing.aspect_ratio)?;
    let t_c = positive("wing.thickness_ratio_root", wing.thickness_ratio_root)?;
    let taper = non_negative("wing.taper_ratio", wing.taper_ratio)?;
    let cos_sweep = sweep_cosine("wing.sweep", wing.sweep)?;
    let s_csw = positive("wing.control_surface_area", wing.control_surface_area)?;

    Ok(0.0051
        * (w_dg * n_z).powf(0.557)
        * s_w.powf(0.649)
        * a.powf(0.5)
        * t_c.powf(-0.4)
        * (1.0 + taper).powf(0.1)
        * cos_sweep.powf(-1.0)
        * s_csw.powf(0.1))
}

pub fn horizontal_tail(
    design: &DesignParameters,
    tail: &HorizontalTailParameters,
) -> Result<f64, WeightError> {
    let w_dg = positive("design_gross_weight", design.design_gross_weight)?;
    let n_z = positive("ultimate_load_factor", design.ultimate_load_factor)?;
    let k_uht = positive("horizontal_tail.k_uht", tail.k_uht)?;
    let f_w = non_negative("horizontal_tail.fuselage_width", tail.fuselage_width)?;
    let b_h = positive("horizontal_tail.span", tail.span)?;
    let s_ht = positive("horizontal_tail.area", tail.area)?;
    let l_t = positive("horizontal_tail.tail_arm", tail.tail_arm)?;
    let k_y = positive("horizontal_tail.k_y", tail.k_y)?;
    let cos_sweep = sweep_cosine("horizontal_tail.sweep", tail.sweep)?;
    let a_h = positive("horizontal_tail.aspect_ratio", tail.aspect_ratio)?;
    let s_e = non_negative("horizontal_tail.elevator_area", tail.elevator_area)?;

    Ok(0.0379
        * k_uht
        * (1.0 + f_w / b_h).powf(-0.25)
        * w_dg.powf(0.639)
        * n_z.powf(0.1)
        * s_ht.powf(0.75)
        * l_t.powf(-1.0)
        * k_y.powf(0.704)
        * cos_sweep.powf(-1.0)
        * a_h.powf(0.166)
        * (1.0 + s_e / s_ht).powf(0.1))
}

pub fn vertical_tail(
    design: &DesignParameters,
    tail: &VerticalTailParameters,
) -> Result<f64, WeightError> {
    let w_dg = positive("design_gross_weight", design.design_gross_weight)?;
    let n_z = positive("ultimate_load_factor", design.ultimate_load_factor)?;
    let h_t = non_negative("vertical_tail.horizontal_tail_height", tail.horizontal_tail_height)?;
    let h_v = positive("vertical_tail.height", tail.height)?;
    let l_t = positive("vertical_tail.tail_arm", tail.tail_arm)?;
    let s_vt = positive("vertical_tail.area", tail.area)?;
    let k_z = positive("vertical_tail.k_z", tail.k_z)?;
    let cos_sweep = sweep_cosine("vertical_tail.sweep", tail.sweep)?;
    let a_v = positive("vertical_tail.aspect_ratio", tail.aspect_ratio)?;
    let t_c = positive("vertical_tail.thickness_ratio_root", tail.thickness_ratio_root)?;

    Ok(0.0026
        * (1.0 + h_t / h_v).powf(0.225)
        * w_dg.powf(0.556)
        * n_z.powf(0.536)
        * l_t.powf(-0.5)
        * s_vt.powf(0.5)
        * k_z.powf(0.875)
        * cos_sweep.powf(-1.0)
        * a_v.powf(0.35)
        * t_c.powf(-0.5))
}

pub fn fuselage(
    design: &DesignParameters,
    fuselage: &FuselageParameters,
) -> Result<f64, WeightError> {
    let w_dg = positive("design_gross_weight", design.design_gross_weight)?;
    let n_z = positive("ultimate_load_factor", design.ultimate_load_factor)?;
    let k_door = positive("fuselage.k_door", fuselage.k_door)?;
    let k_lg = positive("fuselage.k_lg", fuselage.k_lg)?;
    let l = positive("fuselage.structural_length", fuselage.structural_length)?;
    let s_f = positive("fuselage.wetted_area", fuselage.wetted_area)?;
    let d = positive("fuselage.depth", fuselage.depth)?;
    let k_ws = non_negative("fuselage.k_ws", fuselage.k_ws)?;

    Ok(0.328
        * k_door
        * k_lg
        * (w_dg * n_z).powf(0.5)
        * l.powf(0.25)
        * s_f.powf(0.302)
        * (1.0 + k_ws).powf(0.04)
        * (l / d).powf(0.1))
}

pub fn main_gear(design: &DesignParameters, gear: &MainGearParameters) -> Result<f64, WeightError> {
    let w_l = positive("landing_gross_weight", design.landing_gross_weight)?;
    let n_l = positive("landing_load_factor", design.landing_load_factor)?;
    let k_mp = positive("main_gear.k_mp", gear.k_mp)?;
    let l_m = positive("main_gear.length", gear.length)?;
    let n_mw = positive("main_gear.num_wheels", gear.num_wheels)?;
    let n_mss = positive("main_gear.num_shock_struts", gear.num_shock_struts)?;
    let v_stall = positive("main_gear.stall_speed", gear.stall_speed)?;

    Ok(0.0106
        * k_mp
        * w_l.powf(0.888)
        * n_l.powf(0.25)
        * l_m.powf(0.4)
        * n_mw.powf(0.321)
        * n_mss.powf(-0.5)
        * v_stall.powf(0.1))
}

pub fn nose_gear(design: &DesignParameters, gear: &NoseGearParameters) -> Result<f64, WeightError> {
    let w_l = positive("landing_gross_weight", design.landing_gross_weight)?;
    let n_l = positive("landing_load_factor", design.landing_load_factor)?;
    let k_np = positive("nose_gear.k_np", gear.k_np)?;
    let l_n = positive("nose_gear.length", gear.length)?;
    let n_nw = positive("nose_gear.num_wheels", gear.num_wheels)?;

    Ok(0.032 * k_np * w_l.powf(0.646) * n_l.powf(0.2) * l_n.powf(0.5) * n_nw.powf(0.45))
}

pub fn nacelle_group(
    design: &DesignParameters,
    nacelle: &NacelleParameters,
) -> Result<f64, WeightError> {
    let n_z = positive("ultimate_load_factor", design.ultimate_load_factor)?;
    let n_en = positive("num_engines", design.num_engines)?;
    let k_ng = positive("nacelle.k_ng", nacelle.k_ng)?;
    let n_lt = positive("nacelle.length", nacelle.length)?;
    let n_w = positive("nacelle.width", nacelle.width)?;
    let w_ec = positive("nacelle.engine_weight", nacelle.engine_weight)?;
    let s_n = positive("nacelle.wetted_area", nacelle.wetted_area)?;

    Ok(0.6724
        * k_ng
        * n_lt.powf(0.1)
        * n_w.powf(0.294)
        * n_z.powf(0.119)
        * w_ec.powf(0.611)
        * n_en.powf(0.984)
        * s_n.powf(0.224))
}

pub fn engine_controls(
    design: &DesignParameters,
    controls: &EngineControlParameters,
) -> Result<f64, WeightError> {
    let n_en = non_negative("num_engines", design.num_engines)?;
    let l_ec = non_negative("engine_controls.routing_length", controls.routing_length)?;

    Ok(5.0 * n_en + 0.80 * l_ec)
}

pub fn fuel_system(fuel: &FuelSystemParameters) -> Result<f64, WeightError> {
    let v_t = positive("fuel_system.total_volume", fuel.total_volume)?;
    let v_i = non_negative("fuel_system.integral_volume", fuel.integral_volume)?;
    let v_p = non_negative("fuel_system.protected_volume", fuel.protected_volume)?;
    let n_t = positive("fuel_system.num_tanks", fuel.num_tanks)?;
    let s_cs = positive("fuel_system.control_surface_area", fuel.control_surface_area)?;
    let i_y = positive("fuel_system.yaw_inertia", fuel.yaw_inertia)?;

    Ok(2.405
        * v_t.powf(0.606)
        * (1.0 + v_i / v_t).powf(-1.0)
        * (1.0 + v_p / v_t)
        * n_t.powf(0.5)
        * s_cs.powf(0.2)
        * (i_y * 1e-6).powf(0.07))
}

/// Overall fuselage length plus wing span, the routing length used by the
/// instruments and hydraulics equations.
fn routing_length(design: &DesignParameters) -> Result<f64, WeightError> {
    let l_f = positive("fuselage_length", design.fuselage_length)?;
    let b_w = positive("wing_span", design.wing_span)?;
    Ok(l_f + b_w)
}

pub fn instruments(
    design: &DesignParameters,
    systems: &SystemsParameters,
) -> Result<f64, WeightError> {
    let k_r = positive("systems.k_r", systems.k_r)?;
    let k_tp = positive("systems.k_tp", systems.k_tp)?;
    let n_c = positive("systems.num_crew", systems.num_crew)?;
    let n_en = non_negative("num_engines", design.num_engines)?;

    Ok(4.509 * k_r * k_tp * n_c.powf(0.541) * n_en * routing_length(design)?.powf(0.5))
}

pub fn hydraulics(
    design: &DesignParameters,
    systems: &SystemsParameters,
) -> Result<f64, WeightError> {
    let n_f = non_negative("systems.num_hydraulic_functions", systems.num_hydraulic_functions)?;

    Ok(0.2673 * n_f * routing_length(design)?.powf(0.937))
}

pub fn electrical(systems: &SystemsParameters) -> Result<f64, WeightError> {
    let r_kva = positive("systems.electrical_rating", systems.electrical_rating)?;
    let l_a = positive("systems.electrical_routing_length", systems.electrical_routing_length)?;
    let n_gen = positive("systems.num_generators", systems.num_generators)?;

    Ok(7.291 * r_kva.powf(0.782) * l_a.powf(0.346) * n_gen.powf(0.1))
}

pub fn avionics(systems: &SystemsParameters) -> Result<f64, WeightError> {
    let w_uav = non_negative(
        "systems.uninstalled_avionics_weight",
        systems.uninstalled_avionics_weight,
    )?;

    Ok(1.73 * w_uav.powf(0.983))
}

pub fn anti_ice(design: &DesignParameters) -> Result<f64, WeightError> {
    let w_dg = positive("design_gross_weight", design.design_gross_weight)?;

    Ok(0.002 * w_dg)
}

/// Group weights (lb) from a Class II estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassIIEstimate {
    pub wing: f64,
    pub horizontal_tail: f64,
    pub vertical_tail: f64,
    pub fuselage: f64,
    pub main_gear: f64,
    pub nose_gear: f64,
    pub nacelle_group: f64,
    pub engine_controls: f64,
    pub fuel_system: f64,
    pub instruments: f64,
    pub hydraulics: f64,
    pub electrical: f64,
    pub avionics: f64,
    pub anti_ice: f64,
}

impl ClassIIEstimate {
    /// Group names and weights, structures first.
    pub fn breakdown(&self) -> [(&'static str, f64); 14] {
        [
            ("Wing", self.wing),
            ("Horizontal Tail", self.horizontal_tail),
            ("Vertical Tail", self.vertical_tail),
            ("Fuselage", self.fuselage),
            ("Main Gear", self.main_gear),
            ("Nose Gear", self.nose_gear),
            ("Nacelle Group", self.nacelle_group),
            ("Engine Controls", self.engine_controls),
            ("Fuel System", self.fuel_system),
            ("Instruments", self.instruments),
            ("Hydraulics", self.hydraulics),
            ("Electrical", self.electrical),
            ("Avionics", self.avionics),
            ("Anti-Ice", self.anti_ice),
        ]
    }

    pub fn total(&self) -> f64 {
        self.breakdown().iter().map(|(_, w)| w).sum()
    }
}

impl ClassIIParameters {
    pub fn estimate(&self) -> Result<ClassIIEstimate, WeightError> {
        let estimate = ClassIIEstimate {
            wing: wing(&self.design, &self.wing)?,
            horizontal_tail: horizontal_tail(&self.design, &self.horizontal_tail)?,
            vertical_tail: vertical_tail(&self.design, &self.vertical_tail)?,
            fuselage: fuselage(&self.design, &self.fuselage)?,
            main_gear: main_gear(&self.design, &self.main_gear)?,
            nose_gear: nose_gear(&self.design, &self.nose_gear)?,
            nacelle_group: nacelle_group(&self.design, &self.nacelle)?,
            engine_controls: engine_controls(&self.design, &self.engine_controls)?,
            fuel_system: fuel_system(&self.fuel_system)?,
            instruments: instruments(&self.design, &self.systems)?,
            hydraulics: hydraulics(&self.design, &self.systems)?,
            electrical: electrical(&self.systems)?,
            avionics: avionics(&self.systems)?,
            anti_ice: anti_ice(&self.design)?,
        };
        debug!("Class II estimate total: {:.1} lb", estimate.total());
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Parameters chosen so that every power-law term collapses to one.
    fn unit_parameters() -> ClassIIParameters {
        ClassIIParameters {
            design: DesignParameters {
                design_gross_weight: 1.0,
                ultimate_load_factor: 1.0,
                landing_gross_weight: 1.0,
                landing_load_factor: 1.0,
                num_engines: 1.0,
                fuselage_length: 1.0,
                wing_span: 1.0,
            },
            wing: WingParameters {
                area: 1.0,
                aspect_ratio: 1.0,
                thickness_ratio_root: 1.0,
                taper_ratio: 0.0,
                sweep: 0.0,
                control_surface_area: 1.0,
            },
            horizontal_tail: HorizontalTailParameters {
                k_uht: 1.0,
                fuselage_width: 0.0,
                span: 1.0,
                area: 1.0,
                tail_arm: 1.0,
                k_y: 1.0,
                sweep: 0.0,
                aspect_ratio: 1.0,
                elevator_area: 0.0,
            },
            vertical_tail: VerticalTailParameters {
                horizontal_tail_height: 0.0,
                height: 1.0,
                tail_arm: 1.0,
                area: 1.0,
                k_z: 1.0,
                sweep: 0.0,
                aspect_ratio: 1.0,
                thickness_ratio_root: 1.0,
            },
            fuselage: FuselageParameters {
                k_door: 1.0,
                k_lg: 1.0,
                structural_length: 1.0,
                wetted_area: 1.0,
                depth: 1.0,
                k_ws: 0.0,
            },
            main_gear: MainGearParameters {
                k_mp: 1.0,
                length: 1.0,
                num_wheels: 1.0,
                num_shock_struts: 1.0,
                stall_speed: 1.0,
            },
            nose_gear: NoseGearParameters {
                k_np: 1.0,
                length: 1.0,
                num_wheels: 1.0,
            },
            nacelle: NacelleParameters {
                k_ng: 1.0,
                length: 1.0,
                width: 1.0,
                engine_weight: 1.0,
                wetted_area: 1.0,
            },
            engine_controls: EngineControlParameters {
                routing_length: 1.0,
            },
            fuel_system: FuelSystemParameters {
                total_volume: 1.0,
                integral_volume: 0.0,
                protected_volume: 0.0,
                num_tanks: 1.0,
                control_surface_area: 1.0,
                yaw_inertia: 1e6,
            },
            systems: SystemsParameters {
                k_r: 1.0,
                k_tp: 1.0,
                num_crew: 1.0,
                num_hydraulic_functions: 1.0,
                electrical_rating: 1.0,
                electrical_routing_length: 1.0,
                num_generators: 1.0,
                uninstalled_avionics_weight: 1.0,
            },
        }
    }

    #[test]
    fn test_leading_coefficients() {
        let estimate = unit_parameters().estimate().unwrap();
        assert_relative_eq!(estimate.wing, 0.0051, epsilon = 1e-12);
        assert_relative_eq!(estimate.horizontal_tail, 0.0379, epsilon = 1e-12);
        assert_relative_eq!(estimate.vertical_tail, 0.0026, epsilon = 1e-12);
        assert_relative_eq!(estimate.fuselage, 0.328, epsilon = 1e-12);
        assert_relative_eq!(estimate.main_gear, 0.0106, epsilon = 1e-12);
        assert_relative_eq!(estimate.nose_gear, 0.032, epsilon = 1e-12);
        assert_relative_eq!(estimate.nacelle_group, 0.6724, epsilon = 1e-12);
        assert_relative_eq!(estimate.engine_controls, 5.8, epsilon = 1e-12);
        assert_relative_eq!(estimate.fuel_system, 2.405, epsilon = 1e-12);
        assert_relative_eq!(estimate.instruments, 4.509 * 2f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(estimate.hydraulics, 0.2673 * 2f64.powf(0.937), epsilon = 1e-12);
        assert_relative_eq!(estimate.electrical, 7.291, epsilon = 1e-12);
        assert_relative_eq!(estimate.avionics, 1.73, epsilon = 1e-12);
        assert_relative_eq!(estimate.anti_ice, 0.002, epsilon = 1e-12);
    }

    /// Sample cargo parameters with the unit and zero inputs replaced so
    /// every exponent contributes.
    fn cargo_parameters() -> ClassIIParameters {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/cargo/class_ii.yaml");
        let mut params = ClassIIParameters::from_file(path).unwrap();
        params.design.num_engines = 2.0;
        params.vertical_tail.horizontal_tail_height = 2.5;
        params.fuselage.k_ws = 0.4;
        params.fuel_system.protected_volume = 20.0;
        params.nose_gear.num_wheels = 2.0;
        params.systems.num_generators = 2.0;
        params.systems.num_crew = 2.0;
        params
    }

    #[test]
    fn test_cargo_group_weights() {
        let estimate = cargo_parameters().estimate().unwrap();
        assert_relative_eq!(estimate.wing, 349.9398784978, max_relative = 1e-9);
        assert_relative_eq!(estimate.horizontal_tail, 41.4591227725, max_relative = 1e-9);
        assert_relative_eq!(estimate.vertical_tail, 35.5670777954, max_relative = 1e-9);
        assert_relative_eq!(estimate.fuselage, 782.3885289945, max_relative = 1e-9);
        assert_relative_eq!(estimate.main_gear, 158.5767840096, max_relative = 1e-9);
        assert_relative_eq!(estimate.nose_gear, 72.8801605702, max_relative = 1e-9);
        assert_relative_eq!(estimate.nacelle_group, 219.6776645807, max_relative = 1e-9);
        assert_relative_eq!(estimate.engine_controls, 14.8, max_relative = 1e-9);
        assert_relative_eq!(estimate.fuel_system, 57.8874150550, max_relative = 1e-9);
        assert_relative_eq!(estimate.instruments, 87.9819669261, max_relative = 1e-9);
        assert_relative_eq!(estimate.hydraulics, 58.4176000793, max_relative = 1e-9);
        assert_relative_eq!(estimate.electrical, 144.0712554938, max_relative = 1e-9);
        assert_relative_eq!(estimate.avionics, 191.3732657076, max_relative = 1e-9);
        assert_relative_eq!(estimate.anti_ice, 10.4, max_relative = 1e-9);
        assert_relative_eq!(estimate.total(), 2225.4207204825, max_relative = 1e-9);
    }

    #[test]
    fn test_total_is_sum_of_groups() {
        let estimate = unit_parameters().estimate().unwrap();
        let sum: f64 = estimate.breakdown().iter().map(|(_, w)| w).sum();
        assert_relative_eq!(estimate.total(), sum);
        assert_eq!(estimate.breakdown()[0].0, "Wing");
    }

    #[test]
    fn test_wing_scaling() {
        let mut params = unit_parameters();
        params.wing.area = 2.0;
        params.wing.sweep = 60.0;
        let w = wing(&params.design, &params.wing).unwrap();
        // cos(60°) = 0.5
        assert_relative_eq!(w, 0.0051 * 2f64.powf(0.649) * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_anti_ice_fraction() {
        let mut params = unit_parameters();
        params.design.design_gross_weight = 50_000.0;
        assert_relative_eq!(anti_ice(&params.design).unwrap(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fuel_system_tank_volumes() {
        let mut params = unit_parameters();
        params.fuel_system.integral_volume = 1.0;
        params.fuel_system.protected_volume = 1.0;
        // (1 + 1)^-1 * (1 + 1) = 1
        assert_relative_eq!(
            fuel_system(&params.fuel_system).unwrap(),
            2.405,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_engine_controls_linear() {
        let mut params = unit_parameters();
        params.design.num_engines = 2.0;
        params.engine_controls.routing_length = 50.0;
        assert_relative_eq!(
            engine_controls(&params.design, &params.engine_controls).unwrap(),
            50.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rejects_zero_divisor() {
        let mut params = unit_parameters();
        params.horizontal_tail.span = 0.0;
        let err = params.estimate().unwrap_err();
        assert!(matches!(
            err,
            WeightError::InvalidParameter { name: "horizontal_tail.span", .. }
        ));
    }

    #[test]
    fn test_rejects_right_angle_sweep() {
        let mut params = unit_parameters();
        params.wing.sweep = 90.0;
        assert!(matches!(
            wing(&params.design, &params.wing),
            Err(WeightError::InvalidParameter { name: "wing.sweep", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let mut params = unit_parameters();
        params.design.design_gross_weight = -10.0;
        assert!(params.estimate().is_err());
        assert!(anti_ice(&params.design).is_err());
    }

    #[test]
    fn test_parameters_from_yaml() {
        let yaml = serde_yaml::to_string(&unit_parameters()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("class_ii.yaml");
        std::fs::write(&path, yaml).unwrap();
        let loaded = ClassIIParameters::from_file(&path).unwrap();
        assert_eq!(loaded, unit_parameters());
    }
}
