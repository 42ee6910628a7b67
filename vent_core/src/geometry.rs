//! # Tank Geometry
//!
//! Derived geometric quantities for a vertical cylindrical tank with a
//! 1:12 cone roof, plus the insulation reduction factors applied to
//! thermal venting.
//!
//! ## Formulas
//!
//! ```text
//! V_max  = π (D/2)² H / 10⁹            (m³, D and H in mm)
//! A_sh   = π D H / 10⁶                 (m²)
//! A_roof = π r √(r² + h²),  h = D/12   (m², r in m)
//! A_TTS  = A_sh + A_roof               (m²)
//! A_TWS  = min(A_sh, A_sh at 9 144 mm) (m², wetted area capped at 30 ft)
//! R_in   = 1 / (1 + U_i·t/k)           (fully insulated)
//! R_inp  = (A_inp/A_TTS)·R_in + (1 - A_inp/A_TTS)
//! ```
//!
//! Everything here is a pure function of [`CalculationInput`]; the derived
//! struct is recomputed per calculation and never cached.

use serde::{Deserialize, Serialize};

use crate::errors::{VentError, VentResult};
use crate::tank::{CalculationInput, Insulation, TankConfiguration};

/// Maximum shell height exposed to fire (mm, 30 ft).
pub const MAX_WETTED_HEIGHT_MM: f64 = 9_144.0;

/// Cone roof rise per unit of run (1:12 slope).
const ROOF_SLOPE: f64 = 1.0 / 12.0;

/// Maximum tank volume (m³) for a cylinder of `diameter_mm` × `height_mm`.
pub fn max_tank_volume(diameter_mm: f64, height_mm: f64) -> f64 {
    std::f64::consts::PI * (diameter_mm / 2.0).powi(2) * height_mm / 1e9
}

/// Cylindrical shell surface area (m²).
pub fn shell_surface_area(diameter_mm: f64, height_mm: f64) -> f64 {
    std::f64::consts::PI * diameter_mm * height_mm / 1e6
}

/// Cone roof surface area (m²) for a 1:12 roof slope.
pub fn cone_roof_area(diameter_mm: f64) -> f64 {
    let radius_m = diameter_mm / 2.0 / 1000.0;
    let rise_m = diameter_mm * ROOF_SLOPE / 1000.0;
    let slant_m = (radius_m.powi(2) + rise_m.powi(2)).sqrt();
    std::f64::consts::PI * radius_m * slant_m
}

/// Total tank surface area: shell plus cone roof (m²).
pub fn total_surface_area(diameter_mm: f64, height_mm: f64) -> f64 {
    shell_surface_area(diameter_mm, height_mm) + cone_roof_area(diameter_mm)
}

/// Wetted area exposed to fire (m²), capping the exposed shell height at
/// [`MAX_WETTED_HEIGHT_MM`].
pub fn wetted_area(diameter_mm: f64, height_mm: f64) -> f64 {
    shell_surface_area(diameter_mm, height_mm)
        .min(shell_surface_area(diameter_mm, MAX_WETTED_HEIGHT_MM))
}

/// Thermal reduction factor R_in for a fully insulated tank.
///
/// Tends to 1 as thickness approaches zero and to 0 as the insulation
/// thickens.
pub fn fully_insulated_reduction(
    heat_transfer_coefficient_w_m2k: f64,
    thickness_mm: f64,
    conductivity_w_mk: f64,
) -> f64 {
    1.0 / (1.0 + heat_transfer_coefficient_w_m2k * (thickness_mm / 1000.0) / conductivity_w_mk)
}

/// Thermal reduction factor R_inp for a partially insulated tank:
/// area-weighted blend between R_in and bare metal.
///
/// Rejects a zero total surface area with [`VentError::DivisionByZero`].
pub fn partially_insulated_reduction(
    total_surface_area_m2: f64,
    insulated_area_m2: f64,
    r_in: f64,
) -> VentResult<f64> {
    if total_surface_area_m2 == 0.0 {
        return Err(VentError::division_by_zero(
            "partial insulation reduction factor (total surface area)",
        ));
    }
    let fraction = insulated_area_m2 / total_surface_area_m2;
    Ok(fraction * r_in + (1.0 - fraction))
}

/// Geometric quantities derived once per calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_volume_m3": 7916.81,
///   "shell_area_m2": 1319.47,
///   "cone_roof_area_m2": 458.63,
///   "total_surface_area_m2": 1778.10,
///   "wetted_area_m2": 689.44,
///   "reduction_factor": 1.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedGeometry {
    /// Maximum tank volume (m³)
    pub max_volume_m3: f64,

    /// Shell surface area (m²)
    pub shell_area_m2: f64,

    /// Cone roof area (m²)
    pub cone_roof_area_m2: f64,

    /// Total surface area: shell + roof (m²)
    pub total_surface_area_m2: f64,

    /// Wetted area exposed to fire, height-capped (m²)
    pub wetted_area_m2: f64,

    /// Thermal venting reduction factor, 1.0 for non-insulated tanks
    pub reduction_factor: f64,
}

impl DerivedGeometry {
    /// Derive all geometric quantities from a calculation input.
    ///
    /// Insulated configurations must carry their insulation parameters;
    /// missing ones are rejected with [`VentError::MissingInsulationParams`]
    /// or [`VentError::MissingPartialArea`].
    pub fn derive(input: &CalculationInput) -> VentResult<DerivedGeometry> {
        let max_volume_m3 = max_tank_volume(input.diameter_mm, input.height_mm);
        let shell_area_m2 = shell_surface_area(input.diameter_mm, input.height_mm);
        let cone_roof_area_m2 = cone_roof_area(input.diameter_mm);
        let total_surface_area_m2 = shell_area_m2 + cone_roof_area_m2;
        let wetted_area_m2 = wetted_area(input.diameter_mm, input.height_mm);

        let reduction_factor = match &input.configuration {
            TankConfiguration::FullyInsulated { insulation } => {
                r_in_from_params(&input.configuration, insulation)?
            }
            TankConfiguration::PartiallyInsulated {
                insulation,
                insulated_area_m2,
            } => {
                let r_in = r_in_from_params(&input.configuration, insulation)?;
                let insulated_area = (*insulated_area_m2).ok_or(VentError::MissingPartialArea)?;
                partially_insulated_reduction(total_surface_area_m2, insulated_area, r_in)?
            }
            _ => 1.0,
        };

        Ok(DerivedGeometry {
            max_volume_m3,
            shell_area_m2,
            cone_roof_area_m2,
            total_surface_area_m2,
            wetted_area_m2,
            reduction_factor,
        })
    }
}

fn r_in_from_params(
    configuration: &TankConfiguration,
    insulation: &Insulation,
) -> VentResult<f64> {
    let u_i = insulation.heat_transfer_coefficient_w_m2k.ok_or_else(|| {
        VentError::missing_insulation(
            configuration.display_name(),
            "heat_transfer_coefficient_w_m2k",
        )
    })?;
    let thickness = insulation.thickness_mm.ok_or_else(|| {
        VentError::missing_insulation(configuration.display_name(), "thickness_mm")
    })?;
    let conductivity = insulation.conductivity_w_mk.ok_or_else(|| {
        VentError::missing_insulation(configuration.display_name(), "conductivity_w_mk")
    })?;
    Ok(fully_insulated_reduction(u_i, thickness, conductivity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluids::FluidProperties;
    use crate::tank::Edition;

    fn input_with(configuration: TankConfiguration) -> CalculationInput {
        CalculationInput {
            label: "TK-1".to_string(),
            diameter_mm: 24_000.0,
            height_mm: 17_500.0,
            latitude_deg: 12.7,
            design_pressure_kpag: 2.5,
            configuration,
            fluid: FluidProperties::default(),
            incoming: vec![],
            outgoing: vec![],
            drain: None,
            edition: Edition::Seventh,
        }
    }

    fn full_insulation() -> Insulation {
        Insulation {
            conductivity_w_mk: Some(0.05),
            thickness_mm: Some(100.0),
            heat_transfer_coefficient_w_m2k: Some(4.0),
        }
    }

    #[test]
    fn test_reference_case_geometry() {
        // D = 24 000 mm, H = 17 500 mm
        let geometry = DerivedGeometry::derive(&input_with(TankConfiguration::BareMetal)).unwrap();
        assert!((geometry.max_volume_m3 - 7_916.81).abs() < 0.1);
        assert!((geometry.shell_area_m2 - 1_319.47).abs() < 0.01);
        assert!((geometry.cone_roof_area_m2 - 458.63).abs() < 0.01);
        assert!((geometry.wetted_area_m2 - 689.44).abs() < 0.01);
        assert_eq!(geometry.reduction_factor, 1.0);
    }

    #[test]
    fn test_volume_scales_with_d_squared_and_h() {
        let base = max_tank_volume(10_000.0, 5_000.0);
        assert!((max_tank_volume(20_000.0, 5_000.0) - 4.0 * base).abs() < 1e-9);
        assert!((max_tank_volume(10_000.0, 10_000.0) - 2.0 * base).abs() < 1e-9);
    }

    #[test]
    fn test_wetted_area_cap() {
        // Below the cap the wetted area equals the shell area
        assert_eq!(
            wetted_area(12_000.0, 9_000.0),
            shell_surface_area(12_000.0, 9_000.0)
        );
        assert_eq!(
            wetted_area(12_000.0, MAX_WETTED_HEIGHT_MM),
            shell_surface_area(12_000.0, MAX_WETTED_HEIGHT_MM)
        );
        // Above it the exposed height is constant
        assert_eq!(
            wetted_area(12_000.0, 25_000.0),
            shell_surface_area(12_000.0, MAX_WETTED_HEIGHT_MM)
        );
    }

    #[test]
    fn test_r_in_range() {
        // Zero thickness: no reduction
        assert_eq!(fully_insulated_reduction(4.0, 0.0, 0.05), 1.0);
        // Positive thickness: strictly inside (0, 1)
        let r = fully_insulated_reduction(4.0, 100.0, 0.05);
        assert!(r > 0.0 && r < 1.0);
        // 1 / (1 + 4·0.1/0.05) = 1/9
        assert!((r - 1.0 / 9.0).abs() < 1e-12);
        // Thick insulation tends to zero
        assert!(fully_insulated_reduction(4.0, 1e9, 0.05) < 1e-6);
    }

    #[test]
    fn test_r_inp_boundaries() {
        let r_in = 0.2;
        // No insulated area: bare metal
        assert_eq!(
            partially_insulated_reduction(1000.0, 0.0, r_in).unwrap(),
            1.0
        );
        // Fully covered: R_in
        let r = partially_insulated_reduction(1000.0, 1000.0, r_in).unwrap();
        assert!((r - r_in).abs() < 1e-12);
        // Halfway: midpoint of R_in and 1
        let r = partially_insulated_reduction(1000.0, 500.0, r_in).unwrap();
        assert!((r - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_r_inp_zero_area_rejected() {
        let err = partially_insulated_reduction(0.0, 0.0, 0.5).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_derive_fully_insulated() {
        let geometry = DerivedGeometry::derive(&input_with(TankConfiguration::FullyInsulated {
            insulation: full_insulation(),
        }))
        .unwrap();
        assert!((geometry.reduction_factor - 1.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_derive_rejects_missing_insulation_params() {
        let mut insulation = full_insulation();
        insulation.conductivity_w_mk = None;
        let err = DerivedGeometry::derive(&input_with(TankConfiguration::FullyInsulated {
            insulation,
        }))
        .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INSULATION_PARAMS");
    }

    #[test]
    fn test_derive_rejects_missing_partial_area() {
        let err = DerivedGeometry::derive(&input_with(TankConfiguration::PartiallyInsulated {
            insulation: full_insulation(),
            insulated_area_m2: None,
        }))
        .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PARTIAL_AREA");
    }

    #[test]
    fn test_derive_partial_reduction_between_r_in_and_one() {
        let geometry =
            DerivedGeometry::derive(&input_with(TankConfiguration::PartiallyInsulated {
                insulation: full_insulation(),
                insulated_area_m2: Some(800.0),
            }))
            .unwrap();
        assert!(geometry.reduction_factor > 1.0 / 9.0);
        assert!(geometry.reduction_factor < 1.0);
    }
}
