//! # Emergency Venting
//!
//! Fire-exposure venting: heat input from the wetted area, mitigation by
//! the environmental factor, and the required free-air vent rate.
//!
//! ## Heat-input coefficients
//!
//! `Q = a · A^n` (W) with `(a, n)` selected by wetted area and design
//! pressure:
//!
//! | Wetted area (m²) | Pressure (kPag) | a | n |
//! |---|---|---|---|
//! | < 18.6 | any | 63 150 | 1.0 |
//! | 18.6 – 93 | any | 224 200 | 0.566 |
//! | 93 – 260 | any | 630 400 | 0.338 |
//! | ≥ 260 | > 7 | 43 200 | 0.82 |
//! | ≥ 260 | ≤ 7 | 4 129 700 | 0 |
//!
//! The 7th edition keeps the 93–260 row for every larger area, so the
//! heat input keeps growing with area instead of capping.
//!
//! ## Vent rate
//!
//! The 7th edition always converts heat input with the general formula
//! `V = 906.6·Q·F / (1000·L) · √((T_r + 273.15)/M)`. Earlier editions use
//! the tabulated free-air flow (× F) up to 260 m² and, above that, the
//! standard's simplified Hexane expressions when the reference fluid is
//! Hexane.

use serde::{Deserialize, Serialize};

use crate::errors::VentResult;
use crate::factors::environmental_factor;
use crate::fluids::{ReferenceFluidTag, ResolvedReferenceFluid};
use crate::geometry::DerivedGeometry;
use crate::tables;
use crate::tank::{CalculationInput, Edition};

/// Wetted-area boundary below which heat input is linear in area (m²)
pub const SMALL_AREA_M2: f64 = 18.6;

/// Wetted-area boundary of the middle coefficient band (m²)
pub const MEDIUM_AREA_M2: f64 = 93.0;

/// Wetted-area boundary of the large-tank coefficient rows (m²)
pub const LARGE_AREA_M2: f64 = 260.0;

/// Design pressure separating the two large-area coefficient rows (kPag)
pub const HIGH_DESIGN_PRESSURE_KPAG: f64 = 7.0;

/// Simplified Hexane flow above 260 m² at low design pressure (Nm³/h)
const HEXANE_LARGE_AREA_FLOW_NM3_H: f64 = 19_910.0;

/// Simplified Hexane coefficient above 260 m² at high design pressure
const HEXANE_LARGE_AREA_COEFFICIENT: f64 = 208.2;

/// Heat-input coefficients `Q = a · A^n`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VentCoefficients {
    /// Coefficient a (W at unit area)
    pub a: f64,
    /// Exponent n
    pub n: f64,
}

/// Select the heat-input coefficients for a wetted area, design pressure,
/// and edition.
pub fn select_coefficients(
    wetted_area_m2: f64,
    design_pressure_kpag: f64,
    edition: Edition,
) -> VentCoefficients {
    if wetted_area_m2 < SMALL_AREA_M2 {
        VentCoefficients { a: 63_150.0, n: 1.0 }
    } else if wetted_area_m2 < MEDIUM_AREA_M2 {
        VentCoefficients {
            a: 224_200.0,
            n: 0.566,
        }
    } else if edition == Edition::Seventh || wetted_area_m2 < LARGE_AREA_M2 {
        // The 7th edition treats the 93-260 m² row as unbounded above.
        VentCoefficients {
            a: 630_400.0,
            n: 0.338,
        }
    } else if design_pressure_kpag > HIGH_DESIGN_PRESSURE_KPAG {
        VentCoefficients {
            a: 43_200.0,
            n: 0.82,
        }
    } else {
        VentCoefficients {
            a: 4_129_700.0,
            n: 0.0,
        }
    }
}

/// Emergency venting results.
///
/// ## JSON Example
///
/// ```json
/// {
///   "heat_input_w": 5741000.0,
///   "environmental_factor": 1.0,
///   "vent_rate_nm3_h": 28450.0,
///   "coefficients": { "a": 630400.0, "n": 0.338 },
///   "reference_fluid": "Hexane"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmergencyVentingResult {
    /// Fire heat input Q (W)
    pub heat_input_w: f64,

    /// Environmental factor F
    pub environmental_factor: f64,

    /// Required emergency vent rate (Nm³/h free air)
    pub vent_rate_nm3_h: f64,

    /// Heat-input coefficients used
    pub coefficients: VentCoefficients,

    /// Which fluid the vent-rate conversion used
    pub reference_fluid: ReferenceFluidTag,
}

/// Calculate emergency (fire-exposure) venting requirements.
///
/// Fails only when an insulated configuration is missing conductivity or
/// thickness for the environmental factor.
pub fn calculate(
    input: &CalculationInput,
    geometry: &DerivedGeometry,
) -> VentResult<EmergencyVentingResult> {
    let area = geometry.wetted_area_m2;
    let coefficients = select_coefficients(area, input.design_pressure_kpag, input.edition);
    let heat_input_w = coefficients.a * area.powf(coefficients.n);
    let f = environmental_factor(&input.configuration)?;
    let fluid = input.fluid.resolve_reference_fluid();

    let vent_rate_nm3_h = if input.edition == Edition::Seventh {
        general_vent_rate(heat_input_w, f, &fluid)
    } else if area <= tables::EMERGENCY_VENT_TABLE_MAX_AREA_M2 {
        f * tables::emergency_vent_flow(area)?
    } else if fluid.tag == ReferenceFluidTag::Hexane {
        if input.design_pressure_kpag <= HIGH_DESIGN_PRESSURE_KPAG {
            f * HEXANE_LARGE_AREA_FLOW_NM3_H
        } else {
            HEXANE_LARGE_AREA_COEFFICIENT * f * area.powf(0.82)
        }
    } else {
        general_vent_rate(heat_input_w, f, &fluid)
    };

    Ok(EmergencyVentingResult {
        heat_input_w,
        environmental_factor: f,
        vent_rate_nm3_h,
        coefficients,
        reference_fluid: fluid.tag,
    })
}

/// General vent-rate formula: free air equivalent of the vaporized product.
fn general_vent_rate(heat_input_w: f64, f: f64, fluid: &ResolvedReferenceFluid) -> f64 {
    906.6 * heat_input_w * f / (1000.0 * fluid.latent_heat_kj_kg)
        * ((fluid.relieving_temperature_c + 273.15) / fluid.molecular_mass_g_mol).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluids::FluidProperties;
    use crate::tank::{OutgoingStream, TankConfiguration};

    fn input_with(
        diameter_mm: f64,
        height_mm: f64,
        design_pressure_kpag: f64,
        edition: Edition,
        configuration: TankConfiguration,
    ) -> CalculationInput {
        CalculationInput {
            label: "TK-1".to_string(),
            diameter_mm,
            height_mm,
            latitude_deg: 12.7,
            design_pressure_kpag,
            configuration,
            fluid: FluidProperties::default(),
            incoming: vec![],
            outgoing: vec![OutgoingStream::new(368.9, "Transfer pump")],
            drain: None,
            edition,
        }
    }

    #[test]
    fn test_coefficient_step_function() {
        let c = select_coefficients(10.0, 2.0, Edition::Sixth);
        assert_eq!((c.a, c.n), (63_150.0, 1.0));
        let c = select_coefficients(50.0, 2.0, Edition::Sixth);
        assert_eq!((c.a, c.n), (224_200.0, 0.566));
        let c = select_coefficients(150.0, 2.0, Edition::Sixth);
        assert_eq!((c.a, c.n), (630_400.0, 0.338));
        let c = select_coefficients(300.0, 8.0, Edition::Sixth);
        assert_eq!((c.a, c.n), (43_200.0, 0.82));
        let c = select_coefficients(300.0, 7.0, Edition::Sixth);
        assert_eq!((c.a, c.n), (4_129_700.0, 0.0));
    }

    #[test]
    fn test_coefficient_boundaries() {
        let c = select_coefficients(18.6, 2.0, Edition::Sixth);
        assert_eq!((c.a, c.n), (224_200.0, 0.566));
        let c = select_coefficients(93.0, 2.0, Edition::Sixth);
        assert_eq!((c.a, c.n), (630_400.0, 0.338));
        let c = select_coefficients(260.0, 2.0, Edition::Sixth);
        assert_eq!((c.a, c.n), (4_129_700.0, 0.0));
    }

    #[test]
    fn test_seventh_edition_unbounded_middle_row() {
        let c = select_coefficients(300.0, 2.0, Edition::Seventh);
        assert_eq!((c.a, c.n), (630_400.0, 0.338));
        let c = select_coefficients(10_000.0, 20.0, Edition::Seventh);
        assert_eq!((c.a, c.n), (630_400.0, 0.338));
    }

    #[test]
    fn test_underground_tank_needs_no_emergency_venting() {
        let input = input_with(
            24_000.0,
            17_500.0,
            2.5,
            Edition::Seventh,
            TankConfiguration::Underground,
        );
        let geometry = DerivedGeometry::derive(&input).unwrap();
        let result = calculate(&input, &geometry).unwrap();
        assert_eq!(result.environmental_factor, 0.0);
        assert_eq!(result.vent_rate_nm3_h, 0.0);
    }

    #[test]
    fn test_general_formula_scales_with_f() {
        let bare = input_with(
            24_000.0,
            17_500.0,
            2.5,
            Edition::Seventh,
            TankConfiguration::BareMetal,
        );
        let impounded = input_with(
            24_000.0,
            17_500.0,
            2.5,
            Edition::Seventh,
            TankConfiguration::Impoundment,
        );
        let geometry = DerivedGeometry::derive(&bare).unwrap();
        let full = calculate(&bare, &geometry).unwrap();
        let half = calculate(&impounded, &geometry).unwrap();
        assert!((half.vent_rate_nm3_h - 0.5 * full.vent_rate_nm3_h).abs() < 1e-9);
        // Heat input itself is independent of F
        assert_eq!(half.heat_input_w, full.heat_input_w);
    }

    #[test]
    fn test_sixth_edition_table_path() {
        // D = 8 m, H = 4 m -> wetted area ~100.5 m², inside the table
        let input = input_with(
            8_000.0,
            4_000.0,
            2.5,
            Edition::Sixth,
            TankConfiguration::BareMetal,
        );
        let geometry = DerivedGeometry::derive(&input).unwrap();
        let result = calculate(&input, &geometry).unwrap();
        let expected = tables::emergency_vent_flow(geometry.wetted_area_m2).unwrap();
        assert_eq!(result.vent_rate_nm3_h, expected);
    }

    #[test]
    fn test_sixth_edition_hexane_large_area_low_pressure() {
        // Reference tank wetted area is 689 m², far above the table
        let input = input_with(
            24_000.0,
            17_500.0,
            2.5,
            Edition::Sixth,
            TankConfiguration::BareMetal,
        );
        let geometry = DerivedGeometry::derive(&input).unwrap();
        let result = calculate(&input, &geometry).unwrap();
        assert_eq!(result.reference_fluid, ReferenceFluidTag::Hexane);
        assert_eq!(result.vent_rate_nm3_h, 19_910.0);
    }

    #[test]
    fn test_sixth_edition_hexane_large_area_high_pressure() {
        let input = input_with(
            24_000.0,
            17_500.0,
            10.0,
            Edition::Sixth,
            TankConfiguration::BareMetal,
        );
        let geometry = DerivedGeometry::derive(&input).unwrap();
        let result = calculate(&input, &geometry).unwrap();
        let expected = 208.2 * geometry.wetted_area_m2.powf(0.82);
        assert!((result.vent_rate_nm3_h - expected).abs() < 1e-9);
    }

    #[test]
    fn test_sixth_edition_user_fluid_uses_general_formula() {
        let mut input = input_with(
            24_000.0,
            17_500.0,
            2.5,
            Edition::Sixth,
            TankConfiguration::BareMetal,
        );
        input.fluid.latent_heat_kj_kg = Some(400.0);
        input.fluid.relieving_temperature_c = Some(30.0);
        input.fluid.molecular_mass_g_mol = Some(44.1);
        let geometry = DerivedGeometry::derive(&input).unwrap();
        let result = calculate(&input, &geometry).unwrap();
        assert_eq!(result.reference_fluid, ReferenceFluidTag::UserDefined);
        let expected = 906.6 * result.heat_input_w / (1000.0 * 400.0)
            * ((30.0 + 273.15_f64) / 44.1).sqrt();
        assert!((result.vent_rate_nm3_h - expected).abs() < 1e-9);
    }

    #[test]
    fn test_seventh_edition_reference_case() {
        let input = input_with(
            24_000.0,
            17_500.0,
            2.5,
            Edition::Seventh,
            TankConfiguration::BareMetal,
        );
        let geometry = DerivedGeometry::derive(&input).unwrap();
        let result = calculate(&input, &geometry).unwrap();
        assert_eq!(result.reference_fluid, ReferenceFluidTag::Hexane);
        assert_eq!(result.coefficients.a, 630_400.0);
        // Q = 630 400 × 689.44^0.338 ≈ 5.74e6 W
        assert!((result.heat_input_w - 5.74e6).abs() < 0.02e6);
        assert!(result.vent_rate_nm3_h > 0.0);
    }
}
