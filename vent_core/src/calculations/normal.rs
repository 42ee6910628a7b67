//! # Normal Venting
//!
//! Outbreathing (liquid inflow + thermal expansion) and inbreathing
//! (liquid outflow + thermal contraction) per the governing edition.
//!
//! ## Edition rules
//!
//! | Edition | Process outbreathing | Process inbreathing | Thermal | Combine |
//! |---------|----------------------|---------------------|---------|---------|
//! | 5TH | 1.01×/2.02× incoming sum | 0.94× outgoing sum | tabulated × R | max(process, thermal) |
//! | 6TH | 1.0× incoming sum | 1.0× outgoing sum | Y·V^0.9·R / C·V^0.7·R | process + thermal |
//! | 7TH | 1.0× or 2.0× (VP > 5 kPa) | 1.0× outgoing sum | Y·V^0.9·R / C·V^0.7·R | process + thermal |
//!
//! The edition match below is the single branch point; the Y and C factors
//! are reported as 1 under the 5th edition, where they do not apply.

use serde::{Deserialize, Serialize};

use crate::errors::VentResult;
use crate::factors::LatitudeBand;
use crate::geometry::DerivedGeometry;
use crate::tables;
use crate::tank::{CalculationInput, Edition};

/// 5th-edition outbreathing per unit inflow, low-volatility products
const FIFTH_OUTBREATHING_LOW_VOLATILITY: f64 = 1.01;

/// 5th-edition outbreathing per unit inflow, volatile products
const FIFTH_OUTBREATHING_VOLATILE: f64 = 2.02;

/// 5th-edition inbreathing per unit outflow
const FIFTH_INBREATHING: f64 = 0.94;

/// 7th-edition vapour-pressure threshold above which the outbreathing
/// process term doubles (kPa)
const HIGH_VAPOUR_PRESSURE_KPA: f64 = 5.0;

/// One breathing direction (outbreathing or inbreathing).
///
/// ## JSON Example
///
/// ```json
/// {
///   "process_flow_nm3_h": 368.9,
///   "factor": 6.5,
///   "reduction_factor": 1.0,
///   "thermal_flow_nm3_h": 3482.7,
///   "total_nm3_h": 3851.6
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreathingResult {
    /// Process (liquid movement) venting requirement (Nm³/h)
    pub process_flow_nm3_h: f64,

    /// The thermal factor actually used: Y for outbreathing, C for
    /// inbreathing, 1 where the edition does not use one
    pub factor: f64,

    /// Insulation reduction factor applied to the thermal term
    pub reduction_factor: f64,

    /// Thermal venting requirement (Nm³/h)
    pub thermal_flow_nm3_h: f64,

    /// Governing total for this direction (Nm³/h)
    pub total_nm3_h: f64,
}

/// Normal venting requirements in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalVentingResult {
    /// Vapor pushed out of the tank
    pub outbreathing: BreathingResult,

    /// Air drawn into the tank
    pub inbreathing: BreathingResult,
}

/// Calculate normal venting requirements.
///
/// Pure function of the input and its derived geometry; the only failure
/// modes are empty static tables (a programming error).
pub fn calculate(
    input: &CalculationInput,
    geometry: &DerivedGeometry,
) -> VentResult<NormalVentingResult> {
    let incoming_sum = input.total_incoming_m3_h();
    let outgoing_sum = input.total_outgoing_m3_h();
    let low_volatility = input.fluid.is_low_volatility();
    let volume = geometry.max_volume_m3;
    let r = geometry.reduction_factor;

    let (outbreathing, inbreathing) = match input.edition {
        Edition::Fifth => {
            let out_weight = if low_volatility {
                FIFTH_OUTBREATHING_LOW_VOLATILITY
            } else {
                FIFTH_OUTBREATHING_VOLATILE
            };
            let out_process = out_weight * incoming_sum;
            let out_thermal = tables::thermal_outbreathing_5th(volume, low_volatility)? * r;
            let in_process = FIFTH_INBREATHING * outgoing_sum;
            let in_thermal = tables::thermal_inbreathing_5th(volume)? * r;
            (
                BreathingResult {
                    process_flow_nm3_h: out_process,
                    factor: 1.0,
                    reduction_factor: r,
                    thermal_flow_nm3_h: out_thermal,
                    total_nm3_h: out_process.max(out_thermal),
                },
                BreathingResult {
                    process_flow_nm3_h: in_process,
                    factor: 1.0,
                    reduction_factor: r,
                    thermal_flow_nm3_h: in_thermal,
                    total_nm3_h: in_process.max(in_thermal),
                },
            )
        }
        Edition::Sixth | Edition::Seventh => {
            let band = LatitudeBand::from_latitude(input.latitude_deg);
            let y = band.y_factor();
            let c = band.c_factor(low_volatility, volume);

            let out_weight = if input.edition == Edition::Seventh
                && input.fluid.vapour_pressure_kpa > HIGH_VAPOUR_PRESSURE_KPA
            {
                2.0
            } else {
                1.0
            };
            let out_process = out_weight * incoming_sum;
            let out_thermal = y * volume.powf(0.9) * r;
            let in_process = outgoing_sum;
            let in_thermal = c * volume.powf(0.7) * r;
            (
                BreathingResult {
                    process_flow_nm3_h: out_process,
                    factor: y,
                    reduction_factor: r,
                    thermal_flow_nm3_h: out_thermal,
                    total_nm3_h: out_process + out_thermal,
                },
                BreathingResult {
                    process_flow_nm3_h: in_process,
                    factor: c,
                    reduction_factor: r,
                    thermal_flow_nm3_h: in_thermal,
                    total_nm3_h: in_process + in_thermal,
                },
            )
        }
    };

    Ok(NormalVentingResult {
        outbreathing,
        inbreathing,
    })
}
