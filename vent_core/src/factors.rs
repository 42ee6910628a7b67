//! # API 2000 Venting Factors
//!
//! Thermal venting factors (Y, C), the insulation conductance factor, and
//! the fire-exposure environmental factor F per API Std 2000.
//!
//! ## Factor Summary
//!
//! | Factor | Description                     | Typical Values |
//! |--------|---------------------------------|----------------|
//! | Y      | Thermal outbreathing, latitude  | 0.20 - 0.32    |
//! | C      | Thermal inbreathing, latitude   | 2.5 - 6.5      |
//! | F_ins  | Insulated-tank conductance      | 0.025 - 0.300  |
//! | F      | Environmental (fire mitigation) | 0 - 1.0        |
//!
//! The Y and C factors are step functions of latitude band; the insulation
//! factor interpolates a conductance table; the environmental factor is a
//! constant per tank configuration except for the insulated variants, which
//! delegate to the conductance table.

use serde::{Deserialize, Serialize};

use crate::errors::{VentError, VentResult};
use crate::interp::interpolate;
use crate::tank::TankConfiguration;

// ============================================================================
// API 2000 Section References
// ============================================================================

/// API Std 2000 section references for venting factors and formulas.
///
/// These constants provide traceable references for reports.
pub mod api_ref {
    /// Thermal outbreathing formula (Y factor)
    pub const THERMAL_OUTBREATHING: &str = "API 2000 4.3.2.2";
    /// Thermal inbreathing formula (C factor)
    pub const THERMAL_INBREATHING: &str = "API 2000 4.3.2.3";
    /// C-factor table
    pub const C_FACTOR: &str = "API 2000 Table 2";
    /// Y-factor table
    pub const Y_FACTOR: &str = "API 2000 Table 3";
    /// 5th-edition tabulated normal venting
    pub const NORMAL_VENT_TABLE: &str = "API 2000 5th Ed. Table 2B";
    /// Emergency venting heat input and coefficients
    pub const EMERGENCY_HEAT_INPUT: &str = "API 2000 4.4.2";
    /// Emergency vent capacity table
    pub const EMERGENCY_VENT_TABLE: &str = "API 2000 5th Ed. Table 3B";
    /// Environmental factor table
    pub const ENVIRONMENTAL_FACTOR: &str = "API 2000 Table 6";
    /// Insulation reduction factor
    pub const REDUCTION_FACTOR: &str = "API 2000 4.3.2.4";
}

/// C-factor capacity threshold: small tanks use the low-volatility column
/// regardless of the stored product (m³)
pub const C_FACTOR_SMALL_CAPACITY_M3: f64 = 25.0;

/// Latitude band per the thermal-venting factor tables.
///
/// Band boundaries are inclusive on the lower band: a site at exactly 42°
/// is in the below-42 band, at exactly 58° in the middle band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatitudeBand {
    /// Below 42°
    Below42,
    /// Between 42° and 58°
    Between42And58,
    /// Above 58°
    Above58,
}

impl LatitudeBand {
    /// All bands for UI selection
    pub const ALL: [LatitudeBand; 3] = [
        LatitudeBand::Below42,
        LatitudeBand::Between42And58,
        LatitudeBand::Above58,
    ];

    /// Classify a site latitude (degrees).
    pub fn from_latitude(latitude_deg: f64) -> Self {
        if latitude_deg <= 42.0 {
            LatitudeBand::Below42
        } else if latitude_deg <= 58.0 {
            LatitudeBand::Between42And58
        } else {
            LatitudeBand::Above58
        }
    }

    /// Thermal outbreathing Y-factor.
    pub fn y_factor(&self) -> f64 {
        match self {
            LatitudeBand::Below42 => 0.32,
            LatitudeBand::Between42And58 => 0.25,
            LatitudeBand::Above58 => 0.20,
        }
    }

    /// Thermal inbreathing C-factor.
    ///
    /// Low-volatility products and small tanks (capacity below 25 m³) use
    /// the hexane column; everything else uses the volatile column.
    pub fn c_factor(&self, low_volatility: bool, capacity_m3: f64) -> f64 {
        let hexane_column = low_volatility || capacity_m3 < C_FACTOR_SMALL_CAPACITY_M3;
        match (self, hexane_column) {
            (LatitudeBand::Below42, true) => 4.0,
            (LatitudeBand::Below42, false) => 6.5,
            (LatitudeBand::Between42And58, true) => 3.0,
            (LatitudeBand::Between42And58, false) => 5.0,
            (LatitudeBand::Above58, true) => 2.5,
            (LatitudeBand::Above58, false) => 4.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LatitudeBand::Below42 => "Below 42°",
            LatitudeBand::Between42And58 => "42° to 58°",
            LatitudeBand::Above58 => "Above 58°",
        }
    }
}

impl std::fmt::Display for LatitudeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Environmental factor table for insulated tanks:
/// thermal conductance (W/m²·K) to F.
///
/// Clamps below 1.9 W/m²·K to 0.025 and above 22.7 W/m²·K to 0.300.
const INSULATION_CONDUCTANCE_F: [(f64, f64); 7] = [
    (1.9, 0.025),
    (3.8, 0.05),
    (5.7, 0.075),
    (7.6, 0.1),
    (11.4, 0.15),
    (15.1, 0.2),
    (22.7, 0.3),
];

/// Environmental factor for an insulated tank from its insulation
/// conductance (conductivity / thickness).
///
/// # Arguments
///
/// * `conductivity_w_mk` - insulation thermal conductivity (W/m·K)
/// * `thickness_mm` - insulation thickness (mm)
pub fn insulated_environmental_factor(
    conductivity_w_mk: f64,
    thickness_mm: f64,
) -> VentResult<f64> {
    let conductance = conductivity_w_mk / (thickness_mm / 1000.0);
    interpolate(
        &INSULATION_CONDUCTANCE_F,
        conductance,
        "insulation conductance",
    )
}

/// Fire-exposure environmental factor F for a tank configuration.
///
/// Constant per configuration, except the insulated variants which delegate
/// to the conductance table and reject missing conductivity or thickness
/// with [`VentError::MissingParameter`].
pub fn environmental_factor(configuration: &TankConfiguration) -> VentResult<f64> {
    match configuration {
        TankConfiguration::BareMetal
        | TankConfiguration::WaterApplication
        | TankConfiguration::Depressuring => Ok(1.0),
        TankConfiguration::Underground => Ok(0.0),
        TankConfiguration::ConcreteCovered | TankConfiguration::EarthCovered => Ok(0.03),
        TankConfiguration::Impoundment => Ok(0.5),
        TankConfiguration::ImpoundmentAway => Ok(0.3),
        TankConfiguration::FullyInsulated { insulation }
        | TankConfiguration::PartiallyInsulated { insulation, .. } => {
            let conductivity = insulation.conductivity_w_mk.ok_or_else(|| {
                VentError::missing_parameter("conductivity_w_mk", configuration.display_name())
            })?;
            let thickness = insulation.thickness_mm.ok_or_else(|| {
                VentError::missing_parameter("thickness_mm", configuration.display_name())
            })?;
            insulated_environmental_factor(conductivity, thickness)
        }
    }
}
