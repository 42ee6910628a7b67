//! # Tank Scenario Inputs
//!
//! The tank-side data model: standard edition, tank configuration (siting /
//! insulation / fire mitigation), liquid movement streams, optional drain
//! system, and the [`CalculationInput`] root object handed to
//! [`crate::calculations::calculate`].
//!
//! ## Configuration Variants
//!
//! The tank configuration is a tagged union with one variant per case the
//! standard distinguishes. Insulation parameters are only reachable on the
//! two insulated variants, so non-insulated configurations cannot produce
//! missing-parameter errors at all. The insulated variants carry `Option`
//! fields because user input arrives untyped; they are checked at
//! calculation time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{VentError, VentResult};
use crate::fluids::FluidProperties;

/// API Std 2000 edition governing the calculation rules.
///
/// The three editions differ materially: the 5th edition takes the greater
/// of process and thermal flow using tabulated thermal values, while the
/// 6th and 7th editions sum process and thermal flow using the latitude
/// factor formulas. The 7th edition additionally weights outbreathing by
/// vapour pressure and flattens the emergency coefficient table above
/// 93 m².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Edition {
    /// 5th edition (1998): tabulated thermal venting, max-combination
    #[serde(rename = "5TH")]
    Fifth,
    /// 6th edition (2009, ISO 28300): latitude formulas, sum-combination
    #[serde(rename = "6TH")]
    Sixth,
    /// 7th edition (2014): latitude formulas with vapour-pressure weighting
    #[default]
    #[serde(rename = "7TH")]
    Seventh,
}

impl Edition {
    /// All editions for UI selection
    pub const ALL: [Edition; 3] = [Edition::Fifth, Edition::Sixth, Edition::Seventh];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Edition::Fifth => "API 2000 5th Ed.",
            Edition::Sixth => "API 2000 6th Ed.",
            Edition::Seventh => "API 2000 7th Ed.",
        }
    }
}

impl std::fmt::Display for Edition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Insulation parameters for the insulated tank configurations.
///
/// All fields are optional at the type level; the calculation rejects an
/// insulated configuration whose required fields are absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insulation {
    /// Thermal conductivity of the insulation (W/m·K)
    pub conductivity_w_mk: Option<f64>,

    /// Insulation thickness (mm)
    pub thickness_mm: Option<f64>,

    /// Inside heat-transfer coefficient U_i (W/m²·K), used by the thermal
    /// reduction factor
    pub heat_transfer_coefficient_w_m2k: Option<f64>,
}

/// Tank configuration: siting, covering, insulation, and fire mitigation.
///
/// Selects the environmental factor F for emergency venting and the
/// reduction factor treatment for normal thermal venting.
///
/// ## JSON Examples
///
/// ```json
/// { "type": "BareMetal" }
/// ```
///
/// ```json
/// {
///   "type": "PartiallyInsulated",
///   "insulation": { "conductivity_w_mk": 0.05, "thickness_mm": 100.0,
///                   "heat_transfer_coefficient_w_m2k": 4.0 },
///   "insulated_area_m2": 800.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TankConfiguration {
    /// Bare metal tank, no mitigation: F = 1.0
    BareMetal,
    /// Insulation over the full wetted surface: F from the conductance
    /// table, thermal reduction factor R_in
    FullyInsulated { insulation: Insulation },
    /// Insulation over part of the surface: F from the conductance table,
    /// area-weighted thermal reduction factor R_inp
    PartiallyInsulated {
        insulation: Insulation,
        /// Insulated portion of the total surface area (m²)
        insulated_area_m2: Option<f64>,
    },
    /// Concrete covering: F = 0.03
    ConcreteCovered,
    /// Water application (spray/deluge) facilities: F = 1.0
    WaterApplication,
    /// Depressuring and emptying facilities: F = 1.0
    Depressuring,
    /// Underground storage: F = 0
    Underground,
    /// Earth-covered storage above grade: F = 0.03
    EarthCovered,
    /// Impoundment below the tank: F = 0.5
    Impoundment,
    /// Impoundment with drainage away from the tank: F = 0.3
    ImpoundmentAway,
}

impl TankConfiguration {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            TankConfiguration::BareMetal => "Bare metal tank",
            TankConfiguration::FullyInsulated { .. } => "Fully insulated tank",
            TankConfiguration::PartiallyInsulated { .. } => "Partially insulated tank",
            TankConfiguration::ConcreteCovered => "Concrete-covered tank",
            TankConfiguration::WaterApplication => "Water application facilities",
            TankConfiguration::Depressuring => "Depressuring and emptying facilities",
            TankConfiguration::Underground => "Underground storage",
            TankConfiguration::EarthCovered => "Earth-covered storage",
            TankConfiguration::Impoundment => "Impoundment below tank",
            TankConfiguration::ImpoundmentAway => "Impoundment away from tank",
        }
    }

    /// Whether this configuration carries insulation parameters.
    pub fn is_insulated(&self) -> bool {
        matches!(
            self,
            TankConfiguration::FullyInsulated { .. } | TankConfiguration::PartiallyInsulated { .. }
        )
    }

    /// Insulation parameters, if this configuration has them.
    pub fn insulation(&self) -> Option<&Insulation> {
        match self {
            TankConfiguration::FullyInsulated { insulation }
            | TankConfiguration::PartiallyInsulated { insulation, .. } => Some(insulation),
            _ => None,
        }
    }
}

impl std::fmt::Display for TankConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A liquid stream entering the tank (drives outbreathing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingStream {
    /// Stable identifier for UI round-trips
    pub id: Uuid,

    /// Maximum liquid inflow rate (m³/h)
    pub flowrate_m3_h: f64,
}

impl IncomingStream {
    /// Create a stream with a fresh id.
    pub fn new(flowrate_m3_h: f64) -> Self {
        IncomingStream {
            id: Uuid::new_v4(),
            flowrate_m3_h,
        }
    }
}

/// A liquid stream leaving the tank (drives inbreathing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingStream {
    /// Stable identifier for UI round-trips
    pub id: Uuid,

    /// Maximum liquid outflow rate (m³/h)
    pub flowrate_m3_h: f64,

    /// Free-text description (e.g. "Pump-out to loading bay")
    #[serde(default)]
    pub description: String,
}

impl OutgoingStream {
    /// Create a stream with a fresh id.
    pub fn new(flowrate_m3_h: f64, description: impl Into<String>) -> Self {
        OutgoingStream {
            id: Uuid::new_v4(),
            flowrate_m3_h,
            description: description.into(),
        }
    }
}

/// Gravity drain system parameters.
///
/// Both fields are required together; the whole struct is optional on the
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrainParameters {
    /// Drain line internal diameter (mm)
    pub line_size_mm: f64,

    /// Maximum liquid height above the drain outlet (mm)
    pub max_height_above_drain_mm: f64,
}

/// Input parameters describing one tank venting scenario.
///
/// This is an immutable value object: the engine reads it and never mutates
/// it, so concurrent calculations over shared inputs are safe.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "TK-101",
///   "diameter_mm": 24000.0,
///   "height_mm": 17500.0,
///   "latitude_deg": 12.7,
///   "design_pressure_kpag": 2.5,
///   "configuration": { "type": "BareMetal" },
///   "fluid": {
///     "storage_temperature_c": 20.0,
///     "vapour_pressure_kpa": 0.0,
///     "volatility": { "basis": "FP", "value_c": null }
///   },
///   "incoming": [],
///   "outgoing": [
///     { "id": "00000000-0000-0000-0000-000000000001",
///       "flowrate_m3_h": 368.9, "description": "Transfer pump" }
///   ],
///   "drain": null,
///   "edition": "7TH"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// User label for this tank (e.g. "TK-101")
    pub label: String,

    /// Tank shell inside diameter (mm)
    pub diameter_mm: f64,

    /// Tank shell height (mm)
    pub height_mm: f64,

    /// Site latitude (degrees, 0 exclusive to 90 inclusive)
    pub latitude_deg: f64,

    /// Tank design pressure (kPa gauge)
    pub design_pressure_kpag: f64,

    /// Tank configuration (siting, insulation, fire mitigation)
    pub configuration: TankConfiguration,

    /// Stored fluid properties
    pub fluid: FluidProperties,

    /// Liquid streams into the tank
    #[serde(default)]
    pub incoming: Vec<IncomingStream>,

    /// Liquid streams out of the tank
    #[serde(default)]
    pub outgoing: Vec<OutgoingStream>,

    /// Gravity drain system, if fitted
    #[serde(default)]
    pub drain: Option<DrainParameters>,

    /// Governing standard edition
    pub edition: Edition,
}

impl CalculationInput {
    /// Sum of incoming liquid flow (m³/h) — the outbreathing process driver.
    pub fn total_incoming_m3_h(&self) -> f64 {
        self.incoming.iter().map(|s| s.flowrate_m3_h).sum()
    }

    /// Sum of outgoing liquid flow (m³/h) — the inbreathing process driver.
    pub fn total_outgoing_m3_h(&self) -> f64 {
        self.outgoing.iter().map(|s| s.flowrate_m3_h).sum()
    }

    /// Validate input parameters.
    ///
    /// This is the entry check for the transport/validation layer. The
    /// calculation pipeline itself assumes a well-formed input and does not
    /// call it.
    pub fn validate(&self) -> VentResult<()> {
        if self.diameter_mm <= 0.0 {
            return Err(VentError::invalid_input(
                "diameter_mm",
                self.diameter_mm.to_string(),
                "Tank diameter must be positive",
            ));
        }
        if self.height_mm <= 0.0 {
            return Err(VentError::invalid_input(
                "height_mm",
                self.height_mm.to_string(),
                "Tank height must be positive",
            ));
        }
        if self.design_pressure_kpag <= 0.0 {
            return Err(VentError::invalid_input(
                "design_pressure_kpag",
                self.design_pressure_kpag.to_string(),
                "Design pressure must be positive",
            ));
        }
        if self.latitude_deg <= 0.0 || self.latitude_deg > 90.0 {
            return Err(VentError::invalid_input(
                "latitude_deg",
                self.latitude_deg.to_string(),
                "Latitude must be in (0, 90]",
            ));
        }
        for stream in &self.incoming {
            if stream.flowrate_m3_h < 0.0 {
                return Err(VentError::invalid_input(
                    "incoming.flowrate_m3_h",
                    stream.flowrate_m3_h.to_string(),
                    "Flowrates must be non-negative",
                ));
            }
        }
        for stream in &self.outgoing {
            if stream.flowrate_m3_h < 0.0 {
                return Err(VentError::invalid_input(
                    "outgoing.flowrate_m3_h",
                    stream.flowrate_m3_h.to_string(),
                    "Flowrates must be non-negative",
                ));
            }
        }
        if let Some(drain) = &self.drain {
            if drain.line_size_mm < 0.0 {
                return Err(VentError::invalid_input(
                    "drain.line_size_mm",
                    drain.line_size_mm.to_string(),
                    "Drain line size must be non-negative",
                ));
            }
            if drain.max_height_above_drain_mm < 0.0 {
                return Err(VentError::invalid_input(
                    "drain.max_height_above_drain_mm",
                    drain.max_height_above_drain_mm.to_string(),
                    "Drain height must be non-negative",
                ));
            }
        }
        Ok(())
    }
}
