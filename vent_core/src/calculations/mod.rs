//! # Venting Calculations
//!
//! The calculation pipeline and its orchestrator. Each sub-module follows
//! the pattern:
//!
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, geometry) -> Result<*Result, VentError>` - Pure
//!   calculation function
//!
//! ## Pipeline
//!
//! ```text
//! calculate(input)
//! ├── DerivedGeometry::derive     volume, areas, reduction factor
//! ├── normal::calculate           process + thermal breathing per edition
//! ├── emergency::calculate        fire heat input and vent rate
//! ├── drain::drain_inbreathing    optional gravity-drain term
//! └── summary + warnings
//! ```
//!
//! Every step is a deterministic function of its arguments; errors from the
//! geometry and lookup layers propagate to the caller unchanged.

pub mod drain;
pub mod emergency;
pub mod normal;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::VentResult;
use crate::geometry::DerivedGeometry;
use crate::tables;
use crate::tank::{CalculationInput, Edition};

// Re-export commonly used types
pub use emergency::{EmergencyVentingResult, VentCoefficients};
pub use normal::{BreathingResult, NormalVentingResult};

/// The three governing design values a vent sizing is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VentingSummary {
    /// Design outbreathing: normal outbreathing total (Nm³/h)
    pub design_outbreathing_nm3_h: f64,

    /// Design inbreathing: the greater of normal inbreathing and drain
    /// inbreathing (Nm³/h)
    pub design_inbreathing_nm3_h: f64,

    /// Design emergency venting (Nm³/h)
    pub design_emergency_nm3_h: f64,
}

impl VentingSummary {
    /// The larger of the two normal-venting design values.
    pub fn governing_normal_nm3_h(&self) -> f64 {
        self.design_outbreathing_nm3_h.max(self.design_inbreathing_nm3_h)
    }
}

/// Conditions the caller should surface to the user alongside the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarnings {
    /// Tank capacity exceeds the 30 000 m³ covered by the normal vent
    /// table; tabulated values were clamped at the last row
    pub capacity_exceeds_table: bool,

    /// Environmental factor is zero (underground storage): no emergency
    /// venting requirement was computed
    pub zero_environmental_factor: bool,

    /// One or more fluid properties were unspecified and defaulted from
    /// Hexane
    pub hexane_defaults_applied: bool,
}

impl CalculationWarnings {
    /// Whether any warning fired.
    pub fn any(&self) -> bool {
        self.capacity_exceeds_table
            || self.zero_environmental_factor
            || self.hexane_defaults_applied
    }
}

/// Complete venting calculation results for one tank scenario.
///
/// Constructed once per [`calculate`] call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Derived tank geometry
    pub geometry: DerivedGeometry,

    /// Normal (thermal + process) venting
    pub normal: NormalVentingResult,

    /// Emergency (fire-exposure) venting
    pub emergency: EmergencyVentingResult,

    /// Drain-system inbreathing, when drain parameters were supplied (Nm³/h)
    pub drain_inbreathing_nm3_h: Option<f64>,

    /// Governing design values
    pub summary: VentingSummary,

    /// Conditions to surface to the user
    pub warnings: CalculationWarnings,

    /// Edition the calculation was performed under
    pub edition: Edition,

    /// When the calculation ran
    pub calculated_at: DateTime<Utc>,
}

impl CalculationResult {
    /// Format as a multi-line string for reports.
    pub fn format_report(&self) -> String {
        use crate::factors::api_ref;

        format!(
            "Venting Calculation ({})\n\
             ================================================\n\
             Max volume          = {:>10.1} m³\n\
             Shell area          = {:>10.1} m²\n\
             Cone roof area      = {:>10.1} m²\n\
             Wetted area         = {:>10.1} m²\n\
             Reduction factor    = {:>10.3}      {}\n\
             Outbreathing        = {:>10.1} Nm³/h (process {:.1}, thermal {:.1})  {}\n\
             Inbreathing         = {:>10.1} Nm³/h (process {:.1}, thermal {:.1})  {}\n\
             Heat input          = {:>10.0} W    {}\n\
             Environmental F     = {:>10.2}      {}\n\
             Emergency vent rate = {:>10.1} Nm³/h ({} basis)\n\
             ------------------------------------------------\n\
             Design outbreathing = {:>10.1} Nm³/h\n\
             Design inbreathing  = {:>10.1} Nm³/h\n\
             Design emergency    = {:>10.1} Nm³/h",
            self.edition,
            self.geometry.max_volume_m3,
            self.geometry.shell_area_m2,
            self.geometry.cone_roof_area_m2,
            self.geometry.wetted_area_m2,
            self.geometry.reduction_factor,
            api_ref::REDUCTION_FACTOR,
            self.normal.outbreathing.total_nm3_h,
            self.normal.outbreathing.process_flow_nm3_h,
            self.normal.outbreathing.thermal_flow_nm3_h,
            api_ref::THERMAL_OUTBREATHING,
            self.normal.inbreathing.total_nm3_h,
            self.normal.inbreathing.process_flow_nm3_h,
            self.normal.inbreathing.thermal_flow_nm3_h,
            api_ref::THERMAL_INBREATHING,
            self.emergency.heat_input_w,
            api_ref::EMERGENCY_HEAT_INPUT,
            self.emergency.environmental_factor,
            api_ref::ENVIRONMENTAL_FACTOR,
            self.emergency.vent_rate_nm3_h,
            self.emergency.reference_fluid,
            self.summary.design_outbreathing_nm3_h,
            self.summary.design_inbreathing_nm3_h,
            self.summary.design_emergency_nm3_h,
        )
    }
}

/// Run the full venting calculation for one tank scenario.
///
/// This is a pure function of its input: identical inputs produce
/// identical numeric results, and concurrent calls share no state. The
/// input is assumed well-formed (see
/// [`CalculationInput::validate`](crate::tank::CalculationInput::validate)
/// for the entry check the transport layer applies); missing conditional
/// parameters are still rejected here.
///
/// # Example
///
/// ```rust
/// use vent_core::calculations::calculate;
/// use vent_core::fluids::FluidProperties;
/// use vent_core::tank::{CalculationInput, Edition, OutgoingStream, TankConfiguration};
///
/// let input = CalculationInput {
///     label: "TK-101".to_string(),
///     diameter_mm: 24_000.0,
///     height_mm: 17_500.0,
///     latitude_deg: 12.7,
///     design_pressure_kpag: 2.5,
///     configuration: TankConfiguration::BareMetal,
///     fluid: FluidProperties::default(),
///     incoming: vec![],
///     outgoing: vec![OutgoingStream::new(368.9, "Transfer pump")],
///     drain: None,
///     edition: Edition::Seventh,
/// };
///
/// let result = calculate(&input).unwrap();
/// assert!(result.summary.design_inbreathing_nm3_h > 0.0);
/// ```
pub fn calculate(input: &CalculationInput) -> VentResult<CalculationResult> {
    let geometry = DerivedGeometry::derive(input)?;
    let normal = normal::calculate(input, &geometry)?;
    let emergency = emergency::calculate(input, &geometry)?;

    let drain_inbreathing_nm3_h = input
        .drain
        .map(|d| drain::drain_inbreathing(d.line_size_mm, d.max_height_above_drain_mm));

    let summary = VentingSummary {
        design_outbreathing_nm3_h: normal.outbreathing.total_nm3_h,
        design_inbreathing_nm3_h: normal
            .inbreathing
            .total_nm3_h
            .max(drain_inbreathing_nm3_h.unwrap_or(0.0)),
        design_emergency_nm3_h: emergency.vent_rate_nm3_h,
    };

    let warnings = CalculationWarnings {
        capacity_exceeds_table: geometry.max_volume_m3 > tables::NORMAL_VENT_TABLE_MAX_CAPACITY_M3,
        zero_environmental_factor: emergency.environmental_factor == 0.0,
        hexane_defaults_applied: input.fluid.uses_hexane_defaults(),
    };

    Ok(CalculationResult {
        geometry,
        normal,
        emergency,
        drain_inbreathing_nm3_h,
        summary,
        warnings,
        edition: input.edition,
        calculated_at: Utc::now(),
    })
}
