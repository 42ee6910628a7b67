//! # Error Types
//!
//! Structured error types for vent_core. Every failure in the engine is a
//! deterministic, synchronous rejection of the input — there are no retries
//! and no partial results. The variants carry enough context for a transport
//! layer to map them to user-facing responses programmatically.
//!
//! ## Example
//!
//! ```rust
//! use vent_core::errors::{VentError, VentResult};
//!
//! fn validate_diameter(diameter_mm: f64) -> VentResult<()> {
//!     if diameter_mm <= 0.0 {
//!         return Err(VentError::invalid_input(
//!             "diameter_mm",
//!             diameter_mm.to_string(),
//!             "Tank diameter must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for vent_core operations
pub type VentResult<T> = Result<T, VentError>;

/// Structured error type for venting calculations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by the calling layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum VentError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    ///
    /// Raised by [`crate::tank::CalculationInput::validate`], never by the
    /// calculation pipeline itself.
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A lookup table is empty.
    ///
    /// This indicates a programming error in static table data, not bad
    /// user input.
    #[error("Lookup table '{table}' is empty")]
    EmptyTable { table: String },

    /// An insulated tank configuration is missing conductivity, thickness,
    /// or the inside heat-transfer coefficient.
    #[error("Insulated configuration '{configuration}' is missing parameter: {missing}")]
    MissingInsulationParams {
        configuration: String,
        missing: String,
    },

    /// A partially-insulated configuration is missing the insulated
    /// surface area.
    #[error("Partially insulated configuration is missing the insulated surface area")]
    MissingPartialArea,

    /// The environmental-factor lookup needs a parameter that was not
    /// supplied (conductivity and thickness for insulated tanks).
    #[error("Environmental factor for '{context}' requires parameter: {parameter}")]
    MissingParameter { parameter: String, context: String },

    /// A formula divided by zero (e.g. zero total surface area in the
    /// partial-insulation blend).
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },
}

impl VentError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        VentError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an EmptyTable error
    pub fn empty_table(table: impl Into<String>) -> Self {
        VentError::EmptyTable {
            table: table.into(),
        }
    }

    /// Create a MissingInsulationParams error
    pub fn missing_insulation(
        configuration: impl Into<String>,
        missing: impl Into<String>,
    ) -> Self {
        VentError::MissingInsulationParams {
            configuration: configuration.into(),
            missing: missing.into(),
        }
    }

    /// Create a MissingParameter error
    pub fn missing_parameter(
        parameter: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        VentError::MissingParameter {
            parameter: parameter.into(),
            context: context.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        VentError::DivisionByZero {
            context: context.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            VentError::InvalidInput { .. } => "INVALID_INPUT",
            VentError::EmptyTable { .. } => "EMPTY_TABLE",
            VentError::MissingInsulationParams { .. } => "MISSING_INSULATION_PARAMS",
            VentError::MissingPartialArea => "MISSING_PARTIAL_AREA",
            VentError::MissingParameter { .. } => "MISSING_PARAMETER",
            VentError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = VentError::invalid_input("latitude_deg", "95.0", "Latitude must be in (0, 90]");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: VentError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            VentError::empty_table("normal vent").error_code(),
            "EMPTY_TABLE"
        );
        assert_eq!(
            VentError::missing_insulation("FullyInsulated", "conductivity_w_mk").error_code(),
            "MISSING_INSULATION_PARAMS"
        );
        assert_eq!(
            VentError::MissingPartialArea.error_code(),
            "MISSING_PARTIAL_AREA"
        );
    }

    #[test]
    fn test_error_display() {
        let error = VentError::missing_parameter("thickness_mm", "FullyInsulated");
        assert!(error.to_string().contains("thickness_mm"));
    }
}
