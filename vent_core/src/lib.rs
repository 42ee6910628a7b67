//! # vent_core - Tank Venting Calculation Engine
//!
//! `vent_core` computes required venting flow rates for atmospheric and
//! low-pressure storage tanks per API Std 2000 (5th/6th/7th editions):
//! normal venting (thermal plus process outbreathing/inbreathing),
//! emergency fire-exposure venting, and drain-system inbreathing. All
//! inputs and outputs are JSON-serializable, making it ideal for
//! integration behind HTTP services or AI assistants.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Deterministic**: Identical inputs always produce identical numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use vent_core::calculations::calculate;
//! use vent_core::fluids::FluidProperties;
//! use vent_core::tank::{CalculationInput, Edition, OutgoingStream, TankConfiguration};
//!
//! let input = CalculationInput {
//!     label: "TK-101".to_string(),
//!     diameter_mm: 24_000.0,
//!     height_mm: 17_500.0,
//!     latitude_deg: 12.7,
//!     design_pressure_kpag: 2.5,
//!     configuration: TankConfiguration::BareMetal,
//!     fluid: FluidProperties::default(),
//!     incoming: vec![],
//!     outgoing: vec![OutgoingStream::new(368.9, "Transfer pump")],
//!     drain: None,
//!     edition: Edition::Seventh,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("{}", result.format_report());
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Normal, emergency, and drain venting plus the
//!   orchestrator
//! - [`tank`] - Tank scenario inputs (geometry, configuration, streams)
//! - [`fluids`] - Stored fluid properties and the Hexane reference fluid
//! - [`geometry`] - Derived tank geometry and reduction factors
//! - [`factors`] - Y/C/F venting factors
//! - [`tables`] - Tabulated normal and emergency venting requirements
//! - [`interp`] - Shared table interpolation
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod factors;
pub mod fluids;
pub mod geometry;
pub mod interp;
pub mod tables;
pub mod tank;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalculationResult, VentingSummary};
pub use errors::{VentError, VentResult};
pub use geometry::DerivedGeometry;
pub use tank::{CalculationInput, Edition, TankConfiguration};
