//! # Stored Fluid Properties
//!
//! Fluid-side inputs to the venting calculations: volatility classification
//! for the normal-venting factors, and the latent-heat properties used by the
//! emergency (fire-exposure) vent-rate formula.
//!
//! ## Reference Fluid
//!
//! When latent heat, relieving temperature, and molecular mass are all left
//! unspecified, the emergency calculation falls back to n-Hexane, the
//! standard's reference fluid:
//!
//! | Property | Hexane default |
//! |---|---|
//! | Latent heat | 334.9 kJ/kg |
//! | Relieving temperature | 15.6 °C |
//! | Molecular mass | 86.17 g/mol |
//!
//! Any individually missing property still defaults from Hexane, but the
//! result is then tagged "User-defined" rather than "Hexane".

use serde::{Deserialize, Serialize};

/// Flash-point threshold for low-volatility service (°C)
pub const FLASH_POINT_LOW_VOLATILITY_C: f64 = 37.8;

/// Boiling-point threshold for low-volatility service (°C)
pub const BOILING_POINT_LOW_VOLATILITY_C: f64 = 149.0;

/// Hexane latent heat of vaporization (kJ/kg)
pub const HEXANE_LATENT_HEAT_KJ_KG: f64 = 334.9;

/// Hexane relieving temperature (°C)
pub const HEXANE_RELIEVING_TEMPERATURE_C: f64 = 15.6;

/// Hexane molecular mass (g/mol)
pub const HEXANE_MOLECULAR_MASS_G_MOL: f64 = 86.17;

/// Volatility classification basis for the stored product.
///
/// The standard classifies a product as low-volatility by its flash point
/// (≥ 37.8 °C) or, where the flash point is not meaningful, by its boiling
/// point (≥ 149 °C). An unknown value classifies as NOT low-volatility,
/// which is the conservative direction for outbreathing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", content = "value_c")]
pub enum VolatilityBasis {
    /// Classification by flash point (°C), if known
    #[serde(rename = "FP")]
    FlashPoint(Option<f64>),
    /// Classification by normal boiling point (°C), if known
    #[serde(rename = "BP")]
    BoilingPoint(Option<f64>),
}

impl Default for VolatilityBasis {
    fn default() -> Self {
        VolatilityBasis::FlashPoint(None)
    }
}

impl VolatilityBasis {
    /// Whether the product classifies as low-volatility.
    pub fn is_low_volatility(&self) -> bool {
        match self {
            VolatilityBasis::FlashPoint(Some(fp)) => *fp >= FLASH_POINT_LOW_VOLATILITY_C,
            VolatilityBasis::BoilingPoint(Some(bp)) => *bp >= BOILING_POINT_LOW_VOLATILITY_C,
            _ => false,
        }
    }
}

/// Properties of the stored fluid.
///
/// The optional latent-heat fields feed the emergency venting formula and
/// default from Hexane when unspecified (see module docs).
///
/// ## JSON Example
///
/// ```json
/// {
///   "storage_temperature_c": 25.0,
///   "vapour_pressure_kpa": 8.2,
///   "volatility": { "basis": "FP", "value_c": 12.0 },
///   "latent_heat_kj_kg": 410.0,
///   "relieving_temperature_c": 40.0,
///   "molecular_mass_g_mol": 58.12
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidProperties {
    /// Storage temperature (°C)
    pub storage_temperature_c: f64,

    /// True vapour pressure at storage temperature (kPa absolute)
    ///
    /// Drives the 7th-edition outbreathing weight: above 5.0 kPa the
    /// incoming-stream sum is doubled.
    pub vapour_pressure_kpa: f64,

    /// Volatility classification (flash point or boiling point)
    pub volatility: VolatilityBasis,

    /// Latent heat of vaporization at relieving conditions (kJ/kg)
    pub latent_heat_kj_kg: Option<f64>,

    /// Relieving temperature (°C)
    pub relieving_temperature_c: Option<f64>,

    /// Molecular mass of the vapour (g/mol)
    pub molecular_mass_g_mol: Option<f64>,
}

impl Default for FluidProperties {
    fn default() -> Self {
        FluidProperties {
            storage_temperature_c: 20.0,
            vapour_pressure_kpa: 0.0,
            volatility: VolatilityBasis::default(),
            latent_heat_kj_kg: None,
            relieving_temperature_c: None,
            molecular_mass_g_mol: None,
        }
    }
}

impl FluidProperties {
    /// Whether the product classifies as low-volatility.
    pub fn is_low_volatility(&self) -> bool {
        self.volatility.is_low_volatility()
    }

    /// Whether any of the emergency-venting fluid properties is
    /// unspecified (and would therefore default from Hexane).
    pub fn uses_hexane_defaults(&self) -> bool {
        self.latent_heat_kj_kg.is_none()
            || self.relieving_temperature_c.is_none()
            || self.molecular_mass_g_mol.is_none()
    }

    /// Resolve the fluid used by the emergency vent-rate formula.
    ///
    /// All three properties unspecified resolves to the Hexane reference
    /// fluid; otherwise any individually missing property still defaults
    /// from Hexane but the resolution is tagged user-defined.
    pub fn resolve_reference_fluid(&self) -> ResolvedReferenceFluid {
        let all_defaulted = self.latent_heat_kj_kg.is_none()
            && self.relieving_temperature_c.is_none()
            && self.molecular_mass_g_mol.is_none();

        ResolvedReferenceFluid {
            latent_heat_kj_kg: self.latent_heat_kj_kg.unwrap_or(HEXANE_LATENT_HEAT_KJ_KG),
            relieving_temperature_c: self
                .relieving_temperature_c
                .unwrap_or(HEXANE_RELIEVING_TEMPERATURE_C),
            molecular_mass_g_mol: self
                .molecular_mass_g_mol
                .unwrap_or(HEXANE_MOLECULAR_MASS_G_MOL),
            tag: if all_defaulted {
                ReferenceFluidTag::Hexane
            } else {
                ReferenceFluidTag::UserDefined
            },
        }
    }
}

/// Which fluid the emergency vent-rate formula ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceFluidTag {
    /// All three properties defaulted; the standard's Hexane basis applies
    Hexane,
    /// At least one property was supplied by the user
    #[serde(rename = "User-defined")]
    UserDefined,
}

impl ReferenceFluidTag {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            ReferenceFluidTag::Hexane => "Hexane",
            ReferenceFluidTag::UserDefined => "User-defined",
        }
    }
}

impl std::fmt::Display for ReferenceFluidTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The fluid properties actually used by the emergency formula, after
/// Hexane defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedReferenceFluid {
    /// Latent heat of vaporization (kJ/kg)
    pub latent_heat_kj_kg: f64,
    /// Relieving temperature (°C)
    pub relieving_temperature_c: f64,
    /// Molecular mass (g/mol)
    pub molecular_mass_g_mol: f64,
    /// Hexane or user-defined
    pub tag: ReferenceFluidTag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_point_classification() {
        assert!(VolatilityBasis::FlashPoint(Some(60.0)).is_low_volatility());
        assert!(VolatilityBasis::FlashPoint(Some(37.8)).is_low_volatility());
        assert!(!VolatilityBasis::FlashPoint(Some(12.0)).is_low_volatility());
        assert!(!VolatilityBasis::FlashPoint(None).is_low_volatility());
    }

    #[test]
    fn test_boiling_point_classification() {
        assert!(VolatilityBasis::BoilingPoint(Some(200.0)).is_low_volatility());
        assert!(VolatilityBasis::BoilingPoint(Some(149.0)).is_low_volatility());
        assert!(!VolatilityBasis::BoilingPoint(Some(68.7)).is_low_volatility());
        assert!(!VolatilityBasis::BoilingPoint(None).is_low_volatility());
    }

    #[test]
    fn test_all_unspecified_resolves_to_hexane() {
        let fluid = FluidProperties::default();
        let resolved = fluid.resolve_reference_fluid();
        assert_eq!(resolved.tag, ReferenceFluidTag::Hexane);
        assert_eq!(resolved.latent_heat_kj_kg, HEXANE_LATENT_HEAT_KJ_KG);
        assert_eq!(
            resolved.relieving_temperature_c,
            HEXANE_RELIEVING_TEMPERATURE_C
        );
        assert_eq!(resolved.molecular_mass_g_mol, HEXANE_MOLECULAR_MASS_G_MOL);
        assert!(fluid.uses_hexane_defaults());
    }

    #[test]
    fn test_partial_specification_is_user_defined() {
        let fluid = FluidProperties {
            latent_heat_kj_kg: Some(410.0),
            ..FluidProperties::default()
        };
        let resolved = fluid.resolve_reference_fluid();
        assert_eq!(resolved.tag, ReferenceFluidTag::UserDefined);
        assert_eq!(resolved.latent_heat_kj_kg, 410.0);
        // Unspecified fields still default from Hexane individually
        assert_eq!(resolved.molecular_mass_g_mol, HEXANE_MOLECULAR_MASS_G_MOL);
        assert!(fluid.uses_hexane_defaults());
    }

    #[test]
    fn test_fully_specified_fluid() {
        let fluid = FluidProperties {
            latent_heat_kj_kg: Some(410.0),
            relieving_temperature_c: Some(40.0),
            molecular_mass_g_mol: Some(58.12),
            ..FluidProperties::default()
        };
        assert!(!fluid.uses_hexane_defaults());
        let resolved = fluid.resolve_reference_fluid();
        assert_eq!(resolved.tag, ReferenceFluidTag::UserDefined);
        assert_eq!(resolved.relieving_temperature_c, 40.0);
    }

    #[test]
    fn test_volatility_serialization() {
        let basis = VolatilityBasis::FlashPoint(Some(37.8));
        let json = serde_json::to_string(&basis).unwrap();
        assert!(json.contains("FP"));
        let parsed: VolatilityBasis = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, basis);
    }
}
