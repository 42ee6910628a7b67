//! # Tabulated Venting Requirements
//!
//! The two large SI tables from the 5th edition of the standard:
//!
//! - **Normal vent table** — tank capacity (m³) to thermal venting
//!   requirement (Nm³/h free air), three value columns: inbreathing,
//!   outbreathing for low-volatility products, and outbreathing for all
//!   other products. Below the 3 180 m³ knee the columns are proportional
//!   to capacity (1.69 / 1.01 / 1.69 Nm³/h per 10 m³); above it the curves
//!   flatten and low-volatility outbreathing runs at 0.6 × inbreathing.
//! - **Emergency vent table** — wetted area (m²) to fire-exposure venting
//!   requirement (Nm³/h free air). Rows are the free-air values of the
//!   piecewise heat-input coefficients evaluated at Hexane conditions, so
//!   the table and the coefficient formulas agree at the 260 m² seam
//!   (19 910 Nm³/h).
//!
//! Both tables interpolate linearly between rows and clamp at the ends via
//! [`crate::interp::interpolate`].

use once_cell::sync::Lazy;

use crate::errors::VentResult;
use crate::interp::interpolate;

/// Largest tank capacity covered by the normal vent table (m³).
///
/// Larger tanks are clamped to the last row and flagged in the calculation
/// warnings.
pub const NORMAL_VENT_TABLE_MAX_CAPACITY_M3: f64 = 30_000.0;

/// Largest wetted area covered by the emergency vent table (m²).
///
/// Above this the vent rate comes from the heat-input formulas, not the
/// table.
pub const EMERGENCY_VENT_TABLE_MAX_AREA_M2: f64 = 260.0;

/// Normal venting requirements: (capacity m³, inbreathing Nm³/h,
/// outbreathing low-volatility Nm³/h, outbreathing other Nm³/h).
const NORMAL_VENT_ROWS: [(f64, f64, f64, f64); 22] = [
    (10.0, 1.69, 1.01, 1.69),
    (20.0, 3.37, 2.02, 3.37),
    (100.0, 16.9, 10.1, 16.9),
    (200.0, 33.7, 20.2, 33.7),
    (300.0, 50.6, 30.3, 50.6),
    (500.0, 84.3, 50.6, 84.3),
    (700.0, 118.0, 70.8, 118.0),
    (1_000.0, 169.0, 101.0, 169.0),
    (1_500.0, 253.0, 152.0, 253.0),
    (2_000.0, 337.0, 202.0, 337.0),
    (3_000.0, 506.0, 303.0, 506.0),
    (3_180.0, 536.0, 322.0, 536.0),
    (4_000.0, 647.0, 388.0, 647.0),
    (5_000.0, 787.0, 472.0, 787.0),
    (6_000.0, 896.0, 538.0, 896.0),
    (8_000.0, 1_077.0, 646.0, 1_077.0),
    (10_000.0, 1_210.0, 726.0, 1_210.0),
    (12_000.0, 1_345.0, 807.0, 1_345.0),
    (15_000.0, 1_545.0, 927.0, 1_545.0),
    (20_000.0, 1_877.0, 1_126.0, 1_877.0),
    (25_000.0, 2_179.0, 1_307.0, 2_179.0),
    (30_000.0, 2_495.0, 1_497.0, 2_495.0),
];

/// Emergency venting requirements: (wetted area m², flow Nm³/h free air).
const EMERGENCY_VENT_ROWS: [(f64, f64); 26] = [
    (2.0, 609.0),
    (4.0, 1_218.0),
    (6.0, 1_827.0),
    (8.0, 2_436.0),
    (10.0, 3_045.0),
    (12.0, 3_653.0),
    (14.0, 4_262.0),
    (16.0, 4_871.0),
    (18.0, 5_480.0),
    (20.0, 5_891.0),
    (25.0, 6_685.0),
    (30.0, 7_410.0),
    (35.0, 8_086.0),
    (40.0, 8_721.0),
    (50.0, 9_895.0),
    (60.0, 10_970.0),
    (70.0, 11_971.0),
    (80.0, 12_911.0),
    (90.0, 13_800.0),
    (100.0, 14_413.0),
    (120.0, 15_329.0),
    (140.0, 16_149.0),
    (160.0, 16_895.0),
    (180.0, 17_581.0),
    (200.0, 18_218.0),
    (260.0, 19_910.0),
];

static NORMAL_INBREATHING: Lazy<Vec<(f64, f64)>> =
    Lazy::new(|| NORMAL_VENT_ROWS.iter().map(|r| (r.0, r.1)).collect());

static NORMAL_OUTBREATHING_LOW_VOLATILITY: Lazy<Vec<(f64, f64)>> =
    Lazy::new(|| NORMAL_VENT_ROWS.iter().map(|r| (r.0, r.2)).collect());

static NORMAL_OUTBREATHING_VOLATILE: Lazy<Vec<(f64, f64)>> =
    Lazy::new(|| NORMAL_VENT_ROWS.iter().map(|r| (r.0, r.3)).collect());

/// 5th-edition thermal inbreathing requirement (Nm³/h) for a tank capacity.
pub fn thermal_inbreathing_5th(capacity_m3: f64) -> VentResult<f64> {
    interpolate(&NORMAL_INBREATHING, capacity_m3, "normal vent inbreathing")
}

/// 5th-edition thermal outbreathing requirement (Nm³/h) for a tank
/// capacity and product volatility class.
pub fn thermal_outbreathing_5th(capacity_m3: f64, low_volatility: bool) -> VentResult<f64> {
    if low_volatility {
        interpolate(
            &NORMAL_OUTBREATHING_LOW_VOLATILITY,
            capacity_m3,
            "normal vent outbreathing (low volatility)",
        )
    } else {
        interpolate(
            &NORMAL_OUTBREATHING_VOLATILE,
            capacity_m3,
            "normal vent outbreathing",
        )
    }
}

/// Tabulated emergency venting requirement (Nm³/h free air) for a wetted
/// area.
///
/// Valid domain is areas up to [`EMERGENCY_VENT_TABLE_MAX_AREA_M2`]; the
/// edition rules in [`crate::calculations::emergency`] decide between the
/// table and the heat-input formulas.
pub fn emergency_vent_flow(wetted_area_m2: f64) -> VentResult<f64> {
    interpolate(&EMERGENCY_VENT_ROWS, wetted_area_m2, "emergency vent")
}
