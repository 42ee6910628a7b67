//! # Table Interpolation
//!
//! Clamped linear interpolation over sorted two-column tables. Every lookup
//! table in the standard (normal vent, emergency vent, insulation
//! conductance) shares these exact semantics, so the contract lives in one
//! place and is tested once:
//!
//! - `x` at or below the first key returns the first value (clamp, no
//!   extrapolation)
//! - `x` at or above the last key returns the last value
//! - `x` landing on a key returns that row's value exactly
//! - otherwise the two bracketing rows are interpolated linearly
//!
//! Tables must be sorted ascending by key; an empty table is a programming
//! error and is rejected with [`VentError::EmptyTable`].

use crate::errors::{VentError, VentResult};

/// Interpolate `x` over a sorted `(key, value)` table with clamping at both
/// ends.
///
/// `table_name` is only used for error context.
///
/// # Example
///
/// ```rust
/// use vent_core::interp::interpolate;
///
/// const TABLE: [(f64, f64); 3] = [(0.0, 0.0), (10.0, 100.0), (20.0, 150.0)];
///
/// assert_eq!(interpolate(&TABLE, 5.0, "demo").unwrap(), 50.0);
/// assert_eq!(interpolate(&TABLE, -1.0, "demo").unwrap(), 0.0);
/// assert_eq!(interpolate(&TABLE, 99.0, "demo").unwrap(), 150.0);
/// ```
pub fn interpolate(table: &[(f64, f64)], x: f64, table_name: &str) -> VentResult<f64> {
    let (first, last) = match (table.first(), table.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(VentError::empty_table(table_name)),
    };

    if x <= first.0 {
        return Ok(first.1);
    }
    if x >= last.0 {
        return Ok(last.1);
    }

    // x is strictly inside (first.0, last.0), so a bracketing pair exists.
    for pair in table.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x >= x0 && x < x1 {
            return Ok(y0 + (y1 - y0) / (x1 - x0) * (x - x0));
        }
    }

    // Unreachable for a sorted table; clamp to the last row as a safe fallback.
    Ok(last.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [(f64, f64); 4] = [(1.0, 10.0), (2.0, 20.0), (4.0, 60.0), (8.0, 60.0)];

    #[test]
    fn test_exact_match_at_nodes() {
        for (key, value) in TABLE {
            assert_eq!(interpolate(&TABLE, key, "t").unwrap(), value);
        }
    }

    #[test]
    fn test_linear_between_nodes() {
        // Midpoint of (2, 20) and (4, 60)
        assert_eq!(interpolate(&TABLE, 3.0, "t").unwrap(), 40.0);
        // Quarter point of (1, 10) and (2, 20)
        assert_eq!(interpolate(&TABLE, 1.25, "t").unwrap(), 12.5);
    }

    #[test]
    fn test_clamp_below_minimum() {
        assert_eq!(interpolate(&TABLE, 0.0, "t").unwrap(), 10.0);
        assert_eq!(interpolate(&TABLE, -100.0, "t").unwrap(), 10.0);
    }

    #[test]
    fn test_clamp_above_maximum() {
        assert_eq!(interpolate(&TABLE, 8.0, "t").unwrap(), 60.0);
        assert_eq!(interpolate(&TABLE, 1e9, "t").unwrap(), 60.0);
    }

    #[test]
    fn test_single_row_table() {
        let single = [(5.0, 42.0)];
        assert_eq!(interpolate(&single, 0.0, "t").unwrap(), 42.0);
        assert_eq!(interpolate(&single, 5.0, "t").unwrap(), 42.0);
        assert_eq!(interpolate(&single, 10.0, "t").unwrap(), 42.0);
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let empty: [(f64, f64); 0] = [];
        let err = interpolate(&empty, 1.0, "empty demo").unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_TABLE");
        assert!(err.to_string().contains("empty demo"));
    }

    #[test]
    fn test_monotonic_output_for_monotonic_table() {
        let mut previous = f64::MIN;
        let mut x = 0.0;
        while x <= 9.0 {
            let y = interpolate(&TABLE, x, "t").unwrap();
            assert!(y >= previous);
            previous = y;
            x += 0.1;
        }
    }
}
