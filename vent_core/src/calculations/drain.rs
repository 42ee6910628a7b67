//! # Drain-System Inbreathing
//!
//! Air drawn in through the vent while liquid gravity-drains out of the
//! tank. Single closed form:
//!
//! ```text
//! Q_drain = 3.48 · (d/1000)² · √(H/1000) · 3600 · 0.94   (Nm³/h)
//! ```
//!
//! with `d` the drain line diameter (mm) and `H` the maximum liquid height
//! above the drain (mm).

/// Drain inbreathing requirement (Nm³/h free air).
///
/// Zero when either the line size or the liquid height is zero.
pub fn drain_inbreathing(line_size_mm: f64, max_height_above_drain_mm: f64) -> f64 {
    3.48 * (line_size_mm / 1000.0).powi(2)
        * (max_height_above_drain_mm / 1000.0).sqrt()
        * 3600.0
        * 0.94
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_at_zero_inputs() {
        assert_eq!(drain_inbreathing(0.0, 5_000.0), 0.0);
        assert_eq!(drain_inbreathing(150.0, 0.0), 0.0);
    }

    #[test]
    fn test_scales_with_diameter_squared() {
        let base = drain_inbreathing(100.0, 4_000.0);
        let doubled = drain_inbreathing(200.0, 4_000.0);
        assert!((doubled - 4.0 * base).abs() < 1e-9);
    }

    #[test]
    fn test_scales_with_sqrt_height() {
        let base = drain_inbreathing(100.0, 1_000.0);
        let quadrupled_height = drain_inbreathing(100.0, 4_000.0);
        assert!((quadrupled_height - 2.0 * base).abs() < 1e-9);
    }

    #[test]
    fn test_known_value() {
        // d = 150 mm, H = 5 000 mm:
        // 3.48 × 0.0225 × √5 × 3600 × 0.94 = 592.5 Nm³/h
        let q = drain_inbreathing(150.0, 5_000.0);
        assert!((q - 592.5).abs() < 0.1);
    }
}
