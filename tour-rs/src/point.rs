//! A two-field value type with a derived computation.

use crate::values::format_double;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from `(0, 0)`: the square root of `x² + y²`.
    ///
    /// Squared in `f64`, so no coordinate can overflow.
    pub fn distance_from_origin(&self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }
}

/// Body of the "Structs" section.
pub fn point_lines() -> Vec<String> {
    let point = Point::new(3, 4);
    vec![format!(
        "Distance from Origin: {}",
        format_double(point.distance_from_origin())
    )]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five() {
        assert_eq!(Point::new(3, 4).distance_from_origin(), 5.0);
        assert_eq!(point_lines(), vec!["Distance from Origin: 5.0"]);
    }

    #[test]
    fn origin_is_zero() {
        assert_eq!(Point::default().distance_from_origin(), 0.0);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        assert_eq!(Point::new(4_000_000_000, 0).distance_from_origin(), 4.0e9);
        let d = Point::new(i64::MAX, i64::MIN).distance_from_origin();
        assert!(d.is_finite());
        assert!((d - (i64::MAX as f64) * std::f64::consts::SQRT_2).abs() / d < 1e-12);
    }

    #[test]
    fn sign_does_not_matter() {
        assert_eq!(Point::new(-3, -4).distance_from_origin(), 5.0);
    }
}
