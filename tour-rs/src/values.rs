//! Primitive values: one literal of each basic kind, printed with a label.

/// The integer literal shown in the tour.
pub const INTEGER: i64 = 42;
/// The floating-point literal shown in the tour.
#[allow(clippy::approx_constant)]
pub const DOUBLE: f64 = 3.14;
/// The boolean literal shown in the tour.
pub const BOOLEAN: bool = true;
/// The string literal shown in the tour.
pub const STRING: &str = "Hello, Swift!";

/// Render a double the way the tour prints them: always with a fractional
/// part, so `5.0` stays `5.0` instead of collapsing to `5`.
pub fn format_double(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Body of the "Data Type Handling" section.
pub fn primitive_lines() -> Vec<String> {
    vec![
        format!("Integer: {INTEGER}"),
        format!("Double: {}", format_double(DOUBLE)),
        format!("Boolean: {BOOLEAN}"),
        format!("String: {STRING}"),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;

    #[test]
    fn primitive_lines_exact() {
        assert_eq!(
            primitive_lines(),
            vec!["Integer: 42", "Double: 3.14", "Boolean: true", "String: Hello, Swift!"]
        );
    }

    #[test]
    fn whole_doubles_keep_fraction() {
        assert_eq!(format_double(5.0), "5.0");
        assert_eq!(format_double(-2.0), "-2.0");
        assert_eq!(format_double(0.0), "0.0");
    }

    #[test]
    fn fractional_doubles_unchanged() {
        assert_eq!(format_double(3.14), "3.14");
        assert_eq!(format_double(0.5), "0.5");
    }

    #[test]
    fn non_finite_doubles() {
        assert_eq!(format_double(f64::INFINITY), "inf");
        assert_eq!(format_double(f64::NAN), "NaN");
    }
}
