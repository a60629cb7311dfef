//! A value that may be absent, unwrapped with an explicit presence check.

/// `Optional contains: <value>` when present, `Optional is nil` otherwise.
pub fn optional_line(value: Option<&str>) -> String {
    if let Some(unwrapped) = value {
        format!("Optional contains: {unwrapped}")
    } else {
        "Optional is nil".to_owned()
    }
}

/// Body of the "Optionals" section.
pub fn optional_lines() -> Vec<String> {
    let mut optional_string: Option<String> = None;
    tracing::debug!(?optional_string, "starts absent");
    optional_string = Some("I am not nil!".to_owned());
    vec![optional_line(optional_string.as_deref())]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_value_unwraps() {
        assert_eq!(optional_line(Some("I am not nil!")), "Optional contains: I am not nil!");
    }

    #[test]
    fn absent_value() {
        assert_eq!(optional_line(None), "Optional is nil");
    }

    #[test]
    fn section_body_after_reassignment() {
        assert_eq!(optional_lines(), vec!["Optional contains: I am not nil!"]);
    }
}
