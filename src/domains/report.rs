//! Shared helpers for rendering text reports.

/// Horizontal rule framing alert blocks.
pub const RULE: &str = "============================================================";

/// Timestamp format used in reports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Comma-join a list, or "None" when it is empty.
pub fn join_or_none<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return "None".to_string();
    }
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whole-number percentage, or "n/a" when there is none.
pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.0}%", p),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_or_none() {
        assert_eq!(join_or_none(&["a", "b"]), "a, b");
        assert_eq!(join_or_none::<&str>(&[]), "None");
        assert_eq!(join_or_none(&vec!["x".to_string()]), "x");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(77.142857)), "77%");
        assert_eq!(format_percent(Some(70.0)), "70%");
        assert_eq!(format_percent(None), "n/a");
    }
}
