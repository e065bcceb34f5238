use super::model::CellValue;

// ---------------------------------------------------------------------------
// Key canonicalization
// ---------------------------------------------------------------------------

/// How first-column values are compared across files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Strip whitespace and every non-alphanumeric character before
    /// comparing, so `555-1234` and `555 12 34` count as the same key.
    #[default]
    Normalized,
    /// Compare the textual cell value exactly as it appears.
    Raw,
}

/// Canonical comparison key for a cell.  `None` is the missing-sentinel:
/// it is never inserted into the seen-set, so rows with a missing key are
/// never treated as duplicates of anything (including each other).
pub fn canonical_key(value: &CellValue, mode: MatchMode) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let text = value.to_string();
    match mode {
        MatchMode::Normalized => Some(
            text.trim()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect(),
        ),
        MatchMode::Raw => Some(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn separators_are_ignored() {
        assert_eq!(
            canonical_key(&text("555-1234"), MatchMode::Normalized),
            canonical_key(&text("5551234"), MatchMode::Normalized),
        );
        assert_eq!(
            canonical_key(&text("(555) 12.34"), MatchMode::Normalized),
            Some("5551234".to_string()),
        );
    }

    #[test]
    fn whitespace_is_trimmed_case_is_kept() {
        assert_eq!(
            canonical_key(&text("  A-1  "), MatchMode::Normalized),
            Some("A1".to_string()),
        );
        // No case folding: "a1" and "A1" stay distinct.
        assert_ne!(
            canonical_key(&text("a-1"), MatchMode::Normalized),
            canonical_key(&text("A-1"), MatchMode::Normalized),
        );
    }

    #[test]
    fn missing_maps_to_sentinel() {
        assert_eq!(canonical_key(&CellValue::Empty, MatchMode::Normalized), None);
        assert_eq!(canonical_key(&CellValue::Empty, MatchMode::Raw), None);
    }

    #[test]
    fn deterministic() {
        let v = text(" +1 (555) 123-4567 ");
        assert_eq!(
            canonical_key(&v, MatchMode::Normalized),
            canonical_key(&v, MatchMode::Normalized),
        );
    }

    #[test]
    fn raw_mode_keeps_formatting() {
        assert_ne!(
            canonical_key(&text("555-1234"), MatchMode::Raw),
            canonical_key(&text("5551234"), MatchMode::Raw),
        );
        assert_eq!(
            canonical_key(&text("555-1234"), MatchMode::Raw),
            Some("555-1234".to_string()),
        );
    }

    #[test]
    fn numeric_cells_normalize_via_their_text() {
        assert_eq!(
            canonical_key(&CellValue::Integer(5551234), MatchMode::Normalized),
            canonical_key(&text("555-1234"), MatchMode::Normalized),
        );
    }
}
