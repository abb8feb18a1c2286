//! Primary comma splitter

use crate::error::ExtractionError;
use crate::patterns::{compiled, RUN_ON_MARKER};
use tracing::debug;

/// Labels stripped from the start of a piece, each at most once, in order
const LEADING_LABELS: [&str; 4] = ["Term:", "Term ", "- ", "• "];

/// Numbering and bullet residue stripped from the start of a piece
fn is_leading_noise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | ')' | ' ')
}

/// Clean one comma-separated piece
///
/// `"1. Term"`, `"2) Term"` and `"- Term"` all become `"Term"`.
fn clean_piece(piece: &str) -> &str {
    let mut cleaned = piece.trim().trim_start_matches(is_leading_noise).trim();
    for label in LEADING_LABELS {
        if let Some(rest) = cleaned.strip_prefix(label) {
            cleaned = rest.trim();
        }
    }
    cleaned
}

/// Split cleaned text on commas into ordered, non-empty candidates
///
/// Text without any comma that still holds a list marker after cleaning is a
/// run-on list ("Mitosis 2. Meiosis", one bullet per line) rather than a term. It yields nothing
/// here and is left to the fallback patterns, which split on markers. Pieces
/// of a comma list are always kept.
pub(crate) fn split_candidates(cleaned: &str) -> Result<Vec<String>, ExtractionError> {
    if !cleaned.contains(',') {
        let marker = compiled(&RUN_ON_MARKER, "run-on-marker")?;
        let candidate = clean_piece(cleaned);
        if candidate.is_empty() {
            return Ok(Vec::new());
        }
        if marker.is_match(candidate) {
            debug!("Dropping run-on list: {:?}", candidate);
            return Ok(Vec::new());
        }
        return Ok(vec![candidate.to_string()]);
    }

    Ok(cleaned
        .split(',')
        .map(clean_piece)
        .filter(|candidate| !candidate.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_piece_numbering() {
        assert_eq!(clean_piece(" 1. Mitosis "), "Mitosis");
        assert_eq!(clean_piece("2) Meiosis"), "Meiosis");
        assert_eq!(clean_piece("- Cytokinesis"), "Cytokinesis");
        assert_eq!(clean_piece("10. Apoptosis"), "Apoptosis");
    }

    #[test]
    fn test_clean_piece_labels() {
        assert_eq!(clean_piece("Term: Osmosis"), "Osmosis");
        assert_eq!(clean_piece("• Diffusion"), "Diffusion");
        assert_eq!(clean_piece("Term Turgor"), "Turgor");
    }

    #[test]
    fn test_clean_piece_keeps_inner_digits() {
        assert_eq!(clean_piece("Vitamin B12"), "Vitamin B12");
        assert_eq!(clean_piece("3D printing"), "D printing");
    }

    #[test]
    fn test_split_preserves_order() {
        let candidates = split_candidates("Photosynthesis, Chlorophyll, Respiration").unwrap();
        assert_eq!(candidates, vec!["Photosynthesis", "Chlorophyll", "Respiration"]);
    }

    #[test]
    fn test_split_discards_empty_pieces() {
        let candidates = split_candidates(" , 1. ,Osmosis,, - ").unwrap();
        assert_eq!(candidates, vec!["Osmosis"]);
        assert!(split_candidates("").unwrap().is_empty());
        assert!(split_candidates(",,,").unwrap().is_empty());
    }

    #[test]
    fn test_split_drops_run_on_lists() {
        assert!(split_candidates("1. Mitosis 2. Meiosis").unwrap().is_empty());
        assert!(split_candidates("Glycolysis\n2) Krebs cycle").unwrap().is_empty());
    }

    #[test]
    fn test_split_keeps_comma_pieces_with_inner_markers() {
        assert_eq!(
            split_candidates("1. Mitosis 2. Meiosis, Cytokinesis").unwrap(),
            vec!["Mitosis 2. Meiosis", "Cytokinesis"]
        );
        assert_eq!(
            split_candidates("Type 2) insulin resistance, Glucose, Insulin").unwrap(),
            vec!["Type 2) insulin resistance", "Glucose", "Insulin"]
        );
        assert_eq!(
            split_candidates("Krebs cycle - citric acid cycle, Glycolysis").unwrap(),
            vec!["Krebs cycle - citric acid cycle", "Glycolysis"]
        );
        assert_eq!(
            split_candidates("Osmosis • Diffusion, Turgor").unwrap(),
            vec!["Osmosis • Diffusion", "Turgor"]
        );
    }

    #[test]
    fn test_split_drops_bullet_lines_without_commas() {
        assert!(split_candidates("- Mitosis\n- Meiosis").unwrap().is_empty());
        assert!(split_candidates("Mitosis\n  • Meiosis").unwrap().is_empty());
    }

    #[test]
    fn test_split_keeps_single_term_with_inner_dash() {
        assert_eq!(
            split_candidates("Krebs cycle - citric acid cycle").unwrap(),
            vec!["Krebs cycle - citric acid cycle"]
        );
        assert_eq!(split_candidates("Vitamin B12").unwrap(), vec!["Vitamin B12"]);
    }
}
