//! Top-level extraction contract

use crate::candidates::CandidateSet;
use crate::error::ExtractionError;
use crate::padder::pad;
use crate::patterns::FALLBACK_PATTERNS;
use crate::preamble::strip_preamble;
use crate::splitter::split_candidates;
use sciterm_domain::{LookupTerm, ResultList, RESULT_LEN};
use tracing::{debug, info, warn};

/// Stage that completed the result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Comma splitting alone found three terms
    Split,
    /// Bulleted-line pattern
    Bulleted,
    /// Numbered-line pattern
    Numbered,
    /// Capitalised-phrase pattern
    Capitalized,
    /// At least one synthetic term was needed
    Padding,
}

impl Stage {
    /// Stage name for logs and output
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Split => "split",
            Stage::Bulleted => "bulleted",
            Stage::Numbered => "numbered",
            Stage::Capitalized => "capitalized",
            Stage::Padding => "padding",
        }
    }
}

/// Outcome of one extraction run, with out-of-band diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    /// The three related terms
    pub terms: ResultList,

    /// Entries taken from the model output
    pub extracted: usize,

    /// Entries synthesised from the lookup term
    pub padded: usize,

    /// Stage that completed the list
    pub resolved_by: Stage,

    /// Padding was needed and the text held letters outside the Latin script,
    /// which the capitalised-phrase pattern cannot see
    pub script_gap: bool,

    /// Stage failure that was absorbed into full padding
    pub absorbed_error: Option<String>,
}

/// Extract exactly three related terms from raw model output
///
/// Never fails. Empty or unusable text yields three placeholders derived
/// from `lookup_term`.
pub fn extract_related_terms(lookup_term: &LookupTerm, raw_text: &str) -> ResultList {
    extract_with_report(lookup_term, raw_text).terms
}

/// Same as [`extract_related_terms`], also reporting how the list was built
pub fn extract_with_report(lookup_term: &LookupTerm, raw_text: &str) -> ExtractionReport {
    let cleaned = strip_preamble(raw_text);

    let (candidates, resolved_by, absorbed_error) = match collect_candidates(&cleaned) {
        Ok((candidates, stage)) => (candidates, stage, None),
        Err(e) => {
            warn!("Related-term extraction failed for '{}': {}", lookup_term, e);
            (CandidateSet::new(), Stage::Padding, Some(e.to_string()))
        }
    };

    let extracted = candidates.len();
    let padded = RESULT_LEN - extracted;
    let terms = pad(candidates.into_vec(), lookup_term);

    let script_gap = padded > 0 && contains_non_latin_letters(&cleaned);
    if padded > 0 {
        info!(
            "Padded related terms for '{}': {} extracted, {} synthetic",
            lookup_term, extracted, padded
        );
    }
    if script_gap {
        warn!(
            "Related terms for '{}' are in a non-Latin script; pattern fallbacks cannot read them",
            lookup_term
        );
    }

    ExtractionReport {
        terms,
        extracted,
        padded,
        resolved_by,
        script_gap,
        absorbed_error,
    }
}

/// Run the splitter, then fallback patterns in order until three are held
fn collect_candidates(cleaned: &str) -> Result<(CandidateSet, Stage), ExtractionError> {
    let mut candidates = CandidateSet::new();
    candidates.offer_all(split_candidates(cleaned)?);
    if candidates.is_full() {
        return Ok((candidates, Stage::Split));
    }

    for (stage, strategy) in FALLBACK_PATTERNS {
        let found = strategy(cleaned)?;
        let accepted = candidates.offer_all(&found);
        debug!(
            "Fallback '{}' matched {}, accepted {}",
            stage.as_str(),
            found.len(),
            accepted
        );
        if candidates.is_full() {
            return Ok((candidates, stage));
        }
    }

    Ok((candidates, Stage::Padding))
}

/// Whether `text` contains alphabetic characters outside the Latin blocks
fn contains_non_latin_letters(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic() && !is_latin(c))
}

fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{00C0}'..='\u{024F}').contains(&c)
        || ('\u{1E00}'..='\u{1EFF}').contains(&c)
}
