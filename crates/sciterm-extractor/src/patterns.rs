//! Structural fallback patterns
//!
//! Used only when comma splitting yields fewer than three candidates. Each
//! strategy scans the whole cleaned text and returns trimmed matches in the
//! order they appear; filtering and dedup happen in the caller.

use crate::error::ExtractionError;
use crate::pipeline::Stage;
use once_cell::sync::Lazy;
use regex::Regex;

type CompiledPattern = Lazy<Result<Regex, regex::Error>>;

/// A fallback strategy over cleaned text
pub(crate) type Strategy = fn(&str) -> Result<Vec<String>, ExtractionError>;

/// Fallback strategies, tried in this order until three candidates are held
pub(crate) const FALLBACK_PATTERNS: [(Stage, Strategy); 3] = [
    (Stage::Bulleted, bulleted_lines),
    (Stage::Numbered, numbered_lines),
    (Stage::Capitalized, capitalized_phrases),
];

/// A second list item inside comma-free text: an enumerator such as ` 2. `,
/// or a bullet opening a new line
pub(crate) static RUN_ON_MARKER: CompiledPattern =
    Lazy::new(|| Regex::new(r"\s\d+[.)](?:\s|$)|\n\s*[-•]\s"));

/// `-` or `•` at line start or after whitespace, capturing up to a comma or line break
static BULLET_ITEM: CompiledPattern = Lazy::new(|| Regex::new(r"(?:^|\s)[-•]\s*([^,\n]+)"));

/// An enumerator such as `1.` or `2)` at line start or after whitespace
static ENUMERATOR: CompiledPattern = Lazy::new(|| Regex::new(r"(?:^|\s)\d+[.)]"));

/// Whole-word runs of Latin letters and whitespace starting with a capital, 3+ chars
static CAPITALIZED_PHRASE: CompiledPattern =
    Lazy::new(|| Regex::new(r"\b[A-Z][A-Za-z\s]+[A-Za-z]\b"));

/// Borrow a compiled pattern, surfacing a compile failure as an extraction error
pub(crate) fn compiled(
    pattern: &'static CompiledPattern,
    name: &'static str,
) -> Result<&'static Regex, ExtractionError> {
    match Lazy::force(pattern) {
        Ok(regex) => Ok(regex),
        Err(e) => Err(ExtractionError::Pattern {
            name,
            reason: e.to_string(),
        }),
    }
}

/// Text following a bullet marker
fn bulleted_lines(text: &str) -> Result<Vec<String>, ExtractionError> {
    let regex = compiled(&BULLET_ITEM, "bulleted")?;
    Ok(regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect())
}

/// Text following an enumerator, ending at a comma, a line break, or the next enumerator
fn numbered_lines(text: &str) -> Result<Vec<String>, ExtractionError> {
    let regex = compiled(&ENUMERATOR, "numbered")?;
    let markers: Vec<(usize, usize)> = regex
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut items = Vec::with_capacity(markers.len());
    for (idx, &(_, body_start)) in markers.iter().enumerate() {
        let body_end = markers
            .get(idx + 1)
            .map_or(text.len(), |&(next_start, _)| next_start);
        let body = text[body_start..body_end].trim_start();
        let item = body.split([',', '\n']).next().unwrap_or_default().trim();
        items.push(item.to_string());
    }
    Ok(items)
}

/// Capitalised Latin-script phrases
///
/// Only sees A-Z letters, so Devanagari and other scripts yield nothing.
fn capitalized_phrases(text: &str) -> Result<Vec<String>, ExtractionError> {
    let regex = compiled(&CAPITALIZED_PHRASE, "capitalized")?;
    Ok(regex
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect())
}
