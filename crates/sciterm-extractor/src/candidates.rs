//! Deduplication and length filtering of candidates

use sciterm_domain::RESULT_LEN;

/// Candidates must be strictly shorter than this many characters
pub const MAX_TERM_CHARS: usize = 100;

/// Whether a candidate's length is inside `(0, MAX_TERM_CHARS)`
pub(crate) fn has_valid_length(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.chars().count() < MAX_TERM_CHARS
}

/// Validated candidates accumulated during one extraction run
///
/// Order of first acceptance is preserved. Once [`RESULT_LEN`] entries are
/// held, further offers are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct CandidateSet {
    accepted: Vec<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate. Returns `true` if it was accepted.
    pub fn offer(&mut self, candidate: &str) -> bool {
        if self.is_full() || !has_valid_length(candidate) {
            return false;
        }
        if self.accepted.iter().any(|held| held == candidate) {
            return false;
        }
        self.accepted.push(candidate.to_string());
        true
    }

    /// Offer every candidate in order, returning how many were accepted
    pub fn offer_all<I, S>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = 0;
        for candidate in candidates {
            if self.is_full() {
                break;
            }
            if self.offer(candidate.as_ref()) {
                accepted += 1;
            }
        }
        accepted
    }

    pub fn is_full(&self) -> bool {
        self.accepted.len() >= RESULT_LEN
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        assert!(!has_valid_length(""));
        assert!(has_valid_length("a"));
        assert!(has_valid_length(&"a".repeat(99)));
        assert!(!has_valid_length(&"a".repeat(100)));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 99 Devanagari characters are 297 bytes
        let term = "क".repeat(99);
        assert!(term.len() > MAX_TERM_CHARS);
        assert!(has_valid_length(&term));
    }

    #[test]
    fn test_dedup_is_exact_and_case_sensitive() {
        let mut set = CandidateSet::new();
        assert!(set.offer("Enzyme"));
        assert!(!set.offer("Enzyme"));
        assert!(set.offer("enzyme"));
        assert_eq!(set.into_vec(), vec!["Enzyme", "enzyme"]);
    }

    #[test]
    fn test_stops_at_three() {
        let mut set = CandidateSet::new();
        let accepted = set.offer_all(["A1", "B2", "C3", "D4"]);
        assert_eq!(accepted, 3);
        assert!(set.is_full());
        assert!(!set.offer("E5"));
        assert_eq!(set.into_vec(), vec!["A1", "B2", "C3"]);
    }

    #[test]
    fn test_rejects_overlong() {
        let mut set = CandidateSet::new();
        assert!(!set.offer(&"x".repeat(MAX_TERM_CHARS)));
        assert_eq!(set.len(), 0);
    }
}
