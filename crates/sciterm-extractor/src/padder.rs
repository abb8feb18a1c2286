//! Synthetic fallback terms derived from the lookup term

use sciterm_domain::{LookupTerm, ResultList, RESULT_LEN};

/// Suffixes appended to the lookup term, consumed in this order
pub const FALLBACK_SUFFIXES: [&str; RESULT_LEN] = [" mechanism", " process", " function"];

/// Fill `accepted` up to exactly three entries with term-derived placeholders
///
/// Placeholders are not checked against the accepted terms.
pub(crate) fn pad(accepted: Vec<String>, term: &LookupTerm) -> ResultList {
    let synthetic = FALLBACK_SUFFIXES
        .iter()
        .map(|suffix| format!("{}{}", term, suffix));
    let mut entries = accepted.into_iter().take(RESULT_LEN).chain(synthetic);
    ResultList::new(std::array::from_fn(|_| entries.next().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_from_empty() {
        let list = pad(Vec::new(), &LookupTerm::new("Entropy"));
        assert_eq!(
            list.as_slice(),
            ["Entropy mechanism", "Entropy process", "Entropy function"]
        );
    }

    #[test]
    fn test_pad_consumes_suffixes_in_order() {
        let list = pad(vec!["Mitosis".to_string()], &LookupTerm::new("Cell Division"));
        assert_eq!(
            list.as_slice(),
            ["Mitosis", "Cell Division mechanism", "Cell Division process"]
        );

        let list = pad(
            vec!["Mitosis".to_string(), "Meiosis".to_string()],
            &LookupTerm::new("Cell Division"),
        );
        assert_eq!(list[2], "Cell Division mechanism");
    }

    #[test]
    fn test_pad_full_list_untouched() {
        let accepted = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let list = pad(accepted, &LookupTerm::new("X"));
        assert_eq!(list.as_slice(), ["A", "B", "C"]);
    }

    #[test]
    fn test_pad_does_not_dedup_against_real_terms() {
        let list = pad(
            vec!["Entropy mechanism".to_string()],
            &LookupTerm::new("Entropy"),
        );
        assert_eq!(list[0], "Entropy mechanism");
        assert_eq!(list[1], "Entropy mechanism");
    }

    #[test]
    fn test_pad_empty_term() {
        let list = pad(Vec::new(), &LookupTerm::new(""));
        assert_eq!(list.as_slice(), [" mechanism", " process", " function"]);
    }
}
