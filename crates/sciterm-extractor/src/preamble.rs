//! Removal of boilerplate the model wraps around its answer

/// Label phrases removed wherever they occur, in this order
pub(crate) const PREAMBLE_PHRASES: [&str; 4] = [
    "Related terms:",
    "Terms:",
    "Here are",
    "The related terms are",
];

/// Quote-like characters removed wherever they occur
pub(crate) const QUOTE_CHARS: [char; 7] = [
    '"', '\'', '`',
    '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}',
];

/// Strip known preamble phrases and quote characters from raw model output
pub(crate) fn strip_preamble(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for phrase in PREAMBLE_PHRASES {
        if cleaned.contains(phrase) {
            cleaned = cleaned.replace(phrase, "");
        }
    }
    cleaned.retain(|c| !QUOTE_CHARS.contains(&c));
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_label() {
        assert_eq!(strip_preamble("Related terms: A, B, C"), " A, B, C");
    }

    #[test]
    fn test_strips_phrases_anywhere() {
        let cleaned = strip_preamble("Sure! Here are the terms. Terms: A, B");
        assert_eq!(cleaned, "Sure!  the terms.  A, B");
    }

    #[test]
    fn test_label_forms() {
        assert_eq!(strip_preamble("Related terms:X"), "X");
        assert_eq!(strip_preamble("Terms:X"), "X");
        assert_eq!(strip_preamble("The related terms are X"), " X");
    }

    #[test]
    fn test_strips_quotes() {
        assert_eq!(
            strip_preamble("\"Osmosis\", 'Diffusion', `Turgor`, \u{201C}Plasmolysis\u{201D}"),
            "Osmosis, Diffusion, Turgor, Plasmolysis"
        );
    }

    #[test]
    fn test_no_phrase_is_noop() {
        assert_eq!(strip_preamble("Osmosis, Diffusion"), "Osmosis, Diffusion");
        assert_eq!(strip_preamble(""), "");
    }
}
