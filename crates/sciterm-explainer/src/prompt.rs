//! LLM prompts for explanations and related terms

use sciterm_domain::{Language, Level, LookupTerm};

/// Instruction appended to every explanation prompt
pub fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::English => " Respond in English.",
        Language::Hindi => " Respond in Hindi (हिंदी).",
        Language::Marathi => " Respond in Marathi (मराठी).",
    }
}

/// Build the explanation prompt for a term, level, and language
pub fn explanation_prompt(term: &LookupTerm, level: Level, language: Language) -> String {
    let lang = language_instruction(language);
    match level {
        Level::Student => format!(
            "Explain the scientific term '{term}' in very simple language, \
             as if teaching a school student. Use 2 short sentences.{lang} \
             Provide ONLY the explanation."
        ),
        Level::Enthusiast => format!(
            "Explain the scientific term '{term}' clearly for a curious learner. \
             Use simple but accurate language in 3–4 sentences.{lang} \
             Provide ONLY the explanation."
        ),
        Level::Expert => format!(
            "Provide a concise but technical explanation of the scientific term '{term}'. \
             Include correct terminology and precision in 4–5 sentences.{lang} \
             Provide ONLY the explanation."
        ),
    }
}

/// Build the prompt asking for three related terms as a comma-separated list
pub fn related_terms_prompt(term: &LookupTerm) -> String {
    format!(
        "Given the scientific term '{term}', provide exactly 3 related scientific terms that are \
         closely connected to this term. These should be actual scientific terms from the same \
         field or domain. Return ONLY a comma-separated list of the 3 terms, nothing else. \
         Example format: 'Term1, Term2, Term3'"
    )
}
