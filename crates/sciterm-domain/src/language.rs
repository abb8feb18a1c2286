//! Language module - output language of an explanation

use std::fmt;

/// Language the model is asked to respond in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English (default)
    #[default]
    English,

    /// Hindi
    Hindi,

    /// Marathi
    Marathi,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
        }
    }

    /// Resolve a language code. Unknown codes resolve to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "hi" => Language::Hindi,
            "mr" => Language::Marathi,
            _ => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
