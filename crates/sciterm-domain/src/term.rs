//! Lookup terms and the three-entry result list

use std::fmt;
use std::ops::Index;

/// Number of related terms handed back for every lookup
pub const RESULT_LEN: usize = 3;

/// The scientific term a user searched for
///
/// Surrounding whitespace is trimmed on construction. The term is never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupTerm(String);

impl LookupTerm {
    /// Create a lookup term from user input
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        let trimmed = term.trim();
        if trimmed.len() == term.len() {
            Self(term)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Borrow the term text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the term is empty after trimming
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LookupTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LookupTerm {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LookupTerm {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Exactly three related terms, in extraction then padding order
///
/// The length is fixed by the type, so consumers never need to re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultList([String; RESULT_LEN]);

impl ResultList {
    /// Wrap three terms
    pub fn new(terms: [String; RESULT_LEN]) -> Self {
        Self(terms)
    }

    /// Always [`RESULT_LEN`]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        RESULT_LEN
    }

    /// Borrow the terms as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over the terms in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Consume into a `Vec`
    pub fn into_vec(self) -> Vec<String> {
        self.0.into()
    }
}

impl Index<usize> for ResultList {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<ResultList> for Vec<String> {
    fn from(list: ResultList) -> Self {
        list.into_vec()
    }
}
