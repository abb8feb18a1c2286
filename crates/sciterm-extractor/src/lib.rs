//! Sciterm Extractor
//!
//! Distills free-form LLM output into exactly three related terms.
//!
//! # Overview
//!
//! The model is asked for "a comma-separated list of 3 terms", but nothing
//! guarantees it complies. Responses arrive with preambles, numbering,
//! bullets, quotes, line breaks, or in another script entirely. This crate
//! turns any such text into a [`ResultList`](sciterm_domain::ResultList)
//! that downstream code can use without further checks.
//!
//! # Architecture
//!
//! ```text
//! RawText → Preamble → Splitter → Candidate filter ─┬─ 3 found ──────────────→ ResultList
//!                                                    └─ short → Patterns → Padder → ResultList
//! ```
//!
//! Every stage is a pure function. Fallback patterns are an ordered list of
//! strategies tried until three candidates are held. The padder derives
//! placeholders from the lookup term, so it cannot fail.
//!
//! # Example Usage
//!
//! ```
//! use sciterm_domain::LookupTerm;
//! use sciterm_extractor::extract_related_terms;
//!
//! let term = LookupTerm::new("Entropy");
//! let terms = extract_related_terms(&term, "Related terms: Enthalpy, Free Energy");
//!
//! assert_eq!(terms.as_slice(), ["Enthalpy", "Free Energy", "Entropy mechanism"]);
//! ```

#![warn(missing_docs)]

mod candidates;
mod error;
mod padder;
mod patterns;
mod pipeline;
mod preamble;
mod splitter;


pub use candidates::MAX_TERM_CHARS;
pub use padder::FALLBACK_SUFFIXES;
pub use pipeline::{extract_related_terms, extract_with_report, ExtractionReport, Stage};
