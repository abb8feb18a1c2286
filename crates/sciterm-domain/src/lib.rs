//! Sciterm Domain Layer
//!
//! Value types and trait boundaries shared by every Sciterm crate.
//!
//! ## Key Concepts
//!
//! - **LookupTerm**: the scientific term a user searched for
//! - **ResultList**: exactly three related terms handed back to callers
//! - **Level**: audience the explanation is written for
//! - **Language**: language the explanation is written in
//!
//! ## Architecture
//!
//! - Pure value types, no I/O
//! - Infrastructure (LLM access) is reached through traits defined here
//!   and implemented in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod language;
pub mod level;
pub mod term;
pub mod traits;

// Re-exports for convenience
pub use language::Language;
pub use level::Level;
pub use term::{LookupTerm, ResultList, RESULT_LEN};
