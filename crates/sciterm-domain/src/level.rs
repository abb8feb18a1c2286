//! Level module - audience of an explanation

use std::fmt;

/// Audience an explanation is written for
///
/// The level controls the tone and length requested from the model:
/// - Student: two short sentences, school vocabulary
/// - Enthusiast: three to four sentences for a curious learner
/// - Expert: four to five precise, technical sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// School student
    Student,

    /// Curious non-specialist
    Enthusiast,

    /// Domain expert
    Expert,
}

impl Level {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Student => "student",
            Level::Enthusiast => "enthusiast",
            Level::Expert => "expert",
        }
    }

    /// Parse a level from a string, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Some(Level::Student),
            "enthusiast" => Some(Level::Enthusiast),
            "expert" => Some(Level::Expert),
            _ => None,
        }
    }

    /// All levels, from simplest to most technical
    pub fn all() -> [Level; 3] {
        [Level::Student, Level::Enthusiast, Level::Expert]
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid level: {}", s))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
