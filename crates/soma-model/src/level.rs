//! Complexity levels and level-specific content.
//!
//! Every concept can be explained at five audience tiers:
//!
//! | Level | Audience                | Register                              |
//! |-------|-------------------------|---------------------------------------|
//! | 1     | Child (ages 5-12)       | simple words, analogies               |
//! | 2     | Patient                 | plain language, terms defined inline  |
//! | 3     | Nursing / Allied Health | clinical terminology, protocols       |
//! | 4     | Medical Student         | full pathophysiology                  |
//! | 5     | Physician               | expert reasoning, current guidelines  |
//!
//! Higher levels assume the reader has absorbed the lower ones.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModelError;

/// A validated complexity level in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(5);

    /// All five levels, simplest first.
    pub const ALL: [Level; 5] = [Level(1), Level(2), Level(3), Level(4), Level(5)];

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::InvalidLevel(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Short audience name used on UI badges.
    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "Child",
            2 => "Patient",
            3 => "Nursing",
            4 => "Medical Student",
            _ => "Physician",
        }
    }

    /// Target audience description.
    pub fn audience(self) -> &'static str {
        match self.0 {
            1 => "Children ages 5-12",
            2 => "General adult patients and caregivers",
            3 => "Nurses and allied health professionals",
            4 => "Medical students preparing for boards",
            _ => "Practicing physicians",
        }
    }
}

impl Default for Level {
    /// Intermediate tier, used when a caller does not pick a level.
    fn default() -> Self {
        Level(3)
    }
}

impl TryFrom<u8> for Level {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Level::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A term introduced at a given level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
}

/// The explanation of an entity at one complexity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelContent {
    pub level: Level,
    pub summary: String,
    pub explanation: String,
    #[serde(default)]
    pub key_terms: Vec<KeyTerm>,
    #[serde(default)]
    pub analogies: Vec<String>,
    #[serde(default)]
    pub clinical_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_levels() {
        assert!(Level::new(0).is_err());
        assert!(Level::new(6).is_err());
        assert_eq!(Level::new(5).map(Level::get), Ok(5));
    }

    #[test]
    fn levels_order_simplest_first() {
        assert!(Level::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(Level::ALL[0], Level::MIN);
        assert_eq!(Level::ALL[4], Level::MAX);
    }
}
