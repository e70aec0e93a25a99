//! Closed set of category tags used to group corpus entities.
//!
//! Categories are mostly body systems, plus the two content families that
//! are not tied to a single system (genetics, pharmacogenomics). The
//! `Unclassified` tag is reserved for synthesized fallbacks; curated
//! records may use it, but the doctor report will not flag that.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Category tag of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Cardiovascular,
    Respiratory,
    Digestive,
    Nervous,
    Urinary,
    Endocrine,
    Musculoskeletal,
    Integumentary,
    Reproductive,
    Immune,
    Lymphatic,
    Sensory,
    Genetics,
    Pharmacogenomics,
    /// Sentinel for synthesized entities.
    Unclassified,
}

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Category; 15] = [
        Category::Cardiovascular,
        Category::Respiratory,
        Category::Digestive,
        Category::Nervous,
        Category::Urinary,
        Category::Endocrine,
        Category::Musculoskeletal,
        Category::Integumentary,
        Category::Reproductive,
        Category::Immune,
        Category::Lymphatic,
        Category::Sensory,
        Category::Genetics,
        Category::Pharmacogenomics,
        Category::Unclassified,
    ];

    /// Returns the tag as it appears in corpus files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cardiovascular => "cardiovascular",
            Category::Respiratory => "respiratory",
            Category::Digestive => "digestive",
            Category::Nervous => "nervous",
            Category::Urinary => "urinary",
            Category::Endocrine => "endocrine",
            Category::Musculoskeletal => "musculoskeletal",
            Category::Integumentary => "integumentary",
            Category::Reproductive => "reproductive",
            Category::Immune => "immune",
            Category::Lymphatic => "lymphatic",
            Category::Sensory => "sensory",
            Category::Genetics => "genetics",
            Category::Pharmacogenomics => "pharmacogenomics",
            Category::Unclassified => "unclassified",
        }
    }

    /// Returns a display label for UI grouping.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cardiovascular => "Cardiovascular System",
            Category::Respiratory => "Respiratory System",
            Category::Digestive => "Digestive System",
            Category::Nervous => "Nervous System",
            Category::Urinary => "Urinary System",
            Category::Endocrine => "Endocrine System",
            Category::Musculoskeletal => "Musculoskeletal System",
            Category::Integumentary => "Integumentary System",
            Category::Reproductive => "Reproductive System",
            Category::Immune => "Immune System",
            Category::Lymphatic => "Lymphatic System",
            Category::Sensory => "Sensory Organs",
            Category::Genetics => "Genetic Conditions",
            Category::Pharmacogenomics => "Pharmacogenomics",
            Category::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    /// Parse a category tag (case-insensitive, `_` and spaces accepted for `-`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "cardiovascular" => Ok(Category::Cardiovascular),
            "respiratory" => Ok(Category::Respiratory),
            "digestive" => Ok(Category::Digestive),
            "nervous" => Ok(Category::Nervous),
            "urinary" => Ok(Category::Urinary),
            "endocrine" => Ok(Category::Endocrine),
            "musculoskeletal" => Ok(Category::Musculoskeletal),
            "integumentary" => Ok(Category::Integumentary),
            "reproductive" => Ok(Category::Reproductive),
            "immune" => Ok(Category::Immune),
            "lymphatic" => Ok(Category::Lymphatic),
            "sensory" => Ok(Category::Sensory),
            "genetics" => Ok(Category::Genetics),
            "pharmacogenomics" => Ok(Category::Pharmacogenomics),
            "unclassified" => Ok(Category::Unclassified),
            _ => Err(ModelError::InvalidCategory(s.to_string())),
        }
    }
}
