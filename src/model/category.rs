// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// Grouping tag for framework components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentCategory {
    Core,
    Structure,
    Utilities,
    Reporting,
    Ci,
}

impl ComponentCategory {
    pub const ALL: [Self; 5] = [
        Self::Core,
        Self::Structure,
        Self::Utilities,
        Self::Reporting,
        Self::Ci,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Structure => "structure",
            Self::Utilities => "utilities",
            Self::Reporting => "reporting",
            Self::Ci => "ci",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseComponentCategoryError;

impl fmt::Display for ParseComponentCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid component category")
    }
}

impl std::error::Error for ParseComponentCategoryError {}

impl FromStr for ComponentCategory {
    type Err = ParseComponentCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(Self::Core),
            "structure" => Ok(Self::Structure),
            "utilities" => Ok(Self::Utilities),
            "reporting" => Ok(Self::Reporting),
            "ci" => Ok(Self::Ci),
            _ => Err(ParseComponentCategoryError),
        }
    }
}

/// Grouping tag for interview questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QaCategory {
    Architecture,
    Implementation,
    BestPractices,
    Advanced,
    Troubleshooting,
}

impl QaCategory {
    pub const ALL: [Self; 5] = [
        Self::Architecture,
        Self::Implementation,
        Self::BestPractices,
        Self::Advanced,
        Self::Troubleshooting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::Implementation => "implementation",
            Self::BestPractices => "best-practices",
            Self::Advanced => "advanced",
            Self::Troubleshooting => "troubleshooting",
        }
    }

    /// Human label with the `-` separator spelled out, as shown on filter chips.
    pub fn label(self) -> &'static str {
        match self {
            Self::BestPractices => "best practices",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for QaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQaCategoryError;

impl fmt::Display for ParseQaCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid question category")
    }
}

impl std::error::Error for ParseQaCategoryError {}

impl FromStr for QaCategory {
    type Err = ParseQaCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "architecture" => Ok(Self::Architecture),
            "implementation" => Ok(Self::Implementation),
            "best-practices" => Ok(Self::BestPractices),
            "advanced" => Ok(Self::Advanced),
            "troubleshooting" => Ok(Self::Troubleshooting),
            _ => Err(ParseQaCategoryError),
        }
    }
}

/// Difficulty tag for interview questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError;

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid difficulty")
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ParseDifficultyError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ComponentCategory, Difficulty, QaCategory};

    #[test]
    fn component_category_roundtrips_via_str() {
        for category in ComponentCategory::ALL {
            let parsed: ComponentCategory = category.as_str().parse().expect("parse");
            assert_eq!(parsed, category);
            assert_eq!(parsed.to_string(), category.as_str());
        }
    }

    #[test]
    fn qa_category_roundtrips_via_str() {
        for category in QaCategory::ALL {
            let parsed: QaCategory = category.as_str().parse().expect("parse");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn qa_category_label_spells_out_separator() {
        assert_eq!(QaCategory::BestPractices.label(), "best practices");
        assert_eq!(QaCategory::Architecture.label(), "architecture");
    }

    #[test]
    fn difficulty_roundtrips_via_str() {
        for difficulty in Difficulty::ALL {
            let parsed: Difficulty = difficulty.as_str().parse().expect("parse");
            assert_eq!(parsed, difficulty);
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert!("bogus".parse::<ComponentCategory>().is_err());
        assert!("best practices".parse::<QaCategory>().is_err());
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
