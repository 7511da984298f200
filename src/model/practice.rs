// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A single do/don't pair within a best-practice group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Practice {
    title: String,
    description: String,
    good: String,
    bad: String,
}

impl Practice {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        good: impl Into<String>,
        bad: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            good: good.into(),
            bad: bad.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn good(&self) -> &str {
        &self.good
    }

    pub fn bad(&self) -> &str {
        &self.bad
    }
}

/// A themed group of practices rendered as one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeGroup {
    category: String,
    practices: Vec<Practice>,
}

impl PracticeGroup {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            practices: Vec::new(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn practices(&self) -> &[Practice] {
        &self.practices
    }

    pub fn practices_mut(&mut self) -> &mut Vec<Practice> {
        &mut self.practices
    }
}
