// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::category::ComponentCategory;
use super::ids::ComponentId;

/// A framework building block rendered as an expandable card.
///
/// Records are immutable once the catalog is assembled; the setters exist for
/// catalog construction only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: ComponentId,
    title: String,
    short_title: String,
    description: String,
    details: Vec<String>,
    category: ComponentCategory,
    code_example: Option<String>,
}

impl Component {
    pub fn new(
        id: ComponentId,
        title: impl Into<String>,
        short_title: impl Into<String>,
        description: impl Into<String>,
        category: ComponentCategory,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            short_title: short_title.into(),
            description: description.into(),
            details: Vec::new(),
            category,
            code_example: None,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn short_title(&self) -> &str {
        &self.short_title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn category(&self) -> ComponentCategory {
        self.category
    }

    pub fn code_example(&self) -> Option<&str> {
        self.code_example.as_deref()
    }

    pub fn set_details(&mut self, details: Vec<String>) {
        self.details = details;
    }

    pub fn set_code_example<T: Into<String>>(&mut self, code_example: Option<T>) {
        self.code_example = code_example.map(Into::into);
    }
}
