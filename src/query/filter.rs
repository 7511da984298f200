// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Component, ComponentCategory, Difficulty, InterviewQa, QaCategory};

/// A category selector: everything, or exactly one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<T> {
    All,
    Only(T),
}

impl<T> Default for CategoryFilter<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> CategoryFilter<T> {
    pub fn matches(&self, category: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T> CategoryFilter<T> {
    /// Steps through `all -> variants.. -> all`, the chip-cycling order.
    pub fn cycle(self, variants: &[T]) -> Self
    where
        T: Copy + PartialEq,
    {
        match self {
            Self::All => match variants.first() {
                Some(first) => Self::Only(*first),
                None => Self::All,
            },
            Self::Only(current) => {
                let position = variants.iter().position(|variant| *variant == current);
                match position.and_then(|idx| variants.get(idx + 1)) {
                    Some(next) => Self::Only(*next),
                    None => Self::All,
                }
            }
        }
    }
}

/// Filters component cards by category and case-insensitive substring search
/// over title and description. Source order is preserved; an empty query
/// matches everything.
pub fn filter_components<'a>(
    components: &'a [Component],
    category: CategoryFilter<ComponentCategory>,
    query: &str,
) -> Vec<&'a Component> {
    let needle = query.to_lowercase();
    components
        .iter()
        .filter(|component| category.matches(&component.category()))
        .filter(|component| {
            matches_query(&needle, &[component.title(), component.description()])
        })
        .collect()
}

/// Filters interview questions by category, difficulty, and case-insensitive
/// substring search over question and answer text.
pub fn filter_questions<'a>(
    questions: &'a [InterviewQa],
    category: CategoryFilter<QaCategory>,
    difficulty: CategoryFilter<Difficulty>,
    query: &str,
) -> Vec<&'a InterviewQa> {
    let needle = query.to_lowercase();
    questions
        .iter()
        .filter(|qa| category.matches(&qa.category()))
        .filter(|qa| difficulty.matches(&qa.difficulty()))
        .filter(|qa| matches_query(&needle, &[qa.question(), qa.answer()]))
        .collect()
}

fn matches_query(needle_lower: &str, haystacks: &[&str]) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(needle_lower))
}
