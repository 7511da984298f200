// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::category::{Difficulty, QaCategory};

/// An interview question with its prose answer.
///
/// Answers are stored as free text; structure (bullet lists, code spans) is
/// re-derived at render time by [`crate::format::format_answer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewQa {
    id: u32,
    question: String,
    answer: String,
    category: QaCategory,
    difficulty: Difficulty,
}

impl InterviewQa {
    pub fn new(
        id: u32,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: QaCategory,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> QaCategory {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

#[cfg(test)]
mod tests {
    use super::{Difficulty, InterviewQa, QaCategory};

    #[test]
    fn interview_qa_exposes_all_fields() {
        let qa = InterviewQa::new(
            7,
            "What is a fixture?",
            "A reusable setup/teardown mechanism.",
            QaCategory::Implementation,
            Difficulty::Intermediate,
        );

        assert_eq!(qa.id(), 7);
        assert_eq!(qa.question(), "What is a fixture?");
        assert_eq!(qa.answer(), "A reusable setup/teardown mechanism.");
        assert_eq!(qa.category(), QaCategory::Implementation);
        assert_eq!(qa.difficulty(), Difficulty::Intermediate);
    }
}
