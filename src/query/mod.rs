// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pure filtering over catalog collections.
//!
//! Predicates compose category selection with case-insensitive substring
//! search; results are ordered subsequences of the source collection. No side
//! effects, no fuzziness.

pub mod filter;

pub use filter::{filter_components, filter_questions, CategoryFilter};
