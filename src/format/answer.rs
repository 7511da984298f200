// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use memchr::memmem;
use regex::{Regex, RegexBuilder};

/// Structured rendition of a free-text answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerBody {
    /// Verbatim prose, embedded line breaks preserved.
    Paragraph(String),
    /// Intro prose followed by the enumerated sub-points with their
    /// `<n>)` markers stripped.
    Bullets { intro: String, items: Vec<String> },
    /// Prose followed by a code-shaped span rendered preformatted.
    /// `text` may be empty when the whole answer matched as code.
    CodeBlock { text: String, code: String },
}

/// Substrings that mark an answer as carrying an inline code span.
const CODE_MARKERS: [&str; 5] = [
    "export class",
    "expect.extend",
    "test.use",
    "npx playwright",
    "playwright.config.ts",
];

fn numbered_marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\d+\)").expect("numbered marker regex"))
}

fn item_prefix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d+\)\s?").expect("item prefix regex"))
}

fn code_span_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        RegexBuilder::new(
            r"(export .*|expect\.extend\(.*|test\.use\(.*|npx playwright .*|const .*= .*);?",
        )
        .dot_matches_new_line(true)
        .build()
        .expect("code span regex")
    })
}

/// Restructures a free-text answer for display.
///
/// This is a presentation heuristic tuned to the shipped dataset, not a
/// parser: enumerated sub-points (`1)`, `2)`, ...) become a bullet list,
/// a trailing code-shaped span becomes a preformatted block, and anything
/// else renders verbatim. No segmentation guarantee is made for arbitrary
/// new answer text; unmatched input always falls back to paragraph mode.
pub fn format_answer(raw: &str) -> AnswerBody {
    if let Some(segments) = numbered_segments(raw) {
        let mut segments = segments.into_iter();
        let intro = segments.next().unwrap_or_default();
        let items = segments
            .map(|segment| item_prefix_regex().replace(&segment, "").into_owned())
            .collect();
        return AnswerBody::Bullets { intro, items };
    }

    let has_code_marker = CODE_MARKERS
        .iter()
        .any(|marker| memmem::find(raw.as_bytes(), marker.as_bytes()).is_some());
    if has_code_marker {
        if let Some(found) = code_span_regex().find(raw) {
            return AnswerBody::CodeBlock {
                text: raw[..found.start()].trim().to_owned(),
                code: found.as_str().trim().to_owned(),
            };
        }
    }

    AnswerBody::Paragraph(raw.to_owned())
}

/// Splits `raw` at every `<n>)` marker site (a single immediately-preceding
/// whitespace character belongs to the boundary). Returns `None` unless the
/// text carries at least two markers.
fn numbered_segments(raw: &str) -> Option<Vec<String>> {
    let matches: Vec<usize> = numbered_marker_regex()
        .find_iter(raw)
        .map(|found| found.start())
        .collect();
    if matches.len() < 2 {
        return None;
    }

    let mut boundaries = Vec::with_capacity(matches.len());
    for start in matches {
        let boundary = raw[..start]
            .chars()
            .next_back()
            .filter(|ch| ch.is_whitespace())
            .map(|ch| start - ch.len_utf8())
            .unwrap_or(start);
        if boundaries.last() != Some(&boundary) {
            boundaries.push(boundary);
        }
    }

    let mut segments = Vec::with_capacity(boundaries.len() + 1);
    let mut cursor = 0;
    for boundary in boundaries.into_iter().chain([raw.len()]) {
        if boundary <= cursor {
            continue;
        }
        let piece = raw[cursor..boundary].trim();
        if !piece.is_empty() {
            segments.push(piece.to_owned());
        }
        cursor = boundary;
    }

    Some(segments)
}

#[cfg(test)]
mod tests {
    use super::{format_answer, AnswerBody};

    #[test]
    fn plain_prose_renders_verbatim_as_paragraph() {
        let raw = "The Page Object Model is a design pattern.\nIt separates concerns.";
        assert_eq!(format_answer(raw), AnswerBody::Paragraph(raw.to_owned()));
    }

    #[test]
    fn leading_marker_run_keeps_first_segment_as_intro() {
        let body = format_answer("1) A 2) B 3) C");
        match body {
            AnswerBody::Bullets { intro, items } => {
                assert_eq!(intro, "1) A");
                assert_eq!(items, vec!["B".to_owned(), "C".to_owned()]);
            }
            other => panic!("expected bullets, got {other:?}"),
        }
    }

    #[test]
    fn prose_before_markers_becomes_the_intro() {
        let body = format_answer("Best practices include: 1) Prefer roles, 2) Avoid brittle selectors.");
        match body {
            AnswerBody::Bullets { intro, items } => {
                assert_eq!(intro, "Best practices include:");
                assert_eq!(
                    items,
                    vec![
                        "Prefer roles,".to_owned(),
                        "Avoid brittle selectors.".to_owned(),
                    ]
                );
            }
            other => panic!("expected bullets, got {other:?}"),
        }
    }

    #[test]
    fn single_marker_is_not_enough_to_split() {
        let raw = "Only one 1) item appears here.";
        assert_eq!(format_answer(raw), AnswerBody::Paragraph(raw.to_owned()));
    }

    #[test]
    fn code_marker_extracts_trailing_code_span() {
        let raw = "A Page Object class encapsulates locators. For example: export class LoginPage { readonly page: Page; }";
        match format_answer(raw) {
            AnswerBody::CodeBlock { text, code } => {
                assert_eq!(text, "A Page Object class encapsulates locators. For example:");
                assert!(code.starts_with("export class LoginPage"));
                assert!(code.ends_with('}'));
            }
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn code_extraction_spans_embedded_line_breaks() {
        let raw = "Reuse auth state:\ntest.use({ storageState: \"auth.json\" });\nand keep tests isolated.";
        match format_answer(raw) {
            AnswerBody::CodeBlock { text, code } => {
                assert_eq!(text, "Reuse auth state:");
                assert!(code.starts_with("test.use("));
                // Greedy match runs to the end of the answer.
                assert!(code.ends_with("isolated."));
            }
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn numbered_split_wins_over_code_markers() {
        let raw = "Steps: 1) run npx playwright install, 2) configure playwright.config.ts.";
        match format_answer(raw) {
            AnswerBody::Bullets { intro, items } => {
                assert_eq!(intro, "Steps:");
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected bullets, got {other:?}"),
        }
    }

    #[test]
    fn marker_without_extractable_span_falls_back_to_paragraph() {
        let raw = "Update playwright.config.ts reporters before rerunning.";
        // `playwright.config.ts` is a code marker but nothing matches the
        // extraction pattern, so the text renders as-is.
        assert_eq!(format_answer(raw), AnswerBody::Paragraph(raw.to_owned()));
    }
}
