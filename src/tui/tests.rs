// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::KeyCode;

use super::testing::HeadlessTui;
use super::{
    clamp_scroll, follow_axis, step_index, step_scroll, styled_line_segments, wrap_text, Route,
    SearchMode,
};
use crate::content::builtin_catalog;
use crate::model::ComponentCategory;
use crate::query::CategoryFilter;
use crate::tui::theme::ThemeMode;

fn tui() -> HeadlessTui {
    HeadlessTui::new(builtin_catalog(), Route::Home)
}

#[test]
fn number_keys_open_pages() {
    let mut tui = tui();
    tui.press(KeyCode::Char('3'));
    assert_eq!(tui.app().context.route(), Route::Implementation);

    tui.press(KeyCode::Char('5'));
    assert_eq!(tui.app().context.route(), Route::Interview);

    tui.press(KeyCode::Char('1'));
    assert_eq!(tui.app().context.route(), Route::Home);
}

#[test]
fn tab_cycles_through_pages_and_wraps() {
    let mut tui = tui();
    for expected in [
        Route::Components,
        Route::Implementation,
        Route::BestPractices,
        Route::Interview,
        Route::Home,
    ] {
        tui.press(KeyCode::Tab);
        assert_eq!(tui.app().context.route(), expected);
    }

    tui.press(KeyCode::BackTab);
    assert_eq!(tui.app().context.route(), Route::Interview);
}

#[test]
fn navigation_discards_view_selection_state() {
    let mut tui = tui();
    tui.press(KeyCode::Char('2'));
    tui.press(KeyCode::Char('/'));
    for ch in "login".chars() {
        tui.press(KeyCode::Char(ch));
    }
    tui.press(KeyCode::Enter);
    assert_eq!(tui.app().views.components.search, "login");

    tui.press(KeyCode::Char('1'));
    tui.press(KeyCode::Char('2'));
    assert_eq!(tui.app().views.components.search, "");
    assert!(tui.app().views.components.expanded.is_empty());
}

#[test]
fn theme_toggle_flips_mode_and_sets_a_toast() {
    let mut tui = tui();
    assert_eq!(tui.app().context.theme_mode(), ThemeMode::Dark);
    tui.press(KeyCode::Char('t'));
    assert_eq!(tui.app().context.theme_mode(), ThemeMode::Light);
    assert!(tui.app().toast.is_some());
    tui.press(KeyCode::Char('t'));
    assert_eq!(tui.app().context.theme_mode(), ThemeMode::Dark);
}

#[test]
fn search_editing_consumes_ordinary_key_bindings() {
    let mut tui = tui();
    tui.press(KeyCode::Char('2'));
    tui.press(KeyCode::Char('/'));
    assert_eq!(tui.app().views.components.search_mode, SearchMode::Editing);

    // `q` must type into the query, not quit.
    assert!(!tui.press(KeyCode::Char('q')));
    assert_eq!(tui.app().views.components.search, "q");

    tui.press(KeyCode::Esc);
    assert_eq!(tui.app().views.components.search, "");
    assert_eq!(tui.app().views.components.search_mode, SearchMode::Inactive);
}

#[test]
fn search_is_case_insensitive_through_the_view() {
    let mut tui = tui();
    tui.press(KeyCode::Char('5'));

    tui.app_mut().views.interview.search = "LOGIN".to_owned();
    let upper: Vec<u32> = tui.app().filtered_questions().iter().map(|qa| qa.id()).collect();

    tui.app_mut().views.interview.search = "login".to_owned();
    let lower: Vec<u32> = tui.app().filtered_questions().iter().map(|qa| qa.id()).collect();

    assert_eq!(upper, lower);
    assert!(!upper.is_empty());
}

#[test]
fn category_cycle_narrows_the_component_list() {
    let mut tui = tui();
    tui.press(KeyCode::Char('2'));
    tui.press(KeyCode::Char('c'));

    assert_eq!(
        tui.app().views.components.category,
        CategoryFilter::Only(ComponentCategory::Core)
    );
    let filtered = tui.app().filtered_components();
    assert!(!filtered.is_empty());
    assert!(filtered
        .iter()
        .all(|component| component.category() == ComponentCategory::Core));
}

#[test]
fn enter_toggles_question_expansion() {
    let mut tui = tui();
    tui.press(KeyCode::Char('5'));

    tui.press(KeyCode::Enter);
    let first_id = tui.app().filtered_questions()[0].id();
    assert!(tui.app().views.interview.expanded.contains(&first_id));

    tui.press(KeyCode::Enter);
    assert!(!tui.app().views.interview.expanded.contains(&first_id));
}

#[test]
fn selecting_the_config_node_resolves_its_component() {
    let mut tui = tui();

    // Node order: developer (unlinked) first, then config.
    tui.press(KeyCode::Char('j'));
    tui.press(KeyCode::Enter);

    let selected = tui.app().views.home.selected_node.clone().expect("selection");
    assert_eq!(selected.as_str(), "config");

    let component = tui.app().selected_home_component().expect("component");
    assert_eq!(component.title(), "Playwright Test Runner & Config");
}

#[test]
fn unlinked_nodes_are_not_selectable() {
    let mut tui = tui();

    // Cursor starts on the developer node, which has no component link.
    tui.press(KeyCode::Enter);
    assert!(tui.app().views.home.selected_node.is_none());
}

#[test]
fn escape_clears_the_home_selection() {
    let mut tui = tui();
    tui.press(KeyCode::Char('j'));
    tui.press(KeyCode::Enter);
    assert!(tui.app().views.home.selected_node.is_some());

    tui.press(KeyCode::Esc);
    assert!(tui.app().views.home.selected_node.is_none());
}

#[test]
fn q_requests_quit_outside_of_search() {
    let mut tui = tui();
    assert!(tui.press(KeyCode::Char('q')));
}

#[test]
fn help_overlay_captures_navigation_keys() {
    let mut tui = tui();
    tui.press(KeyCode::Char('?'));
    assert!(tui.app().show_help);

    tui.press(KeyCode::Char('3'));
    assert_eq!(tui.app().context.route(), Route::Home);

    tui.press(KeyCode::Char('?'));
    assert!(!tui.app().show_help);

    tui.press(KeyCode::Char('3'));
    assert_eq!(tui.app().context.route(), Route::Implementation);
}

#[test]
fn cursor_movement_clamps_at_the_ends() {
    let mut tui = tui();
    tui.press(KeyCode::Char('k'));
    assert_eq!(tui.app().views.home.cursor, 0);

    let node_count = tui.app().catalog.diagram().nodes().len();
    tui.press(KeyCode::Char('G'));
    assert_eq!(tui.app().views.home.cursor, node_count - 1);

    tui.press(KeyCode::Char('j'));
    assert_eq!(tui.app().views.home.cursor, node_count - 1);

    tui.press(KeyCode::Char('g'));
    assert_eq!(tui.app().views.home.cursor, 0);
}

#[test]
fn wrap_text_wraps_by_words_and_preserves_line_breaks() {
    assert_eq!(wrap_text("one two three", 8), vec!["one two", "three"]);
    assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
    assert_eq!(wrap_text("", 10), vec![""]);
}

#[test]
fn wrap_text_hard_splits_oversized_words() {
    assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
}

#[test]
fn styled_line_segments_splits_ranges() {
    use ratatui::style::{Color, Style};

    let base = Style::default();
    let accent = Style::default().fg(Color::Cyan);
    let line = styled_line_segments("abcdef", &[(2, 3, accent)], base);

    let spans: Vec<(String, Style)> = line
        .spans
        .iter()
        .map(|span| (span.content.to_string(), span.style))
        .collect();
    assert_eq!(
        spans,
        vec![
            ("ab".to_owned(), base),
            ("cd".to_owned(), accent),
            ("ef".to_owned(), base),
        ]
    );
}

#[test]
fn scroll_helpers_stay_in_bounds() {
    assert_eq!(step_index(0, -1, 5), 0);
    assert_eq!(step_index(4, 1, 5), 4);
    assert_eq!(step_index(2, 1, 5), 3);

    assert_eq!(step_scroll(0, -3), 0);
    assert_eq!(step_scroll(u16::MAX, 10), u16::MAX);

    assert_eq!(clamp_scroll(50, 10, 5), 5);
    assert_eq!(clamp_scroll(2, 100, 5), 2);

    // Already visible: unchanged. Below viewport: scrolls down just enough.
    assert_eq!(follow_axis(0, 2, 4, 10), 0);
    assert_eq!(follow_axis(0, 12, 14, 10), 5);
    assert_eq!(follow_axis(8, 2, 4, 10), 2);
}
