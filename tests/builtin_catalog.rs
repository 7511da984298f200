// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Invariants of the shipped dataset, checked through the public surface.

use std::collections::BTreeSet;

use rstest::rstest;

use proteus::content::builtin_catalog;
use proteus::format::{format_answer, AnswerBody};
use proteus::model::{ComponentCategory, ComponentId, NodeId};
use proteus::query::{filter_components, filter_questions, CategoryFilter};
use proteus::render::{render_diagram_unicode_annotated, RenderOptions};

#[test]
fn ids_are_unique_within_each_collection() {
    let catalog = builtin_catalog();

    let component_ids: BTreeSet<&str> = catalog
        .components()
        .iter()
        .map(|component| component.id().as_str())
        .collect();
    assert_eq!(component_ids.len(), catalog.components().len());

    let question_ids: BTreeSet<u32> =
        catalog.questions().iter().map(|qa| qa.id()).collect();
    assert_eq!(question_ids.len(), catalog.questions().len());

    let node_ids: BTreeSet<&str> = catalog
        .diagram()
        .nodes()
        .iter()
        .map(|node| node.id().as_str())
        .collect();
    assert_eq!(node_ids.len(), catalog.diagram().nodes().len());
}

#[test]
fn all_category_and_empty_query_return_everything_in_order() {
    let catalog = builtin_catalog();

    let filtered = filter_components(catalog.components(), CategoryFilter::All, "");
    assert_eq!(filtered.len(), catalog.components().len());
    for (kept, original) in filtered.iter().zip(catalog.components()) {
        assert_eq!(kept.id(), original.id());
    }

    let questions =
        filter_questions(catalog.questions(), CategoryFilter::All, CategoryFilter::All, "");
    assert_eq!(questions.len(), catalog.questions().len());
}

#[rstest]
#[case(ComponentCategory::Core, 2)]
#[case(ComponentCategory::Structure, 5)]
#[case(ComponentCategory::Utilities, 5)]
#[case(ComponentCategory::Reporting, 3)]
#[case(ComponentCategory::Ci, 2)]
fn category_filtering_partitions_the_components(
    #[case] category: ComponentCategory,
    #[case] expected: usize,
) {
    let catalog = builtin_catalog();
    let filtered =
        filter_components(catalog.components(), CategoryFilter::Only(category), "");
    assert_eq!(filtered.len(), expected);
    assert!(filtered.iter().all(|component| component.category() == category));
}

#[test]
fn search_is_case_insensitive_over_the_dataset() {
    let catalog = builtin_catalog();

    let upper = filter_components(catalog.components(), CategoryFilter::All, "ALLURE");
    let lower = filter_components(catalog.components(), CategoryFilter::All, "allure");
    assert!(!upper.is_empty());
    assert_eq!(
        upper.iter().map(|c| c.id().as_str()).collect::<Vec<_>>(),
        lower.iter().map(|c| c.id().as_str()).collect::<Vec<_>>()
    );
}

#[test]
fn config_node_selection_resolves_to_the_config_component() {
    let catalog = builtin_catalog();

    let node_id = NodeId::new("config").expect("node id");
    let node = catalog.diagram().node(&node_id).expect("config node");
    assert_eq!(node.id().as_str(), "config");

    let component_id = node.component_id().expect("component link");
    let component = catalog.component(component_id).expect("component");
    assert_eq!(component.title(), "Playwright Test Runner & Config");
}

#[test]
fn diagram_renders_every_node_with_a_selectable_span() {
    let catalog = builtin_catalog();
    let annotated = render_diagram_unicode_annotated(
        catalog.diagram(),
        RenderOptions { mark_linked: true },
    )
    .expect("render");

    for node in catalog.diagram().nodes() {
        assert!(
            annotated.text.contains(node.label()),
            "label missing from render: {}",
            node.label()
        );
        assert!(
            annotated.highlight_index.contains_key(node.id()),
            "no spans for node {}",
            node.id()
        );
    }
}

#[test]
fn dangling_diagram_references_are_ignored_at_render_time() {
    let catalog = builtin_catalog();
    let mut diagram = catalog.diagram().clone();
    let ghost = NodeId::new("ghost").expect("node id");
    diagram
        .edges_mut()
        .push(proteus::model::DiagramEdge::new(ghost.clone(), ghost));

    let baseline = render_diagram_unicode_annotated(catalog.diagram(), RenderOptions::default())
        .expect("render");
    let with_dangling =
        render_diagram_unicode_annotated(&diagram, RenderOptions::default()).expect("render");
    assert_eq!(baseline.text, with_dangling.text);
}

#[test]
fn unknown_component_lookup_is_silently_empty() {
    let catalog = builtin_catalog();
    let id = ComponentId::new("not-a-component").expect("component id");
    assert!(catalog.component(&id).is_none());
}

#[rstest]
#[case::plain_prose(1)]
#[case::marker_without_code_span(8)]
fn prose_answers_format_as_paragraphs(#[case] id: u32) {
    let catalog = builtin_catalog();
    let qa = catalog.question(id).expect("question");
    match format_answer(qa.answer()) {
        AnswerBody::Paragraph(text) => assert_eq!(text, qa.answer()),
        other => panic!("Q{id}: expected paragraph, got {other:?}"),
    }
}

#[rstest]
#[case(6, 7)]
#[case(12, 9)]
#[case(18, 7)]
fn enumerated_answers_format_as_bullets(#[case] id: u32, #[case] expected_items: usize) {
    let catalog = builtin_catalog();
    let qa = catalog.question(id).expect("question");
    match format_answer(qa.answer()) {
        AnswerBody::Bullets { intro, items } => {
            assert!(!intro.is_empty());
            assert_eq!(items.len(), expected_items, "Q{id}");
            // Markers are stripped from the items.
            assert!(items.iter().all(|item| !item.starts_with(|ch: char| ch.is_ascii_digit())));
        }
        other => panic!("Q{id}: expected bullets, got {other:?}"),
    }
}

#[rstest]
#[case(3, "export class LoginPage")]
#[case(11, "test.use(")]
fn code_bearing_answers_format_as_code_blocks(#[case] id: u32, #[case] code_prefix: &str) {
    let catalog = builtin_catalog();
    let qa = catalog.question(id).expect("question");
    match format_answer(qa.answer()) {
        AnswerBody::CodeBlock { text, code } => {
            assert!(!text.is_empty(), "Q{id}");
            assert!(code.starts_with(code_prefix), "Q{id}: code was {code:?}");
        }
        other => panic!("Q{id}: expected code block, got {other:?}"),
    }
}
