// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{ComponentId, DiagramEdge, DiagramNode, FlowDiagram, NodeId};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn node(id: &str, label: &str, component_id: Option<&str>, x: u16, y: u16) -> DiagramNode {
    let mut node = DiagramNode::new(nid(id), label, x, y);
    node.set_component_id(
        component_id.map(|value| ComponentId::new(value).expect("component id")),
    );
    node
}

pub(super) fn diagram() -> FlowDiagram {
    let mut diagram = FlowDiagram::default();

    *diagram.nodes_mut() = vec![
        node("developer", "Developer / QA", None, 50, 5),
        node("config", "playwright.config.ts", Some("config"), 50, 15),
        node("tests", "tests/*.spec.ts", Some("tests"), 20, 30),
        node("pages", "pages/*.ts", Some("pages"), 50, 30),
        node("data", "data/*.json", Some("data"), 80, 30),
        node("utils", "utils/data-helper.ts", Some("utils"), 50, 42),
        node("fixtures", "fixtures/*.ts", Some("fixtures"), 50, 52),
        node("runner", "Playwright Runner", None, 50, 62),
        node("results", "Test Execution Results", Some("artifacts"), 50, 72),
        node("allure-cli", "Allure CLI", Some("allure-generate"), 50, 82),
        node("allure-report", "Allure Report HTML", Some("allure-integration"), 50, 92),
        node("github", "GitHub Actions CI/CD", Some("github-actions"), 50, 102),
        node("artifacts", "CI Artifacts", None, 50, 112),
    ];

    *diagram.edges_mut() = vec![
        DiagramEdge::new(nid("developer"), nid("config")),
        DiagramEdge::new(nid("config"), nid("tests")),
        DiagramEdge::new(nid("config"), nid("pages")),
        DiagramEdge::new(nid("config"), nid("data")),
        DiagramEdge::new(nid("tests"), nid("utils")),
        DiagramEdge::new(nid("pages"), nid("utils")),
        DiagramEdge::new(nid("data"), nid("utils")),
        DiagramEdge::new(nid("utils"), nid("fixtures")),
        DiagramEdge::new(nid("fixtures"), nid("runner")),
        DiagramEdge::new(nid("runner"), nid("results")),
        DiagramEdge::new(nid("results"), nid("allure-cli")),
        DiagramEdge::new(nid("allure-cli"), nid("allure-report")),
        DiagramEdge::new(nid("allure-report"), nid("github")),
        DiagramEdge::new(nid("github"), nid("artifacts")),
    ];

    diagram
}
