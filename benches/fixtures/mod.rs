// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use proteus::model::{
    Catalog, Component, ComponentCategory, ComponentId, DiagramEdge, DiagramNode, FlowDiagram,
    NodeId,
};

/// Catalog sizes used as stable bench cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Builtin,
    WideSynthetic,
}

pub fn catalog(case: Case) -> Catalog {
    match case {
        Case::Builtin => proteus::content::builtin_catalog(),
        Case::WideSynthetic => synthetic_catalog(400),
    }
}

/// A synthetic catalog with `count` components and a chain diagram, sized to
/// exercise filtering and rendering beyond the shipped dataset.
fn synthetic_catalog(count: usize) -> Catalog {
    let categories = ComponentCategory::ALL;

    let components: Vec<Component> = (0..count)
        .map(|idx| {
            let id = ComponentId::new(format!("component-{idx}")).expect("component id");
            let mut component = Component::new(
                id,
                format!("Component {idx}"),
                format!("component-{idx}.ts"),
                format!("Synthetic record number {idx} describing a framework layer."),
                categories[idx % categories.len()],
            );
            component.set_details(vec![
                format!("Detail alpha for {idx}"),
                format!("Detail beta for {idx}"),
            ]);
            component
        })
        .collect();

    let mut diagram = FlowDiagram::default();
    let nodes = 40.min(count);
    for idx in 0..nodes {
        let node_id = NodeId::new(format!("node-{idx}")).expect("node id");
        let x = 10 + ((idx % 3) as u16) * 35;
        let y = 5 + (idx as u16 / 3) * 10;
        diagram
            .nodes_mut()
            .push(DiagramNode::new(node_id, format!("node {idx}"), x, y));
    }
    for idx in 1..nodes {
        let from = NodeId::new(format!("node-{}", idx - 1)).expect("node id");
        let to = NodeId::new(format!("node-{idx}")).expect("node id");
        diagram.edges_mut().push(DiagramEdge::new(from, to));
    }

    Catalog::from_parts(components, Vec::new(), Vec::new(), Vec::new(), diagram)
        .expect("synthetic catalog")
}
