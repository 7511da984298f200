// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{ComponentId, NodeId};

/// The architecture flow diagram: a fixed node/edge graph.
///
/// Node positions are layout data, not computed; `x` lives in `0..=100`,
/// `y` in `0..=120` (the coordinate space of the authored diagram). Nodes and
/// edges render in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlowDiagram {
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
}

impl FlowDiagram {
    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut Vec<DiagramNode> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut Vec<DiagramEdge> {
        &mut self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&DiagramNode> {
        self.nodes.iter().find(|node| node.id() == node_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    id: NodeId,
    label: String,
    component_id: Option<ComponentId>,
    x: u16,
    y: u16,
}

impl DiagramNode {
    pub fn new(id: NodeId, label: impl Into<String>, x: u16, y: u16) -> Self {
        Self {
            id,
            label: label.into(),
            component_id: None,
            x,
            y,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The component card this node links to, if any. A dangling link is a
    /// data error tolerated at render time, not rejected here.
    pub fn component_id(&self) -> Option<&ComponentId> {
        self.component_id.as_ref()
    }

    pub fn set_component_id(&mut self, component_id: Option<ComponentId>) {
        self.component_id = component_id;
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramEdge {
    from: NodeId,
    to: NodeId,
}

impl DiagramEdge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> &NodeId {
        &self.from
    }

    pub fn to(&self) -> &NodeId {
        &self.to
    }
}

#[cfg(test)]
mod tests {
    use super::{DiagramEdge, DiagramNode, FlowDiagram};
    use crate::model::{ComponentId, NodeId};

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    #[test]
    fn diagram_lookup_finds_nodes_by_id() {
        let mut diagram = FlowDiagram::default();
        let mut node = DiagramNode::new(nid("config"), "framework.config.ts", 50, 15);
        node.set_component_id(Some(ComponentId::new("config").expect("component id")));
        diagram.nodes_mut().push(node);
        diagram.nodes_mut().push(DiagramNode::new(nid("runner"), "Runner", 50, 62));
        diagram.edges_mut().push(DiagramEdge::new(nid("config"), nid("runner")));

        let found = diagram.node(&nid("config")).expect("node");
        assert_eq!(found.label(), "framework.config.ts");
        assert_eq!(found.component_id().map(|id| id.as_str()), Some("config"));
        assert_eq!((found.x(), found.y()), (50, 15));

        assert!(diagram.node(&nid("missing")).is_none());
        assert_eq!(diagram.edges().len(), 1);
        assert_eq!(diagram.edges()[0].from(), &nid("config"));
        assert_eq!(diagram.edges()[0].to(), &nid("runner"));
    }
}
