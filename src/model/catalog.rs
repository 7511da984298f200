// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use super::component::Component;
use super::diagram::FlowDiagram;
use super::guide::GuideStep;
use super::ids::ComponentId;
use super::practice::PracticeGroup;
use super::qa::InterviewQa;

/// The top-level read-only container the TUI runs against.
///
/// Assembled once at startup (built-in dataset or catalog file) and never
/// mutated afterwards. Collections keep their authored order; views derive
/// filtered subsequences from them without copying records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    components: Vec<Component>,
    steps: Vec<GuideStep>,
    practice_groups: Vec<PracticeGroup>,
    questions: Vec<InterviewQa>,
    diagram: FlowDiagram,
}

impl Catalog {
    /// Assembles a catalog, rejecting duplicate ids within a collection.
    ///
    /// Dangling diagram links (`component_id` or edge endpoints that resolve
    /// to nothing) are allowed here; renderers skip them silently.
    pub fn from_parts(
        components: Vec<Component>,
        steps: Vec<GuideStep>,
        practice_groups: Vec<PracticeGroup>,
        questions: Vec<InterviewQa>,
        diagram: FlowDiagram,
    ) -> Result<Self, CatalogError> {
        let mut component_ids = BTreeSet::new();
        for component in &components {
            if !component_ids.insert(component.id().clone()) {
                return Err(CatalogError::DuplicateComponentId {
                    id: component.id().as_str().to_owned(),
                });
            }
        }

        let mut question_ids = BTreeSet::new();
        for question in &questions {
            if !question_ids.insert(question.id()) {
                return Err(CatalogError::DuplicateQuestionId { id: question.id() });
            }
        }

        let mut node_ids = BTreeSet::new();
        for node in diagram.nodes() {
            if !node_ids.insert(node.id().clone()) {
                return Err(CatalogError::DuplicateNodeId {
                    id: node.id().as_str().to_owned(),
                });
            }
        }

        Ok(Self {
            components,
            steps,
            practice_groups,
            questions,
            diagram,
        })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn steps(&self) -> &[GuideStep] {
        &self.steps
    }

    pub fn practice_groups(&self) -> &[PracticeGroup] {
        &self.practice_groups
    }

    pub fn questions(&self) -> &[InterviewQa] {
        &self.questions
    }

    pub fn diagram(&self) -> &FlowDiagram {
        &self.diagram
    }

    pub fn component(&self, component_id: &ComponentId) -> Option<&Component> {
        self.components.iter().find(|component| component.id() == component_id)
    }

    pub fn question(&self, id: u32) -> Option<&InterviewQa> {
        self.questions.iter().find(|question| question.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateComponentId { id: String },
    DuplicateQuestionId { id: u32 },
    DuplicateNodeId { id: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateComponentId { id } => write!(f, "duplicate component id: {id}"),
            Self::DuplicateQuestionId { id } => write!(f, "duplicate question id: {id}"),
            Self::DuplicateNodeId { id } => write!(f, "duplicate diagram node id: {id}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};
    use crate::model::{
        Component, ComponentCategory, ComponentId, DiagramNode, FlowDiagram, NodeId,
    };

    fn component(id: &str) -> Component {
        Component::new(
            ComponentId::new(id).expect("component id"),
            "Title",
            "short",
            "Description.",
            ComponentCategory::Core,
        )
    }

    #[test]
    fn from_parts_accepts_unique_ids() {
        let catalog = Catalog::from_parts(
            vec![component("config"), component("tests")],
            Vec::new(),
            Vec::new(),
            Vec::new(),
            FlowDiagram::default(),
        )
        .expect("catalog");

        let id = ComponentId::new("tests").expect("component id");
        assert_eq!(catalog.component(&id).map(|c| c.id().as_str()), Some("tests"));
        assert!(catalog.component(&ComponentId::new("nope").expect("id")).is_none());
    }

    #[test]
    fn from_parts_rejects_duplicate_component_ids() {
        let err = Catalog::from_parts(
            vec![component("config"), component("config")],
            Vec::new(),
            Vec::new(),
            Vec::new(),
            FlowDiagram::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            CatalogError::DuplicateComponentId {
                id: "config".to_owned()
            }
        );
    }

    #[test]
    fn from_parts_rejects_duplicate_node_ids() {
        let mut diagram = FlowDiagram::default();
        let nid = NodeId::new("runner").expect("node id");
        diagram.nodes_mut().push(DiagramNode::new(nid.clone(), "Runner", 50, 10));
        diagram.nodes_mut().push(DiagramNode::new(nid, "Runner again", 50, 20));

        let err = Catalog::from_parts(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            diagram,
        )
        .unwrap_err();

        assert_eq!(
            err,
            CatalogError::DuplicateNodeId {
                id: "runner".to_owned()
            }
        );
    }
}
