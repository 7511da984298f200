// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{
    Catalog, CatalogError, Component, ComponentCategory, ComponentId, DiagramEdge, DiagramNode,
    Difficulty, FlowDiagram, GuideStep, IdError, InterviewQa, NodeId, Practice, PracticeGroup,
    QaCategory,
};

/// A JSON catalog document on disk.
///
/// Loading replaces the built-in dataset wholesale. The store is read-only;
/// nothing in the application writes catalogs back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Catalog, CatalogFileError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| CatalogFileError::Read {
            path: self.path.clone(),
            source,
        })?;

        let doc: CatalogDoc =
            serde_json::from_str(&raw).map_err(|source| CatalogFileError::Parse {
                path: self.path.clone(),
                source,
            })?;

        catalog_from_doc(doc)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogDoc {
    #[serde(default)]
    components: Vec<ComponentDoc>,
    #[serde(default)]
    steps: Vec<GuideStepDoc>,
    #[serde(default)]
    practice_groups: Vec<PracticeGroupDoc>,
    #[serde(default)]
    questions: Vec<QaDoc>,
    #[serde(default)]
    diagram: DiagramDoc,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ComponentDoc {
    id: String,
    title: String,
    short_title: String,
    description: String,
    #[serde(default)]
    details: Vec<String>,
    category: String,
    #[serde(default)]
    code_example: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GuideStepDoc {
    step: u8,
    title: String,
    description: String,
    #[serde(default)]
    commands: Vec<String>,
    #[serde(default)]
    tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PracticeGroupDoc {
    category: String,
    #[serde(default)]
    practices: Vec<PracticeDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PracticeDoc {
    title: String,
    description: String,
    good: String,
    bad: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct QaDoc {
    id: u32,
    question: String,
    answer: String,
    category: String,
    difficulty: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DiagramDoc {
    #[serde(default)]
    nodes: Vec<NodeDoc>,
    #[serde(default)]
    edges: Vec<EdgeDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeDoc {
    id: String,
    label: String,
    #[serde(default)]
    component_id: Option<String>,
    x: u16,
    y: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EdgeDoc {
    from: String,
    to: String,
}

fn catalog_from_doc(doc: CatalogDoc) -> Result<Catalog, CatalogFileError> {
    let mut components = Vec::with_capacity(doc.components.len());
    for component in doc.components {
        components.push(component_from_doc(component)?);
    }

    let mut steps = Vec::with_capacity(doc.steps.len());
    for step_doc in doc.steps {
        let mut step = GuideStep::new(step_doc.step, step_doc.title, step_doc.description);
        step.set_commands(step_doc.commands);
        step.set_tasks(step_doc.tasks);
        steps.push(step);
    }

    let mut practice_groups = Vec::with_capacity(doc.practice_groups.len());
    for group_doc in doc.practice_groups {
        let mut group = PracticeGroup::new(group_doc.category);
        for practice in group_doc.practices {
            group.practices_mut().push(Practice::new(
                practice.title,
                practice.description,
                practice.good,
                practice.bad,
            ));
        }
        practice_groups.push(group);
    }

    let mut questions = Vec::with_capacity(doc.questions.len());
    for qa in doc.questions {
        let category: QaCategory =
            qa.category.parse().map_err(|_| CatalogFileError::InvalidCategory {
                context: "question category",
                value: qa.category.clone(),
            })?;
        let difficulty: Difficulty =
            qa.difficulty.parse().map_err(|_| CatalogFileError::InvalidCategory {
                context: "question difficulty",
                value: qa.difficulty.clone(),
            })?;
        questions.push(InterviewQa::new(qa.id, qa.question, qa.answer, category, difficulty));
    }

    let diagram = diagram_from_doc(doc.diagram)?;

    Catalog::from_parts(components, steps, practice_groups, questions, diagram)
        .map_err(CatalogFileError::Catalog)
}

fn component_from_doc(doc: ComponentDoc) -> Result<Component, CatalogFileError> {
    let id = parse_id(ComponentId::new(doc.id.as_str()), "component id", &doc.id)?;
    let category: ComponentCategory =
        doc.category.parse().map_err(|_| CatalogFileError::InvalidCategory {
            context: "component category",
            value: doc.category.clone(),
        })?;

    let mut component =
        Component::new(id, doc.title, doc.short_title, doc.description, category);
    component.set_details(doc.details);
    component.set_code_example(doc.code_example);
    Ok(component)
}

fn diagram_from_doc(doc: DiagramDoc) -> Result<FlowDiagram, CatalogFileError> {
    let mut diagram = FlowDiagram::default();

    for node_doc in doc.nodes {
        let id = parse_id(NodeId::new(node_doc.id.as_str()), "node id", &node_doc.id)?;
        let mut node = DiagramNode::new(id, node_doc.label, node_doc.x, node_doc.y);
        if let Some(component_id) = node_doc.component_id {
            // A link to an unknown component stays in the data; renderers
            // ignore it. Only malformed ids are rejected.
            let component_id = parse_id(
                ComponentId::new(component_id.as_str()),
                "node component link",
                &component_id,
            )?;
            node.set_component_id(Some(component_id));
        }
        diagram.nodes_mut().push(node);
    }

    for edge_doc in doc.edges {
        let from = parse_id(NodeId::new(edge_doc.from.as_str()), "edge endpoint", &edge_doc.from)?;
        let to = parse_id(NodeId::new(edge_doc.to.as_str()), "edge endpoint", &edge_doc.to)?;
        diagram.edges_mut().push(DiagramEdge::new(from, to));
    }

    Ok(diagram)
}

fn parse_id<T>(
    result: Result<T, IdError>,
    context: &'static str,
    value: &str,
) -> Result<T, CatalogFileError> {
    result.map_err(|source| CatalogFileError::InvalidId {
        context,
        value: value.to_owned(),
        source,
    })
}

#[derive(Debug)]
pub enum CatalogFileError {
    Read {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidId {
        context: &'static str,
        value: String,
        source: IdError,
    },
    InvalidCategory {
        context: &'static str,
        value: String,
    },
    Catalog(CatalogError),
}

impl fmt::Display for CatalogFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read catalog {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse catalog {}: {source}", path.display())
            }
            Self::InvalidId {
                context,
                value,
                source,
            } => write!(f, "invalid {context} {value:?}: {source}"),
            Self::InvalidCategory { context, value } => {
                write!(f, "invalid {context}: {value:?}")
            }
            Self::Catalog(err) => write!(f, "invalid catalog: {err}"),
        }
    }
}

impl std::error::Error for CatalogFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::InvalidCategory { .. } => None,
            Self::Catalog(err) => Some(err),
        }
    }
}

impl From<CatalogError> for CatalogFileError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}
