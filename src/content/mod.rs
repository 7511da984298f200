// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The built-in handbook dataset.
//!
//! Defined at process start, never mutated. A catalog file (see
//! [`crate::store`]) can replace it wholesale; there is no merging.

mod components;
mod diagram;
mod guide;
mod practices;
mod questions;

use crate::model::Catalog;

/// Assembles the shipped dataset into a catalog.
pub fn builtin_catalog() -> Catalog {
    Catalog::from_parts(
        components::components(),
        guide::steps(),
        practices::practice_groups(),
        questions::questions(),
        diagram::diagram(),
    )
    .expect("builtin catalog is valid")
}

#[cfg(test)]
mod tests {
    use super::builtin_catalog;
    use crate::model::ComponentId;

    #[test]
    fn builtin_catalog_has_the_expected_collection_sizes() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.components().len(), 17);
        assert_eq!(catalog.steps().len(), 10);
        assert_eq!(catalog.practice_groups().len(), 7);
        assert_eq!(catalog.questions().len(), 20);
        assert_eq!(catalog.diagram().nodes().len(), 13);
        assert_eq!(catalog.diagram().edges().len(), 14);
    }

    #[test]
    fn diagram_component_links_resolve_to_components() {
        let catalog = builtin_catalog();
        for node in catalog.diagram().nodes() {
            if let Some(component_id) = node.component_id() {
                assert!(
                    catalog.component(component_id).is_some(),
                    "node {} links to missing component {component_id}",
                    node.id()
                );
            }
        }
    }

    #[test]
    fn diagram_edges_reference_existing_nodes() {
        let catalog = builtin_catalog();
        for edge in catalog.diagram().edges() {
            assert!(catalog.diagram().node(edge.from()).is_some());
            assert!(catalog.diagram().node(edge.to()).is_some());
        }
    }

    #[test]
    fn config_component_carries_its_title() {
        let catalog = builtin_catalog();
        let id = ComponentId::new("config").expect("component id");
        let component = catalog.component(&id).expect("component");
        assert_eq!(component.title(), "Playwright Test Runner & Config");
    }
}
