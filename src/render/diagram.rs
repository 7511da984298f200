// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use smallvec::SmallVec;

use crate::model::{DiagramNode, FlowDiagram, NodeId};

use super::text::{canvas_to_string_trimmed, text_len, truncate_with_ellipsis};
use super::{
    clamp_highlight_index_to_text, AnnotatedRender, Canvas, CanvasError, HighlightIndex,
    LineSpan, RenderOptions, UNICODE_ARROW_DOWN, UNICODE_BOX_BOTTOM_LEFT,
    UNICODE_BOX_BOTTOM_RIGHT, UNICODE_BOX_HORIZONTAL, UNICODE_BOX_TOP_LEFT,
    UNICODE_BOX_TOP_RIGHT, UNICODE_BOX_VERTICAL,
};

const BOX_HEIGHT: usize = 3;
const MIN_BOX_INNER_WIDTH: usize = 8;
const MAX_LABEL_LEN: usize = 28;
const LINKED_MARKER: char = '↗';
const MAX_CANVAS_DIM: usize = 4096;

/// Renders the diagram to plain text with default options.
pub fn render_diagram_unicode(diagram: &FlowDiagram) -> Result<String, DiagramRenderError> {
    render_diagram_unicode_annotated(diagram, RenderOptions::default())
        .map(|annotated| annotated.text)
}

/// Renders the diagram and returns the text plus a highlight index mapping
/// each node id to the cell spans its box occupies.
///
/// Positions come straight from node data (`x` column, `y / 2 + 1` row
/// center); nothing is computed beyond scaling. Edges whose endpoints do not
/// resolve to a node are skipped silently, per the catalog's tolerance for
/// dangling references.
pub fn render_diagram_unicode_annotated(
    diagram: &FlowDiagram,
    options: RenderOptions,
) -> Result<AnnotatedRender, DiagramRenderError> {
    if diagram.nodes().is_empty() {
        return Ok(AnnotatedRender {
            text: String::new(),
            highlight_index: HighlightIndex::new(),
        });
    }

    let boxes: Vec<(&DiagramNode, NodeBox)> = diagram
        .nodes()
        .iter()
        .map(|node| (node, NodeBox::for_node(node, options.mark_linked)))
        .collect();

    let width = boxes.iter().map(|(_, nb)| nb.x1 + 2).max().unwrap_or(0);
    let height = boxes.iter().map(|(_, nb)| nb.y1 + 2).max().unwrap_or(0);
    if width > MAX_CANVAS_DIM || height > MAX_CANVAS_DIM {
        return Err(DiagramRenderError::CanvasTooLarge { width, height });
    }

    let mut canvas = Canvas::new(width, height)?;

    let by_id: BTreeMap<&NodeId, &NodeBox> =
        boxes.iter().map(|(node, nb)| (node.id(), nb)).collect();

    // Edges draw first so node boxes paint over anything crossing them.
    for edge in diagram.edges() {
        let (Some(from), Some(to)) = (by_id.get(edge.from()), by_id.get(edge.to())) else {
            continue;
        };
        draw_edge(&mut canvas, from, to)?;
    }

    let mut highlight_index = HighlightIndex::new();
    for (node, nb) in &boxes {
        nb.draw(&mut canvas)?;

        let mut spans: SmallVec<[LineSpan; BOX_HEIGHT]> = SmallVec::new();
        for y in nb.y0..=nb.y1 {
            spans.push((y, nb.x0, nb.x1));
        }
        highlight_index.insert(node.id().clone(), spans.into_vec());
    }

    let text = canvas_to_string_trimmed(&canvas);
    clamp_highlight_index_to_text(&mut highlight_index, &text);

    Ok(AnnotatedRender {
        text,
        highlight_index,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeBox {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    label: String,
}

impl NodeBox {
    fn for_node(node: &DiagramNode, mark_linked: bool) -> Self {
        let mut label = truncate_with_ellipsis(node.label(), MAX_LABEL_LEN);
        if mark_linked && node.component_id().is_some() {
            label.push(' ');
            label.push(LINKED_MARKER);
        }

        let inner = text_len(&label).max(MIN_BOX_INNER_WIDTH) + 2;
        let width = inner + 2;
        let center_x = usize::from(node.x());
        let center_y = usize::from(node.y()) / 2 + 1;

        let x0 = center_x.saturating_sub(width / 2);
        let y0 = center_y.saturating_sub(1);
        Self {
            x0,
            y0,
            x1: x0 + width - 1,
            y1: y0 + BOX_HEIGHT - 1,
            label,
        }
    }

    fn center_x(&self) -> usize {
        (self.x0 + self.x1) / 2
    }

    fn draw(&self, canvas: &mut Canvas) -> Result<(), CanvasError> {
        canvas.draw_rect(self.x0, self.y0, self.x1, self.y1)?;
        let label_row = self.y0 + 1;
        for x in self.x0 + 1..self.x1 {
            canvas.set(x, label_row, ' ')?;
        }
        let inner = self.x1 - self.x0 - 1;
        let pad = inner.saturating_sub(text_len(&self.label)) / 2;
        canvas.draw_text(self.x0 + 1 + pad, label_row, &self.label)
    }
}

fn draw_edge(canvas: &mut Canvas, from: &NodeBox, to: &NodeBox) -> Result<(), CanvasError> {
    let fx = from.center_x();
    let tx = to.center_x();
    let start = from.y1 + 1;
    let Some(end) = to.y0.checked_sub(1) else {
        return Ok(());
    };
    if end < start {
        // No vertical room between the boxes; omit the connector.
        return Ok(());
    }

    if fx == tx {
        for y in start..end {
            canvas.put_box(fx, y, UNICODE_BOX_VERTICAL)?;
        }
        return canvas.set(tx, end, UNICODE_ARROW_DOWN);
    }

    let mid = (start + end) / 2;
    for y in start..mid {
        canvas.put_box(fx, y, UNICODE_BOX_VERTICAL)?;
    }

    let (left, right) = (fx.min(tx), fx.max(tx));
    for x in left + 1..right {
        canvas.put_box(x, mid, UNICODE_BOX_HORIZONTAL)?;
    }
    if tx > fx {
        canvas.put_box(fx, mid, UNICODE_BOX_BOTTOM_LEFT)?;
        canvas.put_box(tx, mid, UNICODE_BOX_TOP_RIGHT)?;
    } else {
        canvas.put_box(fx, mid, UNICODE_BOX_BOTTOM_RIGHT)?;
        canvas.put_box(tx, mid, UNICODE_BOX_TOP_LEFT)?;
    }

    for y in mid + 1..end {
        canvas.put_box(tx, y, UNICODE_BOX_VERTICAL)?;
    }
    canvas.set(tx, end, UNICODE_ARROW_DOWN)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramRenderError {
    Canvas(CanvasError),
    CanvasTooLarge { width: usize, height: usize },
}

impl fmt::Display for DiagramRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
            Self::CanvasTooLarge { width, height } => {
                write!(f, "diagram canvas too large: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for DiagramRenderError {}

impl From<CanvasError> for DiagramRenderError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{render_diagram_unicode, render_diagram_unicode_annotated, DiagramRenderError};
    use crate::model::{ComponentId, DiagramEdge, DiagramNode, FlowDiagram, NodeId};
    use crate::render::RenderOptions;

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn fixture_diagram() -> FlowDiagram {
        let mut diagram = FlowDiagram::default();

        let mut config = DiagramNode::new(nid("config"), "framework.config.ts", 40, 5);
        config.set_component_id(Some(ComponentId::new("config").expect("component id")));
        diagram.nodes_mut().push(config);
        diagram.nodes_mut().push(DiagramNode::new(nid("tests"), "tests/*.spec.ts", 20, 20));
        diagram.nodes_mut().push(DiagramNode::new(nid("data"), "data/*.json", 60, 20));
        diagram.nodes_mut().push(DiagramNode::new(nid("runner"), "Runner", 40, 35));

        diagram.edges_mut().push(DiagramEdge::new(nid("config"), nid("tests")));
        diagram.edges_mut().push(DiagramEdge::new(nid("config"), nid("data")));
        diagram.edges_mut().push(DiagramEdge::new(nid("tests"), nid("runner")));
        diagram.edges_mut().push(DiagramEdge::new(nid("data"), nid("runner")));

        diagram
    }

    #[test]
    fn empty_diagram_renders_to_empty_text() {
        let annotated =
            render_diagram_unicode_annotated(&FlowDiagram::default(), RenderOptions::default())
                .expect("render");
        assert!(annotated.text.is_empty());
        assert!(annotated.highlight_index.is_empty());
    }

    #[test]
    fn nodes_render_their_labels_inside_boxes() {
        let text = render_diagram_unicode(&fixture_diagram()).expect("render");
        assert!(text.contains("framework.config.ts"));
        assert!(text.contains("tests/*.spec.ts"));
        assert!(text.contains('┌'));
        assert!(text.contains('▼'));
    }

    #[test]
    fn highlight_index_covers_each_node_box() {
        let annotated =
            render_diagram_unicode_annotated(&fixture_diagram(), RenderOptions::default())
                .expect("render");
        let lines: Vec<&str> = annotated.text.split('\n').collect();

        assert_eq!(annotated.highlight_index.len(), 4);
        let spans = annotated.highlight_index.get(&nid("config")).expect("spans");
        assert_eq!(spans.len(), 3);

        let (top_y, top_x0, _) = spans[0];
        let top_left = lines[top_y].chars().nth(top_x0).expect("cell");
        assert_eq!(top_left, '┌');
    }

    #[test]
    fn dangling_edge_endpoints_are_skipped_silently() {
        let mut diagram = fixture_diagram();
        diagram.edges_mut().push(DiagramEdge::new(nid("config"), nid("missing")));
        diagram.edges_mut().push(DiagramEdge::new(nid("ghost"), nid("runner")));

        let with_dangling = render_diagram_unicode(&diagram).expect("render");
        let without = render_diagram_unicode(&fixture_diagram()).expect("render");
        assert_eq!(with_dangling, without);
    }

    #[test]
    fn straight_edge_points_an_arrow_at_the_target_top() {
        let annotated =
            render_diagram_unicode_annotated(&fixture_diagram(), RenderOptions::default())
                .expect("render");
        let lines: Vec<&str> = annotated.text.split('\n').collect();

        let spans = annotated.highlight_index.get(&nid("runner")).expect("spans");
        let (top_y, x0, x1) = spans[0];
        let arrow_row = lines[top_y - 1];
        let has_arrow = arrow_row
            .chars()
            .enumerate()
            .any(|(x, ch)| x >= x0 && x <= x1 && ch == '▼');
        assert!(has_arrow, "expected ▼ above runner, got: {arrow_row:?}");
    }

    #[test]
    fn linked_nodes_are_marked_when_requested() {
        let annotated = render_diagram_unicode_annotated(
            &fixture_diagram(),
            RenderOptions { mark_linked: true },
        )
        .expect("render");
        assert!(annotated.text.contains("framework.config.ts ↗"));
        assert!(!annotated.text.contains("Runner ↗"));
    }

    #[test]
    fn absurd_coordinates_are_rejected_as_too_large() {
        let mut diagram = FlowDiagram::default();
        diagram.nodes_mut().push(DiagramNode::new(nid("far"), "Far", 9000, 9000));

        let err = render_diagram_unicode(&diagram).unwrap_err();
        assert!(matches!(err, DiagramRenderError::CanvasTooLarge { .. }));
    }
}
