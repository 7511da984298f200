// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for the architecture diagram.
//!
//! The renderer produces Unicode/ASCII text plus a stable highlight index the
//! TUI uses for cell-accurate node selection and cursor highlighting. Node
//! coordinates are data; there is no layout algorithm.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::NodeId;

pub mod diagram;
mod text;

pub use diagram::{render_diagram_unicode, render_diagram_unicode_annotated, DiagramRenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Tag nodes that link to a component card so they read as selectable.
    pub mark_linked: bool,
}

/// A contiguous span of cells within a single rendered line.
///
/// Coordinates are `(y, x0, x1)` in character-cell indices, inclusive,
/// relative to the returned rendered text lines.
pub type LineSpan = (usize, usize, usize);

/// Mapping from node ids to the spans occupied by that node's box.
pub type HighlightIndex = BTreeMap<NodeId, Vec<LineSpan>>;

/// Render output plus an index suitable for stable, cell-accurate UI
/// highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRender {
    pub text: String,
    pub highlight_index: HighlightIndex,
}

pub(crate) fn clamp_highlight_index_to_text(highlight_index: &mut HighlightIndex, text: &str) {
    let line_lens: Vec<usize> = text.split('\n').map(text::text_len).collect();

    highlight_index.retain(|_, spans| {
        spans.retain_mut(|span| {
            let (y, x0, x1) = span;

            let len = match line_lens.get(*y) {
                Some(len) => *len,
                None => return false,
            };

            if len == 0 || *x0 >= len {
                return false;
            }

            let max_x = len - 1;
            if *x1 > max_x {
                *x1 = max_x;
            }

            *x0 <= *x1
        });
        !spans.is_empty()
    });
}

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';
pub const UNICODE_ARROW_DOWN: char = '▼';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn box_edges_from_char(ch: char) -> Option<BoxEdges> {
    match ch {
        UNICODE_BOX_HORIZONTAL => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT)),
        UNICODE_BOX_VERTICAL => Some(BoxEdges::UP.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::DOWN)),
        UNICODE_BOX_BOTTOM_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::UP)),
        UNICODE_BOX_BOTTOM_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::UP)),
        UNICODE_BOX_TEE_RIGHT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::RIGHT)),
        UNICODE_BOX_TEE_LEFT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::LEFT)),
        UNICODE_BOX_TEE_DOWN => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::DOWN)),
        UNICODE_BOX_TEE_UP => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::UP)),
        UNICODE_BOX_CROSS => Some(
            BoxEdges::LEFT
                .union(BoxEdges::RIGHT)
                .union(BoxEdges::UP)
                .union(BoxEdges::DOWN),
        ),
        _ => None,
    }
}

fn box_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        // Empty shouldn't normally occur for box cells; treat as blank.
        0 => ' ',
        // Straight segments (including endpoints).
        1..=3 => UNICODE_BOX_HORIZONTAL,
        4 | 8 | 12 => UNICODE_BOX_VERTICAL,
        // Corners.
        10 => UNICODE_BOX_TOP_LEFT,
        9 => UNICODE_BOX_TOP_RIGHT,
        6 => UNICODE_BOX_BOTTOM_LEFT,
        5 => UNICODE_BOX_BOTTOM_RIGHT,
        // Tees.
        14 => UNICODE_BOX_TEE_RIGHT,
        13 => UNICODE_BOX_TEE_LEFT,
        11 => UNICODE_BOX_TEE_DOWN,
        7 => UNICODE_BOX_TEE_UP,
        // Cross.
        15 => UNICODE_BOX_CROSS,
        // Unreachable with 4 bits; keep a deterministic fallback.
        _ => UNICODE_BOX_CROSS,
    }
}

/// A fixed-size, bounds-checked character grid.
///
/// Collision behavior is deterministic:
/// - non-box characters overwrite (last writer wins)
/// - Unicode box-drawing characters merge into junctions (`┼`, `├`, `┤`,
///   `┬`, `┴`) instead of overwriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    box_edges: Vec<BoxEdges>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![' '; len],
            box_edges: vec![BoxEdges::NONE; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the character at `(x, y)`, or `None` out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Writes `ch` at `(x, y)`, overwriting whatever is there.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self
            .index(x, y)
            .ok_or(CanvasError::OutOfBounds { x, y })?;
        self.cells[idx] = ch;
        self.box_edges[idx] = box_edges_from_char(ch).unwrap_or(BoxEdges::NONE);
        Ok(())
    }

    /// Writes a box-drawing character at `(x, y)`, merging with any
    /// box-drawing character already present.
    pub fn put_box(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self
            .index(x, y)
            .ok_or(CanvasError::OutOfBounds { x, y })?;

        let incoming = match box_edges_from_char(ch) {
            Some(edges) => edges,
            None => return self.set(x, y, ch),
        };

        let merged = self.box_edges[idx].union(incoming);
        self.cells[idx] = if self.box_edges[idx].is_empty() {
            ch
        } else {
            box_char_from_edges(merged)
        };
        self.box_edges[idx] = merged;
        Ok(())
    }

    /// Draws a rectangle border with corners at `(x0, y0)` and `(x1, y1)`,
    /// both inclusive.
    pub fn draw_rect(
        &mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    ) -> Result<(), CanvasError> {
        // Corner cells only get their corner edges, so corners of adjacent
        // rects merge into tees instead of crosses.
        for x in x0 + 1..x1 {
            self.put_box(x, y0, UNICODE_BOX_HORIZONTAL)?;
            self.put_box(x, y1, UNICODE_BOX_HORIZONTAL)?;
        }
        for y in y0 + 1..y1 {
            self.put_box(x0, y, UNICODE_BOX_VERTICAL)?;
            self.put_box(x1, y, UNICODE_BOX_VERTICAL)?;
        }
        self.put_box(x0, y0, UNICODE_BOX_TOP_LEFT)?;
        self.put_box(x1, y0, UNICODE_BOX_TOP_RIGHT)?;
        self.put_box(x0, y1, UNICODE_BOX_BOTTOM_LEFT)?;
        self.put_box(x1, y1, UNICODE_BOX_BOTTOM_RIGHT)?;
        Ok(())
    }

    /// Writes `text` starting at `(x, y)`, clipped at the right edge.
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        if y >= self.height {
            return Err(CanvasError::OutOfBounds { x, y });
        }
        for (offset, ch) in text.chars().enumerate() {
            let cell_x = x + offset;
            if cell_x >= self.width {
                break;
            }
            self.set(cell_x, y, ch)?;
        }
        Ok(())
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        self.in_bounds(x, y).then_some(y * self.width + x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}x{height}")
            }
            Self::OutOfBounds { x, y } => write!(f, "canvas write out of bounds: ({x}, {y})"),
        }
    }
}

impl std::error::Error for CanvasError {}
