//! Positioned visual primitives emitted by the neume strategies.

use serde::{Deserialize, Serialize};

use crate::context::LayoutContext;
use crate::geometry::{Point, Rect};
use crate::glyphs::{GlyphCatalog, GlyphCode};
use crate::model::Note;

/// A glyph positioned in neume-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphPlacement {
    pub glyph_code: GlyphCode,
    pub bounds: Rect,
    pub origin: Point,
}

impl GlyphPlacement {
    /// Snapshot of a note's laid-out glyph geometry.
    pub(crate) fn from_note(note: &Note) -> Self {
        Self {
            glyph_code: note.glyph_code,
            bounds: note.bounds,
            origin: note.origin,
        }
    }

    /// Place a glyph with its anchor on the given point.
    pub(crate) fn at(
        ctxt: &LayoutContext,
        catalog: &GlyphCatalog,
        code: GlyphCode,
        x: f64,
        anchor_y: f64,
    ) -> Self {
        let glyph = catalog.glyph(code);
        let origin = Point::new(
            glyph.origin_x * ctxt.glyph_scaling,
            glyph.origin_y * ctxt.glyph_scaling,
        );

        Self {
            glyph_code: code,
            bounds: Rect::new(
                x,
                -origin.y + anchor_y,
                glyph.width * ctxt.glyph_scaling,
                glyph.height * ctxt.glyph_scaling,
            ),
            origin,
        }
    }
}

/// A vertical line bridging two staff positions inside a neume.
///
/// Emitted whenever two adjacent glyph-bearing notes are more than one
/// staff step apart and no swash glyph already encodes the interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectingLine {
    /// Bridged staff positions, sorted ascending.
    pub lower_position: i32,
    pub upper_position: i32,
    /// A hanging line droops past its lower note by a fraction of the
    /// punctum height, for continuations that fall past a notehead.
    pub hanging: bool,
    pub bounds: Rect,
}

impl ConnectingLine {
    /// Build the line between two notes' staff positions. The horizontal
    /// position starts at x = 0; the strategy moves it into place before
    /// handing the line to the builder.
    pub(crate) fn between(ctxt: &LayoutContext, a: &Note, b: &Note, hanging: bool) -> Self {
        let (lower_position, upper_position) = if a.staff_position <= b.staff_position {
            (a.staff_position, b.staff_position)
        } else {
            (b.staff_position, a.staff_position)
        };

        // higher staff position → smaller y
        let y0 = ctxt.height_from_staff_position(upper_position);
        let mut y1 = ctxt.height_from_staff_position(lower_position);

        if hanging {
            y1 += ctxt.hanging_line_extension();
        }

        Self {
            lower_position,
            upper_position,
            hanging,
            bounds: Rect::new(0.0, y0, ctxt.neume_line_weight, y1 - y0),
        }
    }
}

/// A horizontal episema stroke above or below a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisemaLine {
    pub bounds: Rect,
}

/// Discriminated union of everything a laid-out neume can emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Glyph(GlyphPlacement),
    Line(ConnectingLine),
    Episema(EpisemaLine),
}

impl Primitive {
    pub fn bounds(&self) -> &Rect {
        match self {
            Primitive::Glyph(g) => &g.bounds,
            Primitive::Line(l) => &l.bounds,
            Primitive::Episema(e) => &e.bounds,
        }
    }
}
