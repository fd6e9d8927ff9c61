//! Repeated-note neumes: bivirga, trivirga, distropha, tristropha.
//!
//! All four are the same pitch repeated two or three times; note *k* sits
//! at the sum of the preceding widths plus *k* times the intra-neume
//! spacing.

use crate::context::LayoutContext;
use crate::geometry::Point;
use crate::glyphs::{GlyphCatalog, GlyphCode};
use crate::model::{Note, NoteShape};

use super::builder::LayoutBuilder;
use super::single::virga_glyph;

fn layout_repeated(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
    glyph_for: impl Fn(&Note) -> GlyphCode,
) -> Point {
    let mut x = 0.0;

    for note in notes.iter_mut() {
        let code = glyph_for(note);
        note.set_glyph(ctxt, catalog, code);
        note.bounds.x += x;
        x += note.bounds.width + ctxt.intra_neume_spacing;

        out.add_note(note);
    }

    notes[0].origin
}

fn stropha_glyph(note: &Note) -> GlyphCode {
    if note.shape == NoteShape::Cavum {
        GlyphCode::PunctumCavum
    } else {
        GlyphCode::PunctumCuadratum
    }
}

pub(super) fn bivirga(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    // repeated notes are the same pitch; the first one picks the glyph
    let code = virga_glyph(notes[0].staff_position, ctxt);

    layout_repeated(notes, ctxt, catalog, out, |_| code)
}

pub(super) fn trivirga(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let code = virga_glyph(notes[0].staff_position, ctxt);

    layout_repeated(notes, ctxt, catalog, out, |_| code)
}

pub(super) fn distropha(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    layout_repeated(notes, ctxt, catalog, out, stropha_glyph)
}

pub(super) fn tristropha(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    layout_repeated(notes, ctxt, catalog, out, stropha_glyph)
}
