//! Swash-based neumes: porrectus, porrectus flexus, and the torculus
//! resupinus family.
//!
//! The characteristic down-up sweep is a single swash glyph spanning the
//! first interval. The note "inside" the swash keeps a zero-width
//! placeholder glyph: it draws nothing but stays addressable, so edits to
//! it can re-select the swash on the next layout pass.

use log::debug;

use crate::context::LayoutContext;
use crate::geometry::Point;
use crate::glyphs::{GlyphCatalog, GlyphCode};
use crate::model::{Note, NoteShape};

use super::builder::LayoutBuilder;
use super::constants::FLEXUS_LINE_RETREAT;
use super::primitives::{ConnectingLine, Primitive};

/// Swash glyph for a staff-position interval. Only spans of 1–4 exist in
/// the font; anything else degrades to the configured fallback glyph
/// rather than failing the layout.
fn swash_glyph(interval: i32, ctxt: &LayoutContext) -> GlyphCode {
    match interval {
        1 => GlyphCode::Porrectus1,
        2 => GlyphCode::Porrectus2,
        3 => GlyphCode::Porrectus3,
        4 => GlyphCode::Porrectus4,
        _ => {
            debug!(
                "no porrectus swash for interval {interval}, falling back to {:?}",
                ctxt.porrectus_fallback
            );
            ctxt.porrectus_fallback
        }
    }
}

pub(super) fn porrectus(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let interval = notes[0].staff_position - notes[1].staff_position;
    let code = swash_glyph(interval, ctxt);
    notes[0].set_glyph(ctxt, catalog, code);

    // the swash already encodes the descent; the second note is the
    // zero-width placeholder
    notes[1].set_glyph(ctxt, catalog, GlyphCode::None);

    let mut line = ConnectingLine::between(ctxt, &notes[0], &notes[1], true);
    line.bounds.x = notes[0].bounds.x;

    let mut x = notes[0].bounds.right();
    notes[1].bounds.x = x - notes[1].bounds.width;
    x = notes[1].bounds.right();

    out.add(Primitive::Line(line));
    out.add_note(&notes[0]);
    out.add_note(&notes[1]);

    if notes[2].staff_position - notes[1].staff_position > 1 {
        let mut line = ConnectingLine::between(ctxt, &notes[1], &notes[2], false);
        line.bounds.x = x - line.bounds.width;
        out.add(Primitive::Line(line));
    }

    let third_code = if notes[2].is_liquescent() {
        GlyphCode::TerminatingAscLiquescent
    } else {
        GlyphCode::PodatusUpper
    };
    notes[2].set_glyph(ctxt, catalog, third_code);
    notes[2].bounds.x = notes[1].bounds.right() - notes[2].bounds.width;

    out.add_note(&notes[2]);

    notes[0].origin
}

pub(super) fn porrectus_flexus(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let interval = notes[0].staff_position - notes[1].staff_position;
    let code = swash_glyph(interval, ctxt);
    notes[0].set_glyph(ctxt, catalog, code);

    let mut line = ConnectingLine::between(ctxt, &notes[0], &notes[1], true);
    line.bounds.x = notes[0].bounds.x;
    let mut x = notes[0].bounds.right();

    out.add(Primitive::Line(line));
    out.add_note(&notes[0]);

    notes[1].set_glyph(ctxt, catalog, GlyphCode::None);
    notes[1].bounds.x = x;
    x = notes[1].bounds.right();
    out.add_note(&notes[1]);

    if notes[2].staff_position - notes[1].staff_position > 1 {
        let mut line = ConnectingLine::between(ctxt, &notes[1], &notes[2], false);
        x -= line.bounds.width;
        line.bounds.x = x;
        out.add(Primitive::Line(line));
    }

    notes[2].set_glyph(ctxt, catalog, GlyphCode::PunctumCuadratum);
    notes[2].bounds.x = x;
    x = notes[2].bounds.right();
    out.add_note(&notes[2]);

    if notes[2].staff_position - notes[3].staff_position > 1 {
        let mut line = ConnectingLine::between(ctxt, &notes[2], &notes[3], false);
        x -= line.bounds.width;
        line.bounds.x = x;
        out.add(Primitive::Line(line));
    }

    notes[3].set_glyph(ctxt, catalog, GlyphCode::PunctumCuadratum);
    notes[3].bounds.x = x;
    out.add_note(&notes[3]);

    notes[0].origin
}

pub(super) fn torculus_resupinus(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let first_code = match notes[0].shape {
        NoteShape::Quilisma => GlyphCode::Quilisma,
        _ => GlyphCode::PunctumCuadratum,
    };
    notes[0].set_glyph(ctxt, catalog, first_code);

    let mut x = notes[0].bounds.right();
    out.add_note(&notes[0]);

    if notes[1].staff_position - notes[0].staff_position > 1 {
        let mut line = ConnectingLine::between(ctxt, &notes[0], &notes[1], false);
        x -= line.bounds.width;
        line.bounds.x = x;
        out.add(Primitive::Line(line));
    }

    let interval = (notes[1].staff_position - notes[2].staff_position).abs();
    let code = swash_glyph(interval, ctxt);
    notes[1].set_glyph(ctxt, catalog, code);
    notes[1].bounds.x = x;
    x = notes[1].bounds.right();
    out.add_note(&notes[1]);

    notes[2].set_glyph(ctxt, catalog, GlyphCode::None);
    notes[2].bounds.x = x;
    out.add_note(&notes[2]);

    if notes[3].staff_position - notes[2].staff_position > 1 {
        let mut line = ConnectingLine::between(ctxt, &notes[2], &notes[3], false);
        line.bounds.x = x - line.bounds.width;
        out.add(Primitive::Line(line));
    }

    let fourth_code = if notes[3].is_liquescent() {
        GlyphCode::TerminatingAscLiquescent
    } else {
        GlyphCode::PodatusUpper
    };
    notes[3].set_glyph(ctxt, catalog, fourth_code);
    notes[3].bounds.x += x;
    out.add_note(&notes[3]);

    notes[0].origin
}

pub(super) fn torculus_resupinus_flexus(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let first_code = match notes[0].shape {
        NoteShape::Quilisma => GlyphCode::Quilisma,
        _ => GlyphCode::PunctumCuadratum,
    };
    notes[0].set_glyph(ctxt, catalog, first_code);

    let mut x = notes[0].bounds.right();
    out.add_note(&notes[0]);

    if notes[1].staff_position - notes[0].staff_position > 1 {
        let mut line = ConnectingLine::between(ctxt, &notes[0], &notes[1], false);
        x -= line.bounds.width;
        line.bounds.x = x;
        out.add(Primitive::Line(line));
    }

    let interval = notes[1].staff_position - notes[2].staff_position;
    let code = swash_glyph(interval, ctxt);
    notes[1].set_glyph(ctxt, catalog, code);
    notes[1].bounds.x = x;
    x = notes[1].bounds.right();
    out.add_note(&notes[1]);

    notes[2].set_glyph(ctxt, catalog, GlyphCode::None);
    notes[2].bounds.x = x;
    x = notes[2].bounds.right();
    out.add_note(&notes[2]);

    if notes[3].staff_position - notes[2].staff_position > 1 {
        let mut line = ConnectingLine::between(ctxt, &notes[2], &notes[3], false);
        x -= line.bounds.width;
        line.bounds.x = x;
        out.add(Primitive::Line(line));
    }

    notes[3].set_glyph(ctxt, catalog, GlyphCode::PunctumCuadratum);
    notes[3].bounds.x = x;
    x = notes[3].bounds.right();
    out.add_note(&notes[3]);

    if notes[3].staff_position - notes[4].staff_position > 1 {
        let mut line = ConnectingLine::between(ctxt, &notes[3], &notes[4], false);
        x -= line.bounds.width * FLEXUS_LINE_RETREAT;
        line.bounds.x = x;
        out.add(Primitive::Line(line));
    }

    notes[4].set_glyph(ctxt, catalog, GlyphCode::PunctumCuadratum);
    notes[4].bounds.x = x;
    out.add_note(&notes[4]);

    notes[0].origin
}
