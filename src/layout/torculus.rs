//! Three-note arch and climb neumes: torculus, scandicus, and the
//! scandicus flexus.

use crate::context::LayoutContext;
use crate::geometry::Point;
use crate::glyphs::{GlyphCatalog, GlyphCode};
use crate::model::{Note, NoteShape};

use super::builder::LayoutBuilder;
use super::primitives::{ConnectingLine, Primitive};

/// Torculus: low–high–low, three punctums in a row. An ascending line
/// joins the first pair and a descending line the second pair, each only
/// when its interval exceeds one step.
pub(super) fn torculus(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    for note in notes.iter_mut() {
        note.set_glyph(ctxt, catalog, GlyphCode::PunctumCuadratum);
    }

    let pos1 = notes[0].staff_position;
    let pos2 = notes[1].staff_position;
    let pos3 = notes[2].staff_position;

    let mut x = notes[0].bounds.right();

    if pos2 - pos1 > 1 {
        let mut line = ConnectingLine::between(ctxt, &notes[0], &notes[1], false);
        x -= line.bounds.width;
        line.bounds.x = x;
        out.add(Primitive::Line(line));
    }

    notes[1].bounds.x = x;
    x += notes[1].bounds.width;

    if pos2 - pos3 > 1 {
        let mut line = ConnectingLine::between(ctxt, &notes[1], &notes[2], false);
        x -= line.bounds.width;
        line.bounds.x = x;
        out.add(Primitive::Line(line));
    }

    notes[2].bounds.x = x;

    out.add_note(&notes[0]);
    out.add_note(&notes[1]);
    out.add_note(&notes[2]);

    notes[0].origin
}

/// Pick the podatus pair that closes a scandicus: liquescent pair when
/// either note is liquescent, quilisma override on the middle note.
fn scandicus_pair(second: &Note, third: &Note) -> (GlyphCode, GlyphCode) {
    let (mut second_code, third_code) = if second.is_liquescent() || third.is_liquescent() {
        (
            GlyphCode::BeginningAscLiquescent,
            GlyphCode::TerminatingAscLiquescent,
        )
    } else {
        (GlyphCode::PodatusLower, GlyphCode::PodatusUpper)
    };

    if second.shape == NoteShape::Quilisma {
        second_code = GlyphCode::Quilisma;
    }

    (second_code, third_code)
}

/// Scandicus: a punctum stepping up into a podatus.
pub(super) fn scandicus(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let (second_code, third_code) = scandicus_pair(&notes[1], &notes[2]);

    notes[0].set_glyph(ctxt, catalog, GlyphCode::PunctumCuadratum);
    notes[1].set_glyph(ctxt, catalog, second_code);
    notes[2].set_glyph(ctxt, catalog, third_code);

    notes[1].bounds.x = notes[0].bounds.right();

    let mut line = ConnectingLine::between(ctxt, &notes[1], &notes[2], false);
    line.bounds.x = notes[1].bounds.right() - line.bounds.width;
    notes[2].bounds.x = notes[1].bounds.right() - notes[2].bounds.width;

    out.add_note(&notes[0]);
    out.add_note(&notes[1]);
    out.add(Primitive::Line(line));
    out.add_note(&notes[2]);

    notes[0].origin
}

/// Scandicus flexus: a scandicus falling back to a final punctum, with a
/// descending line before it when the drop exceeds one step.
pub(super) fn scandicus_flexus(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let (second_code, third_code) = scandicus_pair(&notes[1], &notes[2]);

    notes[0].set_glyph(ctxt, catalog, GlyphCode::PunctumCuadratum);
    notes[1].set_glyph(ctxt, catalog, second_code);
    notes[2].set_glyph(ctxt, catalog, third_code);
    notes[3].set_glyph(ctxt, catalog, GlyphCode::PunctumCuadratum);

    notes[1].bounds.x = notes[0].bounds.right();

    let mut line = ConnectingLine::between(ctxt, &notes[1], &notes[2], false);
    line.bounds.x = notes[1].bounds.right() - line.bounds.width;
    notes[2].bounds.x = notes[1].bounds.right() - notes[2].bounds.width;

    let mut fourth_x = notes[2].bounds.right();

    if notes[2].staff_position - notes[3].staff_position > 1 {
        let mut extra = ConnectingLine::between(ctxt, &notes[2], &notes[3], false);
        fourth_x -= extra.bounds.width;
        extra.bounds.x = fourth_x;
        out.add(Primitive::Line(extra));
    }

    notes[3].bounds.x = fourth_x;

    out.add_note(&notes[0]);
    out.add_note(&notes[1]);
    out.add(Primitive::Line(line));
    out.add_note(&notes[2]);
    out.add_note(&notes[3]);

    notes[0].origin
}
