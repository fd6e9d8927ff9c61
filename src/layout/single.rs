//! Single-note neumes: punctum, virga, apostropha, oriscus, and the
//! text-only placeholder.

use crate::context::LayoutContext;
use crate::geometry::Point;
use crate::glyphs::{GlyphCatalog, GlyphCode};
use crate::model::{LiquescentType, Note, NoteShape};

use super::builder::LayoutBuilder;
use super::primitives::{GlyphPlacement, Primitive};

/// Virga glyph by staff position: long on lines (odd positions), short in
/// spaces. The optional low-position override forces the short glyph near
/// the bottom of the staff. Shared with the climacus and bivirga family.
pub(super) fn virga_glyph(staff_position: i32, ctxt: &LayoutContext) -> GlyphCode {
    if let Some(threshold) = ctxt.short_virga_below {
        if staff_position <= threshold {
            return GlyphCode::VirgaShort;
        }
    }

    if (staff_position % 2).abs() == 1 {
        GlyphCode::VirgaLong
    } else {
        GlyphCode::VirgaShort
    }
}

pub(super) fn punctum(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let note = &mut notes[0];

    let code = if note.is_liquescent() {
        if note.shape == NoteShape::Inclinatum {
            GlyphCode::PunctumInclinatumLiquescent
        } else {
            GlyphCode::PunctumCuadratumAscLiquescent
        }
    } else {
        match note.shape {
            NoteShape::Cavum => GlyphCode::PunctumCavum,
            NoteShape::Inclinatum => GlyphCode::PunctumInclinatum,
            NoteShape::Quilisma => GlyphCode::Quilisma,
            _ => GlyphCode::PunctumCuadratum,
        }
    };

    note.set_glyph(ctxt, catalog, code);
    out.add_note(note);

    note.origin
}

pub(super) fn virga(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let note = &mut notes[0];

    let code = virga_glyph(note.staff_position, ctxt);
    note.set_glyph(ctxt, catalog, code);
    out.add_note(note);

    note.origin
}

pub(super) fn apostropha(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let note = &mut notes[0];

    let code = if note.liquescent != LiquescentType::None {
        GlyphCode::ApostrophaLiquescent
    } else {
        GlyphCode::Apostropha
    };

    note.set_glyph(ctxt, catalog, code);
    out.add_note(note);

    note.origin
}

pub(super) fn oriscus(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let note = &mut notes[0];

    let code = if note.shape == NoteShape::OriscusAscending {
        GlyphCode::OriscusAsc
    } else {
        GlyphCode::OriscusDes
    };

    note.set_glyph(ctxt, catalog, code);
    out.add_note(note);

    note.origin
}

/// A lyric syllable without notes still occupies a slot on the staff; an
/// empty placeholder glyph keeps the layout protocol uniform.
pub(super) fn text_only(
    _notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    out.add(Primitive::Glyph(GlyphPlacement::at(
        ctxt,
        catalog,
        GlyphCode::None,
        0.0,
        0.0,
    )));

    Point::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virga_is_long_on_lines_and_short_in_spaces() {
        let ctxt = LayoutContext::default();

        assert_eq!(virga_glyph(3, &ctxt), GlyphCode::VirgaLong);
        assert_eq!(virga_glyph(-1, &ctxt), GlyphCode::VirgaLong);
        assert_eq!(virga_glyph(2, &ctxt), GlyphCode::VirgaShort);
        assert_eq!(virga_glyph(0, &ctxt), GlyphCode::VirgaShort);
    }

    #[test]
    fn low_position_override_forces_the_short_virga() {
        let ctxt = LayoutContext {
            short_virga_below: Some(-1),
            ..LayoutContext::default()
        };

        assert_eq!(virga_glyph(-1, &ctxt), GlyphCode::VirgaShort);
        assert_eq!(virga_glyph(-3, &ctxt), GlyphCode::VirgaShort);
        assert_eq!(virga_glyph(1, &ctxt), GlyphCode::VirgaLong);
    }
}
