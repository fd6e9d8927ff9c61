//! Ascending two-note neumes: podatus, pes quassus, and the pes
//! subpunctis (a podatus with a trailing descending run).

use crate::context::LayoutContext;
use crate::geometry::Point;
use crate::glyphs::{GlyphCatalog, GlyphCode};
use crate::model::{LiquescentType, Note, NoteShape};

use super::builder::LayoutBuilder;
use super::clivis::layout_inclinati;
use super::constants::RUN_LEAD_IN;
use super::primitives::{ConnectingLine, Primitive};

/// Glyph pair and overhang flag for a podatus, keyed by the liquescent
/// classification of the two notes. Overhang is suppressed whenever the
/// upper glyph has to sit flush against the connecting line instead of
/// right-aligning over the lower note.
fn podatus_glyphs(lower: &Note, upper: &Note) -> (GlyphCode, GlyphCode, bool) {
    if lower.liquescent == LiquescentType::InitioDebilis {
        let upper_code = if upper.liquescent == LiquescentType::None {
            GlyphCode::PunctumCuadratum
        } else {
            GlyphCode::PunctumCuadratumDesLiquescent
        };

        return (GlyphCode::TerminatingDesLiquescent, upper_code, false);
    }

    match upper.liquescent {
        LiquescentType::LargeAscending => (
            GlyphCode::PunctumCuadratum,
            GlyphCode::PunctumCuadratumAscLiquescent,
            false,
        ),
        LiquescentType::LargeDescending => (
            GlyphCode::PunctumCuadratum,
            GlyphCode::PunctumCuadratumDesLiquescent,
            false,
        ),
        LiquescentType::SmallAscending => (
            GlyphCode::BeginningAscLiquescent,
            GlyphCode::TerminatingAscLiquescent,
            true,
        ),
        _ => (GlyphCode::PodatusLower, GlyphCode::PodatusUpper, true),
    }
}

pub(super) fn podatus(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let (head, tail) = notes.split_at_mut(1);
    let lower = &mut head[0];
    let upper = &mut tail[0];

    let (mut lower_code, upper_code, overhang) = podatus_glyphs(lower, upper);

    // a quilisma pes replaces the lower glyph
    if lower.shape == NoteShape::Quilisma {
        lower_code = GlyphCode::Quilisma;
    }

    upper.set_glyph(ctxt, catalog, upper_code);
    lower.set_glyph(ctxt, catalog, lower_code);

    let mut line = ConnectingLine::between(ctxt, lower, upper, false);
    line.bounds.x = lower.bounds.right() - line.bounds.width;

    if overhang {
        upper.bounds.x += lower.bounds.right() - upper.bounds.width;
    } else {
        upper.bounds.x += lower.bounds.right() - line.bounds.width;
    }

    out.add_note(lower);
    out.add(Primitive::Line(line));
    out.add_note(upper);

    lower.origin
}

/// Pes quassus: an oriscus (or punctum) rising to a punctum, the two
/// glyphs side by side. A wide interval gets a line on each side of the
/// upper note — plain before it, hanging after it.
pub(super) fn pes_quassus(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let (head, tail) = notes.split_at_mut(1);
    let lower = &mut head[0];
    let upper = &mut tail[0];

    let lower_code = if lower.shape == NoteShape::OriscusAscending {
        GlyphCode::OriscusAsc
    } else {
        GlyphCode::PunctumCuadratum
    };
    let upper_code = if upper.liquescent == LiquescentType::LargeDescending {
        GlyphCode::PunctumCuadratumDesLiquescent
    } else {
        GlyphCode::PunctumCuadratum
    };

    lower.set_glyph(ctxt, catalog, lower_code);
    upper.set_glyph(ctxt, catalog, upper_code);

    out.add_note(lower);

    let mut x = lower.bounds.right();
    let needs_lines = upper.staff_position - lower.staff_position > 1;

    if needs_lines {
        let mut line = ConnectingLine::between(ctxt, lower, upper, false);
        x -= line.bounds.width;
        line.bounds.x = x;
        out.add(Primitive::Line(line));
    }

    upper.bounds.x = x;
    out.add_note(upper);

    x += upper.bounds.width;

    if needs_lines {
        let mut line = ConnectingLine::between(ctxt, upper, lower, true);
        x -= line.bounds.width;
        line.bounds.x = x;
        out.add(Primitive::Line(line));
    }

    lower.origin
}

/// Pes subpunctis: a podatus followed by a run of descending inclinati.
pub(super) fn pes_subpunctis(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let origin;
    let run_x;

    {
        let (head, tail) = notes.split_at_mut(1);
        let lower = &mut head[0];
        let upper = &mut tail[0];

        let (mut lower_code, upper_code) = if lower.is_liquescent() || upper.is_liquescent() {
            (
                GlyphCode::BeginningAscLiquescent,
                GlyphCode::TerminatingAscLiquescent,
            )
        } else {
            (GlyphCode::PodatusLower, GlyphCode::PodatusUpper)
        };

        if lower.shape == NoteShape::Quilisma {
            lower_code = GlyphCode::Quilisma;
        }

        lower.set_glyph(ctxt, catalog, lower_code);
        upper.set_glyph(ctxt, catalog, upper_code);

        let mut line = ConnectingLine::between(ctxt, lower, upper, false);
        line.bounds.x = lower.bounds.right() - line.bounds.width;
        upper.bounds.x = lower.bounds.right() - upper.bounds.width;

        out.add_note(lower);
        out.add(Primitive::Line(line));
        out.add_note(upper);

        origin = lower.origin;
        run_x = lower.bounds.width.max(upper.bounds.width) * RUN_LEAD_IN;
    }

    layout_inclinati(notes, 2, ctxt, catalog, out, run_x);

    origin
}
