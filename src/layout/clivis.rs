//! Descending neumes: clivis and climacus, plus the punctum-inclinatum
//! run shared with the pes subpunctis.

use crate::context::LayoutContext;
use crate::geometry::Point;
use crate::glyphs::{GlyphCatalog, GlyphCode};
use crate::model::{LiquescentType, Note};

use super::builder::LayoutBuilder;
use super::constants::*;
use super::primitives::{ConnectingLine, Primitive};
use super::single::virga_glyph;

/// Horizontal multiple for an inclinatum following a gap of `gap` staff
/// steps.
pub(super) fn inclinatum_multiple(gap: i32) -> f64 {
    match gap.abs() {
        0 => INCLINATUM_GAP_NONE,
        1 => INCLINATUM_GAP_STEP,
        _ => INCLINATUM_GAP_LEAP,
    }
}

/// Lay out a trailing run of punctum inclinati starting at `start`,
/// beginning `x` to the right of the neume origin. Each note advances by
/// its width times the gap multiple against the note before it.
pub(super) fn layout_inclinati(
    notes: &mut [Note],
    start: usize,
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
    mut x: f64,
) {
    let mut prev_position = notes[start - 1].staff_position;

    for note in notes[start..].iter_mut() {
        let code = match note.liquescent {
            LiquescentType::LargeAscending | LiquescentType::LargeDescending => {
                ctxt.large_inclinatum_liquescent
            }
            LiquescentType::SmallAscending | LiquescentType::SmallDescending => {
                GlyphCode::PunctumInclinatumLiquescent
            }
            _ => GlyphCode::PunctumInclinatum,
        };

        note.set_glyph(ctxt, catalog, code);

        x += note.bounds.width * inclinatum_multiple(prev_position - note.staff_position);
        note.bounds.x += x;

        out.add_note(note);

        prev_position = note.staff_position;
    }
}

/// Clivis: a higher note falling to a lower one. The pair always carries
/// an ascending hanging line on its left edge; a descending line joins the
/// two noteheads only when the interval exceeds one step.
pub(super) fn clivis(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let (head, tail) = notes.split_at_mut(1);
    let upper = &mut head[0];
    let lower = &mut tail[0];

    let mut small_liquescent = false;
    let (upper_code, lower_code) = match lower.liquescent {
        LiquescentType::LargeAscending => (
            GlyphCode::PunctumCuadratum,
            GlyphCode::PunctumCuadratumAscLiquescent,
        ),
        LiquescentType::LargeDescending => (
            GlyphCode::PunctumCuadratum,
            GlyphCode::PunctumCuadratumDesLiquescent,
        ),
        LiquescentType::SmallDescending => {
            small_liquescent = true;
            (
                GlyphCode::BeginningDesLiquescent,
                GlyphCode::TerminatingDesLiquescent,
            )
        }
        _ => (GlyphCode::PunctumCuadratum, GlyphCode::PunctumCuadratum),
    };

    upper.set_glyph(ctxt, catalog, upper_code);
    lower.set_glyph(ctxt, catalog, lower_code);

    // ascending line along the left edge, hanging below the lower note
    let mut line = ConnectingLine::between(ctxt, lower, upper, true);
    line.bounds.x = upper.bounds.x;
    out.add(Primitive::Line(line));

    let mut x = upper.bounds.right();
    let mut descending_width = None;

    if upper.staff_position - lower.staff_position > 1 {
        let mut line = ConnectingLine::between(ctxt, upper, lower, false);
        x -= line.bounds.width;
        line.bounds.x = x;
        descending_width = Some(line.bounds.width);
        out.add(Primitive::Line(line));
    }

    if small_liquescent {
        // the narrow terminating glyph tucks under the upper note
        match descending_width {
            Some(w) => x -= lower.bounds.width - w,
            None => x -= lower.bounds.width,
        }
    }

    lower.bounds.x = x;

    out.add_note(upper);
    out.add_note(lower);

    upper.origin
}

/// Climacus: a virga followed by a descending run of inclinati.
pub(super) fn climacus(
    notes: &mut [Note],
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
    out: &mut LayoutBuilder,
) -> Point {
    let code = virga_glyph(notes[0].staff_position, ctxt);
    notes[0].set_glyph(ctxt, catalog, code);
    out.add_note(&notes[0]);

    let origin = notes[0].origin;
    let x = notes[0].bounds.width * RUN_LEAD_IN;

    layout_inclinati(notes, 1, ctxt, catalog, out, x);

    origin
}
