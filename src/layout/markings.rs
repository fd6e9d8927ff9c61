//! Marking position-hint resolution and marking visual layout.
//!
//! Most archetypes leave marking hints untouched; the podatus and clivis
//! have their own placement rules, registered as hooks in the strategy
//! table. After the hooks run, every marking is rendered into a primitive
//! against its owning note's final geometry.

use crate::context::LayoutContext;
use crate::glyphs::{GlyphCatalog, GlyphCode};
use crate::model::{Marking, MarkingKind, Note, PositionHint};

use super::primitives::{EpisemaLine, GlyphPlacement, Primitive};

// ═══════════════════════════════════════════════════════════════════════
// Per-variant hooks
// ═══════════════════════════════════════════════════════════════════════

/// Whether a mora on the lower note of an ascending/descending pair must
/// drop below: the interval is a single step and the lower note sits on a
/// staff line.
fn lower_mora_goes_below(lower_position: i32, upper_position: i32) -> bool {
    upper_position - lower_position == 1 && (lower_position % 2).abs() == 1
}

/// Podatus: episema on the lower note always goes below, on the upper
/// note always above. A mora on the lower note goes below only when the
/// interval is one step and the lower note is on a line.
pub(super) fn podatus_markings(notes: &mut [Note]) {
    let lower_position = notes[0].staff_position;
    let upper_position = notes[1].staff_position;
    let mora_below = lower_mora_goes_below(lower_position, upper_position);

    for marking in &mut notes[0].markings {
        match marking.kind {
            MarkingKind::HorizontalEpisema => marking.position_hint = PositionHint::Below,
            MarkingKind::Mora if mora_below => marking.position_hint = PositionHint::Below,
            _ => {}
        }
    }

    for marking in &mut notes[1].markings {
        if marking.kind == MarkingKind::HorizontalEpisema {
            marking.position_hint = PositionHint::Above;
        }
    }
}

/// Clivis: the lower (second) note's mora follows the same below-rule as
/// the podatus. When the lower note carries a mora, a mora on the upper
/// note is forced above and shifted so its right edge lines up with the
/// lower note's right edge.
pub(super) fn clivis_markings(notes: &mut [Note]) {
    let upper_position = notes[0].staff_position;
    let lower_position = notes[1].staff_position;
    let mora_below = lower_mora_goes_below(lower_position, upper_position);

    let mut has_lower_mora = false;
    for marking in &mut notes[1].markings {
        if marking.kind == MarkingKind::Mora {
            has_lower_mora = true;

            if mora_below {
                marking.position_hint = PositionHint::Below;
            }
        }
    }

    if has_lower_mora {
        let shift = notes[1].bounds.right() - notes[0].bounds.right();

        for marking in &mut notes[0].markings {
            if marking.kind == MarkingKind::Mora {
                marking.position_hint = PositionHint::Above;
                marking.resolved_offset += shift;
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Marking visuals
// ═══════════════════════════════════════════════════════════════════════

/// Render one marking into a primitive against its note's final geometry.
///
/// A `Default` hint places like `Above`; finer default resolution belongs
/// to the marking-rendering collaborator.
pub(super) fn layout_marking(
    note: &Note,
    marking: &Marking,
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
) -> Primitive {
    let note_height = ctxt.height_from_staff_position(note.staff_position);
    let below = marking.position_hint == PositionHint::Below;

    match marking.kind {
        MarkingKind::Mora => {
            let x = note.bounds.right() + ctxt.intra_neume_spacing / 2.0 + marking.resolved_offset;
            let anchor_y = if below {
                note_height + ctxt.staff_interval / 2.0
            } else {
                note_height - ctxt.staff_interval / 2.0
            };

            Primitive::Glyph(GlyphPlacement::at(ctxt, catalog, GlyphCode::Mora, x, anchor_y))
        }

        MarkingKind::HorizontalEpisema => {
            let y = if below {
                note_height + ctxt.staff_interval
            } else {
                note_height - ctxt.staff_interval
            };

            Primitive::Episema(EpisemaLine {
                bounds: crate::geometry::Rect::new(
                    note.bounds.x + marking.resolved_offset,
                    y,
                    note.bounds.width,
                    ctxt.episema_line_weight,
                ),
            })
        }

        MarkingKind::VerticalEpisema => {
            let code = if below {
                GlyphCode::VerticalEpisemaBelow
            } else {
                GlyphCode::VerticalEpisemaAbove
            };
            let glyph_width = catalog.glyph(code).width * ctxt.glyph_scaling;
            let x = note.bounds.x + (note.bounds.width - glyph_width) / 2.0
                + marking.resolved_offset;
            let anchor_y = if below {
                note_height + ctxt.staff_interval
            } else {
                note_height - ctxt.staff_interval
            };

            Primitive::Glyph(GlyphPlacement::at(ctxt, catalog, code, x, anchor_y))
        }
    }
}
