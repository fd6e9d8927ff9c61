//! Integration tests for the neume layout engine: glyph selection,
//! spacing, connecting lines, and the shared layout protocol.

use pretty_assertions::assert_eq;

use chantlib::{
    layout_neume, GlyphCatalog, GlyphCode, LayoutContext, LayoutError, Neume, NeumeKind, Note,
    NoteShape, Primitive, Rect,
};

fn note(staff_position: i32) -> Note {
    Note::new(NoteShape::Punctum, staff_position)
}

fn laid_out(kind: NeumeKind, notes: Vec<Note>) -> Neume {
    let ctxt = LayoutContext::default();
    let catalog = GlyphCatalog::bundled();
    let mut neume = Neume::new(kind, notes);
    layout_neume(&mut neume, &ctxt, &catalog).unwrap();
    neume
}

fn line_primitives(neume: &Neume) -> Vec<&chantlib::ConnectingLine> {
    neume
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Line(l) => Some(l),
            _ => None,
        })
        .collect()
}

/// One representative, well-formed input per archetype.
fn representative(kind: NeumeKind) -> Vec<Note> {
    use NeumeKind::*;

    match kind {
        Punctum => vec![note(2)],
        Virga => vec![note(3)],
        Apostropha => vec![note(1)],
        Oriscus => vec![Note::new(NoteShape::OriscusAscending, 2)],
        Bivirga => vec![note(3), note(3)],
        Trivirga => vec![note(2), note(2), note(2)],
        Distropha => vec![note(2), note(2)],
        Tristropha => vec![note(1), note(1), note(1)],
        Podatus => vec![note(1), note(3)],
        Clivis => vec![note(4), note(2)],
        PesQuassus => vec![Note::new(NoteShape::OriscusAscending, 1), note(4)],
        PesSubpunctis => vec![note(2), note(5), note(4), note(2)],
        Climacus => vec![note(5), note(4), note(2)],
        Torculus => vec![note(1), note(4), note(1)],
        Scandicus => vec![note(0), note(2), note(3)],
        ScandicusFlexus => vec![note(0), note(2), note(3), note(1)],
        Porrectus => vec![note(4), note(2), note(4)],
        PorrectusFlexus => vec![note(4), note(2), note(4), note(2)],
        TorculusResupinus => vec![note(1), note(4), note(2), note(4)],
        TorculusResupinusFlexus => vec![note(1), note(4), note(2), note(4), note(2)],
        TextOnly => vec![],
    }
}

const ALL_KINDS: [NeumeKind; 21] = [
    NeumeKind::Punctum,
    NeumeKind::Virga,
    NeumeKind::Apostropha,
    NeumeKind::Oriscus,
    NeumeKind::Bivirga,
    NeumeKind::Trivirga,
    NeumeKind::Distropha,
    NeumeKind::Tristropha,
    NeumeKind::Podatus,
    NeumeKind::Clivis,
    NeumeKind::PesQuassus,
    NeumeKind::PesSubpunctis,
    NeumeKind::Climacus,
    NeumeKind::Torculus,
    NeumeKind::Scandicus,
    NeumeKind::ScandicusFlexus,
    NeumeKind::Porrectus,
    NeumeKind::PorrectusFlexus,
    NeumeKind::TorculusResupinus,
    NeumeKind::TorculusResupinusFlexus,
    NeumeKind::TextOnly,
];

// ═══════════════════════════════════════════════════════════════════════
// Shared protocol properties
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn bounds_are_the_union_of_primitive_bounds_for_every_archetype() {
    for kind in ALL_KINDS {
        let neume = laid_out(kind, representative(kind));

        assert!(!neume.primitives.is_empty(), "{kind:?} emitted nothing");

        let mut union: Option<Rect> = None;
        for p in &neume.primitives {
            union = Some(match union {
                Some(u) => u.union(p.bounds()),
                None => *p.bounds(),
            });
        }
        let mut expected = union.unwrap();
        expected.x = 0.0; // finish_layout normalizes the horizontal origin

        assert_eq!(neume.bounds, expected, "{kind:?} bounds mismatch");
    }
}

#[test]
fn bounds_are_non_degenerate_once_a_glyph_is_emitted() {
    for kind in ALL_KINDS {
        if kind == NeumeKind::TextOnly {
            continue; // only emits the empty placeholder
        }

        let neume = laid_out(kind, representative(kind));
        assert!(
            !neume.bounds.is_degenerate(),
            "{kind:?} produced degenerate bounds {:?}",
            neume.bounds
        );
    }
}

#[test]
fn relayout_of_unchanged_inputs_is_bit_identical() {
    let ctxt = LayoutContext::default();
    let catalog = GlyphCatalog::bundled();

    for kind in ALL_KINDS {
        let mut neume = Neume::new(kind, representative(kind));
        layout_neume(&mut neume, &ctxt, &catalog).unwrap();
        let first = neume.clone();

        layout_neume(&mut neume, &ctxt, &catalog).unwrap();

        assert_eq!(first, neume, "{kind:?} relayout drifted");
    }
}

#[test]
fn arity_mismatch_is_reported_before_any_layout_work() {
    let ctxt = LayoutContext::default();
    let catalog = GlyphCatalog::bundled();

    let mut neume = Neume::new(NeumeKind::Podatus, vec![note(2)]);
    let err = layout_neume(&mut neume, &ctxt, &catalog).unwrap_err();

    assert!(matches!(
        err,
        LayoutError::ArityMismatch {
            kind: NeumeKind::Podatus,
            actual: 1,
            ..
        }
    ));
    assert!(neume.primitives.is_empty());
    assert_eq!(neume.notes[0].glyph_code, GlyphCode::None);

    let mut neume = Neume::new(NeumeKind::Climacus, vec![note(4)]);
    assert!(layout_neume(&mut neume, &ctxt, &catalog).is_err());

    let mut neume = Neume::new(NeumeKind::TextOnly, vec![note(0)]);
    assert!(layout_neume(&mut neume, &ctxt, &catalog).is_err());

    // climacus is open-ended upward
    assert!(chantlib::arity(NeumeKind::Climacus).accepts(2));
    assert!(chantlib::arity(NeumeKind::Climacus).accepts(6));
    assert!(!chantlib::arity(NeumeKind::Podatus).accepts(3));
}

// ═══════════════════════════════════════════════════════════════════════
// Glyph selection
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn virga_glyph_follows_staff_position_parity() {
    let on_line = laid_out(NeumeKind::Virga, vec![note(3)]);
    assert_eq!(on_line.notes[0].glyph_code, GlyphCode::VirgaLong);

    let in_space = laid_out(NeumeKind::Virga, vec![note(4)]);
    assert_eq!(in_space.notes[0].glyph_code, GlyphCode::VirgaShort);

    let negative_line = laid_out(NeumeKind::Virga, vec![note(-1)]);
    assert_eq!(negative_line.notes[0].glyph_code, GlyphCode::VirgaLong);
}

#[test]
fn punctum_shape_and_liquescent_branches() {
    let plain = laid_out(NeumeKind::Punctum, vec![note(2)]);
    assert_eq!(plain.notes[0].glyph_code, GlyphCode::PunctumCuadratum);

    let cavum = laid_out(NeumeKind::Punctum, vec![Note::new(NoteShape::Cavum, 2)]);
    assert_eq!(cavum.notes[0].glyph_code, GlyphCode::PunctumCavum);

    let quilisma = laid_out(NeumeKind::Punctum, vec![Note::new(NoteShape::Quilisma, 2)]);
    assert_eq!(quilisma.notes[0].glyph_code, GlyphCode::Quilisma);

    let mut liq = Note::new(NoteShape::Inclinatum, 2);
    liq.liquescent = chantlib::LiquescentType::SmallDescending;
    let inclinatum = laid_out(NeumeKind::Punctum, vec![liq]);
    assert_eq!(
        inclinatum.notes[0].glyph_code,
        GlyphCode::PunctumInclinatumLiquescent
    );

    let mut liq = note(2);
    liq.liquescent = chantlib::LiquescentType::LargeAscending;
    let cuadratum = laid_out(NeumeKind::Punctum, vec![liq]);
    assert_eq!(
        cuadratum.notes[0].glyph_code,
        GlyphCode::PunctumCuadratumAscLiquescent
    );
}

#[test]
fn porrectus_swash_selection_is_a_bijection_over_1_to_4() {
    let expected = [
        GlyphCode::Porrectus1,
        GlyphCode::Porrectus2,
        GlyphCode::Porrectus3,
        GlyphCode::Porrectus4,
    ];

    for (i, &code) in expected.iter().enumerate() {
        let drop = i as i32 + 1;
        let neume = laid_out(NeumeKind::Porrectus, vec![note(drop), note(0), note(1)]);
        assert_eq!(neume.notes[0].glyph_code, code, "interval {drop}");
        // the swash carrier keeps the zero-width placeholder
        assert_eq!(neume.notes[1].glyph_code, GlyphCode::None);
    }
}

#[test]
fn porrectus_out_of_range_interval_degrades_to_the_fallback() {
    // gap of 5 is outside the font's swash range
    let neume = laid_out(NeumeKind::Porrectus, vec![note(5), note(0), note(1)]);
    assert_eq!(neume.notes[0].glyph_code, GlyphCode::None);

    // unison is equally unsupported
    let neume = laid_out(NeumeKind::Porrectus, vec![note(2), note(2), note(3)]);
    assert_eq!(neume.notes[0].glyph_code, GlyphCode::None);

    // hosts can opt into the narrowest swash instead
    let ctxt = LayoutContext {
        porrectus_fallback: GlyphCode::Porrectus1,
        ..LayoutContext::default()
    };
    let catalog = GlyphCatalog::bundled();
    let mut neume = Neume::new(NeumeKind::Porrectus, vec![note(5), note(0), note(1)]);
    layout_neume(&mut neume, &ctxt, &catalog).unwrap();
    assert_eq!(neume.notes[0].glyph_code, GlyphCode::Porrectus1);
}

// ═══════════════════════════════════════════════════════════════════════
// Spacing laws
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn repeated_note_offsets_accumulate_widths_plus_spacing() {
    let ctxt = LayoutContext::default();

    for kind in [
        NeumeKind::Bivirga,
        NeumeKind::Trivirga,
        NeumeKind::Distropha,
        NeumeKind::Tristropha,
    ] {
        let neume = laid_out(kind, representative(kind));

        let mut expected_x = 0.0;
        for (k, n) in neume.notes.iter().enumerate() {
            assert!(
                (n.bounds.x - expected_x).abs() < 1e-12,
                "{kind:?} note {k}: x = {}, expected {expected_x}",
                n.bounds.x
            );
            expected_x += n.bounds.width + ctxt.intra_neume_spacing;
        }
    }
}

#[test]
fn climacus_follows_the_gap_multiple_rule() {
    // end-to-end scenario: staff positions [4, 3, 1]
    let neume = laid_out(NeumeKind::Climacus, vec![note(4), note(3), note(1)]);

    // position 4 is a space, so the virga is short
    assert_eq!(neume.notes[0].glyph_code, GlyphCode::VirgaShort);
    assert_eq!(neume.notes[1].glyph_code, GlyphCode::PunctumInclinatum);

    let virga_width = neume.notes[0].bounds.width;
    let inclinatum_width = neume.notes[1].bounds.width;

    // gap |4-3| = 1 → multiple 0.8; gap |3-1| = 2 → multiple 1.2
    let mut x = virga_width * 1.2;
    x += inclinatum_width * 0.8;
    assert!((neume.notes[1].bounds.x - x).abs() < 1e-12);
    x += inclinatum_width * 1.2;
    assert!((neume.notes[2].bounds.x - x).abs() < 1e-12);
}

#[test]
fn climacus_stacks_repeated_pitches() {
    let neume = laid_out(NeumeKind::Climacus, vec![note(4), note(3), note(3)]);

    // gap 0 → multiple 0, so the second inclinatum sits on the first
    assert_eq!(neume.notes[1].bounds.x, neume.notes[2].bounds.x);
}

// ═══════════════════════════════════════════════════════════════════════
// Connecting line rules
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn torculus_lines_exist_iff_the_interval_exceeds_one_step() {
    // both intervals wide → ascending and descending lines
    let wide = laid_out(NeumeKind::Torculus, vec![note(1), note(4), note(1)]);
    assert_eq!(line_primitives(&wide).len(), 2);

    // stepwise arch → no lines at all
    let steps = laid_out(NeumeKind::Torculus, vec![note(2), note(3), note(2)]);
    assert_eq!(line_primitives(&steps).len(), 0);

    // only the ascent is wide
    let ascent = laid_out(NeumeKind::Torculus, vec![note(1), note(3), note(2)]);
    assert_eq!(line_primitives(&ascent).len(), 1);
}

#[test]
fn clivis_always_draws_the_ascending_line() {
    let ctxt = LayoutContext::default();

    // single step: just the hanging line on the left edge
    let narrow = laid_out(NeumeKind::Clivis, vec![note(3), note(2)]);
    let lines = line_primitives(&narrow);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].hanging);
    assert!(
        lines[0].bounds.height > (3 - 2) as f64 * ctxt.staff_interval,
        "hanging line must droop past the lower note"
    );

    // wide interval adds the descending line at the right edge
    let wide = laid_out(NeumeKind::Clivis, vec![note(4), note(2)]);
    let lines = line_primitives(&wide);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].hanging);
    assert!(!lines[1].hanging);
}

#[test]
fn pes_quassus_lines_are_symmetric_and_only_for_wide_intervals() {
    let narrow = laid_out(
        NeumeKind::PesQuassus,
        vec![Note::new(NoteShape::OriscusAscending, 1), note(2)],
    );
    assert_eq!(line_primitives(&narrow).len(), 0);

    let wide = laid_out(
        NeumeKind::PesQuassus,
        vec![Note::new(NoteShape::OriscusAscending, 1), note(4)],
    );
    let lines = line_primitives(&wide);
    assert_eq!(lines.len(), 2);
    assert!(!lines[0].hanging);
    assert!(lines[1].hanging);
}

#[test]
fn scandicus_flexus_adds_a_line_for_a_wide_final_drop() {
    let narrow = laid_out(
        NeumeKind::ScandicusFlexus,
        vec![note(0), note(2), note(3), note(2)],
    );
    assert_eq!(line_primitives(&narrow).len(), 1); // the podatus line only

    let wide = laid_out(
        NeumeKind::ScandicusFlexus,
        vec![note(0), note(2), note(3), note(1)],
    );
    assert_eq!(line_primitives(&wide).len(), 2);
}

#[test]
fn porrectus_extra_line_depends_on_the_closing_interval() {
    // end-to-end scenario C: drop of 2, close of 1 → only the swash line
    let close = laid_out(NeumeKind::Porrectus, vec![note(3), note(1), note(2)]);
    assert_eq!(neume_glyph(&close, 0), GlyphCode::Porrectus2);
    assert_eq!(line_primitives(&close).len(), 1);
    assert!(line_primitives(&close)[0].hanging);

    // wide close → one extra connecting line
    let wide = laid_out(NeumeKind::Porrectus, vec![note(3), note(1), note(4)]);
    assert_eq!(line_primitives(&wide).len(), 2);
}

fn neume_glyph(neume: &Neume, note_index: usize) -> GlyphCode {
    neume.notes[note_index].glyph_code
}

// ═══════════════════════════════════════════════════════════════════════
// End-to-end scenarios
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn podatus_single_step_right_aligns_the_upper_note() {
    // end-to-end scenario A: lower 2, upper 3
    let ctxt = LayoutContext::default();
    let neume = laid_out(NeumeKind::Podatus, vec![note(2), note(3)]);

    assert_eq!(neume.notes[0].glyph_code, GlyphCode::PodatusLower);
    assert_eq!(neume.notes[1].glyph_code, GlyphCode::PodatusUpper);

    let lower = &neume.notes[0];
    let upper = &neume.notes[1];

    // the upper note overhangs: right edges line up exactly
    assert!((upper.bounds.right() - lower.bounds.right()).abs() < 1e-12);

    // the connecting line is computed but tucked behind the glyph column
    let lines = line_primitives(&neume);
    assert_eq!(lines.len(), 1);
    assert!(
        (lines[0].bounds.x - (lower.bounds.right() - ctxt.neume_line_weight)).abs() < 1e-12
    );
}

#[test]
fn podatus_initio_debilis_suppresses_the_overhang() {
    let ctxt = LayoutContext::default();
    let mut lower = note(2);
    lower.liquescent = chantlib::LiquescentType::InitioDebilis;
    let neume = laid_out(NeumeKind::Podatus, vec![lower, note(3)]);

    assert_eq!(
        neume.notes[0].glyph_code,
        GlyphCode::TerminatingDesLiquescent
    );
    assert_eq!(neume.notes[1].glyph_code, GlyphCode::PunctumCuadratum);

    // the upper note abuts the line instead of right-aligning
    let lower_right = neume.notes[0].bounds.right();
    assert!(
        (neume.notes[1].bounds.x - (lower_right - ctxt.neume_line_weight)).abs() < 1e-12
    );
}

#[test]
fn quilisma_pes_replaces_the_lower_glyph() {
    let neume = laid_out(
        NeumeKind::Podatus,
        vec![Note::new(NoteShape::Quilisma, 2), note(3)],
    );

    assert_eq!(neume.notes[0].glyph_code, GlyphCode::Quilisma);
    assert_eq!(neume.notes[1].glyph_code, GlyphCode::PodatusUpper);
}

#[test]
fn text_only_emits_a_single_placeholder() {
    let neume = laid_out(NeumeKind::TextOnly, vec![]);

    assert_eq!(neume.primitives.len(), 1);
    match &neume.primitives[0] {
        Primitive::Glyph(g) => assert_eq!(g.glyph_code, GlyphCode::None),
        other => panic!("expected placeholder glyph, got {other:?}"),
    }
}

#[test]
fn laid_out_neume_serializes_for_the_renderer() {
    let neume = laid_out(NeumeKind::Podatus, vec![note(2), note(3)]);
    let json = chantlib::layout_to_json(&neume).unwrap();

    assert!(json.contains("\"kind\": \"glyph\""));
    assert!(json.contains("\"kind\": \"line\""));
}
