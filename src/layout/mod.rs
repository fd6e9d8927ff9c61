//! Neume layout engine — turns a neume's abstract notes into positioned
//! visual primitives.
//!
//! Every archetype is a pure strategy function registered in a dispatch
//! table together with its note arity and an optional marking hook. A
//! layout pass runs the protocol shared by all of them:
//!
//! 1. arity check (the only hard precondition),
//! 2. strategy: glyph selection, relative offsets, connecting lines,
//! 3. the variant's marking hook adjusts position hints,
//! 4. marking visuals are laid out and appended,
//! 5. the horizontal origin is normalized and the results stored.
//!
//! Layout is a deterministic pure function of (notes, markings, context,
//! catalog); re-running it on unchanged inputs reproduces bit-identical
//! geometry.

mod builder;
mod clivis;
mod constants;
mod markings;
mod podatus;
mod porrectus;
mod primitives;
mod single;
mod strophae;
mod torculus;

pub use primitives::{ConnectingLine, EpisemaLine, GlyphPlacement, Primitive};

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::context::LayoutContext;
use crate::geometry::Point;
use crate::glyphs::GlyphCatalog;
use crate::model::{Neume, NeumeKind, Note};

use builder::LayoutBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Strategy dispatch
// ═══════════════════════════════════════════════════════════════════════

/// Note-count requirement of an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

type StrategyFn = fn(&mut [Note], &LayoutContext, &GlyphCatalog, &mut LayoutBuilder) -> Point;
type MarkingHook = fn(&mut [Note]);

struct Strategy {
    arity: Arity,
    layout: StrategyFn,
    markings: Option<MarkingHook>,
}

fn strategy_for(kind: NeumeKind) -> Strategy {
    use NeumeKind::*;

    let (arity, layout, markings): (Arity, StrategyFn, Option<MarkingHook>) = match kind {
        Punctum => (Arity::Exactly(1), single::punctum, None),
        Virga => (Arity::Exactly(1), single::virga, None),
        Apostropha => (Arity::Exactly(1), single::apostropha, None),
        Oriscus => (Arity::Exactly(1), single::oriscus, None),
        Bivirga => (Arity::Exactly(2), strophae::bivirga, None),
        Trivirga => (Arity::Exactly(3), strophae::trivirga, None),
        Distropha => (Arity::Exactly(2), strophae::distropha, None),
        Tristropha => (Arity::Exactly(3), strophae::tristropha, None),
        Podatus => (
            Arity::Exactly(2),
            podatus::podatus,
            Some(markings::podatus_markings as MarkingHook),
        ),
        Clivis => (
            Arity::Exactly(2),
            clivis::clivis,
            Some(markings::clivis_markings as MarkingHook),
        ),
        PesQuassus => (Arity::Exactly(2), podatus::pes_quassus, None),
        PesSubpunctis => (Arity::AtLeast(2), podatus::pes_subpunctis, None),
        Climacus => (Arity::AtLeast(2), clivis::climacus, None),
        Torculus => (Arity::Exactly(3), torculus::torculus, None),
        Scandicus => (Arity::Exactly(3), torculus::scandicus, None),
        ScandicusFlexus => (Arity::Exactly(4), torculus::scandicus_flexus, None),
        Porrectus => (Arity::Exactly(3), porrectus::porrectus, None),
        PorrectusFlexus => (Arity::Exactly(4), porrectus::porrectus_flexus, None),
        TorculusResupinus => (Arity::Exactly(4), porrectus::torculus_resupinus, None),
        TorculusResupinusFlexus => (Arity::Exactly(5), porrectus::torculus_resupinus_flexus, None),
        TextOnly => (Arity::Exactly(0), single::text_only, None),
    };

    Strategy {
        arity,
        layout,
        markings,
    }
}

/// Note arity of an archetype, for callers validating input up front.
pub fn arity(kind: NeumeKind) -> Arity {
    strategy_for(kind).arity
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum LayoutError {
    /// The neume was constructed with the wrong number of notes for its
    /// archetype. Reported before any layout work begins; fatal to this
    /// neume only.
    #[error("{kind:?} takes {expected} notes, got {actual}")]
    ArityMismatch {
        kind: NeumeKind,
        expected: Arity,
        actual: usize,
    },

    #[error("layout serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ═══════════════════════════════════════════════════════════════════════
// Layout protocol
// ═══════════════════════════════════════════════════════════════════════

/// Lay out one neume: select glyphs, place notes and connecting lines,
/// resolve marking hints, and store the aggregate bounds, anchor origin,
/// and ordered primitive list on the neume.
pub fn layout_neume(
    neume: &mut Neume,
    ctxt: &LayoutContext,
    catalog: &GlyphCatalog,
) -> Result<(), LayoutError> {
    let strategy = strategy_for(neume.kind);

    if !strategy.arity.accepts(neume.notes.len()) {
        return Err(LayoutError::ArityMismatch {
            kind: neume.kind,
            expected: strategy.arity,
            actual: neume.notes.len(),
        });
    }

    debug!("laying out {:?} ({} notes)", neume.kind, neume.notes.len());

    // reset marking resolution so repeated layouts start from the inputs
    for note in &mut neume.notes {
        for marking in &mut note.markings {
            marking.resolved_offset = marking.horizontal_offset;
        }
    }

    let mut builder = LayoutBuilder::new();
    let origin = (strategy.layout)(&mut neume.notes, ctxt, catalog, &mut builder);

    if let Some(hook) = strategy.markings {
        hook(&mut neume.notes);
    }

    for note in &neume.notes {
        for marking in &note.markings {
            builder.add(markings::layout_marking(note, marking, ctxt, catalog));
        }
    }

    let (bounds, primitives) = builder.finish();
    neume.origin = origin;
    neume.bounds = bounds;
    neume.primitives = primitives;

    Ok(())
}
