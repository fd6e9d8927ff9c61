//! Data model for chant notes, markings, and neumes.
//!
//! Notes and markings are constructed by a notation-source collaborator
//! before layout; the layout engine reads the classification fields and
//! writes the geometry fields. Neumes are recomputed wholesale whenever
//! their inputs change — layout is stateless and re-entrant.

use serde::{Deserialize, Serialize};

use crate::context::LayoutContext;
use crate::geometry::{Point, Rect};
use crate::glyphs::{GlyphCatalog, GlyphCode};
use crate::layout::Primitive;

/// Visual shape classification of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteShape {
    /// Default square punctum.
    Punctum,
    /// Leaning punctum used in descending runs.
    Inclinatum,
    /// Wavy ornament note.
    Quilisma,
    /// Hollow/outline note.
    Cavum,
    OriscusAscending,
    OriscusDescending,
    Virga,
}

/// Liquescent (vocal glide) modifier of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiquescentType {
    None,
    /// Weakened opening note of a podatus.
    InitioDebilis,
    SmallAscending,
    SmallDescending,
    LargeAscending,
    LargeDescending,
}

/// Kind of an annotation attached to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkingKind {
    /// Rhythmic dot after the note.
    Mora,
    /// Horizontal stress line over or under the note.
    HorizontalEpisema,
    /// Short vertical stroke (ictus).
    VerticalEpisema,
}

/// Where a marking wants to sit relative to its note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionHint {
    /// Left to the default above/below rules of the marking renderer.
    Default,
    Above,
    Below,
}

/// An annotation on a single note.
///
/// A marking is owned by exactly one note. Its `position_hint` and
/// `resolved_offset` may be rewritten by the owning neume's marking hook
/// during layout; `horizontal_offset` is the caller-supplied input and is
/// never touched by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marking {
    pub kind: MarkingKind,
    pub position_hint: PositionHint,
    /// Caller-supplied horizontal displacement.
    pub horizontal_offset: f64,
    /// Effective horizontal displacement, reset from `horizontal_offset`
    /// at the start of every layout and then adjusted by the variant's
    /// marking hook. Keeps repeated layouts bit-identical.
    pub resolved_offset: f64,
}

impl Marking {
    pub fn new(kind: MarkingKind) -> Self {
        Self {
            kind,
            position_hint: PositionHint::Default,
            horizontal_offset: 0.0,
            resolved_offset: 0.0,
        }
    }
}

/// One musical event inside a neume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub shape: NoteShape,
    pub liquescent: LiquescentType,
    /// Staff line/space index. 0 is the bottom line; odd positions sit on
    /// lines, even positions in spaces.
    pub staff_position: i32,
    pub markings: Vec<Marking>,

    // ── Filled in during layout ─────────────────────────────────────
    pub glyph_code: GlyphCode,
    pub bounds: Rect,
    pub origin: Point,
}

impl Note {
    pub fn new(shape: NoteShape, staff_position: i32) -> Self {
        Self {
            shape,
            liquescent: LiquescentType::None,
            staff_position,
            markings: Vec::new(),
            glyph_code: GlyphCode::None,
            bounds: Rect::default(),
            origin: Point::default(),
        }
    }

    pub fn is_liquescent(&self) -> bool {
        self.liquescent != LiquescentType::None
    }

    /// Assign a glyph and recompute this note's geometry from scratch:
    /// scaled origin, and bounds anchored at x = 0 on the note's staff
    /// height. Strategies shift `bounds.x` afterwards.
    pub(crate) fn set_glyph(
        &mut self,
        ctxt: &LayoutContext,
        catalog: &GlyphCatalog,
        code: GlyphCode,
    ) {
        let glyph = catalog.glyph(code);

        self.glyph_code = code;
        self.origin = Point::new(
            glyph.origin_x * ctxt.glyph_scaling,
            glyph.origin_y * ctxt.glyph_scaling,
        );
        self.bounds = Rect::new(
            0.0,
            -self.origin.y + ctxt.height_from_staff_position(self.staff_position),
            glyph.width * ctxt.glyph_scaling,
            glyph.height * ctxt.glyph_scaling,
        );
    }
}

/// The closed set of neume archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeumeKind {
    Punctum,
    Virga,
    Apostropha,
    Oriscus,
    Bivirga,
    Trivirga,
    Distropha,
    Tristropha,
    Podatus,
    Clivis,
    PesQuassus,
    PesSubpunctis,
    Climacus,
    Torculus,
    Scandicus,
    ScandicusFlexus,
    Porrectus,
    PorrectusFlexus,
    TorculusResupinus,
    TorculusResupinusFlexus,
    TextOnly,
}

/// A neume: an ordered group of notes rendered as one glyph cluster.
///
/// `origin`, `bounds`, and `primitives` are layout output; z-order of the
/// primitive list is emission order (later entries draw on top).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neume {
    pub kind: NeumeKind,
    /// Notes in chronological (left to right) order. The count must match
    /// the archetype's arity.
    pub notes: Vec<Note>,
    pub origin: Point,
    pub bounds: Rect,
    pub primitives: Vec<Primitive>,
}

impl Neume {
    pub fn new(kind: NeumeKind, notes: Vec<Note>) -> Self {
        Self {
            kind,
            notes,
            origin: Point::default(),
            bounds: Rect::default(),
            primitives: Vec::new(),
        }
    }

    /// Lay out this neume against the given context and catalog.
    /// See [`crate::layout::layout_neume`].
    pub fn perform_layout(
        &mut self,
        ctxt: &LayoutContext,
        catalog: &GlyphCatalog,
    ) -> Result<(), crate::layout::LayoutError> {
        crate::layout::layout_neume(self, ctxt, catalog)
    }
}
