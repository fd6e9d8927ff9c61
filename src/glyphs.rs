//! Glyph catalog — intrinsic metrics for every chant glyph.
//!
//! The catalog maps a [`GlyphCode`] to its bounds, anchor origin, and
//! advance, all in font units. It is fully precomputed and immutable:
//! construct it once (or share [`GlyphCatalog::bundled`]) and pass it by
//! reference into every layout call. Scaling to staff units happens in the
//! layout engine via the context's `glyph_scaling` factor.

use serde::{Deserialize, Serialize};

/// Identifier for every glyph the chant renderer knows about.
///
/// The enumeration is closed: it spans note shapes, liquescent variants,
/// porrectus swashes, clefs, custodes, accidentals, and markings. Codes for
/// clefs and custodes are carried here because the catalog is shared with
/// collaborators that render them; the neume strategies themselves only use
/// the note-shape subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlyphCode {
    /// Placeholder glyph with no visual weight. Used for swash placeholder
    /// notes and for degraded-rendering fallbacks.
    None,

    AcuteAccent,
    Apostropha,
    ApostrophaLiquescent,

    BeginningAscLiquescent,
    BeginningDesLiquescent,

    CustodDescLong,
    CustodDescShort,
    CustodLong,
    CustodShort,

    DoClef,
    FaClef,
    Flat,
    Mora,
    Natural,
    OriscusAsc,
    OriscusDes,

    PodatusLower,
    PodatusUpper,

    /// Porrectus swashes: the numeral is the staff-position interval the
    /// swash spans (1 line difference, 2 lines, etc.).
    Porrectus1,
    Porrectus2,
    Porrectus3,
    Porrectus4,

    PunctumCavum,
    PunctumCuadratum,
    PunctumCuadratumAscLiquescent,
    PunctumCuadratumDesLiquescent,
    PunctumInclinatum,
    PunctumInclinatumLiquescent,
    Quilisma,

    TerminatingAscLiquescent,
    TerminatingDesLiquescent,
    VerticalEpisemaAbove,
    VerticalEpisemaBelow,
    VirgaLong,
    VirgaShort,
    Virgula,
}

impl GlyphCode {
    /// Every code, in catalog order.
    pub const ALL: [GlyphCode; 37] = [
        GlyphCode::None,
        GlyphCode::AcuteAccent,
        GlyphCode::Apostropha,
        GlyphCode::ApostrophaLiquescent,
        GlyphCode::BeginningAscLiquescent,
        GlyphCode::BeginningDesLiquescent,
        GlyphCode::CustodDescLong,
        GlyphCode::CustodDescShort,
        GlyphCode::CustodLong,
        GlyphCode::CustodShort,
        GlyphCode::DoClef,
        GlyphCode::FaClef,
        GlyphCode::Flat,
        GlyphCode::Mora,
        GlyphCode::Natural,
        GlyphCode::OriscusAsc,
        GlyphCode::OriscusDes,
        GlyphCode::PodatusLower,
        GlyphCode::PodatusUpper,
        GlyphCode::Porrectus1,
        GlyphCode::Porrectus2,
        GlyphCode::Porrectus3,
        GlyphCode::Porrectus4,
        GlyphCode::PunctumCavum,
        GlyphCode::PunctumCuadratum,
        GlyphCode::PunctumCuadratumAscLiquescent,
        GlyphCode::PunctumCuadratumDesLiquescent,
        GlyphCode::PunctumInclinatum,
        GlyphCode::PunctumInclinatumLiquescent,
        GlyphCode::Quilisma,
        GlyphCode::TerminatingAscLiquescent,
        GlyphCode::TerminatingDesLiquescent,
        GlyphCode::VerticalEpisemaAbove,
        GlyphCode::VerticalEpisemaBelow,
        GlyphCode::VirgaLong,
        GlyphCode::VirgaShort,
        GlyphCode::Virgula,
    ];
}

/// Intrinsic metrics for one glyph, in font units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphEntry {
    /// Ink width of the glyph.
    pub width: f64,
    /// Ink height of the glyph.
    pub height: f64,
    /// Anchor origin, measured from the glyph's top-left corner. The
    /// origin's y is the distance from the top of the ink to the point
    /// that sits on the note's staff height.
    pub origin_x: f64,
    pub origin_y: f64,
    /// Horizontal advance to the next glyph.
    pub advance: f64,
}

const fn entry(width: f64, height: f64, origin_x: f64, origin_y: f64) -> GlyphEntry {
    GlyphEntry {
        width,
        height,
        origin_x,
        origin_y,
        advance: width,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Bundled metrics
// ═══════════════════════════════════════════════════════════════════════

// Everything keys off the punctum cuadratum: one punctum width at the
// default 1/16 scaling equals one staff interval.
pub(crate) const PUNCTUM_WIDTH: f64 = 160.0;
pub(crate) const PUNCTUM_HEIGHT: f64 = 160.0;

/// Metrics table, indexed in `GlyphCode::ALL` order.
const BUNDLED: [GlyphEntry; 37] = [
    entry(0.0, 0.0, 0.0, 0.0),       // None
    entry(150.0, 150.0, 75.0, 75.0), // AcuteAccent
    entry(150.0, 160.0, 0.0, 80.0),  // Apostropha
    entry(150.0, 210.0, 0.0, 80.0),  // ApostrophaLiquescent
    entry(160.0, 200.0, 0.0, 100.0), // BeginningAscLiquescent
    entry(160.0, 200.0, 0.0, 100.0), // BeginningDesLiquescent
    entry(140.0, 400.0, 0.0, 80.0),  // CustodDescLong
    entry(140.0, 240.0, 0.0, 80.0),  // CustodDescShort
    entry(140.0, 400.0, 0.0, 320.0), // CustodLong
    entry(140.0, 240.0, 0.0, 160.0), // CustodShort
    entry(200.0, 320.0, 0.0, 160.0), // DoClef
    entry(200.0, 320.0, 0.0, 160.0), // FaClef
    entry(110.0, 300.0, 0.0, 200.0), // Flat
    entry(60.0, 60.0, 30.0, 30.0),   // Mora
    entry(100.0, 300.0, 0.0, 150.0), // Natural
    entry(165.0, 160.0, 0.0, 80.0),  // OriscusAsc
    entry(165.0, 160.0, 0.0, 80.0),  // OriscusDes
    entry(160.0, 120.0, 0.0, 60.0),  // PodatusLower
    entry(160.0, 160.0, 0.0, 80.0),  // PodatusUpper
    entry(490.0, 250.0, 0.0, 80.0),  // Porrectus1
    entry(520.0, 330.0, 0.0, 80.0),  // Porrectus2
    entry(550.0, 410.0, 0.0, 80.0),  // Porrectus3
    entry(580.0, 490.0, 0.0, 80.0),  // Porrectus4
    entry(160.0, 160.0, 0.0, 80.0),  // PunctumCavum
    entry(160.0, 160.0, 0.0, 80.0),  // PunctumCuadratum
    entry(160.0, 240.0, 0.0, 80.0),  // PunctumCuadratumAscLiquescent
    entry(160.0, 240.0, 0.0, 160.0), // PunctumCuadratumDesLiquescent
    entry(130.0, 130.0, 0.0, 65.0),  // PunctumInclinatum
    entry(130.0, 170.0, 0.0, 65.0),  // PunctumInclinatumLiquescent
    entry(170.0, 160.0, 0.0, 80.0),  // Quilisma
    entry(160.0, 200.0, 0.0, 180.0), // TerminatingAscLiquescent
    entry(160.0, 200.0, 0.0, 20.0),  // TerminatingDesLiquescent
    entry(50.0, 100.0, 25.0, 50.0),  // VerticalEpisemaAbove
    entry(50.0, 100.0, 25.0, 50.0),  // VerticalEpisemaBelow
    entry(160.0, 560.0, 0.0, 80.0),  // VirgaLong
    entry(160.0, 400.0, 0.0, 80.0),  // VirgaShort
    entry(80.0, 240.0, 0.0, 120.0),  // Virgula
];

/// Immutable glyph metrics catalog.
///
/// Keyed by the closed [`GlyphCode`] enumeration; lookups cannot fail.
#[derive(Debug, Clone)]
pub struct GlyphCatalog {
    entries: [GlyphEntry; 37],
}

impl GlyphCatalog {
    /// The catalog for the bundled chant font metrics.
    pub fn bundled() -> Self {
        Self { entries: BUNDLED }
    }

    /// Build a catalog from a caller-supplied metrics table, in
    /// `GlyphCode::ALL` order. For hosts that ship their own font.
    pub fn from_entries(entries: [GlyphEntry; 37]) -> Self {
        Self { entries }
    }

    /// Metrics for a glyph.
    pub fn glyph(&self, code: GlyphCode) -> &GlyphEntry {
        &self.entries[code as usize]
    }
}
