//! Layout context — the immutable configuration every layout call reads.
//!
//! Everything scales off the punctum cuadratum: one punctum width at the
//! default glyph scaling equals one staff interval, and the line weights
//! are an eighth of that. Hosts can deserialize a context from JSON or
//! tweak individual fields before handing it to the engine; the engine
//! itself never mutates it.

use serde::{Deserialize, Serialize};

use crate::glyphs::{self, GlyphCode};

const DEFAULT_GLYPH_SCALING: f64 = 1.0 / 16.0;

/// Immutable layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutContext {
    /// Font units → staff units scale factor applied to every glyph.
    pub glyph_scaling: f64,
    /// Vertical distance between adjacent staff positions.
    pub staff_interval: f64,
    /// Horizontal gap between repeated notes inside one neume
    /// (bivirga, distropha, and friends).
    pub intra_neume_spacing: f64,
    /// Weight of staff lines.
    pub staff_line_weight: f64,
    /// Weight of the vertical connecting lines inside neumes.
    pub neume_line_weight: f64,
    /// Weight of horizontal episema lines.
    pub episema_line_weight: f64,
    /// Punctum cuadratum ink width, in font units.
    pub glyph_punctum_width: f64,
    /// Punctum cuadratum ink height, in font units.
    pub glyph_punctum_height: f64,

    // Knobs for branches the chant sources leave unresolved. Defaults
    // reproduce the historical behavior; hosts may override.
    /// Glyph for large ascending/descending inclinatum liquescents in
    /// climacus and pes subpunctis runs.
    pub large_inclinatum_liquescent: GlyphCode,
    /// Swash glyph used when a porrectus-family interval falls outside
    /// the supported 1–4 range.
    pub porrectus_fallback: GlyphCode,
    /// When set, virgas at or below this staff position always take the
    /// short glyph regardless of parity.
    pub short_virga_below: Option<i32>,
}

impl LayoutContext {
    /// Height of a staff position in the neume-local coordinate space.
    /// Position 0 is the bottom staff line; y grows downward.
    pub fn height_from_staff_position(&self, staff_position: i32) -> f64 {
        -(staff_position as f64) * self.staff_interval
    }

    /// Hanging connecting lines droop past their lower note by this much.
    pub(crate) fn hanging_line_extension(&self) -> f64 {
        self.glyph_punctum_height * self.glyph_scaling / 2.2
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        let glyph_scaling = DEFAULT_GLYPH_SCALING;
        let staff_interval = glyphs::PUNCTUM_WIDTH * glyph_scaling;
        let line_weight = glyphs::PUNCTUM_WIDTH * glyph_scaling / 8.0;

        Self {
            glyph_scaling,
            staff_interval,
            intra_neume_spacing: staff_interval / 2.0,
            staff_line_weight: line_weight,
            neume_line_weight: line_weight,
            episema_line_weight: line_weight,
            glyph_punctum_width: glyphs::PUNCTUM_WIDTH,
            glyph_punctum_height: glyphs::PUNCTUM_HEIGHT,
            large_inclinatum_liquescent: GlyphCode::Apostropha,
            porrectus_fallback: GlyphCode::None,
            short_virga_below: None,
        }
    }
}
