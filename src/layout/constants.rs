//! Shared constants for the neume layout engine (all unitless multiples
//! of a glyph width unless noted).

/// Horizontal multiples for punctum-inclinatum runs, keyed by the staff
/// step gap to the previous note: repeated pitch → stacked, single step →
/// partial overlap, larger leap → full width plus a fifth.
pub(super) const INCLINATUM_GAP_NONE: f64 = 0.0;
pub(super) const INCLINATUM_GAP_STEP: f64 = 0.8;
pub(super) const INCLINATUM_GAP_LEAP: f64 = 1.2;

/// Spacing after the head of a descending run (the climacus virga or the
/// pes subpunctis podatus) before the inclinati begin.
pub(super) const RUN_LEAD_IN: f64 = 1.2;

/// The final descending line of a torculus resupinus flexus retreats by
/// this multiple of the line weight.
pub(super) const FLEXUS_LINE_RETREAT: f64 = 1.5;
