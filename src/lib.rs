//! chantlib — Gregorian chant neume layout engine.
//!
//! Converts abstract musical notes (staff position, shape, liquescent
//! variant) grouped into neumes into positioned visual primitives — glyph
//! placements and connecting lines — in a local coordinate space anchored
//! to the staff. Rendering the primitives (SVG, canvas, print) is the
//! consumer's job.
//!
//! # Example
//! ```
//! use chantlib::{GlyphCatalog, LayoutContext, Neume, NeumeKind, Note, NoteShape};
//!
//! let ctxt = LayoutContext::default();
//! let catalog = GlyphCatalog::bundled();
//!
//! let mut podatus = Neume::new(
//!     NeumeKind::Podatus,
//!     vec![
//!         Note::new(NoteShape::Punctum, 2),
//!         Note::new(NoteShape::Punctum, 3),
//!     ],
//! );
//! podatus.perform_layout(&ctxt, &catalog).unwrap();
//!
//! assert!(!podatus.bounds.is_degenerate());
//! println!("{} primitives", podatus.primitives.len());
//! ```

pub mod context;
pub mod geometry;
pub mod glyphs;
pub mod layout;
pub mod model;

pub use context::LayoutContext;
pub use geometry::{Point, Rect};
pub use glyphs::{GlyphCatalog, GlyphCode, GlyphEntry};
pub use layout::{
    arity, layout_neume, Arity, ConnectingLine, EpisemaLine, GlyphPlacement, LayoutError,
    Primitive,
};
pub use model::*;

/// Serialize a laid-out neume to a JSON string.
/// Useful for passing layout output to a rendering collaborator.
pub fn layout_to_json(neume: &Neume) -> Result<String, LayoutError> {
    Ok(serde_json::to_string_pretty(neume)?)
}
