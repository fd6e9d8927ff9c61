//! Bounds and primitive accumulation for one neume layout pass.
//!
//! The builder is the single channel by which geometry propagates out of a
//! strategy: a primitive never handed to it is invisible to bounds
//! computation. It is created fresh per layout call and consumed at the
//! end, so no layout state survives between passes.

use crate::geometry::Rect;
use crate::model::Note;

use super::primitives::{GlyphPlacement, Primitive};

pub(crate) struct LayoutBuilder {
    primitives: Vec<Primitive>,
    bounds: Option<Rect>,
}

impl LayoutBuilder {
    pub(crate) fn new() -> Self {
        Self {
            primitives: Vec::new(),
            bounds: None,
        }
    }

    /// Append a primitive; later additions draw on top. The first
    /// primitive seeds the aggregate bounds, every further one is
    /// unioned in.
    pub(crate) fn add(&mut self, primitive: Primitive) {
        self.union_bounds(&primitive);
        self.primitives.push(primitive);
    }

    /// Same bounds union as [`add`](Self::add), but the primitive goes to
    /// the front of the list so it renders beneath everything added so
    /// far (guide lines and similar underlays).
    #[allow(dead_code)]
    pub(crate) fn prepend(&mut self, primitive: Primitive) {
        self.union_bounds(&primitive);
        self.primitives.insert(0, primitive);
    }

    /// Convenience: snapshot a note's laid-out glyph and append it.
    pub(crate) fn add_note(&mut self, note: &Note) {
        self.add(Primitive::Glyph(GlyphPlacement::from_note(note)));
    }

    fn union_bounds(&mut self, primitive: &Primitive) {
        let b = *primitive.bounds();
        self.bounds = Some(match self.bounds.take() {
            Some(current) => current.union(&b),
            None => b,
        });
    }

    /// Finish the pass: normalize the neume's horizontal origin to zero
    /// and hand back the aggregate bounds with the ordered primitives.
    pub(crate) fn finish(self) -> (Rect, Vec<Primitive>) {
        let mut bounds = self.bounds.unwrap_or_default();
        bounds.x = 0.0;

        (bounds, self.primitives)
    }
}
