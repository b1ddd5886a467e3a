use crate::model::Stroke;

/// Ordered list of committed strokes with a cursor into the undo/redo
/// timeline. Strokes below the cursor are active (visually present); strokes
/// at or above it exist only as redo-able data. Invariant:
/// `cursor <= strokes.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
    cursor: usize,
}

impl StrokeHistory {
    /// Commits a finished stroke. The redo tail (everything at or past the
    /// cursor) is discarded first; drawing after an undo invalidates it.
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.truncate(self.cursor);
        self.strokes.push(stroke);
        self.cursor = self.strokes.len();
    }

    /// Moves the cursor one stroke back. Returns false when there is nothing
    /// to undo. The caller rebuilds the surface from `active()`.
    pub fn step_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor one stroke forward, returning the stroke that became
    /// active, or None when there is nothing to redo.
    pub fn step_forward(&mut self) -> Option<&Stroke> {
        let stroke = self.strokes.get(self.cursor)?;
        self.cursor += 1;
        Some(stroke)
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.cursor = 0;
    }

    /// The strokes below the cursor, in commit order.
    pub fn active(&self) -> &[Stroke] {
        &self.strokes[..self.cursor]
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn redo_len(&self) -> usize {
        self.strokes.len() - self.cursor
    }
}
