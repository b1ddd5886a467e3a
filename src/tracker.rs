use crate::model::{Stroke, StrokeStyle};
use crate::render::{draw_section, RasterSurface};

/// Captures the stroke currently being drawn and paints it incrementally.
///
/// Each point appended beyond the second paints exactly one new smoothed
/// section (the quadratic over the newest triple), so the cost per input
/// event is constant regardless of stroke length. The surface is never
/// repainted while a stroke is live.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrokeTracker {
    current: Option<Vec<(i32, i32)>>,
    sections_drawn: usize,
}

impl StrokeTracker {
    /// Begins a new stroke at `p`, discarding any uncommitted one. Three
    /// points are synthesized around the touch location so a single tap
    /// paints a visible dot without waiting for real movement samples.
    pub fn begin(&mut self, canvas: &mut RasterSurface, style: StrokeStyle, p: (i32, i32)) {
        self.current = Some(Vec::new());
        self.sections_drawn = 0;
        self.add_point(canvas, style, (p.0 - 1, p.1 - 1));
        self.add_point(canvas, style, p);
        self.add_point(canvas, style, (p.0 + 1, p.1 + 1));
    }

    /// Appends `p` to the current stroke and, once at least three points
    /// exist, paints the section ending at the newest point.
    ///
    /// Panics if no stroke has been started; the caller owns the
    /// start/move/end ordering contract.
    pub fn add_point(&mut self, canvas: &mut RasterSurface, style: StrokeStyle, p: (i32, i32)) {
        let points = self
            .current
            .as_mut()
            .expect("stroke input delivered before stroke start");
        points.push(p);
        if points.len() < 3 {
            return;
        }
        draw_section(canvas, points, points.len() - 3, style);
        self.sections_drawn += 1;
    }

    /// Adds the final point and moves the completed point sequence out.
    /// The returned stroke owns its points; nothing else aliases them.
    pub fn finish(
        &mut self,
        canvas: &mut RasterSurface,
        style: StrokeStyle,
        p: (i32, i32),
    ) -> Stroke {
        self.add_point(canvas, style, p);
        let points = self
            .current
            .take()
            .expect("stroke end delivered before stroke start");
        self.sections_drawn = 0;
        Stroke { points, style }
    }

    /// Drops the in-progress stroke without committing it.
    pub fn abandon(&mut self) {
        self.current = None;
        self.sections_drawn = 0;
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_len(&self) -> usize {
        self.current.as_ref().map_or(0, Vec::len)
    }

    /// Sections painted for the stroke in progress; `point_count - 2` once
    /// three or more points have arrived.
    pub fn sections_drawn(&self) -> usize {
        self.sections_drawn
    }

    /// Re-runs the per-triple section painting over a committed stroke using
    /// its stored style. Used by undo/redo replay, not by live input.
    pub fn replay(canvas: &mut RasterSurface, stroke: &Stroke) {
        for i in 0..stroke.points.len().saturating_sub(2) {
            draw_section(canvas, &stroke.points, i, stroke.style);
        }
    }
}
