use crate::history::StrokeHistory;
use crate::model::{Color, StrokeStyle, BACKGROUND_WHITE};
use crate::render::RasterSurface;
use crate::tracker::StrokeTracker;

/// Composition root of the annotation widget: owns the raster surface, the
/// live drawing style, the in-progress stroke and the committed history.
///
/// The surface starts unsized; until `set_size` is called every mutating
/// operation is a no-op. Input events are expected in delivery order
/// (start, moves, end); a new start abandons any unfinished stroke, so no
/// partial stroke ever enters the history.
#[derive(Debug, Clone)]
pub struct AnnotationSurface {
    canvas: Option<RasterSurface>,
    background: Color,
    style: StrokeStyle,
    tracker: StrokeTracker,
    history: StrokeHistory,
}

impl Default for AnnotationSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationSurface {
    pub fn new() -> Self {
        Self {
            canvas: None,
            background: BACKGROUND_WHITE,
            style: StrokeStyle::default(),
            tracker: StrokeTracker::default(),
            history: StrokeHistory::default(),
        }
    }

    pub fn with_background(background: Color) -> Self {
        Self {
            background,
            ..Self::new()
        }
    }

    /// (Re)allocates the raster surface once the widget dimensions are
    /// known. Destructive: the surface is refilled with background and the
    /// history is reset, as is any stroke in flight.
    pub fn set_size(&mut self, width: u32, height: u32) {
        tracing::debug!(width, height, "annotation surface sized");
        self.canvas = Some(RasterSurface::new(width, height, self.background));
        self.tracker.abandon();
        self.history.clear();
    }

    pub fn on_input_start(&mut self, p: (i32, i32)) {
        let style = self.style;
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        self.tracker.begin(canvas, style, p);
    }

    /// Processes an ordered batch of movement samples (the input source may
    /// deliver buffered historical points in one call).
    pub fn on_input_move(&mut self, points: &[(i32, i32)]) {
        let style = self.style;
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        for &p in points {
            self.tracker.add_point(canvas, style, p);
        }
    }

    /// Finishes the current stroke and commits it with the style it was
    /// drawn with, discarding any redo tail.
    pub fn on_input_end(&mut self, p: (i32, i32)) {
        let style = self.style;
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        let stroke = self.tracker.finish(canvas, style, p);
        tracing::debug!(
            points = stroke.points.len(),
            width = stroke.style.width,
            "stroke committed"
        );
        self.history.commit(stroke);
    }

    /// Steps the timeline back one stroke and rebuilds the surface from
    /// background plus every still-active stroke, each with its own stored
    /// style. No-op when there is nothing to undo.
    pub fn undo(&mut self) {
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        if !self.history.step_back() {
            return;
        }
        tracing::debug!(cursor = self.history.cursor(), "undo");
        canvas.clear(self.background);
        for stroke in self.history.active() {
            StrokeTracker::replay(canvas, stroke);
        }
    }

    /// Re-activates the next undone stroke by painting it on top of the
    /// current surface. The surface already reflects every stroke below the
    /// cursor, so no clear-and-rebuild is needed. No-op when there is
    /// nothing to redo.
    pub fn redo(&mut self) {
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        let Some(stroke) = self.history.step_forward() else {
            return;
        };
        StrokeTracker::replay(canvas, stroke);
        tracing::debug!(cursor = self.history.cursor(), "redo");
    }

    /// Clears the surface to background and empties the history.
    pub fn clear(&mut self) {
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        tracing::debug!(discarded = self.history.len(), "annotation cleared");
        canvas.clear(self.background);
        self.history.clear();
    }

    /// Sets the color applied to strokes committed from now on.
    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    /// Sets the width applied to strokes committed from now on. Clamped to
    /// at least one pixel.
    pub fn set_width(&mut self, width: u32) {
        self.style.width = width.max(1);
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Raw RGBA bytes of the raster surface, for host screenshot/export.
    /// None until the surface has been sized.
    pub fn pixels(&self) -> Option<&[u8]> {
        self.canvas.as_ref().map(RasterSurface::pixels)
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.canvas.as_ref().map(RasterSurface::size)
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn stroke_in_progress(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn current_stroke_len(&self) -> usize {
        self.tracker.current_len()
    }

    pub fn sections_drawn(&self) -> usize {
        self.tracker.sections_drawn()
    }
}
