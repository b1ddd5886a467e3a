use crate::model::{midpoint, Color, StrokeStyle};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// Owned RGBA pixel buffer the annotation strokes are painted onto.
///
/// The surface is allocated at a fixed size and filled with a background
/// color; it keeps no undo state of its own. Coordinates outside the buffer
/// are accepted and simply not painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSurface {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let len = (width as usize).saturating_mul(height as usize).saturating_mul(4);
        let mut surface = Self {
            pixels: vec![0; len],
            width,
            height,
        };
        surface.clear(background);
        surface
    }

    pub fn clear(&mut self, background: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&background.to_rgba_array());
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Read-only access to the raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[idx] = color.r;
        self.pixels[idx + 1] = color.g;
        self.pixels[idx + 2] = color.b;
        self.pixels[idx + 3] = color.a;
    }

    /// Stamps a filled disc of the stroke width centered on `center`.
    pub fn draw_brush(&mut self, center: (i32, i32), color: Color, stroke_width: u32) {
        let mask = get_brush_mask(stroke_width.max(1));
        for row in &mask.rows {
            let y = center.1 + row.dy;
            for dx in row.min_dx..=row.max_dx {
                self.set_pixel(center.0 + dx, y, color);
            }
        }
    }

    /// Walks the segment with Bresenham, stamping the brush at every cell.
    pub fn draw_segment(&mut self, start: (i32, i32), end: (i32, i32), color: Color, stroke_width: u32) {
        let mut x0 = start.0;
        let mut y0 = start.1;
        let x1 = end.0;
        let y1 = end.1;

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.draw_brush((x0, y0), color, stroke_width);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Paints the quadratic Bézier from `from` through `ctrl` to `to` by
    /// flattening it into short Bresenham segments. Sample density follows the
    /// chord-sum arc-length estimate, so cost is proportional to on-screen
    /// curve length.
    pub fn draw_quad_curve(
        &mut self,
        from: (i32, i32),
        ctrl: (i32, i32),
        to: (i32, i32),
        style: StrokeStyle,
    ) {
        let steps = quad_flatten_steps(from, ctrl, to);
        let mut prev = from;
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let next = quad_point(from, ctrl, to, t);
            if next != prev {
                self.draw_segment(prev, next, style.color, style.width.max(1));
                prev = next;
            }
        }
        if prev != to {
            self.draw_segment(prev, to, style.color, style.width.max(1));
        }
        // Degenerate curve (all three points equal): still leave a dot.
        if from == ctrl && ctrl == to {
            self.draw_brush(from, style.color, style.width.max(1));
        }
    }
}

fn quad_point(from: (i32, i32), ctrl: (i32, i32), to: (i32, i32), t: f32) -> (i32, i32) {
    let u = 1.0 - t;
    let x = u * u * from.0 as f32 + 2.0 * u * t * ctrl.0 as f32 + t * t * to.0 as f32;
    let y = u * u * from.1 as f32 + 2.0 * u * t * ctrl.1 as f32 + t * t * to.1 as f32;
    (x.round() as i32, y.round() as i32)
}

fn quad_flatten_steps(from: (i32, i32), ctrl: (i32, i32), to: (i32, i32)) -> u32 {
    let chord = |a: (i32, i32), b: (i32, i32)| {
        let dx = (b.0 - a.0) as f32;
        let dy = (b.1 - a.1) as f32;
        (dx * dx + dy * dy).sqrt()
    };
    // Chord sum over-estimates arc length; one sample per ~2px.
    let estimate = chord(from, ctrl) + chord(ctrl, to);
    ((estimate / 2.0).ceil() as u32).max(4)
}

/// Paints the i-th smoothed section of a point sequence: the quadratic from
/// `mid(P[i], P[i+1])` through control `P[i+1]` to `mid(P[i+1], P[i+2])`.
/// Consecutive sections share their midpoint endpoints, so the rendered
/// curve is continuous.
pub fn draw_section(
    surface: &mut RasterSurface,
    points: &[(i32, i32)],
    i: usize,
    style: StrokeStyle,
) {
    if i + 2 >= points.len() {
        return;
    }
    let mid1 = midpoint(points[i], points[i + 1]);
    let ctrl = points[i + 1];
    let mid2 = midpoint(points[i + 1], points[i + 2]);
    surface.draw_quad_curve(mid1, ctrl, mid2, style);
}

#[derive(Clone)]
struct BrushMask {
    rows: Vec<BrushMaskRow>,
}

#[derive(Clone)]
struct BrushMaskRow {
    dy: i32,
    min_dx: i32,
    max_dx: i32,
}

fn brush_mask_cache() -> &'static Mutex<HashMap<u32, BrushMask>> {
    static CACHE: OnceLock<Mutex<HashMap<u32, BrushMask>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

fn get_brush_mask(stroke_width: u32) -> BrushMask {
    let cache = brush_mask_cache();
    if let Ok(guard) = cache.lock() {
        if let Some(mask) = guard.get(&stroke_width) {
            return mask.clone();
        }
    }

    let radius = (stroke_width.saturating_sub(1) / 2) as i32;
    let mut rows = Vec::with_capacity((radius.saturating_mul(2) + 1) as usize);
    for dy in -radius..=radius {
        let mut max_dx = radius;
        while max_dx >= 0 && max_dx * max_dx + dy * dy > radius * radius {
            max_dx -= 1;
        }
        if max_dx >= 0 {
            rows.push(BrushMaskRow {
                dy,
                min_dx: -max_dx,
                max_dx,
            });
        }
    }
    let mask = BrushMask { rows };
    if let Ok(mut guard) = cache.lock() {
        let _ = guard.insert(stroke_width, mask.clone());
    }
    mask
}
