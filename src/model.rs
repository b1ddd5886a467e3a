use serde::{Deserialize, Serialize};

/// Default background the surface clears to.
pub const BACKGROUND_WHITE: Color = Color::rgba(255, 255, 255, 255);
pub const STROKE_BLACK: Color = Color::rgba(0, 0, 0, 255);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_rgba_array(color: [u8; 4]) -> Self {
        Self::rgba(color[0], color[1], color[2], color[3])
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrokeStyle {
    pub width: u32,
    pub color: Color,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 5,
            color: STROKE_BLACK,
        }
    }
}

/// A committed stroke. The point vector is moved in at commit time and the
/// record is never mutated afterwards; undo/redo replays render from it with
/// the stored style, not the live one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    pub points: Vec<(i32, i32)>,
    pub style: StrokeStyle,
}

pub fn midpoint(a: (i32, i32), b: (i32, i32)) -> (i32, i32) {
    ((a.0 + b.0) / 2, (a.1 + b.1) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_round_trips_through_rgba_array() {
        let color = Color::rgba(12, 34, 56, 78);
        assert_eq!(Color::from_rgba_array(color.to_rgba_array()), color);
    }

    #[test]
    fn default_style_matches_widget_defaults() {
        let style = StrokeStyle::default();
        assert_eq!(style.width, 5);
        assert_eq!(style.color, STROKE_BLACK);
    }

    #[test]
    fn midpoint_truncates_toward_zero_like_integer_division() {
        assert_eq!(midpoint((0, 0), (3, 5)), (1, 2));
        assert_eq!(midpoint((10, 10), (10, 10)), (10, 10));
    }
}
