//! Placement bounds and approximate label geometry

use crate::io::configuration::{
    CANVAS_MAX_X, CANVAS_MAX_Y, CANVAS_MIN_X, CANVAS_MIN_Y, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use crate::io::error::{Result, invalid_argument};

/// Axis-aligned box occupied by a label, in canvas units
///
/// Spans `min` inclusive to `max` exclusive on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Top-left corner (x, y)
    pub min: [i32; 2],
    /// Bottom-right corner (x, y)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// Box of a label anchored at (x, y)
    ///
    /// Glyph metrics are not measured: every character is assumed to be as
    /// wide as the font is tall. Corners saturate at the `i32` range.
    pub fn for_label(text: &str, font_size: u32, x: i32, y: i32) -> Self {
        Self {
            min: [x, y],
            max: [
                x.saturating_add(approximate_width(text, font_size)),
                y.saturating_add(font_height(font_size)),
            ],
        }
    }

    /// Whether the interiors of both boxes intersect
    ///
    /// Boxes that only share an edge do not overlap.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.min[0] < other.max[0]
            && other.min[0] < self.max[0]
            && self.min[1] < other.max[1]
            && other.min[1] < self.max[1]
    }

    /// Box width
    pub const fn width(&self) -> i32 {
        self.max[0] - self.min[0]
    }

    /// Box height
    pub const fn height(&self) -> i32 {
        self.max[1] - self.min[1]
    }
}

/// Approximate rendered width of a label
///
/// Saturates at `i32::MAX` for labels too long to measure.
pub fn approximate_width(text: &str, font_size: u32) -> i32 {
    let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
    chars.saturating_mul(font_height(font_size))
}

/// Label height for a font size, saturated to the `i32` range
pub fn font_height(font_size: u32) -> i32 {
    i32::try_from(font_size).unwrap_or(i32::MAX)
}

/// Rectangle labels are placed in, plus the viewport it is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    /// Smallest x a label may start at
    pub min_x: i32,
    /// Largest x a label may extend to
    pub max_x: i32,
    /// Smallest y a label may start at
    pub min_y: i32,
    /// Largest y a label may extend to
    pub max_y: i32,
    /// Rendered viewport (width, height)
    pub viewport: (u32, u32),
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            min_x: CANVAS_MIN_X,
            max_x: CANVAS_MAX_X,
            min_y: CANVAS_MIN_Y,
            max_y: CANVAS_MAX_Y,
            viewport: (VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        }
    }
}

impl Canvas {
    /// Create placement bounds inside a viewport
    ///
    /// # Errors
    ///
    /// Returns an error if either axis has a negative extent
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32, viewport: (u32, u32)) -> Result<Self> {
        if max_x < min_x {
            return Err(invalid_argument(
                "max_x",
                &max_x,
                &format!("must not be smaller than min_x ({min_x})"),
            ));
        }
        if max_y < min_y {
            return Err(invalid_argument(
                "max_y",
                &max_y,
                &format!("must not be smaller than min_y ({min_y})"),
            ));
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            viewport,
        })
    }

    /// Horizontal extent
    pub const fn width(&self) -> i32 {
        self.max_x.saturating_sub(self.min_x)
    }

    /// Vertical extent
    pub const fn height(&self) -> i32 {
        self.max_y.saturating_sub(self.min_y)
    }

    /// Whether a box of this size can be placed inside the bounds at all
    pub const fn fits(&self, width: i32, height: i32) -> bool {
        width <= self.width() && height <= self.height()
    }

    /// Whether a box lies entirely inside the placement bounds
    pub const fn contains(&self, bbox: &BoundingBox) -> bool {
        bbox.min[0] >= self.min_x
            && bbox.max[0] <= self.max_x
            && bbox.min[1] >= self.min_y
            && bbox.max[1] <= self.max_y
    }

    /// Whether a box stays within the vertical bounds
    pub const fn contains_vertically(&self, bbox: &BoundingBox) -> bool {
        bbox.min[1] >= self.min_y && bbox.max[1] <= self.max_y
    }

    /// Inclusive range of anchor x values keeping a box of `width` inside
    ///
    /// Boxes wider than the canvas can only be anchored at `min_x`.
    pub fn anchor_range_x(&self, width: i32) -> (i32, i32) {
        (self.min_x, self.max_x.saturating_sub(width).max(self.min_x))
    }

    /// Inclusive range of anchor y values keeping a box of `height` inside
    ///
    /// Boxes taller than the canvas can only be anchored at `min_y`.
    pub fn anchor_range_y(&self, height: i32) -> (i32, i32) {
        (self.min_y, self.max_y.saturating_sub(height).max(self.min_y))
    }
}
