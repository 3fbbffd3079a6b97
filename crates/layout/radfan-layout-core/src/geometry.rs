//! Plain 2D geometry: points, sizes, axis-aligned rectangles.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Viewport orientation, derived from its aspect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Landscape only when strictly wider than tall; square counts as portrait.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// True when no page can be laid out in a viewport of this size.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0
    }
}

/// Axis-aligned rectangle. Width and height are kept non-negative by the
/// constructors in this crate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    #[inline]
    pub fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    #[inline]
    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom,
    /// keeping the centre fixed. A dimension that would go negative collapses
    /// to zero at the centre line.
    pub fn inset_by(&self, dx: f64, dy: f64) -> Rect {
        let (x, width) = inset_axis(self.origin.x, self.size.width, dx);
        let (y, height) = inset_axis(self.origin.y, self.size.height, dy);
        Rect::new(x, y, width, height)
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }
}

fn inset_axis(origin: f64, extent: f64, inset: f64) -> (f64, f64) {
    let reduced = extent - 2.0 * inset;
    if reduced < 0.0 {
        (origin + extent / 2.0, 0.0)
    } else {
        (origin + inset, reduced)
    }
}
