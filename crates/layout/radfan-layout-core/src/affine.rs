//! 2D affine transforms in the row-vector convention used by view hosts.
//!
//! A transform is the matrix
//!
//! ```text
//! | a  b  0 |
//! | c  d  0 |
//! | tx ty 1 |
//! ```
//!
//! applied as `p' = p * M`, so `x' = a*x + c*y + tx` and `y' = b*x + d*y + ty`.
//! The `*_by` builders prepend the new operation: `t.scaled_by(..)` scales a
//! point first and then applies `t`.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx,
            ty,
        }
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Counter-clockwise rotation by `angle` radians (in a y-up frame).
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// `self` followed by `other`.
    pub fn then(&self, other: &AffineTransform) -> AffineTransform {
        AffineTransform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.tx * other.a + self.ty * other.c + other.tx,
            ty: self.tx * other.b + self.ty * other.d + other.ty,
        }
    }

    #[inline]
    pub fn translated_by(&self, tx: f64, ty: f64) -> AffineTransform {
        AffineTransform::translation(tx, ty).then(self)
    }

    #[inline]
    pub fn scaled_by(&self, sx: f64, sy: f64) -> AffineTransform {
        AffineTransform::scale(sx, sy).then(self)
    }

    #[inline]
    pub fn rotated_by(&self, angle: f64) -> AffineTransform {
        AffineTransform::rotation(angle).then(self)
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// CSS `matrix()` function with the same six coefficients.
    pub fn to_css_matrix(&self) -> String {
        format!(
            "matrix({}, {}, {}, {}, {}, {})",
            self.a, self.b, self.c, self.d, self.tx, self.ty
        )
    }
}
