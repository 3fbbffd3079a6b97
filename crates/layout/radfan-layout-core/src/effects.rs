//! Scroll-driven cell effects.
//!
//! Every effect is linear in the cell's *multiplier*: its signed distance from
//! the viewport centre measured in viewport widths. A centred cell has
//! multiplier 0 and is untransformed; the effect grows as it scrolls away.
//! Alpha is deliberately left unclamped, so cells more than one viewport
//! away report negative alpha.

use serde::{Deserialize, Serialize};

use crate::affine::AffineTransform;
use crate::config::ScrollConstants;
use crate::geometry::Rect;

/// Visual state of one cell at one scroll position.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellEffect {
    pub multiplier: f64,
    pub alpha: f64,
    pub translation_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
}

impl CellEffect {
    pub const IDENTITY: CellEffect = CellEffect {
        multiplier: 0.0,
        alpha: 1.0,
        translation_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        rotation: 0.0,
    };

    /// Effect for a given multiplier.
    pub fn from_multiplier(multiplier: f64, k: &ScrollConstants) -> Self {
        let abs = multiplier.abs();
        Self {
            multiplier,
            alpha: 1.0 - abs,
            translation_y: abs * k.translation,
            scale_x: 1.0 - k.scale_x * abs,
            scale_y: 1.0 - k.scale_y * abs,
            rotation: multiplier * k.rotate,
        }
    }

    /// Composite transform: translate, then scale, then rotate, each step
    /// prepended to the previous one.
    pub fn transform(&self) -> AffineTransform {
        AffineTransform::translation(0.0, self.translation_y)
            .scaled_by(self.scale_x, self.scale_y)
            .rotated_by(self.rotation)
    }
}

/// Signed distance of `frame`'s centre from the viewport centre, in viewport
/// widths. Zero for a degenerate viewport.
pub fn multiplier(frame: &Rect, viewport_width: f64, scroll_offset_x: f64) -> f64 {
    if has_width(viewport_width) {
        raw_multiplier(frame, viewport_width, scroll_offset_x)
    } else {
        0.0
    }
}

#[inline]
fn has_width(viewport_width: f64) -> bool {
    viewport_width.is_finite() && viewport_width > 0.0
}

#[inline]
fn raw_multiplier(frame: &Rect, viewport_width: f64, scroll_offset_x: f64) -> f64 {
    (frame.mid_x() - scroll_offset_x - viewport_width / 2.0) / viewport_width
}

/// Effect for the cell at `frame` while the host is scrolled to `scroll_offset_x`.
pub fn cell_effect(
    frame: &Rect,
    viewport_width: f64,
    scroll_offset_x: f64,
    k: &ScrollConstants,
) -> CellEffect {
    if !has_width(viewport_width) {
        return CellEffect::IDENTITY;
    }
    CellEffect::from_multiplier(raw_multiplier(frame, viewport_width, scroll_offset_x), k)
}
