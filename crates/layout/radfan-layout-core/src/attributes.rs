//! Per-item attributes handed back to the host.

use serde::{Deserialize, Serialize};

use crate::affine::AffineTransform;
use crate::effects::CellEffect;
use crate::geometry::Rect;

/// Frame, opacity and transform for one item. The host applies `transform`
/// about the frame's centre.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutAttributes {
    pub index: usize,
    pub frame: Rect,
    pub alpha: f64,
    pub transform: AffineTransform,
}

impl LayoutAttributes {
    /// Untransformed, fully opaque attributes.
    pub fn new(index: usize, frame: Rect) -> Self {
        Self {
            index,
            frame,
            alpha: 1.0,
            transform: AffineTransform::IDENTITY,
        }
    }

    pub fn with_effect(index: usize, frame: Rect, effect: &CellEffect) -> Self {
        Self {
            index,
            frame,
            alpha: effect.alpha,
            transform: effect.transform(),
        }
    }
}
