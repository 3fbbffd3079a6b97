//! Frame cache: one padded, full-page frame per item, laid out left to right.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::geometry::{Rect, Size};

/// Whether frames are currently cached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheState {
    Empty,
    Populated,
}

/// Padding for a viewport, picked by its orientation.
#[inline]
pub fn padding_for(viewport: Size, config: &LayoutConfig) -> Size {
    config.padding(viewport.orientation())
}

/// Total scrollable extent: one viewport width per item, one viewport high.
pub fn content_size(viewport: Size, item_count: usize) -> Size {
    if viewport.is_degenerate() {
        return Size::ZERO;
    }
    Size::new(viewport.width * item_count as f64, viewport.height)
}

/// Frames for items `0..item_count`, in index order. Item `i` occupies the
/// page starting at `i * viewport.width`, inset by the orientation padding.
pub fn build_frames(viewport: Size, item_count: usize, config: &LayoutConfig) -> Vec<Rect> {
    if viewport.is_degenerate() {
        return Vec::new();
    }
    let padding = padding_for(viewport, config);
    (0..item_count)
        .map(|i| {
            let x_offset = i as f64 * viewport.width;
            Rect::new(x_offset, 0.0, viewport.width, viewport.height)
                .inset_by(padding.width, padding.height)
        })
        .collect()
}

/// Frames built for one viewport size. Rebuilt when the size changes or after
/// [`FrameCache::clear`]; never for a scroll.
#[derive(Clone, Debug, Default)]
pub struct FrameCache {
    frames: Vec<Rect>,
    viewport: Option<Size>,
}

impl FrameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populated once frames were built for some viewport, even if the item
    /// count was zero.
    #[inline]
    pub fn state(&self) -> CacheState {
        if self.viewport.is_some() {
            CacheState::Populated
        } else {
            CacheState::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state() == CacheState::Empty
    }

    /// Build frames unless they are already cached for this viewport size.
    /// Frames cached for another size are dropped first. Returns true when
    /// frames were (re)built. A degenerate viewport leaves the cache empty.
    pub fn ensure(&mut self, viewport: Size, item_count: usize, config: &LayoutConfig) -> bool {
        match self.viewport {
            Some(cached) if cached == viewport => return false,
            Some(_) => self.clear(),
            None => {}
        }
        if viewport.is_degenerate() {
            log::warn!(
                "radfan: no layout possible for viewport {}x{}",
                viewport.width,
                viewport.height
            );
            return false;
        }
        self.frames = build_frames(viewport, item_count, config);
        self.viewport = Some(viewport);
        log::debug!(
            "radfan: cached {} frames for {:?} viewport {}x{}",
            self.frames.len(),
            viewport.orientation(),
            viewport.width,
            viewport.height
        );
        true
    }

    pub fn clear(&mut self) {
        if !self.is_empty() {
            log::debug!("radfan: frame cache cleared ({} frames)", self.frames.len());
        }
        self.frames.clear();
        self.viewport = None;
    }

    /// Viewport size the frames were built for.
    #[inline]
    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Rect> {
        self.frames.get(index)
    }

    #[inline]
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `(index, frame)` pairs whose frame strictly overlaps `rect`.
    pub fn intersecting<'a>(&'a self, rect: &'a Rect) -> impl Iterator<Item = (usize, &'a Rect)> + 'a {
        self.frames
            .iter()
            .enumerate()
            .filter(move |(_, f)| f.intersects(rect))
    }
}
