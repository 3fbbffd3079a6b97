//! RadfanLayout: owns the frame cache and answers the host's layout queries.
//!
//! Driving sequence for a host:
//! - on a bounds change call [`RadfanLayout::should_invalidate_for_bounds_change`]
//!   (a size change clears the cache; a pure scroll does not),
//! - call [`RadfanLayout::prepare`] before each layout pass,
//! - query [`RadfanLayout::layout_attributes_in_rect`] /
//!   [`RadfanLayout::layout_attributes_for_item`] and apply the results,
//! - ask [`RadfanLayout::target_content_offset`] where a fling should settle.
//!
//! Frames are cached; effects are recomputed from the scroll state recorded by
//! the latest `prepare`. Mutation needs `&mut self`; the type is not meant to
//! be shared across threads while a layout pass is running.

use crate::attributes::LayoutAttributes;
use crate::config::LayoutConfig;
use crate::effects::cell_effect;
use crate::frame_cache::{content_size, CacheState, FrameCache};
use crate::geometry::{Point, Rect, Size};
use crate::host::LayoutHost;
use crate::snap::snap_target;

/// Scroll position seen by the latest prepare pass.
#[derive(Clone, Debug, Default)]
struct ScrollState {
    offset: Point,
    viewport_width: f64,
    visible: Vec<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct RadfanLayout {
    cfg: LayoutConfig,
    cache: FrameCache,
    scroll: ScrollState,
}

impl RadfanLayout {
    pub fn new(cfg: LayoutConfig) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.cfg
    }

    /// Replace the configuration. Cached frames depend on padding, so they are
    /// dropped.
    pub fn set_config(&mut self, cfg: LayoutConfig) {
        self.cfg = cfg;
        self.invalidate();
    }

    pub fn content_size<H: LayoutHost + ?Sized>(&self, host: &H) -> Size {
        content_size(host.bounds().size, host.number_of_items())
    }

    /// Build frames unless they are cached for the host's current size, then record the scroll state that
    /// subsequent attribute queries derive their effects from.
    pub fn prepare<H: LayoutHost + ?Sized>(&mut self, host: &H) {
        let bounds = host.bounds();
        self.cache
            .ensure(bounds.size, host.number_of_items(), &self.cfg);

        let cache = &self.cache;
        // sorted and unique, for binary_search in attributes_for
        let visible: Vec<usize> = match host.visible_items() {
            Some(mut items) => {
                // no frame yet, nothing to transform
                items.retain(|i| cache.get(*i).is_some());
                items.sort_unstable();
                items.dedup();
                items
            }
            None => cache.intersecting(&bounds).map(|(i, _)| i).collect(),
        };

        self.scroll = ScrollState {
            offset: bounds.origin,
            viewport_width: bounds.size.width,
            visible,
        };
    }

    /// Attributes for every cached frame overlapping `rect`, in index order.
    pub fn layout_attributes_in_rect(&self, rect: &Rect) -> Vec<LayoutAttributes> {
        self.cache
            .intersecting(rect)
            .map(|(i, frame)| self.attributes_for(i, *frame))
            .collect()
    }

    pub fn layout_attributes_for_item(&self, index: usize) -> Option<LayoutAttributes> {
        self.cache
            .get(index)
            .map(|frame| self.attributes_for(index, *frame))
    }

    /// Clears the cache when the new bounds size differs from the size the
    /// frames were built for. Always true: every bounds change (scroll
    /// included) needs a new pass so effects follow the offset.
    pub fn should_invalidate_for_bounds_change(&mut self, new_bounds: Rect) -> bool {
        if self
            .cache
            .viewport()
            .is_some_and(|built_for| built_for != new_bounds.size)
        {
            self.cache.clear();
        }
        true
    }

    pub fn invalidate(&mut self) {
        self.cache.clear();
        self.scroll.visible.clear();
    }

    /// Where a scroll proposed to end at `proposed` should settle. Velocity is
    /// accepted for the host contract but does not influence the result.
    pub fn target_content_offset<H: LayoutHost + ?Sized>(
        &self,
        host: &H,
        proposed: Point,
        _velocity: Point,
    ) -> Point {
        snap_target(host.bounds().size.width, proposed)
    }

    #[inline]
    pub fn cache_state(&self) -> CacheState {
        self.cache.state()
    }

    #[inline]
    pub fn frames(&self) -> &[Rect] {
        self.cache.frames()
    }

    /// Items that received effects in the latest prepare pass.
    #[inline]
    pub fn visible_items(&self) -> &[usize] {
        &self.scroll.visible
    }

    #[inline]
    pub fn scroll_offset(&self) -> Point {
        self.scroll.offset
    }

    fn attributes_for(&self, index: usize, frame: Rect) -> LayoutAttributes {
        if self.scroll.visible.binary_search(&index).is_err() {
            return LayoutAttributes::new(index, frame);
        }
        let effect = cell_effect(
            &frame,
            self.scroll.viewport_width,
            self.scroll.offset.x,
            &self.cfg.scroll,
        );
        LayoutAttributes::with_effect(index, frame, &effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostSnapshot;

    fn host(offset_x: f64, n: usize) -> HostSnapshot {
        HostSnapshot::new(Rect::new(offset_x, 0.0, 375.0, 667.0), n)
    }

    #[test]
    fn visible_set_derived_from_bounds() {
        let mut layout = RadfanLayout::default();
        layout.prepare(&host(375.0, 6));
        assert_eq!(layout.visible_items(), &[1]);

        // halfway between pages both neighbours show
        layout.prepare(&host(560.0, 6));
        assert_eq!(layout.visible_items(), &[1, 2]);
    }

    #[test]
    fn host_supplied_visible_set_skips_unknown_items() {
        let mut layout = RadfanLayout::default();
        let mut h = host(0.0, 3);
        h.visible = Some(vec![0, 1, 7]);
        layout.prepare(&h);
        assert_eq!(layout.visible_items(), &[0, 1]);
    }

    #[test]
    fn host_supplied_visible_set_is_normalised() {
        let mut layout = RadfanLayout::default();
        let mut h = host(0.0, 4);
        h.visible = Some(vec![2, 0, 2]);
        layout.prepare(&h);
        assert_eq!(layout.visible_items(), &[0, 2]);
        // item 2 is two pages right of centre
        let a = layout.layout_attributes_for_item(2).unwrap();
        assert_eq!(a.alpha, -1.0);
        assert!(layout.layout_attributes_for_item(1).unwrap().transform.is_identity());
    }

    #[test]
    fn prepare_rebuilds_frames_after_resize() {
        let mut layout = RadfanLayout::default();
        layout.prepare(&host(0.0, 3));
        let portrait = layout.layout_attributes_for_item(1).unwrap().frame;

        let landscape = HostSnapshot::new(Rect::new(0.0, 0.0, 667.0, 375.0), 3);
        layout.prepare(&landscape);
        let rebuilt = layout.layout_attributes_for_item(1).unwrap().frame;
        assert_ne!(portrait, rebuilt);
        assert_eq!(rebuilt, Rect::new(667.0 + 25.0, 40.0, 617.0, 295.0));
        assert_eq!(layout.content_size(&landscape), Size::new(2001.0, 375.0));
    }

    #[test]
    fn same_size_bounds_change_keeps_cache() {
        let mut layout = RadfanLayout::default();
        layout.prepare(&host(0.0, 3));
        assert!(layout.should_invalidate_for_bounds_change(Rect::new(0.0, 0.0, 375.0, 667.0)));
        assert_eq!(layout.cache_state(), CacheState::Populated);
        assert!(layout.should_invalidate_for_bounds_change(Rect::new(210.0, 0.0, 375.0, 667.0)));
        assert_eq!(layout.cache_state(), CacheState::Populated);
        assert!(layout.should_invalidate_for_bounds_change(Rect::new(0.0, 0.0, 667.0, 375.0)));
        assert_eq!(layout.cache_state(), CacheState::Empty);
    }

    #[test]
    fn items_outside_visible_set_are_untransformed() {
        let mut layout = RadfanLayout::default();
        layout.prepare(&host(0.0, 6));
        let far = layout.layout_attributes_for_item(4).unwrap();
        assert_eq!(far.alpha, 1.0);
        assert!(far.transform.is_identity());
    }

    #[test]
    fn set_config_drops_frames() {
        let mut layout = RadfanLayout::default();
        layout.prepare(&host(0.0, 2));
        assert_eq!(layout.cache_state(), CacheState::Populated);
        layout.set_config(LayoutConfig::default());
        assert_eq!(layout.cache_state(), CacheState::Empty);
        assert!(layout.visible_items().is_empty());
    }
}
