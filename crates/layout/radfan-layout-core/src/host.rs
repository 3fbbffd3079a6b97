//! Host seam: what the layout needs to know about the collection it lays out.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Implemented by adapters over the host's collection view.
pub trait LayoutHost {
    /// Current bounds; the origin is the scroll (content) offset and the size
    /// is the viewport.
    fn bounds(&self) -> Rect;

    fn number_of_items(&self) -> usize;

    /// Items the host currently shows. `None` lets the layout derive them from
    /// its cached frames and [`LayoutHost::bounds`].
    fn visible_items(&self) -> Option<Vec<usize>> {
        None
    }
}

/// Plain-data host, for adapters that mirror host state and for tests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostSnapshot {
    pub bounds: Rect,
    pub item_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<Vec<usize>>,
}

impl HostSnapshot {
    pub fn new(bounds: Rect, item_count: usize) -> Self {
        Self {
            bounds,
            item_count,
            visible: None,
        }
    }
}

impl LayoutHost for HostSnapshot {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn number_of_items(&self) -> usize {
        self.item_count
    }

    fn visible_items(&self) -> Option<Vec<usize>> {
        self.visible.clone()
    }
}
