//! Radfan Layout Core (host-agnostic)
//!
//! Geometry for a paginated card carousel: one full-viewport page per item,
//! inset by an orientation-dependent padding, with cards fanning away
//! (fade, drop, squash, tilt) as they leave the viewport centre.
//!
//! The crate is split into pure functions and an owning engine:
//! - [`build_frames`], [`cell_effect`], [`snap_target`], [`content_size`] are
//!   stateless and can be called directly.
//! - [`RadfanLayout`] owns the frame cache and answers the host's layout
//!   queries through the [`LayoutHost`] seam. Adapters (wasm, native views)
//!   implement that trait and apply the returned [`LayoutAttributes`].
//!
//! `RadfanLayout` is not safe for concurrent mutation; drive it from the
//! host's layout thread.

pub mod affine;
pub mod attributes;
pub mod config;
pub mod effects;
pub mod error;
pub mod frame_cache;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod snap;

// Re-exports for consumers (adapters)
pub use affine::AffineTransform;
pub use attributes::LayoutAttributes;
pub use config::{LayoutConfig, ScrollConstants};
pub use effects::{cell_effect, multiplier, CellEffect};
pub use error::{LayoutError, Result};
pub use frame_cache::{build_frames, content_size, padding_for, CacheState, FrameCache};
pub use geometry::{Orientation, Point, Rect, Size};
pub use host::{HostSnapshot, LayoutHost};
pub use layout::RadfanLayout;
pub use snap::{page_for_offset, snap_target};
