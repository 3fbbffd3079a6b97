//! Snap-to-page scroll targeting.
//!
//! The nearest page is found by rounding half away from zero. Results are not
//! clamped to the item range, so an offset past either end extrapolates to a
//! page that has no item.

use crate::geometry::Point;

/// Page nearest to `offset_x`, or `None` when the viewport has no width.
pub fn page_for_offset(viewport_width: f64, offset_x: f64) -> Option<i64> {
    if !(viewport_width.is_finite() && viewport_width > 0.0) {
        return None;
    }
    Some((offset_x / viewport_width).round() as i64)
}

/// Offset that centres the page nearest to `proposed`. The vertical component
/// passes through unchanged, as does the whole offset for a degenerate
/// viewport.
pub fn snap_target(viewport_width: f64, proposed: Point) -> Point {
    if !(viewport_width.is_finite() && viewport_width > 0.0) {
        return proposed;
    }
    let page = (proposed.x / viewport_width).round();
    Point::new(page * viewport_width, proposed.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(snap_target(100.0, Point::new(50.0, 0.0)).x, 100.0);
        assert_eq!(snap_target(100.0, Point::new(-50.0, 0.0)).x, -100.0);
        assert_eq!(snap_target(100.0, Point::new(49.9, 0.0)).x, 0.0);
        assert_eq!(page_for_offset(100.0, 250.0), Some(3));
    }

    #[test]
    fn vertical_component_passes_through() {
        assert_eq!(
            snap_target(100.0, Point::new(130.0, 42.0)),
            Point::new(100.0, 42.0)
        );
    }

    #[test]
    fn degenerate_width_passes_proposed_through() {
        let p = Point::new(123.0, 4.0);
        assert_eq!(snap_target(0.0, p), p);
        assert_eq!(page_for_offset(-1.0, 10.0), None);
    }
}
