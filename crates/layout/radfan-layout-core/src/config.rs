//! Tunable constants for the carousel layout.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::{Orientation, Size};

/// Per-scroll effect strengths. Multiplied by the cell's distance from the
/// viewport centre, measured in viewport widths.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConstants {
    /// Vertical drop; a negative value lifts cells instead.
    pub translation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Radians.
    pub rotate: f64,
}

impl Default for ScrollConstants {
    fn default() -> Self {
        Self {
            translation: 60.0,
            scale_x: 2.0,
            scale_y: 0.4,
            rotate: PI / 6.0,
        }
    }
}

/// Layout configuration. Any field missing from JSON takes its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Inset between a page and its card when the viewport is portrait.
    pub portrait_padding: Size,
    pub landscape_padding: Size,
    pub scroll: ScrollConstants,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            portrait_padding: Size::new(25.0, 80.0),
            landscape_padding: Size::new(25.0, 40.0),
            scroll: ScrollConstants::default(),
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: LayoutConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn padding(&self, orientation: Orientation) -> Size {
        match orientation {
            Orientation::Portrait => self.portrait_padding,
            Orientation::Landscape => self.landscape_padding,
        }
    }

    /// Paddings must be finite and non-negative; scroll constants must be finite.
    pub fn validate(&self) -> Result<()> {
        for (name, pad) in [
            ("portrait_padding", self.portrait_padding),
            ("landscape_padding", self.landscape_padding),
        ] {
            if !(pad.width.is_finite() && pad.height.is_finite()) {
                return Err(LayoutError::InvalidConfig {
                    reason: format!("{name} must be finite"),
                });
            }
            if pad.width < 0.0 || pad.height < 0.0 {
                return Err(LayoutError::InvalidConfig {
                    reason: format!("{name} must be non-negative"),
                });
            }
        }
        let s = &self.scroll;
        for (name, v) in [
            ("scroll.translation", s.translation),
            ("scroll.scale_x", s.scale_x),
            ("scroll.scale_y", s.scale_y),
            ("scroll.rotate", s.rotate),
        ] {
            if !v.is_finite() {
                return Err(LayoutError::InvalidConfig {
                    reason: format!("{name} must be finite"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.portrait_padding, Size::new(25.0, 80.0));
        assert_eq!(cfg.landscape_padding, Size::new(25.0, 40.0));
        assert_eq!(cfg.scroll.translation, 60.0);
        assert_eq!(cfg.scroll.scale_x, 2.0);
        assert_eq!(cfg.scroll.scale_y, 0.4);
        assert_eq!(cfg.scroll.rotate, PI / 6.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = LayoutConfig::from_json(r#"{ "scroll": { "translation": -30.0 } }"#).unwrap();
        assert_eq!(cfg.scroll.translation, -30.0);
        assert_eq!(cfg.scroll.scale_x, 2.0);
        assert_eq!(cfg.portrait_padding, Size::new(25.0, 80.0));
    }

    #[test]
    fn negative_padding_rejected() {
        let err = LayoutConfig::from_json(
            r#"{ "landscape_padding": { "width": -1.0, "height": 40.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig { .. }));
        assert!(err.to_string().contains("landscape_padding"));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = LayoutConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LayoutError::Json(_)));
    }
}
