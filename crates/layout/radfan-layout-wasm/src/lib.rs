use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use radfan_layout_core::{
    AffineTransform, CacheState, HostSnapshot, LayoutAttributes, LayoutConfig, Point,
    RadfanLayout, Rect,
};

/// A carousel layout driven from JS. The JS side mirrors its scroll
/// container into this object (bounds, item count) and reads attributes back.
#[wasm_bindgen]
pub struct RadfanCarousel {
    layout: RadfanLayout,
    host: HostSnapshot,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Attributes as handed to JS; `css_transform` can be assigned to
/// `element.style.transform` directly.
#[derive(Serialize)]
struct JsAttributes {
    index: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    alpha: f64,
    transform: AffineTransform,
    css_transform: String,
}

impl From<&LayoutAttributes> for JsAttributes {
    fn from(a: &LayoutAttributes) -> Self {
        Self {
            index: a.index,
            x: a.frame.origin.x,
            y: a.frame.origin.y,
            width: a.frame.size.width,
            height: a.frame.size.height,
            alpha: a.alpha,
            transform: a.transform,
            css_transform: a.transform.to_css_matrix(),
        }
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<JsValue, JsError> {
    swb::to_value(value).map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

#[wasm_bindgen]
impl RadfanCarousel {
    /// Create a layout. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new RadfanCarousel({ landscape_padding: { width: 30, height: 30 } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<RadfanCarousel, JsError> {
        console_error_panic_hook::set_once();

        let cfg: LayoutConfig = if jsvalue_is_undefined_or_null(&config) {
            LayoutConfig::default()
        } else {
            let cfg: LayoutConfig = swb::from_value(config)
                .map_err(|e| JsError::new(&format!("config error: {e}")))?;
            cfg.validate()
                .map_err(|e| JsError::new(&format!("config error: {e}")))?;
            cfg
        };

        Ok(RadfanCarousel {
            layout: RadfanLayout::new(cfg),
            host: HostSnapshot::default(),
        })
    }

    /// Report the scroll container's bounds (origin = scroll offset). Returns
    /// whether a new layout pass is needed; a size change also drops cached frames.
    #[wasm_bindgen(js_name = set_bounds)]
    pub fn set_bounds(&mut self, x: f64, y: f64, width: f64, height: f64) -> bool {
        let bounds = Rect::new(x, y, width, height);
        self.host.bounds = bounds;
        self.layout.should_invalidate_for_bounds_change(bounds)
    }

    /// Set the number of items. A different count invalidates the layout.
    #[wasm_bindgen(js_name = set_item_count)]
    pub fn set_item_count(&mut self, count: u32) {
        let count = count as usize;
        if count != self.host.item_count {
            log::debug!("radfan-wasm: item count {} -> {}", self.host.item_count, count);
            self.host.item_count = count;
            self.layout.invalidate();
        }
    }

    /// Items the page currently renders (array of indices), or undefined/null
    /// to let the layout pick the items intersecting the bounds.
    #[wasm_bindgen(js_name = set_visible_items)]
    pub fn set_visible_items(&mut self, items: JsValue) -> Result<(), JsError> {
        self.host.visible = if jsvalue_is_undefined_or_null(&items) {
            None
        } else {
            Some(
                swb::from_value::<Vec<usize>>(items)
                    .map_err(|e| JsError::new(&format!("visible items error: {e}")))?,
            )
        };
        Ok(())
    }

    /// Run a layout pass for the current bounds.
    #[wasm_bindgen]
    pub fn prepare(&mut self) {
        self.layout.prepare(&self.host);
    }

    /// `{ width, height }` of the scrollable content.
    #[wasm_bindgen(js_name = content_size)]
    pub fn content_size(&self) -> Result<JsValue, JsError> {
        to_js(&self.layout.content_size(&self.host), "content_size")
    }

    /// Attributes of every item whose frame overlaps the rect.
    #[wasm_bindgen(js_name = attributes_in_rect)]
    pub fn attributes_in_rect(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<Array, JsError> {
        let out = Array::new();
        for a in self
            .layout
            .layout_attributes_in_rect(&Rect::new(x, y, width, height))
        {
            out.push(&to_js(&JsAttributes::from(&a), "attributes")?);
        }
        Ok(out)
    }

    /// Attributes of one item, or null when it has no frame.
    #[wasm_bindgen(js_name = attributes_for_item)]
    pub fn attributes_for_item(&self, index: u32) -> Result<JsValue, JsError> {
        match self.layout.layout_attributes_for_item(index as usize) {
            Some(a) => to_js(&JsAttributes::from(&a), "attributes"),
            None => Ok(JsValue::NULL),
        }
    }

    /// `{ x, y }` where a scroll proposed to end at `(proposed_x, proposed_y)` should settle.
    #[wasm_bindgen(js_name = target_content_offset)]
    pub fn target_content_offset(
        &self,
        proposed_x: f64,
        proposed_y: f64,
        velocity_x: f64,
        velocity_y: f64,
    ) -> Result<JsValue, JsError> {
        let target = self.layout.target_content_offset(
            &self.host,
            Point::new(proposed_x, proposed_y),
            Point::new(velocity_x, velocity_y),
        );
        to_js(&target, "target_content_offset")
    }

    #[wasm_bindgen]
    pub fn invalidate(&mut self) {
        self.layout.invalidate();
    }

    /// "empty" or "populated".
    #[wasm_bindgen(js_name = cache_state)]
    pub fn cache_state(&self) -> String {
        match self.layout.cache_state() {
            CacheState::Empty => "empty".to_string(),
            CacheState::Populated => "populated".to_string(),
        }
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
