#![cfg(target_arch = "wasm32")]
use js_sys::Reflect;
use radfan_layout_wasm::{abi_version, RadfanCarousel};
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use serde_json::json;

wasm_bindgen_test_configure!(run_in_browser);

fn get_f64(obj: &JsValue, key: &str) -> f64 {
    Reflect::get(obj, &JsValue::from_str(key))
        .unwrap()
        .as_f64()
        .unwrap()
}

fn phone() -> RadfanCarousel {
    let mut c = RadfanCarousel::new(JsValue::UNDEFINED).unwrap();
    c.set_item_count(6);
    assert!(c.set_bounds(0.0, 0.0, 375.0, 667.0));
    c.prepare();
    c
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults_and_config() {
    assert!(RadfanCarousel::new(JsValue::NULL).is_ok());
    let cfg = swb::to_value(&json!({ "scroll": { "rotate": 0.0 } })).unwrap();
    assert!(RadfanCarousel::new(cfg).is_ok());
}

#[wasm_bindgen_test]
fn negative_padding_is_rejected() {
    let cfg = swb::to_value(&json!({
        "portrait_padding": { "width": -1.0, "height": 0.0 }
    }))
    .unwrap();
    assert!(RadfanCarousel::new(cfg).is_err());
}

#[wasm_bindgen_test]
fn content_size_and_full_rect_query() {
    let c = phone();
    let size = c.content_size().unwrap();
    assert_eq!(get_f64(&size, "width"), 6.0 * 375.0);
    assert_eq!(get_f64(&size, "height"), 667.0);

    let attrs = c.attributes_in_rect(0.0, 0.0, 6.0 * 375.0, 667.0).unwrap();
    assert_eq!(attrs.length(), 6);
}

#[wasm_bindgen_test]
fn centred_item_has_identity_css_transform() {
    let c = phone();
    let a = c.attributes_for_item(0).unwrap();
    assert_eq!(get_f64(&a, "alpha"), 1.0);
    let css = Reflect::get(&a, &JsValue::from_str("css_transform"))
        .unwrap()
        .as_string()
        .unwrap();
    assert_eq!(css, "matrix(1, 0, 0, 1, 0, 0)");
    assert!(c.attributes_for_item(6).unwrap().is_null());
}

#[wasm_bindgen_test]
fn snap_target_rounds_to_page() {
    let c = phone();
    let target = c.target_content_offset(375.0 * 1.6, 0.0, 1.0, 0.0).unwrap();
    assert_eq!(get_f64(&target, "x"), 750.0);
    assert_eq!(get_f64(&target, "y"), 0.0);
}

#[wasm_bindgen_test]
fn resize_and_count_change_invalidate() {
    let mut c = phone();
    assert_eq!(c.cache_state(), "populated");
    c.set_bounds(100.0, 0.0, 375.0, 667.0);
    assert_eq!(c.cache_state(), "populated");
    c.set_bounds(0.0, 0.0, 667.0, 375.0);
    assert_eq!(c.cache_state(), "empty");
    c.prepare();
    c.set_item_count(3);
    assert_eq!(c.cache_state(), "empty");
}
