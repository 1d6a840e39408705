//! Desktop vs. mobile detection, used to pick the map bounds variant.
//!
//! A device counts as desktop when it has no touch capability (no
//! `ontouchstart` on the window and `maxTouchPoints == 0`) and the viewport
//! is at least 768 px wide (the `md` breakpoint).

use wasm_bindgen::JsValue;

pub fn is_desktop() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let has_touch = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart"))
        .unwrap_or(false)
        || window.navigator().max_touch_points() > 0;

    let has_large_screen = window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map(|width| width >= 768.0)
        .unwrap_or(false);

    !has_touch && has_large_screen
}
