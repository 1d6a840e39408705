//! Map view state store.
//!
//! Holds the mapping library handle (opaque `JsValue`), the current center
//! and zoom, and the loading flag for the whole map session. Each setter is
//! a pure merge — it touches its own field and nothing else — and `reset`
//! restores the configured Poland defaults, dropping the handle.

use crate::stores::{Store, Subscription};
use crate::types::map::{LatLng, POLAND_MAP_CONFIG};
use wasm_bindgen::JsValue;
use yew::Callback;

#[derive(Clone, PartialEq)]
pub struct MapState {
    /// Handle supplied by the mapping library once the map is mounted.
    pub map: Option<JsValue>,
    pub center: LatLng,
    pub zoom: f64,
    pub loading: bool,
}

impl MapState {
    fn initial() -> Self {
        Self {
            map: None,
            center: POLAND_MAP_CONFIG.center,
            zoom: POLAND_MAP_CONFIG.zoom,
            loading: false,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct MapStore {
    store: Store<MapState>,
}

impl MapStore {
    pub fn new() -> Self {
        Self {
            store: Store::new(MapState::initial()),
        }
    }

    pub fn get(&self) -> MapState {
        self.store.get()
    }

    pub fn subscribe(&self, callback: Callback<MapState>) -> Subscription {
        self.store.subscribe(callback)
    }

    pub fn set_map(&self, map: JsValue) {
        self.store.update(|state| state.map = Some(map));
    }

    pub fn set_center(&self, center: LatLng) {
        self.store.update(|state| state.center = center);
    }

    pub fn set_zoom(&self, zoom: f64) {
        self.store.update(|state| state.zoom = zoom);
    }

    pub fn set_loading(&self, loading: bool) {
        self.store.update(|state| state.loading = loading);
    }

    /// Back to the configured defaults: Poland center/zoom, no handle,
    /// not loading.
    pub fn reset(&self) {
        self.store.set(MapState::initial());
    }
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_poland_defaults() {
        let state = MapStore::new().get();
        assert!(state.map.is_none());
        assert_eq!(state.center, (52.0, 19.0));
        assert_eq!(state.zoom, 9.5);
        assert!(!state.loading);
    }

    #[test]
    fn setters_merge_without_touching_other_fields() {
        let store = MapStore::new();
        store.set_zoom(9.0);
        store.set_loading(true);

        let state = store.get();
        assert_eq!(state.zoom, 9.0);
        assert!(state.loading);
        // untouched by either setter
        assert_eq!(state.center, POLAND_MAP_CONFIG.center);
        assert!(state.map.is_none());
    }

    #[test]
    fn reset_restores_the_configured_defaults_not_the_last_values() {
        let store = MapStore::new();
        store.set_zoom(9.0);
        store.set_center((50.0, 20.0));
        store.set_loading(true);

        store.reset();

        let state = store.get();
        assert_eq!(state.center, POLAND_MAP_CONFIG.center);
        assert_eq!(state.zoom, POLAND_MAP_CONFIG.zoom);
        assert!(!state.loading);
        assert!(state.map.is_none());
    }

    #[test]
    fn setters_notify_subscribers() {
        let store = MapStore::new();
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.subscribe(Callback::from(move |state: MapState| {
            sink.borrow_mut().push(state.center);
        }));

        store.set_center((54.14, 18.76));
        store.reset();

        assert_eq!(
            *seen.borrow(),
            vec![(54.14, 18.76), POLAND_MAP_CONFIG.center]
        );
    }
}
