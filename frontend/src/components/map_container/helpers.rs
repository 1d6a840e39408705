//! Helpers for the map container: polygon data fetch and device-dependent
//! bounds selection.

use crate::types::map::{LatLngBounds, PolygonCollection, PolygonFeature};
use crate::types::map::{POLAND_BOUNDS, POLAND_BOUNDS_MOBILE};
use crate::utils::device::is_desktop;
use gloo_net::http::Request;

/// Path of the GeoJSON file with the animal polygons.
const POLYGON_DATA_PATH: &str = "/mapa.geojson";

/// Fetches and parses the animal polygon collection.
pub async fn fetch_polygons() -> Result<Vec<PolygonFeature>, String> {
    let response = Request::get(POLYGON_DATA_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() != 200 {
        return Err(format!("unexpected status: {}", response.status()));
    }
    let collection: PolygonCollection = response.json().await.map_err(|e| e.to_string())?;
    Ok(collection.features)
}

/// Mobile gets tighter east bounds so the popup has room on screen.
pub fn bounds_for_device() -> LatLngBounds {
    if is_desktop() {
        POLAND_BOUNDS
    } else {
        POLAND_BOUNDS_MOBILE
    }
}
