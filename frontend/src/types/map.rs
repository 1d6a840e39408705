//! Map configuration for the Poland adoption map, plus the GeoJSON polygon
//! model the map data file uses. Coordinates are `(lat, lon)` tuples; the
//! store layer performs no range validation — the mapping library's options
//! (min/max zoom, bounds) are the enforcement point.

use serde::{Deserialize, Serialize};

/// `(lat, lon)` pair.
pub type LatLng = (f64, f64);

/// `(south-west, north-east)` corner pair.
pub type LatLngBounds = (LatLng, LatLng);

/// Viewport configuration handed to the mapping library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

/// Poland-wide defaults; also the state the map store resets to.
pub const POLAND_MAP_CONFIG: MapConfig = MapConfig {
    center: (52.0, 19.0),
    zoom: 9.5,
    min_zoom: 9.0,
    max_zoom: 10.0,
};

/// Map bounds for Poland.
pub const POLAND_BOUNDS: LatLngBounds = ((48.95, 14.0), (55.1, 25.33));

/// Map bounds for Poland on mobile, with no popup space on the right.
pub const POLAND_BOUNDS_MOBILE: LatLngBounds = ((48.95, 14.0), (55.1, 24.25));

/// Bounds of the map background image overlay.
pub const POLAND_IMAGE_BOUNDS: LatLngBounds = ((48.485, 13.451), (55.489, 24.859));

/// Number of selectable regions on the map.
pub const REGION_COUNT: u32 = 9;

/// Center coordinate for a region id (1-based), `None` outside the map.
pub fn region_center(region: u32) -> Option<LatLng> {
    match region {
        1 => Some((53.5, 15.5)),   // Rzeki północny wschód
        2 => Some((54.14, 18.76)), // Pomorze
        3 => Some((53.9, 22.06)),  // Mazury
        4 => Some((52.76, 22.75)), // Podlasie puszcza
        5 => Some((52.12, 20.06)), // Centralna Polska
        6 => Some((51.32, 16.84)), // Południowy wschód
        7 => Some((49.73, 20.04)), // Tatry
        8 => Some((50.47, 22.49)), // Bieszczady
        9 => Some((52.89, 17.63)), // Bory Tucholskie
        _ => None,
    }
}

/// Properties carried by every animal polygon in the GeoJSON data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonProperties {
    pub point_id: u32,
    pub animal_species_id: u32,
    pub animal_species: String,
    pub animal_species_ext: String,
    pub animal_description: String,
    pub adopted: bool,
    /// Only present once an animal has been adopted and named.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonGeometry {
    /// Always `"MultiPolygon"` in the adoption data file.
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Vec<Vec<Vec<Vec<f64>>>>,
}

/// One adoptable animal's territory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub properties: PolygonProperties,
    pub geometry: PolygonGeometry,
}

/// The top-level GeoJSON FeatureCollection of the map data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<PolygonFeature>,
}
