//! Component state for the map container.

use crate::stores::map::MapState;
use crate::stores::Subscription;
use crate::types::map::{LatLngBounds, PolygonFeature, POLAND_BOUNDS};
use crate::utils::preload::PreloadSummary;
use yew::prelude::*;

/// Main state container for the `MapContainerComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct MapContainerComponent {
    /// Latest snapshot from the map store.
    pub map_state: MapState,

    /// Device-dependent pan bounds handed to the mapping library.
    pub bounds: LatLngBounds,

    /// Reference to the map mount node; registered as the opaque map handle
    /// until the mapping library replaces it with its own.
    pub container_ref: NodeRef,

    /// Animal polygons from the data file; empty until loaded.
    pub polygons: Vec<PolygonFeature>,

    /// Set when the polygon fetch failed, shown instead of the polygon list.
    pub load_error: Option<String>,

    /// Tally of the image preload batch, once it settled.
    pub preload_summary: Option<PreloadSummary>,

    /// Guard to avoid running first-render initialization more than once.
    pub started: bool,

    /// Keeps the map store subscription alive for the component's lifetime.
    pub _subscription: Option<Subscription>,
}

impl MapContainerComponent {
    pub fn new(map_state: MapState) -> Self {
        Self {
            map_state,
            bounds: POLAND_BOUNDS,
            container_ref: NodeRef::default(),
            polygons: Vec::new(),
            load_error: None,
            preload_summary: None,
            started: false,
            _subscription: None,
        }
    }
}
