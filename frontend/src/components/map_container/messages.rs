use crate::stores::map::MapState;
use crate::types::map::PolygonFeature;
use crate::utils::preload::PreloadSummary;

pub enum Msg {
    /// The map store notified a change.
    MapStateChanged(MapState),
    /// The polygon data file arrived.
    PolygonsLoaded(Vec<PolygonFeature>),
    /// The polygon data file could not be fetched or parsed.
    PolygonsFailed(String),
    /// The image preload batch settled.
    PreloadFinished(PreloadSummary),
    /// A region tile was clicked; recenter the map on it.
    SelectRegion(u32),
    /// An animal polygon was clicked; open its adoption dialog.
    SelectAnimal(u32),
    /// Back to the Poland-wide view.
    ResetView,
}
