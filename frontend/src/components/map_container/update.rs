//! Update logic for the map container.

use super::messages::Msg;
use super::state::MapContainerComponent;
use crate::types::map::{region_center, POLAND_MAP_CONFIG};
use gloo_console::warn;
use yew::prelude::*;

pub fn update(
    component: &mut MapContainerComponent,
    ctx: &Context<MapContainerComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::MapStateChanged(state) => {
            component.map_state = state;
            true
        }

        Msg::PolygonsLoaded(polygons) => {
            component.polygons = polygons;
            component.load_error = None;
            ctx.props().map_store.set_loading(false);
            true
        }

        Msg::PolygonsFailed(error) => {
            warn!(format!("Polygon data failed to load: {}", error));
            component.load_error = Some(error);
            ctx.props().map_store.set_loading(false);
            true
        }

        Msg::PreloadFinished(summary) => {
            component.preload_summary = Some(summary);
            true
        }

        Msg::SelectRegion(region) => {
            if let Some(center) = region_center(region) {
                ctx.props().map_store.set_center(center);
                ctx.props().map_store.set_zoom(POLAND_MAP_CONFIG.max_zoom);
            }
            // The store notification drives the re-render.
            false
        }

        Msg::SelectAnimal(animal_species_id) => {
            ctx.props().modal_store.open(animal_species_id);
            false
        }

        Msg::ResetView => {
            ctx.props().map_store.reset();
            false
        }
    }
}
