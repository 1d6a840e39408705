//! View rendering for the map container.

use super::messages::Msg;
use super::state::MapContainerComponent;
use crate::types::map::{PolygonFeature, POLAND_IMAGE_BOUNDS, REGION_COUNT};
use crate::utils::preload::animal_image_path;
use yew::prelude::*;

pub fn view(component: &MapContainerComponent, ctx: &Context<MapContainerComponent>) -> Html {
    let link = ctx.link();

    let ((south, west), (north, east)) = component.bounds;
    let ((img_south, img_west), (img_north, img_east)) = POLAND_IMAGE_BOUNDS;

    html! {
        <div
            class="map-container"
            ref={component.container_ref.clone()}
            data-bounds={format!("{},{},{},{}", south, west, north, east)}
        >
            <img
                class="map-background"
                src="/mapa.webp"
                alt="Mapa Polski"
                data-image-bounds={format!("{},{},{},{}", img_south, img_west, img_north, img_east)}
            />
            if component.map_state.loading {
                <div class="map-loading-overlay">{ "Wczytywanie mapy..." }</div>
            }

            <div class="map-toolbar">
                <span class="map-position">
                    { format!(
                        "{:.2}, {:.2} · zoom {:.1}",
                        component.map_state.center.0,
                        component.map_state.center.1,
                        component.map_state.zoom,
                    ) }
                </span>
                <button class="map-reset" onclick={link.callback(|_| Msg::ResetView)}>
                    { "Cała Polska" }
                </button>
                if let Some(summary) = &component.preload_summary {
                    <span class="map-preload" title="Wczytane zdjęcia zwierząt">
                        { format!("{}/{}", summary.loaded, summary.total()) }
                    </span>
                }
            </div>

            <div class="map-regions">
                { for (1..=REGION_COUNT).map(|region| html! {
                    <button
                        class="map-region"
                        onclick={link.callback(move |_| Msg::SelectRegion(region))}
                    >
                        { format!("Region {}", region) }
                    </button>
                }) }
            </div>

            if let Some(error) = &component.load_error {
                <p class="map-error">{ format!("Nie udało się wczytać mapy: {}", error) }</p>
            } else {
                <div class="map-polygons">
                    { for component.polygons.iter().map(|feature| polygon_item(feature, ctx)) }
                </div>
            }
        </div>
    }
}

fn polygon_item(feature: &PolygonFeature, ctx: &Context<MapContainerComponent>) -> Html {
    let properties = &feature.properties;
    let animal_species_id = properties.animal_species_id;
    let class = if properties.adopted {
        "map-polygon adopted"
    } else {
        "map-polygon"
    };

    html! {
        <button
            {class}
            onclick={ctx.link().callback(move |_| Msg::SelectAnimal(animal_species_id))}
        >
            <img src={animal_image_path(animal_species_id)} alt={properties.animal_species.clone()} />
            <span>{ &properties.animal_species }</span>
            if let Some(name) = &properties.animal_name {
                <span class="animal-name">{ name }</span>
            }
        </button>
    }
}
