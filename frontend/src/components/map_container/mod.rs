//! Map container: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Subscribe to the map store and mirror its snapshots into local state.
//! - On first render, flag the map as loading, kick off the animal image
//!   preload batch, and fetch the polygon data file.
//! - Translate region/polygon clicks into store operations (recenter, open
//!   the adoption dialog).

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MapContainerProps;
pub use state::MapContainerComponent;

impl Component for MapContainerComponent {
    type Message = Msg;
    type Properties = MapContainerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let store = &ctx.props().map_store;
        let mut component = MapContainerComponent::new(store.get());
        component.bounds = helpers::bounds_for_device();
        component._subscription =
            Some(store.subscribe(ctx.link().callback(Msg::MapStateChanged)));
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.started {
            self.started = true;
            ctx.props().map_store.set_loading(true);

            if let Some(node) = self.container_ref.get() {
                ctx.props().map_store.set_map(node.into());
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                let summary = crate::utils::preload::preload_animal_images().await;
                link.send_message(Msg::PreloadFinished(summary));
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                match helpers::fetch_polygons().await {
                    Ok(polygons) => link.send_message(Msg::PolygonsLoaded(polygons)),
                    Err(e) => link.send_message(Msg::PolygonsFailed(e)),
                }
            });
        }
    }
}
