use crate::components::adoption_modal::AdoptionModalComponent;
use crate::components::map_container::MapContainerComponent;
use crate::stores::map::MapStore;
use crate::stores::modal::AdoptionModalStore;
use yew::{html, Component, Context, Html};

/// Application root. Owns the store instances and hands them to the
/// components through props.
pub struct App {
    map_store: MapStore,
    modal_store: AdoptionModalStore,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            map_store: MapStore::new(),
            modal_store: AdoptionModalStore::new(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <MapContainerComponent
                    map_store={self.map_store.clone()}
                    modal_store={self.modal_store.clone()}
                />
                <AdoptionModalComponent modal_store={self.modal_store.clone()} />
            </div>
        }
    }
}
