//! Adoption dialog: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! The dialog renders nothing while the modal store says closed. Submitting
//! runs the authorization + payment round-trip against the backend relay;
//! success closes the dialog, failure flags the form.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AdoptionModalProps;
pub use state::AdoptionModalComponent;

impl Component for AdoptionModalComponent {
    type Message = Msg;
    type Properties = AdoptionModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let store = &ctx.props().modal_store;
        let mut component = AdoptionModalComponent::new(store.get());
        component._subscription = Some(store.subscribe(ctx.link().callback(Msg::ModalChanged)));
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
