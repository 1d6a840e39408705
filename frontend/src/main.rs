use crate::app::App;

mod app;
mod components;
mod stores;
mod types;
mod utils;

fn main() {
    yew::Renderer::<App>::new().render();
}
