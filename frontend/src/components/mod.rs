pub mod adoption_modal;
pub mod map_container;
