//! Properties for the map container.
//!
//! Both stores are handed in by the parent (`App`), so the component never
//! reaches for ambient context; two renders with the same store handles
//! compare equal and skip re-rendering.

use crate::stores::map::MapStore;
use crate::stores::modal::AdoptionModalStore;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MapContainerProps {
    /// View state store for the Poland map.
    pub map_store: MapStore,
    /// Modal store opened when a polygon's animal is selected.
    pub modal_store: AdoptionModalStore,
}
