use crate::stores::modal::AdoptionModalStore;
use yew::prelude::*;

/// Properties for the adoption dialog. The store instance comes from the
/// parent; the map container opens it, this component closes it.
#[derive(Properties, PartialEq, Clone)]
pub struct AdoptionModalProps {
    pub modal_store: AdoptionModalStore,
}
