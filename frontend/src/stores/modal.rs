//! Adoption modal state store: which animal's adoption dialog is open.
//!
//! Two-field toggle with last-write-wins semantics. Closing clears the
//! animal id, so `animal_id` is `Some` only while the dialog is open.

use crate::stores::{Store, Subscription};
use yew::Callback;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdoptionModalState {
    pub is_open: bool,
    pub animal_id: Option<u32>,
}

#[derive(Clone, PartialEq)]
pub struct AdoptionModalStore {
    store: Store<AdoptionModalState>,
}

impl AdoptionModalStore {
    pub fn new() -> Self {
        Self {
            store: Store::new(AdoptionModalState::default()),
        }
    }

    pub fn get(&self) -> AdoptionModalState {
        self.store.get()
    }

    pub fn subscribe(&self, callback: Callback<AdoptionModalState>) -> Subscription {
        self.store.subscribe(callback)
    }

    /// Opens the dialog for one animal.
    pub fn open(&self, animal_id: u32) {
        self.store.set(AdoptionModalState {
            is_open: true,
            animal_id: Some(animal_id),
        });
    }

    pub fn close(&self) {
        self.store.set(AdoptionModalState::default());
    }
}

impl Default for AdoptionModalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_with_the_selected_animal() {
        let store = AdoptionModalStore::new();
        store.open(42);
        assert_eq!(
            store.get(),
            AdoptionModalState {
                is_open: true,
                animal_id: Some(42),
            }
        );
    }

    #[test]
    fn close_clears_the_animal_id() {
        let store = AdoptionModalStore::new();
        store.open(42);
        store.close();
        assert_eq!(store.get(), AdoptionModalState::default());
    }

    #[test]
    fn reopening_overwrites_the_previous_selection() {
        let store = AdoptionModalStore::new();
        store.open(1);
        store.open(2);
        assert_eq!(store.get().animal_id, Some(2));
    }
}
