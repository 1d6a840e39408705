//! Component state for the adoption dialog.

use crate::stores::modal::AdoptionModalState;
use crate::stores::Subscription;
use crate::utils::form::FormState;

/// Main state container for the `AdoptionModalComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct AdoptionModalComponent {
    /// Latest snapshot from the modal store.
    pub modal: AdoptionModalState,

    /// The adoption form (name, validity, error flag, selected species).
    pub form: FormState,

    /// BLIK code exactly as displayed, i.e. already formatted ("123 456").
    pub blik_code: String,

    /// True while the authorization/payment round-trip is in flight.
    pub submitting: bool,

    /// Keeps the modal store subscription alive for the component's lifetime.
    pub _subscription: Option<Subscription>,
}

impl AdoptionModalComponent {
    pub fn new(modal: AdoptionModalState) -> Self {
        Self {
            form: FormState {
                animal_species_id: modal.animal_id,
                ..FormState::default()
            },
            modal,
            blik_code: String::new(),
            submitting: false,
            _subscription: None,
        }
    }
}
