use crate::stores::modal::AdoptionModalState;

pub enum Msg {
    /// The modal store notified a change (open/close/another animal).
    ModalChanged(AdoptionModalState),
    /// The name field changed.
    UpdateName(String),
    /// The BLIK code field changed; the raw value gets reformatted.
    UpdateBlikCode(String),
    /// Submit was clicked.
    Submit,
    /// The authorization + payment round-trip settled.
    PaymentFinished(Result<serde_json::Value, String>),
    /// Cancel/close was clicked.
    Close,
}
