//! Update logic for the adoption dialog.

use super::helpers;
use super::messages::Msg;
use super::state::AdoptionModalComponent;
use crate::utils::form::{format_value, validate_animal_name};
use gloo_console::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn update(
    component: &mut AdoptionModalComponent,
    ctx: &Context<AdoptionModalComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::ModalChanged(modal) => {
            if modal.is_open && modal.animal_id != component.form.animal_species_id {
                // A different animal: start from a clean form.
                component.form.reset();
                component.blik_code.clear();
                component.form.animal_species_id = modal.animal_id;
            }
            component.modal = modal;
            true
        }

        Msg::UpdateName(value) => {
            component.form.animal_name = value;
            component.form.is_valid = validate_animal_name(&component.form.animal_name);
            component.form.has_error = false;
            true
        }

        Msg::UpdateBlikCode(value) => {
            component.blik_code = format_value(&value);
            true
        }

        Msg::Submit => {
            if !validate_animal_name(&component.form.animal_name) {
                component.form.is_valid = false;
                component.form.has_error = true;
                return true;
            }

            component.submitting = true;
            let payload = helpers::build_payment_payload(
                &component.form.animal_name,
                component.form.animal_species_id,
                &component.blik_code,
            );
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::PaymentFinished(helpers::adopt(payload).await));
            });
            true
        }

        Msg::PaymentFinished(result) => {
            component.submitting = false;
            match result {
                Ok(_) => {
                    component.form.reset();
                    component.blik_code.clear();
                    ctx.props().modal_store.close();
                }
                Err(e) => {
                    warn!(format!("Adoption payment failed: {}", e));
                    component.form.has_error = true;
                }
            }
            true
        }

        Msg::Close => {
            component.form.reset();
            component.blik_code.clear();
            ctx.props().modal_store.close();
            // The store notification drives the re-render.
            false
        }
    }
}
