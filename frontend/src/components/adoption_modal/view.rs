//! View rendering for the adoption dialog.

use super::messages::Msg;
use super::state::AdoptionModalComponent;
use crate::utils::preload::animal_image_path;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn view(component: &AdoptionModalComponent, ctx: &Context<AdoptionModalComponent>) -> Html {
    if !component.modal.is_open {
        return html! {};
    }

    let link = ctx.link();
    let on_name_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateName(input.value())
    });
    let on_code_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateBlikCode(input.value())
    });

    html! {
        <div class="adoption-modal-backdrop">
            <div class="adoption-modal" role="dialog">
                if let Some(animal_id) = component.modal.animal_id {
                    <img
                        class="adoption-animal"
                        src={animal_image_path(animal_id)}
                        alt="Zdjęcie zwierzaka"
                    />
                }

                <label for="animal-name">{ "Nadaj imię swojemu zwierzakowi" }</label>
                <input
                    id="animal-name"
                    type="text"
                    value={component.form.animal_name.clone()}
                    oninput={on_name_input}
                />

                <label for="blik-code">{ "Kod BLIK" }</label>
                <input
                    id="blik-code"
                    type="text"
                    inputmode="numeric"
                    placeholder="123 456"
                    value={component.blik_code.clone()}
                    oninput={on_code_input}
                />

                if component.form.has_error {
                    <p class="adoption-error">
                        { "Coś poszło nie tak. Sprawdź dane i spróbuj ponownie." }
                    </p>
                }

                <div class="adoption-actions">
                    <button
                        class="adoption-submit"
                        disabled={component.submitting}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if component.submitting { "Przetwarzanie..." } else { "Adoptuj" } }
                    </button>
                    <button class="adoption-cancel" onclick={link.callback(|_| Msg::Close)}>
                        { "Anuluj" }
                    </button>
                </div>
            </div>
        </div>
    }
}
