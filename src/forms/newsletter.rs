use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::forms::controller::{collect_fields, use_form_machine};
use crate::forms::validator::FormKind;

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);

    let on_reset = {
        let email = email.clone();
        Callback::from(move |_| email.set(String::new()))
    };

    let controller = use_form_machine(
        FormKind::Newsletter,
        "Successfully subscribed to newsletter!",
        on_reset,
    );

    let onsubmit = {
        let email = email.clone();
        let submit = controller.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(collect_fields(&[("email", email.as_str())]));
        })
    };

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    html! {
        <form class="newsletter-form" {onsubmit}>
            <input
                class="newsletter-input"
                type="email"
                name="email"
                placeholder="Your email address"
                value={(*email).clone()}
                {oninput}
            />
            <button
                type="submit"
                class="newsletter-btn"
                disabled={controller.submitting}
            >
                { if controller.submitting { "Subscribing..." } else { "Subscribe" } }
            </button>
        </form>
    }
}
