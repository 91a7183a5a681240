use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ripple;
use crate::forms::controller::{collect_fields, use_form_machine};
use crate::forms::validator::FormKind;

#[function_component(CallbackForm)]
pub fn callback_form() -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);

    let on_reset = {
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();
        Callback::from(move |_| {
            name.set(String::new());
            phone.set(String::new());
            email.set(String::new());
        })
    };

    let controller = use_form_machine(
        FormKind::Callback,
        "Callback request sent successfully!",
        on_reset,
    );

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let submit = controller.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(collect_fields(&[
                ("name", name.as_str()),
                ("phone", phone.as_str()),
                ("email", email.as_str()),
            ]));
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_button_click = Callback::from(|e: MouseEvent| ripple::splash(&e));

    html! {
        <form class="callback-form" {onsubmit}>
            <div class="form-group">
                <label for="callback-name">{"Name"}</label>
                <input
                    id="callback-name"
                    type="text"
                    name="name"
                    placeholder="Your name"
                    value={(*name).clone()}
                    oninput={on_name}
                />
            </div>
            <div class="form-group">
                <label for="callback-phone">{"Phone"}</label>
                <input
                    id="callback-phone"
                    type="tel"
                    name="phone"
                    placeholder="We call this number"
                    value={(*phone).clone()}
                    oninput={on_phone}
                />
            </div>
            <div class="form-group">
                <label for="callback-email">{"Email"}</label>
                <input
                    id="callback-email"
                    type="email"
                    name="email"
                    placeholder="you@company.com"
                    value={(*email).clone()}
                    oninput={on_email}
                />
            </div>
            <button
                type="submit"
                class="callback-btn"
                disabled={controller.submitting}
                onclick={on_button_click}
            >
                <span>
                    { if controller.submitting { "Sending..." } else { "Request Callback" } }
                </span>
            </button>
        </form>
    }
}
