use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::ripple;
use crate::forms::controller::{collect_fields, use_form_machine};
use crate::forms::validator::FormKind;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);

    let on_reset = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let subject = subject.clone();
        let message = message.clone();
        Callback::from(move |_| {
            first_name.set(String::new());
            last_name.set(String::new());
            email.set(String::new());
            phone.set(String::new());
            subject.set(String::new());
            message.set(String::new());
        })
    };

    let controller = use_form_machine(FormKind::Contact, "Message sent successfully!", on_reset);

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let subject = subject.clone();
        let message = message.clone();
        let submit = controller.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(collect_fields(&[
                ("firstName", first_name.as_str()),
                ("lastName", last_name.as_str()),
                ("email", email.as_str()),
                ("phone", phone.as_str()),
                ("subject", subject.as_str()),
                ("message", message.as_str()),
            ]));
        })
    };

    let on_first_name = {
        let first_name = first_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            first_name.set(input.value());
        })
    };
    let on_last_name = {
        let last_name = last_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            last_name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_subject = {
        let subject = subject.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            subject.set(select.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(textarea.value());
        })
    };

    let on_button_click = Callback::from(|e: MouseEvent| ripple::splash(&e));

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <label for="contact-first-name">{"First name"}</label>
                    <input
                        id="contact-first-name"
                        type="text"
                        name="firstName"
                        placeholder="Jane"
                        value={(*first_name).clone()}
                        oninput={on_first_name}
                    />
                </div>
                <div class="form-group">
                    <label for="contact-last-name">{"Last name"}</label>
                    <input
                        id="contact-last-name"
                        type="text"
                        name="lastName"
                        placeholder="Doe"
                        value={(*last_name).clone()}
                        oninput={on_last_name}
                    />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        name="email"
                        placeholder="jane@company.com"
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                </div>
                <div class="form-group">
                    <label for="contact-phone">{"Phone"}</label>
                    <input
                        id="contact-phone"
                        type="tel"
                        name="phone"
                        placeholder="+1 555 123 4567"
                        value={(*phone).clone()}
                        oninput={on_phone}
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="contact-subject">{"Subject"}</label>
                <select
                    id="contact-subject"
                    name="subject"
                    onchange={on_subject}
                >
                    <option value="" selected={subject.is_empty()}>{"Choose a subject"}</option>
                    <option value="general" selected={*subject == "general"}>{"General inquiry"}</option>
                    <option value="quote" selected={*subject == "quote"}>{"Project quote"}</option>
                    <option value="support" selected={*subject == "support"}>{"Support"}</option>
                    <option value="partnership" selected={*subject == "partnership"}>{"Partnership"}</option>
                </select>
            </div>
            <div class="form-group">
                <label for="contact-message">{"Message (optional)"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    placeholder="Tell us about your project"
                    value={(*message).clone()}
                    oninput={on_message}
                />
            </div>
            <button
                type="submit"
                class="submit-btn"
                disabled={controller.submitting}
                onclick={on_button_click}
            >
                { if controller.submitting { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}
