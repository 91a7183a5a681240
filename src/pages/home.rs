use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::{use_notifier, NotificationKind};
use crate::components::reveal::Reveal;
use crate::components::ripple;
use crate::forms::callback::CallbackForm;
use crate::forms::contact::ContactForm;
use crate::forms::newsletter::NewsletterForm;
use crate::forms::validator::is_valid_email;

const PRESS_ANIMATION_MS: u32 = 150;

/// The launch timeline: marker label, heading, and the detail surfaced
/// when a visitor clicks the marker.
const STEPS: [(&str, &str, &str); 8] = [
    (
        "Hour 1",
        "Consultation",
        "Hour 1: Initial consultation and requirement gathering",
    ),
    (
        "Hour 2",
        "Domain & hosting",
        "Hour 2: Domain registration and hosting setup",
    ),
    (
        "Hour 6",
        "Local SEO",
        "Hour 6: Local SEO optimization and business listings",
    ),
    (
        "Hour 24",
        "Interim page",
        "Hour 24: Launch of interim lead-capturing page",
    ),
    (
        "Days 2-3",
        "Design",
        "Days 2-3: Complete UI/UX design and mockups",
    ),
    (
        "Days 4-6",
        "Development",
        "Days 4-6: Full development and content integration",
    ),
    (
        "Day 7",
        "Launch",
        "Day 7: Final launch and handover with training",
    ),
    (
        "Ongoing",
        "Support",
        "Ongoing: Support and maintenance",
    ),
];

const SERVICES: [(&str, &str); 4] = [
    (
        "Launch in 7 days",
        "From first call to a live website within one week, with an interim lead-capturing page online after 24 hours.",
    ),
    (
        "Local SEO",
        "Business listings, on-page optimization and local search visibility from day one.",
    ),
    (
        "Design that converts",
        "Custom UI/UX designed around one goal: turning visitors into inquiries.",
    ),
    (
        "Ongoing care",
        "Hosting, updates and content changes handled for you after launch.",
    ),
];

const CASE_STEPS: [(&str, &str); 4] = [
    (
        "Day 0",
        "A local plumbing company came to us with no website and an empty calendar.",
    ),
    (
        "Day 1",
        "Interim page live. First callback request arrived the same evening.",
    ),
    (
        "Day 7",
        "Full site launched with booking form, service pages and reviews.",
    ),
    (
        "Day 30",
        "Calls from the website became their largest source of new customers.",
    ),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "\"The interim page alone paid for the project before the real site was even finished.\"",
        "Marta K., bakery owner",
    ),
    (
        "\"One call on Monday, site live on Sunday. Exactly as promised.\"",
        "Jon A., electrician",
    ),
    (
        "\"They answer the phone. That alone puts them ahead of every agency we tried.\"",
        "Priya S., dental clinic",
    ),
];

const FAQ: [(&str, &str); 4] = [
    (
        "What happens in the first 24 hours?",
        "We register your domain, set up hosting and publish an interim page that already captures leads while the full site is being built.",
    ),
    (
        "Do I need to prepare content?",
        "No. We gather what we need in the first consultation and write the rest for you. You review everything before launch.",
    ),
    (
        "What does it cost?",
        "A fixed project price agreed before we start, and a small monthly fee for hosting and support. No surprises.",
    ),
    (
        "Who owns the website?",
        "You do. Domain, content and design are yours, and you can take them elsewhere at any time.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    let notifier = use_notifier();
    let signup_email = use_state(String::new);
    let signup_pressed = use_state(|| false);
    let signup_input = use_node_ref();
    let active_step = use_state(|| None::<usize>);

    let do_signup = {
        let notifier = notifier.clone();
        let signup_email = signup_email.clone();
        let signup_pressed = signup_pressed.clone();
        let signup_input = signup_input.clone();
        Callback::from(move |_: ()| {
            if is_valid_email(&signup_email) {
                signup_pressed.set(true);
                {
                    let signup_pressed = signup_pressed.clone();
                    Timeout::new(PRESS_ANIMATION_MS, move || signup_pressed.set(false)).forget();
                }
                notifier.notify(
                    "Thank you for your interest! We'll be in touch soon.",
                    NotificationKind::Success,
                );
                signup_email.set(String::new());
            } else {
                notifier.notify(
                    "Please enter a valid email address",
                    NotificationKind::Error,
                );
                if let Some(input) = signup_input.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
        })
    };

    let on_signup_click = {
        let do_signup = do_signup.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            ripple::splash(&e);
            do_signup.emit(());
        })
    };

    let on_signup_keypress = {
        let do_signup = do_signup.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                do_signup.emit(());
            }
        })
    };

    let on_signup_input = {
        let signup_email = signup_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            signup_email.set(input.value());
        })
    };

    let signup_btn_style = if *signup_pressed {
        "transform: scale(0.95);"
    } else {
        "transform: scale(1);"
    };

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>

            <section class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Your business online in 7 days"}</h1>
                    <p class="hero-subtitle">
                        {"We design, build and launch your website in one week. "}
                        {"An interim page starts collecting leads after just 24 hours."}
                    </p>
                    <div class="email-signup">
                        <input
                            ref={signup_input}
                            class="email-input"
                            type="email"
                            placeholder="Your email address"
                            value={(*signup_email).clone()}
                            oninput={on_signup_input}
                            onkeypress={on_signup_keypress}
                        />
                        <button
                            class="signup-btn"
                            style={signup_btn_style}
                            onclick={on_signup_click}
                        >
                            {"Get Started"}
                        </button>
                    </div>
                </div>
            </section>

            <section id="process" class="process-section">
                <h2>{"From call to launch"}</h2>
                <div class="step-markers">
                    { for STEPS.iter().enumerate().map(|(index, (marker, _, detail))| {
                        let onclick = {
                            let active_step = active_step.clone();
                            let notifier = notifier.clone();
                            let detail = *detail;
                            Callback::from(move |_: MouseEvent| {
                                active_step.set(Some(index));
                                notifier.notify(detail, NotificationKind::Info);
                            })
                        };
                        html! {
                            <button
                                class={classes!(
                                    "step-marker",
                                    (*active_step == Some(index)).then(|| "active")
                                )}
                                {onclick}
                            >
                                { *marker }
                            </button>
                        }
                    }) }
                </div>
                <div class="process-steps">
                    { for STEPS.iter().map(|(marker, title, detail)| html! {
                        <Reveal class="process-step">
                            <span class="step-time">{ *marker }</span>
                            <h3>{ *title }</h3>
                            <p>{ *detail }</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="services" class="services-section">
                <h2>{"What you get"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|(title, text)| html! {
                        <Reveal class="service-card">
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="cases" class="case-section">
                <h2>{"One week, start to finish"}</h2>
                { for CASE_STEPS.iter().map(|(day, text)| html! {
                    <Reveal class="case-step">
                        <span class="case-day">{ *day }</span>
                        <p>{ *text }</p>
                    </Reveal>
                }) }
            </section>

            <section id="testimonials" class="testimonials-section">
                <h2>{"What clients say"}</h2>
                <div class="card-grid">
                    { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                        <Reveal class="testimonial-card">
                            <p>{ *quote }</p>
                            <span class="testimonial-author">{ *author }</span>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="faq" class="faq-section">
                <h2>{"Frequently asked questions"}</h2>
                { for FAQ.iter().map(|(question, answer)| html! {
                    <Reveal class="faq-item">
                        <details>
                            <summary>{ *question }</summary>
                            <p>{ *answer }</p>
                        </details>
                    </Reveal>
                }) }
            </section>

            <section id="callback" class="callback-section">
                <div class="callback-copy">
                    <h2>{"Rather talk it through?"}</h2>
                    <p>{"Leave your number and we call you back within one business day."}</p>
                </div>
                <CallbackForm />
            </section>

            <section id="contact" class="contact-section">
                <h2>{"Tell us about your project"}</h2>
                <ContactForm />
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <div class="footer-about">
                        <span class="footer-logo">{"swiftsite"}</span>
                        <p>{"Websites for small businesses, live in a week."}</p>
                    </div>
                    <div class="footer-newsletter">
                        <h3>{"Stay in the loop"}</h3>
                        <NewsletterForm />
                    </div>
                </div>
                <p class="footer-copyright">{"© 2026 swiftsite. All rights reserved."}</p>
            </footer>
        </div>
    }
}

const HOME_CSS: &str = r#"
    .home-page {
        color: #fff;
    }
    .home-page h2 {
        font-size: 2.5rem;
        margin-bottom: 2rem;
        text-align: center;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero {
        min-height: 90vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 6rem 2rem 4rem;
        background: radial-gradient(circle at top, rgba(30, 144, 255, 0.15), transparent 60%);
    }
    .hero-title {
        font-size: 3.5rem;
        margin-bottom: 1rem;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-subtitle {
        font-size: 1.3rem;
        color: rgba(255, 255, 255, 0.8);
        max-width: 600px;
        margin: 0 auto 2.5rem;
    }
    .email-signup {
        display: flex;
        gap: 0.75rem;
        justify-content: center;
        flex-wrap: wrap;
    }
    .email-input {
        width: 320px;
        max-width: 80vw;
        padding: 1rem 1.25rem;
        border-radius: 8px;
        border: 1px solid rgba(30, 144, 255, 0.3);
        background: rgba(30, 30, 30, 0.7);
        color: #fff;
        font-size: 1rem;
    }
    .signup-btn {
        padding: 1rem 2rem;
        border-radius: 8px;
        border: none;
        background: #1E90FF;
        color: white;
        font-size: 1rem;
        cursor: pointer;
        transition: transform 0.15s ease, background 0.3s ease;
    }
    .signup-btn:hover {
        background: #7EB2FF;
    }
    section {
        padding: 4rem 2rem;
        max-width: 1100px;
        margin: 0 auto;
    }
    .step-markers {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        flex-wrap: wrap;
        margin-bottom: 3rem;
    }
    .step-marker {
        padding: 0.6rem 1rem;
        border-radius: 20px;
        border: 1px solid rgba(30, 144, 255, 0.3);
        background: rgba(30, 30, 30, 0.7);
        color: rgba(255, 255, 255, 0.8);
        cursor: pointer;
        transition: transform 0.2s ease, background 0.2s ease;
    }
    .step-marker.active {
        background: #1E90FF;
        color: white;
        transform: scale(1.1);
    }
    .process-steps {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
    }
    .process-step {
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 16px;
        padding: 1.5rem;
    }
    .step-time {
        color: #7EB2FF;
        font-size: 0.9rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }
    .process-step h3 {
        margin: 0.5rem 0;
    }
    .process-step p,
    .service-card p,
    .case-step p,
    .testimonial-card p {
        color: rgba(255, 255, 255, 0.7);
        line-height: 1.5;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
    }
    .service-card,
    .testimonial-card {
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 16px;
        padding: 2rem;
        transition: transform 0.3s ease;
    }
    .service-card:hover,
    .testimonial-card:hover,
    .case-step:hover {
        transform: translateY(-10px);
    }
    .testimonial-author {
        display: block;
        margin-top: 1rem;
        color: #7EB2FF;
        font-size: 0.9rem;
    }
    .case-step {
        display: flex;
        gap: 1.5rem;
        align-items: baseline;
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 16px;
        padding: 1.5rem 2rem;
        margin-bottom: 1rem;
        transition: transform 0.3s ease;
    }
    .case-day {
        color: #7EB2FF;
        min-width: 5rem;
        font-weight: bold;
    }
    .faq-item details {
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 12px;
        padding: 1rem 1.5rem;
        margin-bottom: 0.75rem;
    }
    .faq-item summary {
        cursor: pointer;
        font-size: 1.1rem;
    }
    .faq-item p {
        margin-top: 0.75rem;
        color: rgba(255, 255, 255, 0.7);
        line-height: 1.5;
    }
    .callback-section {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .callback-copy p {
        color: rgba(255, 255, 255, 0.8);
        font-size: 1.1rem;
    }
    .callback-copy h2 {
        text-align: left;
    }
    .contact-form,
    .callback-form {
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 16px;
        padding: 2rem;
        backdrop-filter: blur(10px);
    }
    .form-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }
    .form-group {
        margin-bottom: 1.25rem;
        display: flex;
        flex-direction: column;
    }
    .form-group label {
        margin-bottom: 0.4rem;
        color: rgba(255, 255, 255, 0.8);
        font-size: 0.9rem;
    }
    .form-group input,
    .form-group select,
    .form-group textarea {
        padding: 0.8rem 1rem;
        border-radius: 8px;
        border: 1px solid rgba(30, 144, 255, 0.3);
        background: rgba(20, 20, 20, 0.8);
        color: #fff;
        font-size: 1rem;
    }
    .submit-btn,
    .callback-btn {
        width: 100%;
        padding: 1rem;
        border-radius: 8px;
        border: none;
        background: #1E90FF;
        color: white;
        font-size: 1.1rem;
        cursor: pointer;
        transition: background 0.3s ease;
    }
    .submit-btn:hover,
    .callback-btn:hover {
        background: #7EB2FF;
    }
    .submit-btn:disabled,
    .callback-btn:disabled {
        opacity: 0.6;
        cursor: default;
        pointer-events: none;
    }
    .footer {
        border-top: 1px solid rgba(30, 144, 255, 0.1);
        padding: 3rem 2rem 2rem;
        max-width: none;
    }
    .footer-content {
        display: flex;
        justify-content: space-between;
        gap: 2rem;
        flex-wrap: wrap;
        max-width: 1100px;
        margin: 0 auto 2rem;
    }
    .footer-logo {
        font-size: 1.3rem;
        font-weight: bold;
        color: #7EB2FF;
    }
    .footer-about p {
        color: rgba(255, 255, 255, 0.6);
    }
    .newsletter-form {
        display: flex;
        gap: 0.5rem;
    }
    .newsletter-input {
        padding: 0.8rem 1rem;
        border-radius: 8px;
        border: 1px solid rgba(30, 144, 255, 0.3);
        background: rgba(20, 20, 20, 0.8);
        color: #fff;
        flex: 1;
    }
    .newsletter-btn {
        padding: 0.8rem 1.5rem;
        border-radius: 8px;
        border: none;
        background: #1E90FF;
        color: white;
        cursor: pointer;
        transition: opacity 0.3s ease;
    }
    .newsletter-btn:disabled {
        opacity: 0.6;
        pointer-events: none;
    }
    .footer-copyright {
        text-align: center;
        color: rgba(255, 255, 255, 0.4);
        font-size: 0.9rem;
    }
    @media (max-width: 768px) {
        .hero-title {
            font-size: 2.4rem;
        }
        .home-page h2 {
            font-size: 2rem;
        }
        .callback-section {
            grid-template-columns: 1fr;
        }
        .form-row {
            grid-template-columns: 1fr;
        }
    }
"#;
