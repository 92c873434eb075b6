use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{ContactForm, ContactMessage, ContactPhase, PHASE_RESET_MS};
use crate::data::{CONTACT_METHODS, OWNER_EMAIL, RESUME_PATH};
use crate::frontend::hooks::use_reveal;

#[derive(Deserialize)]
struct ApiSubmissionResponse {
    ok: bool,
}

// Any transport error, non-2xx status, or refusal from the relay counts as
// the same generic failure.
async fn submit_message(message: ContactMessage) -> bool {
    let Ok(request) = Request::post("/api/contact").json(&message) else {
        return false;
    };

    let Ok(response) = request.send().await else {
        return false;
    };

    if !response.ok() {
        return false;
    }

    response
        .json::<ApiSubmissionResponse>()
        .await
        .map(|payload| payload.ok)
        .unwrap_or(false)
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let node = use_node_ref();
    let visibility = use_reveal(node.clone(), 0.2);
    let form = use_state(ContactForm::default);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.fields.name = input.value();
            form.set(next);
        })
    };

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.fields.email = input.value();
            form.set(next);
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.fields.message = input.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let mut submitting = (*form).clone();
            if !submitting.fields.has_required_fields() || !submitting.begin_submit() {
                return;
            }
            form.set(submitting.clone());

            let form = form.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                let succeeded = submit_message(submitting.fields.clone()).await;

                let mut settled = submitting;
                settled.complete_submit(succeeded);
                form.set(settled.clone());

                // The banner dismisses itself; dropping the handle on
                // unmount cancels the pending reset.
                let form = form.clone();
                *reset_timer.borrow_mut() = Some(Timeout::new(PHASE_RESET_MS, move || {
                    let mut idle = settled;
                    idle.reset_phase();
                    form.set(idle);
                }));
            });
        })
    };

    let is_submitting = form.phase == ContactPhase::Submitting;

    let panel = match form.phase {
        ContactPhase::Submitted => html! {
            <div class="form-banner form-success" role="status">
                <h4>{"Message sent!"}</h4>
                <p>{"Thanks for reaching out. I'll get back to you soon."}</p>
            </div>
        },
        ContactPhase::Error => html! {
            <div class="form-banner form-error" role="alert">
                <h4>{"Something went wrong"}</h4>
                <p>
                    {"Please try again or email me directly at "}
                    <a href={format!("mailto:{OWNER_EMAIL}")}>{OWNER_EMAIL}</a>
                    {"."}
                </p>
            </div>
        },
        ContactPhase::Idle | ContactPhase::Submitting => html! {
            <form class="contact-form" onsubmit={onsubmit}>
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    name="name"
                    type="text"
                    placeholder="Your name"
                    required=true
                    disabled={is_submitting}
                    value={form.fields.name.clone()}
                    oninput={on_name_input}
                />

                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    name="email"
                    type="email"
                    placeholder="your@email.com"
                    required=true
                    disabled={is_submitting}
                    value={form.fields.email.clone()}
                    oninput={on_email_input}
                />

                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    placeholder="Tell me about your project or opportunity..."
                    required=true
                    disabled={is_submitting}
                    value={form.fields.message.clone()}
                    oninput={on_message_input}
                />

                <button type="submit" class="btn btn-primary" disabled={is_submitting}>
                    {if is_submitting { "Sending…" } else { "Send Message" }}
                </button>
            </form>
        },
    };

    html! {
        <section
            id="contact"
            ref={node}
            aria-labelledby="contact-title"
            class={classes!("section-block", "contact", visibility.revealed().then_some("is-revealed"))}
        >
            <div class="section-heading">
                <h2 id="contact-title">{"Let's Build Together"}</h2>
                <p class="section-lede">
                    {"Whether you're a recruiter, client, or fellow developer, I'd love \
                      to hear from you."}
                </p>
            </div>

            <div class="contact-grid">
                <div class="contact-form-card">
                    <h3>{"Send me a message"}</h3>
                    {panel}
                </div>

                <aside class="contact-rail">
                    <h3>{"Quick contact"}</h3>
                    <ul class="contact-methods">
                        { for CONTACT_METHODS.iter().map(|method| html! {
                            <li key={method.label}>
                                <a class="contact-method" href={method.href}>
                                    <span class="method-label">{method.label}</span>
                                    <span class="method-value">{method.value}</span>
                                </a>
                            </li>
                        })}
                    </ul>

                    <div class="recruiter-card">
                        <h4>{"For Recruiters"}</h4>
                        <p>
                            {"I'm actively open to opportunities in backend engineering, \
                              microservices architecture, and platform modernization roles."}
                        </p>
                        <a class="btn btn-ghost" href={RESUME_PATH} download="Vineeth_Reddy_Resume.pdf">
                            {"Download Resume (ATS)"}
                        </a>
                    </div>
                </aside>
            </div>
        </section>
    }
}
