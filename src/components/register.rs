//! Register Page
//!
//! Sign-up form with live per-field validation. The submit button stays
//! disabled until every field passes; the rules are re-checked on submit.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ValidityMark;
use crate::context::use_app_context;
use crate::error::{self, INVALID_ENTRY};
use crate::routes::Page;
use crate::validation::RegistrationForm;

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();
    let err_ref = NodeRef::<html::P>::new();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (email_focus, set_email_focus) = signal(false);
    let (password, set_password) = signal(String::new());
    let (password_focus, set_password_focus) = signal(false);
    let (err_msg, set_err_msg) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let form = Memo::new(move |_| RegistrationForm {
        first_name: first_name.get(),
        last_name: last_name.get(),
        email: email.get(),
        password: password.get(),
    });
    let validity = Memo::new(move |_| form.with(|f| f.validity()));

    let valid_first_name = Signal::derive(move || validity.get().first_name);
    let valid_last_name = Signal::derive(move || validity.get().last_name);
    let valid_email = Signal::derive(move || validity.get().email);
    let valid_password = Signal::derive(move || validity.get().password);

    // A new password attempt clears the last error
    Effect::new(move |_| {
        password.track();
        set_err_msg.set(String::new());
    });

    // The page may have been left while the request was in flight
    let focus_error = move || {
        if let Some(Some(el)) = err_ref.try_get_untracked() {
            let _ = el.focus();
        }
    };

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Button may have been enabled from devtools
        let form = form.get();
        if !form.validity().all_valid() {
            set_err_msg.set(INVALID_ENTRY.to_string());
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            let user = form.to_user();
            match api::register(&user).await {
                Ok(()) => {
                    set_first_name.set(String::new());
                    set_last_name.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    ctx.navigate(Page::Login);
                }
                Err(e) => {
                    log::error!("Registration failed: {}", e);
                    set_err_msg.set(error::registration_message(&e).to_string());
                    focus_error();
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="Register">
            <p
                node_ref=err_ref
                tabindex="-1"
                class=move || if err_msg.with(|m| m.is_empty()) { "offscreen" } else { "errmsg" }
                aria-live="assertive"
            >
                {move || err_msg.get()}
            </p>
            <h1>"Register"</h1>
            <form on:submit=handle_submit>
                <label for="firstName">
                    "First Name:"
                    <ValidityMark valid=valid_first_name empty=Signal::derive(move || first_name.with(String::is_empty)) />
                </label>
                <input
                    type="text"
                    id="firstName"
                    required
                    prop:value=move || first_name.get()
                    on:input=move |ev| set_first_name.set(event_target_value(&ev))
                    aria-invalid=move || if valid_first_name.get() { "false" } else { "true" }
                />

                <label for="lastName">
                    "Last Name:"
                    <ValidityMark valid=valid_last_name empty=Signal::derive(move || last_name.with(String::is_empty)) />
                </label>
                <input
                    type="text"
                    id="lastName"
                    required
                    prop:value=move || last_name.get()
                    on:input=move |ev| set_last_name.set(event_target_value(&ev))
                    aria-invalid=move || if valid_last_name.get() { "false" } else { "true" }
                />

                <label for="email">
                    "Email:"
                    <ValidityMark valid=valid_email empty=Signal::derive(move || email.with(String::is_empty)) />
                </label>
                <input
                    type="email"
                    id="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    on:focus=move |_| set_email_focus.set(true)
                    on:blur=move |_| set_email_focus.set(false)
                    aria-invalid=move || if valid_email.get() { "false" } else { "true" }
                    aria-describedby="emailnote"
                />
                <p
                    id="emailnote"
                    class=move || {
                        if email_focus.get() && !email.with(String::is_empty) && !valid_email.get() {
                            "instructions"
                        } else {
                            "offscreen"
                        }
                    }
                >
                    "ⓘ Email must be in the format: example"
                    <span aria-label="at symbol">"@"</span>
                    "email.com"
                </p>

                <label for="password">
                    "Password:"
                    <ValidityMark valid=valid_password empty=Signal::derive(move || password.with(String::is_empty)) />
                </label>
                <input
                    type="password"
                    id="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    on:focus=move |_| set_password_focus.set(true)
                    on:blur=move |_| set_password_focus.set(false)
                    aria-invalid=move || if valid_password.get() { "false" } else { "true" }
                    aria-describedby="pwdnote"
                />
                <p
                    id="pwdnote"
                    class=move || if password_focus.get() && !valid_password.get() { "instructions" } else { "offscreen" }
                >
                    "ⓘ Minimum 5 characters."
                </p>

                <button
                    id="registerBtn"
                    disabled=move || !validity.get().all_valid() || submitting.get()
                >
                    "Sign Up"
                </button>
            </form>
            <p>
                "Already registered?"
                <br />
                <span class="line">
                    <a href=Page::Login.to_hash() on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Login);
                    }>"Login"</a>
                </span>
            </p>
        </section>
    }
}
