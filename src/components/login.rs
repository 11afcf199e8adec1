//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::error;
use crate::models::Credentials;
use crate::routes::Page;
use crate::validation::LoginForm;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (err_msg, set_err_msg) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let form = Memo::new(move |_| LoginForm {
        email: email.get(),
        password: password.get(),
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = form.get();
        if !form.is_submittable() {
            set_err_msg.set(error::INVALID_ENTRY.to_string());
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            let credentials = Credentials {
                email: form.email.trim().to_string(),
                password: form.password,
            };
            let outcome = match api::login(&credentials).await {
                Ok(token) => ctx.login(&token),
                Err(e) => Err(e),
            };
            if let Err(e) = outcome {
                log::error!("Login failed: {}", e);
                set_err_msg.set(error::login_message(&e).to_string());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="Login">
            <p class=move || if err_msg.with(|m| m.is_empty()) { "offscreen" } else { "errmsg" } aria-live="assertive">
                {move || err_msg.get()}
            </p>
            <h1>"Sign In"</h1>
            <form on:submit=handle_submit>
                <label for="email">"Email:"</label>
                <input
                    type="email"
                    id="email"
                    autocomplete="username"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        set_err_msg.set(String::new());
                        set_email.set(event_target_value(&ev));
                    }
                />
                <label for="password">"Password:"</label>
                <input
                    type="password"
                    id="password"
                    autocomplete="current-password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        set_err_msg.set(String::new());
                        set_password.set(event_target_value(&ev));
                    }
                />
                <button disabled=move || !form.with(LoginForm::is_submittable) || submitting.get()>
                    "Sign In"
                </button>
            </form>
            <p>
                "Need an account?"
                <br />
                <span class="line">
                    <a href=Page::Register.to_hash() on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Register);
                    }>"Sign Up"</a>
                </span>
            </p>
        </section>
    }
}
