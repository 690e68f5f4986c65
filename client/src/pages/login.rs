//! Login and registration page.
//!
//! One form toggles between signing in and creating an account. Failures keep
//! the entered values and show the backend message under the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::challenge_filters::choice_options;
use crate::net::types::Role;
use crate::state::Stores;

/// Trimmed login credentials, or the message to show.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trimmed registration fields, or the message to show.
fn validate_register_input(name: &str, email: &str, password: &str) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your full name.");
    }
    let (email, password) = validate_login_input(email, password)?;
    Ok((name.to_owned(), email, password))
}

fn submit_label(registering: bool, busy: bool) -> &'static str {
    match (registering, busy) {
        (_, true) => "Loading...",
        (true, false) => "Create account",
        (false, false) => "Sign in",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let registering = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());

        if registering.get() {
            let (name_value, email_value, password_value) =
                match validate_register_input(&name.get(), &email.get(), &password.get()) {
                    Ok(values) => values,
                    Err(message) => {
                        error.set(message.to_owned());
                        return;
                    }
                };
            let role_value = role.get();
            busy.set(true);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::net::session::register(stores, &name_value, &email_value, &password_value, role_value).await;
                if let Err(message) = result {
                    error.set(message);
                }
                busy.set(false);
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (name_value, email_value, password_value, role_value);
            }
        } else {
            let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                if let Err(message) = crate::net::session::authenticate(stores, &email_value, &password_value).await {
                    error.set(message);
                }
                busy.set(false);
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (email_value, password_value);
            }
        }
    };

    let on_toggle_mode = move |_| {
        registering.update(|r| *r = !*r);
        error.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Campus Quest"</h1>
                <p class="login-card__subtitle">
                    {move || if registering.get() { "Create your account" } else { "Sign in to the platform" }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || registering.get()>
                        <input
                            class="login-input"
                            type="text"
                            required
                            placeholder="Full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        required
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        required
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || registering.get()>
                        <select
                            class="login-input"
                            prop:value=move || role.get().to_string()
                            on:change=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<Role>() {
                                    role.set(value);
                                }
                            }
                        >
                            {choice_options(Role::ALL)}
                        </select>
                    </Show>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(registering.get(), busy.get())}
                    </button>
                </form>
                <button class="login-toggle" type="button" on:click=on_toggle_mode>
                    {move || {
                        if registering.get() {
                            "Already have an account? Sign in"
                        } else {
                            "No account yet? Register"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
