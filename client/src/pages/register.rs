//! Account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::{RegisterFieldErrors, validate_registration};
use crate::util::auth::LOGIN_ROUTE;

pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let member_id = RwSignal::new(String::new());
    let user_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let field_errors = RwSignal::new(RegisterFieldErrors::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        info.set(String::new());
        let registration =
            match validate_registration(&member_id.get(), &user_name.get(), &password.get(), &confirm.get()) {
                Ok(registration) => {
                    field_errors.set(RegisterFieldErrors::default());
                    registration
                }
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::session::register(&config, &registration).await {
                    Ok(()) => navigate(LOGIN_ROUTE, NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        info.set(e.user_message(REGISTER_FAILED_MESSAGE));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (registration, &config, &navigate);
    };

    let field = move |label: &'static str,
                      kind: &'static str,
                      value: RwSignal<String>,
                      error: fn(&RegisterFieldErrors) -> Option<&'static str>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error(&field_errors.get()).map(|m| view! { <p class="login-field-error">{m}</p> })}
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {field("Member ID", "text", member_id, |e| e.member_id)}
                    {field("Name", "text", user_name, |e| e.user_name)}
                    {field("Password", "password", password, |e| e.password)}
                    {field("Confirm password", "password", confirm, |e| e.confirm)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" role="alert">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
