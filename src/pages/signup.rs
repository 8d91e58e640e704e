//! Account creation form. Any valid submission starts a session.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::AuthProvider;
use crate::router::AppRoute;
use crate::session::{self, SessionStore};
use crate::state::auth::AuthState;
use crate::storage::KeyValueStore;

/// Sign up and return the refreshed auth state, or the message to show.
pub(crate) fn submit_signup<S, P>(
    store: &SessionStore<S, P>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthState, String>
where
    S: KeyValueStore,
    P: AuthProvider,
{
    store
        .signup(name, email, password)
        .map(|_| AuthState::from_store(store))
        .map_err(|e| e.to_string())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let store = session::open();
        match submit_signup(&store, &name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
            Ok(state) => {
                error.set(None);
                auth.set(state);
                navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create account"</h1>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password (6+ characters)"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit">
                    "Sign up"
                </button>
                <p class="auth-switch">
                    "Already registered? "
                    <A href={AppRoute::Login.path()}>"Log in"</A>
                </p>
            </form>
        </div>
    }
}
