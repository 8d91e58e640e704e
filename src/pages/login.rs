//! Email + password login against the session store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::{AuthProvider, MOCK_EMAIL, MOCK_PASSWORD};
use crate::router::AppRoute;
use crate::session::{self, SessionStore};
use crate::state::auth::AuthState;
use crate::storage::KeyValueStore;

/// Log in and return the refreshed auth state, or the message to show.
pub(crate) fn submit_login<S, P>(store: &SessionStore<S, P>, email: &str, password: &str) -> Result<AuthState, String>
where
    S: KeyValueStore,
    P: AuthProvider,
{
    store
        .login(email, password)
        .map(|_| AuthState::from_store(store))
        .map_err(|e| e.to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let store = session::open();
        match submit_login(&store, &email.get_untracked(), &password.get_untracked()) {
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
                <h1>"Log in"</h1>
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
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit">
                    "Log in"
                </button>
                <p class="auth-hint">{format!("Demo account: {MOCK_EMAIL} / {MOCK_PASSWORD}")}</p>
                <p class="auth-switch">
                    "No account? "
                    <A href={AppRoute::Signup.path()}>"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
