//! Public landing page with links into the auth flow.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::AppRoute;
use crate::state::auth::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="landing-page">
            <h1>"TicketApp"</h1>
            <p class="landing-page__tagline">"Track and resolve support tickets in one place."</p>
            <Show
                when=move || auth.get().authenticated
                fallback=|| view! {
                    <div class="landing-page__actions">
                        <A href={AppRoute::Login.path()} attr:class="btn btn--primary">"Log in"</A>
                        <A href={AppRoute::Signup.path()} attr:class="btn">"Get started"</A>
                    </div>
                }
            >
                <div class="landing-page__actions">
                    <A href={AppRoute::Dashboard.path()} attr:class="btn btn--primary">"Go to dashboard"</A>
                </div>
            </Show>
        </div>
    }
}
