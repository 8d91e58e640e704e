//! Signed-in landing spot: greeting and shortcuts.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::protected::Protected;
use crate::components::session_header::SessionHeader;
use crate::router::AppRoute;
use crate::state::auth::AuthState;

/// Dashboard page. Redirects to login without a session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Protected route={AppRoute::Dashboard}>
            <div class="dashboard-page">
                <SessionHeader title="Dashboard"/>
                <section class="dashboard-page__body">
                    <h2>{move || format!("Welcome back, {}", auth.get().display_name())}</h2>
                    <p class="dashboard-page__email">
                        {move || auth.get().user.map(|u| u.email).unwrap_or_default()}
                    </p>
                    <A href={AppRoute::Tickets.path()} attr:class="btn btn--primary">"Manage tickets"</A>
                </section>
            </div>
        </Protected>
    }
}
