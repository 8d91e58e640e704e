//! Header for signed-in pages: navigation, greeting, logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::router::AppRoute;
use crate::session;
use crate::state::auth::AuthState;

#[component]
pub fn SessionHeader(title: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let store = session::open();
        store.logout();
        auth.set(AuthState::from_store(&store));
        navigate(AppRoute::Landing.path(), NavigateOptions::default());
    };

    view! {
        <header class="session-header">
            <h1 class="session-header__title">{title}</h1>
            <nav class="session-header__nav">
                <A href={AppRoute::Dashboard.path()}>"Dashboard"</A>
                <A href={AppRoute::Tickets.path()}>"Tickets"</A>
            </nav>
            <span class="session-header__user">{move || format!("Hi, {}", auth.get().display_name())}</span>
            <button class="btn" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
