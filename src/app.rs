//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage, signup::SignupPage, tickets::TicketsPage,
};
use crate::router::AppRoute;
use crate::session;
use crate::state::auth::AuthState;

/// Root application component.
///
/// Seeds auth state from storage and sets up client-side routing. Unknown
/// paths redirect to the landing page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::from_store(&session::open()));
    provide_context(auth);

    view! {
        <Title text="TicketApp"/>

        <Router>
            // Segments mirror `AppRoute::path()`; keep both tables in step.
            <Routes fallback=|| view! { <Redirect path={AppRoute::Landing.path()}/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("tickets") view=TicketsPage/>
            </Routes>
        </Router>
    }
}
