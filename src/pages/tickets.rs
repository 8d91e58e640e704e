//! Ticket management page shell.

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::components::session_header::SessionHeader;
use crate::router::AppRoute;

/// Tickets page. Redirects to login without a session.
#[component]
pub fn TicketsPage() -> impl IntoView {
    view! {
        <Protected route={AppRoute::Tickets}>
            <div class="tickets-page">
                <SessionHeader title="Tickets"/>
                <section class="tickets-page__body">
                    <p class="tickets-page__empty">"No tickets yet."</p>
                </section>
            </div>
        </Protected>
    }
}
