//! Gate for routes that need an active session.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::router::{AppRoute, GuardDecision};
use crate::util::auth::check_route;

/// Render `children` only if the guard lets navigation to `route` proceed;
/// otherwise redirect before anything protected is built.
#[component]
pub fn Protected(route: AppRoute, children: Children) -> impl IntoView {
    match check_route(route) {
        GuardDecision::Proceed(_) => children().into_any(),
        GuardDecision::Redirect(to) => view! { <Redirect path={to.path()}/> }.into_any(),
    }
}
