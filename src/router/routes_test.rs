use super::*;

// =============================================================
// Route table
// =============================================================

#[test]
fn only_dashboard_and_tickets_require_auth() {
    let protected: Vec<_> = AppRoute::ALL.into_iter().filter(|r| r.requires_auth()).collect();
    assert_eq!(protected, vec![AppRoute::Dashboard, AppRoute::Tickets]);
}

#[test]
fn names_and_paths() {
    let table: Vec<_> = AppRoute::ALL.into_iter().map(|r| (r.name(), r.path())).collect();
    assert_eq!(
        table,
        vec![
            ("landing", "/"),
            ("login", "/auth/login"),
            ("signup", "/auth/signup"),
            ("dashboard", "/dashboard"),
            ("tickets", "/tickets"),
        ]
    );
}

#[test]
fn display_is_route_name() {
    assert_eq!(AppRoute::Tickets.to_string(), "tickets");
}

// =============================================================
// Path matching
// =============================================================

#[test]
fn match_path_exact() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::match_path(route.path()), Some(route));
    }
}

#[test]
fn match_path_ignores_trailing_slash_query_and_fragment() {
    assert_eq!(AppRoute::match_path("/dashboard/"), Some(AppRoute::Dashboard));
    assert_eq!(AppRoute::match_path("/tickets?status=open"), Some(AppRoute::Tickets));
    assert_eq!(AppRoute::match_path("/auth/login#form"), Some(AppRoute::Login));
    assert_eq!(AppRoute::match_path(""), Some(AppRoute::Landing));
    assert_eq!(AppRoute::match_path("/?ref=x"), Some(AppRoute::Landing));
}

#[test]
fn match_path_rejects_prefixes_and_children() {
    assert_eq!(AppRoute::match_path("/dashboards"), None);
    assert_eq!(AppRoute::match_path("/tickets/42"), None);
    assert_eq!(AppRoute::match_path("/auth"), None);
}

#[test]
fn resolve_unknown_paths_to_landing() {
    assert_eq!(AppRoute::resolve("/nope/deeper"), Resolved::CatchAll { target: AppRoute::Landing });
    assert_eq!(AppRoute::resolve("/tickets"), Resolved::Route(AppRoute::Tickets));
}
