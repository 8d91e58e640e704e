use super::*;

#[test]
fn default_uses_ticketapp_keys() {
    let cfg = SessionConfig::default();
    assert_eq!(cfg.session_key, "ticketapp_session");
    assert_eq!(cfg.user_key, "ticketapp_user");
    assert_eq!(cfg.min_password_len, 6);
}

#[test]
fn from_values_without_overrides_is_default() {
    assert_eq!(SessionConfig::from_values(None, None, None), SessionConfig::default());
}

#[test]
fn from_values_applies_overrides() {
    let cfg = SessionConfig::from_values(Some("s"), Some("u"), Some("8"));
    assert_eq!(cfg, SessionConfig { session_key: "s".to_owned(), user_key: "u".to_owned(), min_password_len: 8 });
}

#[test]
fn from_values_ignores_blank_keys() {
    let cfg = SessionConfig::from_values(Some("  "), Some(""), None);
    assert_eq!(cfg.session_key, DEFAULT_SESSION_KEY);
    assert_eq!(cfg.user_key, DEFAULT_USER_KEY);
}

#[test]
fn from_values_invalid_length_falls_back() {
    assert_eq!(SessionConfig::from_values(None, None, Some("six")).min_password_len, DEFAULT_MIN_PASSWORD_LEN);
    assert_eq!(SessionConfig::from_values(None, None, Some("-1")).min_password_len, DEFAULT_MIN_PASSWORD_LEN);
    assert_eq!(SessionConfig::from_values(None, None, Some(" 10 ")).min_password_len, 10);
}
