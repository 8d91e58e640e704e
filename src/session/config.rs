//! Session storage configuration with compile-time overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SESSION_KEY: &str = "ticketapp_session";
pub const DEFAULT_USER_KEY: &str = "ticketapp_user";
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Storage key holding the opaque session token.
    pub session_key: String,
    /// Storage key holding the JSON profile.
    pub user_key: String,
    /// Minimum signup password length, in characters.
    pub min_password_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_owned(),
            user_key: DEFAULT_USER_KEY.to_owned(),
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl SessionConfig {
    /// Build config from variables captured at compile time.
    ///
    /// The browser has no process environment, so overrides are baked in by
    /// the build. All are optional:
    /// - `TICKETAPP_SESSION_KEY`: default `ticketapp_session`
    /// - `TICKETAPP_USER_KEY`: default `ticketapp_user`
    /// - `TICKETAPP_MIN_PASSWORD_LEN`: default 6
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TICKETAPP_SESSION_KEY"),
            option_env!("TICKETAPP_USER_KEY"),
            option_env!("TICKETAPP_MIN_PASSWORD_LEN"),
        )
    }

    /// Apply raw override values on top of the defaults. Blank keys and
    /// unparsable lengths fall back to the default.
    #[must_use]
    pub fn from_values(session_key: Option<&str>, user_key: Option<&str>, min_password_len: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            session_key: non_blank(session_key).unwrap_or(defaults.session_key),
            user_key: non_blank(user_key).unwrap_or(defaults.user_key),
            min_password_len: min_password_len
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(defaults.min_password_len),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
