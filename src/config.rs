//! Construction-time configuration resolution.
//!
//! Each setting is resolved independently with the same precedence:
//! explicit argument > environment variable > built-in default. Resolution
//! happens exactly once, when the client is built; the environment is never
//! consulted again afterward.

use std::time::Duration;

/// Environment variable for the gateway base URL.
pub const ENV_BASE_URL: &str = "DBFORGE_BASE_URL";

/// Environment variable for the API key.
pub const ENV_API_KEY: &str = "DBFORGE_API_KEY";

/// Environment variable for the request timeout, in seconds.
pub const ENV_TIMEOUT: &str = "DBFORGE_TIMEOUT";

/// Default gateway base URL.
pub const DEFAULT_BASE_URL: &str = "http://db.localhost";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolve the gateway base URL.
pub(crate) fn resolve_base_url<E>(explicit: Option<String>, env: E) -> String
where
    E: Fn(&str) -> Option<String>,
{
    explicit
        .or_else(|| env(ENV_BASE_URL))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Resolve the API key. There is no default: absence means the client sends
/// no `X-API-Key` header.
pub(crate) fn resolve_api_key<E>(explicit: Option<String>, env: E) -> Option<String>
where
    E: Fn(&str) -> Option<String>,
{
    explicit.or_else(|| env(ENV_API_KEY))
}

/// Resolve the request timeout. An environment value that does not parse as
/// whole seconds is ignored and the default applies.
pub(crate) fn resolve_timeout<E>(explicit: Option<Duration>, env: E) -> Duration
where
    E: Fn(&str) -> Option<String>,
{
    explicit
        .or_else(|| {
            env(ENV_TIMEOUT)
                .and_then(|raw| raw.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
        })
        .unwrap_or(DEFAULT_TIMEOUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_explicit_value_wins_over_env() {
        let env = |_: &str| Some("http://from-env".to_string());
        let url = resolve_base_url(Some("http://explicit".to_string()), env);
        assert_eq!(url, "http://explicit");
    }

    #[test]
    fn test_env_value_wins_over_default() {
        let env = |name: &str| {
            assert_eq!(name, ENV_BASE_URL);
            Some("http://from-env".to_string())
        };
        assert_eq!(resolve_base_url(None, env), "http://from-env");
    }

    #[test]
    fn test_default_applies_when_nothing_set() {
        assert_eq!(resolve_base_url(None, no_env), DEFAULT_BASE_URL);
        assert_eq!(resolve_api_key(None, no_env), None);
        assert_eq!(resolve_timeout(None, no_env), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_timeout_parses_seconds_from_env() {
        let env = |_: &str| Some("120".to_string());
        assert_eq!(resolve_timeout(None, env), Duration::from_secs(120));
    }

    #[test]
    fn test_unparseable_timeout_falls_back_to_default() {
        let env = |_: &str| Some("soon".to_string());
        assert_eq!(resolve_timeout(None, env), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_settings_resolve_independently() {
        // API key set in env must not affect the URL resolution.
        let env = |name: &str| (name == ENV_API_KEY).then(|| "secret".to_string());
        assert_eq!(resolve_base_url(None, env), DEFAULT_BASE_URL);
        assert_eq!(resolve_api_key(None, env).as_deref(), Some("secret"));
    }
}
