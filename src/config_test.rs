use super::*;

/// # Safety
/// Env-mutating tests are serialized through `ENV_LOCK`.
unsafe fn clear_console_env() {
    unsafe {
        std::env::remove_var("DOCDESK_BACKEND_URL");
        std::env::remove_var("DOCDESK_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("DOCDESK_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("DOCDESK_NOTIFY_DISMISS_MS");
        std::env::remove_var("PORT");
    }
}

static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_console_env() };

    let cfg = ConsoleConfig::from_env();
    assert_eq!(cfg, ConsoleConfig::default());
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.notify_dismiss(), Duration::from_secs(5));
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_console_env();
        std::env::set_var("DOCDESK_BACKEND_URL", "https://triage.example.test/");
        std::env::set_var("DOCDESK_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("DOCDESK_CONNECT_TIMEOUT_SECS", "7");
        std::env::set_var("DOCDESK_NOTIFY_DISMISS_MS", "250");
        std::env::set_var("PORT", "8080");
    }

    let cfg = ConsoleConfig::from_env();
    assert_eq!(cfg.backend_url, "https://triage.example.test");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.notify_dismiss_ms, 250);
    assert_eq!(cfg.port, 8080);

    unsafe { clear_console_env() };
}

#[test]
fn from_env_ignores_unparsable_numbers() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_console_env();
        std::env::set_var("DOCDESK_REQUEST_TIMEOUT_SECS", "soon");
        std::env::set_var("PORT", "-1");
    }

    let cfg = ConsoleConfig::from_env();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.port, DEFAULT_PORT);

    unsafe { clear_console_env() };
}

#[test]
fn with_backend_url_trims_trailing_slashes() {
    let cfg = ConsoleConfig::default().with_backend_url("http://localhost:5000///");
    assert_eq!(cfg.backend_url, "http://localhost:5000");
}
