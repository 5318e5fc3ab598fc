//! Console configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_NOTIFY_DISMISS_MS: u64 = 5000;
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Timeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub backend_url: String,
    pub timeouts: Timeouts,
    pub notify_dismiss_ms: u64,
    pub port: u16,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            timeouts: Timeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            notify_dismiss_ms: DEFAULT_NOTIFY_DISMISS_MS,
            port: DEFAULT_PORT,
        }
    }
}

impl ConsoleConfig {
    /// Build typed console config from environment variables.
    ///
    /// All optional:
    /// - `DOCDESK_BACKEND_URL`: default `http://127.0.0.1:5000`
    /// - `DOCDESK_REQUEST_TIMEOUT_SECS`: default 120
    /// - `DOCDESK_CONNECT_TIMEOUT_SECS`: default 10
    /// - `DOCDESK_NOTIFY_DISMISS_MS`: default 5000
    /// - `PORT`: default 3000
    ///
    /// Unparsable numbers fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let backend_url = std::env::var("DOCDESK_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_owned());
        let timeouts = Timeouts {
            request_secs: env_parse("DOCDESK_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("DOCDESK_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Self {
            backend_url: normalize_base_url(&backend_url),
            timeouts,
            notify_dismiss_ms: env_parse("DOCDESK_NOTIFY_DISMISS_MS", DEFAULT_NOTIFY_DISMISS_MS),
            port: env_parse("PORT", DEFAULT_PORT),
        }
    }

    /// Replace the backend URL, keeping the same normalization as `from_env`.
    #[must_use]
    pub fn with_backend_url(mut self, url: &str) -> Self {
        self.backend_url = normalize_base_url(url);
        self
    }

    #[must_use]
    pub fn notify_dismiss(&self) -> Duration {
        Duration::from_millis(self.notify_dismiss_ms)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
