//! Console runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the views and the
//! backend client. Request handlers never read process-wide environment variables.

use crate::constants::{
    DEFAULT_BACKEND_URL, DEFAULT_NOTIFICATION_MS, DEFAULT_RELOAD_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::{UiError, UiResult};
use reqwest::Url;
use std::time::Duration;

/// Console configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct UiConfig {
    backend_url: Url,
    notification_delay: Duration,
    reload_interval: Duration,
    request_timeout: Duration,
}

impl UiConfig {
    /// Create a new `UiConfig`.
    ///
    /// `backend_url` must be an absolute `http` or `https` URL. Durations must be non-zero.
    pub fn new(
        backend_url: &str,
        notification_delay: Duration,
        reload_interval: Duration,
        request_timeout: Duration,
    ) -> UiResult<Self> {
        let backend_url = parse_backend_url(backend_url)?;

        for (name, value) in [
            ("notification delay", notification_delay),
            ("reload interval", reload_interval),
            ("request timeout", request_timeout),
        ] {
            if value.is_zero() {
                return Err(UiError::InvalidInput(format!("{name} cannot be zero")));
            }
        }

        Ok(Self {
            backend_url,
            notification_delay,
            reload_interval,
            request_timeout,
        })
    }

    /// Build a configuration from raw environment values.
    ///
    /// Each argument is the value of the matching `VITALS_*` variable, if set. Missing or
    /// blank values fall back to the crate defaults.
    pub fn from_env_values(
        backend_url: Option<String>,
        notification_ms: Option<String>,
        reload_secs: Option<String>,
        request_timeout_secs: Option<String>,
    ) -> UiResult<Self> {
        let backend_url = non_blank(backend_url).unwrap_or_else(|| DEFAULT_BACKEND_URL.into());
        let notification_ms =
            u64_from_env_value("VITALS_NOTIFICATION_MS", notification_ms, DEFAULT_NOTIFICATION_MS)?;
        let reload_secs = u64_from_env_value("VITALS_RELOAD_SECS", reload_secs, DEFAULT_RELOAD_SECS)?;
        let timeout_secs = u64_from_env_value(
            "VITALS_REQUEST_TIMEOUT_SECS",
            request_timeout_secs,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        Self::new(
            &backend_url,
            Duration::from_millis(notification_ms),
            Duration::from_secs(reload_secs),
            Duration::from_secs(timeout_secs),
        )
    }

    pub fn backend_url(&self) -> &Url {
        &self.backend_url
    }

    pub fn notification_delay(&self) -> Duration {
        self.notification_delay
    }

    pub fn reload_interval(&self) -> Duration {
        self.reload_interval
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Resolve a backend endpoint from path segments, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> UiResult<Url> {
        let mut url = self.backend_url.clone();
        url.path_segments_mut()
            .map_err(|_| UiError::InvalidInput("backend URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn parse_backend_url(raw: &str) -> UiResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| UiError::InvalidInput(format!("invalid backend URL {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(UiError::InvalidInput(format!(
            "backend URL must use http or https, got {other}"
        ))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an unsigned integer from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns `default`.
pub fn u64_from_env_value(name: &str, value: Option<String>, default: u64) -> UiResult<u64> {
    match non_blank(value) {
        Some(v) => v
            .parse::<u64>()
            .map_err(|e| UiError::InvalidInput(format!("{name} must be a whole number: {e}"))),
        None => Ok(default),
    }
}
