//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

/// Default backend base URL when `MONO_BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Onboarding configuration, built from environment variables.
#[derive(Debug, Clone)]
pub struct OnboardingConfig {
    /// Base URL of the Mono backend.
    pub backend_url: String,
    /// Optional bearer credential attached to submissions.
    pub access_token: Option<SecretString>,
    /// Timing for the processing screen ticker.
    pub progress: ProgressConfig,
}

impl OnboardingConfig {
    /// Build config from environment variables.
    /// Unset or malformed values fall back to defaults.
    pub fn from_env() -> Self {
        let backend_url = std::env::var("MONO_BACKEND_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let access_token = std::env::var("MONO_ACCESS_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .map(SecretString::from);

        Self {
            backend_url,
            access_token,
            progress: ProgressConfig::from_env(),
        }
    }
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            access_token: None,
            progress: ProgressConfig::default(),
        }
    }
}

/// Timing for the simulated processing indicator.
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Interval between progress ticks.
    pub tick: Duration,
    /// Percent added per tick.
    pub step: u8,
    /// Hold at 100% before the terminal event.
    pub hold: Duration,
}

impl ProgressConfig {
    /// Build ticker timing from environment variables, with defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let tick_ms: u64 = std::env::var("MONO_PROGRESS_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.tick.as_millis() as u64);

        let step: u8 = std::env::var("MONO_PROGRESS_STEP")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.step);

        let hold_ms: u64 = std::env::var("MONO_PROGRESS_HOLD_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.hold.as_millis() as u64);

        Self {
            tick: Duration::from_millis(tick_ms),
            step,
            hold: Duration::from_millis(hold_ms),
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(300),
            step: 10,
            hold: Duration::from_millis(1000),
        }
    }
}
