//! # Session Configuration
//!
//! Read once at startup; read-only afterwards.
//!
//! ## Environment Variables
//! - `VOYAGE_COMMIT_DELAY_MS`: simulated booking commit latency (default 800)
//! - `VOYAGE_LOCALE`: initial display language, `zh` or `en` (default zh)
//! - `VOYAGE_USER_NAME`: name of the signed-in traveller
//! - `VOYAGE_REFERRAL_CODE`: the traveller's referral code

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;
use voyage_core::Locale;

/// Session defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Delay between "Book now" and the booking landing in the session.
    pub commit_delay_ms: u64,

    pub locale: Locale,

    pub user_id: String,
    pub user_name: String,
    pub avatar_url: String,
    pub referral_code: String,
    pub is_member: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            commit_delay_ms: 800,
            locale: Locale::Zh,
            user_id: "u_12345".to_string(),
            user_name: "Alex Chen".to_string(),
            avatar_url: "https://picsum.photos/100/100".to_string(),
            referral_code: "ALEX888".to_string(),
            is_member: true,
        }
    }
}

impl SessionConfig {
    /// Creates a SessionConfig from environment variables and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SessionConfig::default();

        if let Some(delay) = lookup("VOYAGE_COMMIT_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => config.commit_delay_ms = ms,
                Err(_) => warn!(value = %delay, "Ignoring invalid VOYAGE_COMMIT_DELAY_MS"),
            }
        }

        if let Some(locale) = lookup("VOYAGE_LOCALE") {
            match locale.parse::<Locale>() {
                Ok(parsed) => config.locale = parsed,
                Err(e) => warn!(error = %e, "Ignoring invalid VOYAGE_LOCALE"),
            }
        }

        if let Some(name) = lookup("VOYAGE_USER_NAME") {
            config.user_name = name;
        }

        if let Some(code) = lookup("VOYAGE_REFERRAL_CODE") {
            config.referral_code = code;
        }

        config
    }

    pub fn commit_delay(&self) -> Duration {
        Duration::from_millis(self.commit_delay_ms)
    }
}
