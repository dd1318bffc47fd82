// Settings module
// User-editable configuration loaded from settings.toml

use std::time::Duration;

use anyhow::{anyhow, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::models::timestamp::CivilTimestamp;

/// Fixed launch date shown on the coming-soon screen.
pub const DEFAULT_LAUNCH_TARGET: CivilTimestamp = CivilTimestamp {
    year: 2026,
    month: 12,
    day: 1,
    hour: 10,
    minute: 0,
    second: 0,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tick_interval_ms: u64,
    pub simulated_latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    pub launch_target: CivilTimestamp,
    pub links: LinkSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            simulated_latency_ms: 800,
            log_level: None,
            launch_target: DEFAULT_LAUNCH_TARGET,
            links: LinkSettings::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        self.launch_target
            .validate()
            .map_err(|e| anyhow!("Invalid launch_target: {}", e))?;
        if self.tick_interval_ms == 0 {
            return Err(anyhow!("tick_interval_ms must be greater than zero"));
        }
        self.log_filter()?;
        Ok(())
    }

    /// The configured log level, if any. Accepts `off`, `error`, `warn`,
    /// `info`, `debug` or `trace`.
    pub fn log_filter(&self) -> Result<Option<LevelFilter>> {
        self.log_level
            .as_deref()
            .map(|level| {
                level
                    .trim()
                    .parse::<LevelFilter>()
                    .map_err(|_| anyhow!("Invalid log_level '{}'", level))
            })
            .transpose()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

/// Outbound links offered on the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    pub website: String,
    pub terms: String,
    pub privacy: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            website: "https://iaiain.com".to_string(),
            terms: "https://iaiain.com/terms".to_string(),
            privacy: "https://iaiain.com/privacy".to_string(),
        }
    }
}

impl LinkSettings {
    /// Resolves a named link (`website`, `terms`, `privacy`).
    pub fn resolve(&self, name: &str) -> Option<&str> {
        match name {
            "website" => Some(&self.website),
            "terms" => Some(&self.terms),
            "privacy" => Some(&self.privacy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let settings = Settings {
            tick_interval_ms: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn impossible_launch_target_is_rejected() {
        let settings = Settings {
            launch_target: CivilTimestamp {
                month: 2,
                day: 30,
                ..DEFAULT_LAUNCH_TARGET
            },
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("launch_target"));
    }

    #[test]
    fn log_level_parses_to_filter() {
        assert_eq!(Settings::default().log_filter().unwrap(), None);

        let settings = Settings {
            log_level: Some("Debug".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.log_filter().unwrap(), Some(LevelFilter::Debug));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let settings = Settings {
            log_level: Some("chatty".to_string()),
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }

    #[test]
    fn named_links_resolve() {
        let links = LinkSettings::default();
        assert_eq!(links.resolve("terms"), Some("https://iaiain.com/terms"));
        assert_eq!(links.resolve("careers"), None);
    }
}
