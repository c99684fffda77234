//! Site configuration

use std::env;

use crate::error::{Result, SiteError};
use crate::nav::DEFAULT_SCROLL_THRESHOLD;

pub const DEFAULT_REPO_URL: &str = "https://github.com/Julian1777/self-driving-project";
pub const DEFAULT_JOURNAL_URL: &str =
    "https://drive.google.com/file/d/15garXT9LaYUK_GlcT68EEbLpoLRc_XoL/view?usp=share_link";
pub const DEFAULT_CONTACT_EMAIL: &str = "contact@visionpilot.dev";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Prefix for static assets (images, animated previews)
    pub base_url: String,
    /// Google Analytics measurement id; events are only logged when unset
    pub analytics_id: Option<String>,
    /// Scroll offset in px past which the header changes look
    pub scroll_threshold: f64,
    pub repo_url: String,
    pub journal_url: String,
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            analytics_id: None,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            repo_url: DEFAULT_REPO_URL.to_string(),
            journal_url: DEFAULT_JOURNAL_URL.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration captured at compile time. The browser has no
    /// process environment, so this is what the wasm build uses.
    pub fn from_build_env() -> Result<Self> {
        Self::from_lookup(|key| {
            let value = match key {
                "VISIONPILOT_BASE_URL" => option_env!("VISIONPILOT_BASE_URL"),
                "VISIONPILOT_GA_ID" => option_env!("VISIONPILOT_GA_ID"),
                "VISIONPILOT_SCROLL_THRESHOLD" => option_env!("VISIONPILOT_SCROLL_THRESHOLD"),
                "VISIONPILOT_REPO_URL" => option_env!("VISIONPILOT_REPO_URL"),
                "VISIONPILOT_JOURNAL_URL" => option_env!("VISIONPILOT_JOURNAL_URL"),
                "VISIONPILOT_CONTACT_EMAIL" => option_env!("VISIONPILOT_CONTACT_EMAIL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let scroll_threshold = match non_empty("VISIONPILOT_SCROLL_THRESHOLD") {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => value,
                _ => {
                    return Err(SiteError::InvalidConfig {
                        key: "VISIONPILOT_SCROLL_THRESHOLD",
                        value: raw,
                    })
                }
            },
            None => defaults.scroll_threshold,
        };

        let mut base_url = non_empty("VISIONPILOT_BASE_URL").unwrap_or(defaults.base_url);
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            base_url,
            analytics_id: non_empty("VISIONPILOT_GA_ID"),
            scroll_threshold,
            repo_url: non_empty("VISIONPILOT_REPO_URL").unwrap_or(defaults.repo_url),
            journal_url: non_empty("VISIONPILOT_JOURNAL_URL").unwrap_or(defaults.journal_url),
            contact_email: non_empty("VISIONPILOT_CONTACT_EMAIL")
                .unwrap_or(defaults.contact_email),
        })
    }

    /// Path of a static asset under `base_url`.
    pub fn asset(&self, name: &str) -> String {
        format!("{}{}", self.base_url, name.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 6] = [
        "VISIONPILOT_BASE_URL",
        "VISIONPILOT_GA_ID",
        "VISIONPILOT_SCROLL_THRESHOLD",
        "VISIONPILOT_REPO_URL",
        "VISIONPILOT_JOURNAL_URL",
        "VISIONPILOT_CONTACT_EMAIL",
    ];

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars_unset(KEYS, || {
            let config = SiteConfig::from_env().unwrap();
            assert_eq!(config, SiteConfig::default());
            assert_eq!(config.analytics_id, None);
            assert_eq!(config.scroll_threshold, 20.0);
        });
    }

    #[test]
    fn test_values_from_env() {
        temp_env::with_vars(
            [
                ("VISIONPILOT_BASE_URL", Some("/visionpilot")),
                ("VISIONPILOT_GA_ID", Some("G-TEST123")),
                ("VISIONPILOT_SCROLL_THRESHOLD", Some(" 64 ")),
                ("VISIONPILOT_CONTACT_EMAIL", Some("team@example.com")),
                ("VISIONPILOT_REPO_URL", None),
                ("VISIONPILOT_JOURNAL_URL", Some("")),
            ],
            || {
                let config = SiteConfig::from_env().unwrap();
                assert_eq!(config.base_url, "/visionpilot/");
                assert_eq!(config.analytics_id.as_deref(), Some("G-TEST123"));
                assert_eq!(config.scroll_threshold, 64.0);
                assert_eq!(config.contact_email, "team@example.com");
                assert_eq!(config.repo_url, DEFAULT_REPO_URL);
                assert_eq!(config.journal_url, DEFAULT_JOURNAL_URL);
                assert_eq!(
                    config.asset("sign_detection_demo.gif"),
                    "/visionpilot/sign_detection_demo.gif"
                );
            },
        );
    }

    #[test]
    fn test_invalid_threshold() {
        temp_env::with_var("VISIONPILOT_SCROLL_THRESHOLD", Some("far"), || {
            assert_eq!(
                SiteConfig::from_env(),
                Err(SiteError::InvalidConfig {
                    key: "VISIONPILOT_SCROLL_THRESHOLD",
                    value: "far".to_string()
                })
            );
        });
        let negative = SiteConfig::from_lookup(|key| {
            (key == "VISIONPILOT_SCROLL_THRESHOLD").then(|| "-5".to_string())
        });
        assert!(negative.is_err());
    }

    #[test]
    fn test_build_env_defaults_are_valid() {
        assert!(SiteConfig::from_build_env().is_ok());
    }
}
