use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

const ENABLE_LOGS: bool = true;

use crate::log_warn;

pub const DEFAULT_APP_NAME: &str = "Declutter";

/// Which set of feed distractions the service hides. Both share one
/// algorithm; they differ in watch list and overlay presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Only the end-of-feed "Suggested posts" demarcator, opaque overlay.
    FeedDemarcator,
    /// Every distraction category, translucent overlay.
    #[default]
    Distractions,
}

impl Variant {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "feed_demarcator" | "feed-demarcator" | "demarcator" => Some(Self::FeedDemarcator),
            "distractions" => Some(Self::Distractions),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub variant: Variant,
    /// Dump snapshots to the debug log around every action.
    pub debug: bool,
    /// Shown in the overlay text.
    pub app_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            debug: false,
            app_name: DEFAULT_APP_NAME.into(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `DECLUTTER_VARIANT` and `DECLUTTER_DEBUG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("DECLUTTER_VARIANT") {
            match Variant::parse(&value) {
                Some(variant) => config.variant = variant,
                None => log_warn!("Ignoring unknown DECLUTTER_VARIANT {:?}", value),
            }
        }

        config.debug = std::env::var("DECLUTTER_DEBUG")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        config
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Ok(Self::parse(&contents))
    }

    /// Malformed JSON falls back to defaults rather than refusing to start.
    pub fn parse(contents: &str) -> Self {
        serde_json::from_str(contents).unwrap_or_else(|err| {
            log_warn!("Malformed config, using defaults: {err}");
            Self::default()
        })
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_hides_every_distraction() {
        let config = EngineConfig::default();
        assert_eq!(config.variant, Variant::Distractions);
        assert!(!config.debug);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn variant_parsing_accepts_both_spellings() {
        assert_eq!(Variant::parse("feed_demarcator"), Some(Variant::FeedDemarcator));
        assert_eq!(Variant::parse(" Feed-Demarcator "), Some(Variant::FeedDemarcator));
        assert_eq!(Variant::parse("distractions"), Some(Variant::Distractions));
        assert_eq!(Variant::parse("everything"), None);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = EngineConfig::parse(r#"{"variant":"feed_demarcator"}"#);
        assert_eq!(config.variant, Variant::FeedDemarcator);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        assert_eq!(EngineConfig::parse("{not json"), EngineConfig::default());
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"debug":true,"app_name":"Calm"}}"#).unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert!(config.debug);
        assert_eq!(config.app_name, "Calm");

        let missing = file.path().with_extension("missing");
        let err = EngineConfig::load(&missing).unwrap_err();
        assert!(format!("{err}").contains("Failed to read config"));
    }

    #[test]
    fn debug_flag_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("0"));
    }
}
