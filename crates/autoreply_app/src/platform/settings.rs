use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use autoreply_core::{RuleSeed, SimulatorSettings};
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

pub const SETTINGS_FILENAME: &str = "autoreply.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub simulator: SimulatorSettings,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            simulator: SimulatorSettings::default(),
            log_destination: LogDestination::default(),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PersistedRule {
    trigger: String,
    response: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// On-disk shape; every field may be omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct SettingsFile {
    connect_delay_ms: u64,
    reply_delay_ms: u64,
    qr_payload: String,
    log_destination: LogDestination,
    log_level: String,
    rules: Vec<PersistedRule>,
}

impl Default for SettingsFile {
    fn default() -> Self {
        let defaults = SimulatorSettings::default();
        Self {
            connect_delay_ms: millis(defaults.connect_delay),
            reply_delay_ms: millis(defaults.reply_delay),
            qr_payload: defaults.qr_payload,
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
            rules: defaults
                .seed_rules
                .into_iter()
                .map(|seed| PersistedRule {
                    trigger: seed.trigger,
                    response: seed.response,
                    enabled: seed.enabled,
                })
                .collect(),
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Loads `path`, falling back to defaults when the file does not exist.
pub fn load_settings(path: &Path) -> Result<AppSettings, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppSettings::default());
        }
        Err(err) => return Err(err.into()),
    };
    parse_settings(&content)
}

fn parse_settings(content: &str) -> Result<AppSettings, SettingsError> {
    let file: SettingsFile = ron::from_str(content)?;
    let log_level = sim_logging::parse_level(&file.log_level)
        .ok_or_else(|| SettingsError::UnknownLogLevel(file.log_level.clone()))?;

    Ok(AppSettings {
        simulator: SimulatorSettings {
            connect_delay: Duration::from_millis(file.connect_delay_ms),
            reply_delay: Duration::from_millis(file.reply_delay_ms),
            qr_payload: file.qr_payload,
            seed_rules: file
                .rules
                .into_iter()
                .map(|rule| RuleSeed {
                    trigger: rule.trigger,
                    response: rule.response,
                    enabled: rule.enabled,
                })
                .collect(),
        },
        log_destination: file.log_destination,
        log_level,
    })
}
