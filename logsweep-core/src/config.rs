//! Configuration management for `logsweep-core`.
//!
//! This module defines the pattern settings: nine template slots describing the
//! shape of inserted console-logger statements. It handles YAML
//! (de)serialization, the embedded defaults, and a locked, atomic save to the
//! per-user settings file.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use fs2::FileExt;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::SweepError;

/// Number of template slots. Every removal run compiles and applies all of them.
pub const PATTERN_SLOTS: usize = 9;

/// Maximum allowed length for a single template string.
pub const MAX_TEMPLATE_LENGTH: usize = 500;

/// Environment variable that overrides the settings file location.
pub const SETTINGS_PATH_ENV: &str = "LOGSWEEP_SETTINGS";

const SETTINGS_DIR_NAME: &str = "logsweep";
const SETTINGS_FILE_NAME: &str = "patterns.yaml";
const SETTINGS_FILE_TMP_SUFFIX: &str = ".tmp";

/// Read access to the configured templates, one per slot.
///
/// Slots outside the configured range read as the empty template.
pub trait PatternSource {
    fn pattern(&self, index: usize) -> String;
}

impl PatternSource for [String] {
    fn pattern(&self, index: usize) -> String {
        self.get(index).cloned().unwrap_or_default()
    }
}

impl PatternSource for Vec<String> {
    fn pattern(&self, index: usize) -> String {
        self.as_slice().pattern(index)
    }
}

impl PatternSource for [&str] {
    fn pattern(&self, index: usize) -> String {
        self.get(index).map(|s| s.to_string()).unwrap_or_default()
    }
}

/// The persisted console-logger settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggerSettings {
    /// Templates for slots 0..8, stored in YAML as a list. Shorter lists are
    /// padded with empty templates; longer ones are rejected.
    #[serde(default, with = "slot_list")]
    pub patterns: [String; PATTERN_SLOTS],
}

impl PatternSource for LoggerSettings {
    fn pattern(&self, index: usize) -> String {
        self.patterns[..].pattern(index)
    }
}

/// Pads a template list to exactly nine slots.
fn into_slots(mut patterns: Vec<String>) -> Result<[String; PATTERN_SLOTS], String> {
    if patterns.len() > PATTERN_SLOTS {
        return Err(format!(
            "expected at most {} patterns, found {}",
            PATTERN_SLOTS,
            patterns.len()
        ));
    }
    patterns.resize(PATTERN_SLOTS, String::new());
    <[String; PATTERN_SLOTS]>::try_from(patterns)
        .map_err(|p| format!("expected {} patterns, found {}", PATTERN_SLOTS, p.len()))
}

/// (De)serializes the fixed slot array as a plain YAML list.
mod slot_list {
    use super::{into_slots, PATTERN_SLOTS};
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        patterns: &[String; PATTERN_SLOTS],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        patterns[..].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[String; PATTERN_SLOTS], D::Error> {
        let patterns = Vec::<String>::deserialize(deserializer)?;
        into_slots(patterns).map_err(D::Error::custom)
    }
}

impl LoggerSettings {
    /// Builds settings from an explicit template list, padding to nine slots.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = into_slots(patterns.into_iter().map(Into::into).collect())
            .map_err(|e| anyhow!(SweepError::InvalidSettings(e)))?;
        let settings = Self { patterns };
        settings.validate()?;
        Ok(settings)
    }

    /// Loads the built-in templates from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default patterns from embedded string...");
        let default_yaml = include_str!("../config/default_patterns.yaml");
        let settings: LoggerSettings = serde_yml::from_str(default_yaml)
            .context("Failed to parse default patterns")?;
        settings.validate()?;

        debug!("Loaded {} default patterns.", settings.patterns.len());
        Ok(settings)
    }

    /// Loads templates from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading pattern settings from: {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: LoggerSettings = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;

        settings
            .validate()
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        Ok(settings)
    }

    /// Loads templates from `path`, falling back to the defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No settings file at {}, using defaults.", path.display());
            Self::load_default()
        }
    }

    /// Writes the settings as YAML, holding an exclusive lock and renaming into place.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create settings directory {}", parent.display())
                })?;
            }
        }

        let yaml = serde_yml::to_string(self).context("Failed to serialize pattern settings")?;

        let tmp_path = path.with_extension(format!(
            "{}{}",
            path.extension().map(|s| s.to_string_lossy()).unwrap_or_default(),
            SETTINGS_FILE_TMP_SUFFIX
        ));
        {
            let mut tmp = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)
                .with_context(|| format!("Failed to open {}", tmp_path.display()))?;
            tmp.lock_exclusive()?;
            tmp.write_all(yaml.as_bytes())?;
            tmp.flush()?;
            FileExt::unlock(&tmp)?;
        }

        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to write settings file {}", path.display()))?;
        info!("Saved pattern settings to {}.", path.display());
        Ok(())
    }

    /// Replaces the template in one slot.
    pub fn set_pattern(&mut self, index: usize, template: impl Into<String>) -> Result<(), SweepError> {
        check_slot(index)?;
        let template = template.into();
        if template.len() > MAX_TEMPLATE_LENGTH {
            return Err(SweepError::TemplateLengthExceeded(
                index,
                template.len(),
                MAX_TEMPLATE_LENGTH,
            ));
        }
        debug!("Slot {} set to {:?}", index, template);
        self.patterns[index] = template;
        Ok(())
    }

    /// Restores one slot to its built-in template.
    pub fn reset_pattern(&mut self, index: usize) -> Result<()> {
        check_slot(index)?;
        let defaults = Self::load_default()?;
        self.patterns[index] = defaults.patterns[index].clone();
        debug!("Slot {} reset to default.", index);
        Ok(())
    }

    /// Restores every slot to its built-in template.
    pub fn reset_all(&mut self) -> Result<()> {
        *self = Self::load_default()?;
        Ok(())
    }

    /// Checks every template against the length guard.
    fn validate(&self) -> Result<()> {
        let errors: Vec<String> = self
            .patterns
            .iter()
            .enumerate()
            .filter(|(_, p)| p.len() > MAX_TEMPLATE_LENGTH)
            .map(|(i, p)| {
                SweepError::TemplateLengthExceeded(i, p.len(), MAX_TEMPLATE_LENGTH).to_string()
            })
            .collect();

        if !errors.is_empty() {
            return Err(anyhow!(SweepError::InvalidSettings(errors.join("\n"))));
        }
        Ok(())
    }
}

fn check_slot(index: usize) -> Result<(), SweepError> {
    if index >= PATTERN_SLOTS {
        Err(SweepError::SlotOutOfRange(index, PATTERN_SLOTS))
    } else {
        Ok(())
    }
}

/// Resolves the settings file location: `LOGSWEEP_SETTINGS`, then the user config directory.
pub fn default_settings_path() -> PathBuf {
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    dirs::config_dir()
        .map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
}
