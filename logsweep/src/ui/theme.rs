//! Module for managing the application's command-line interface (CLI) theme.
//!
//! This module defines the structure for theme configuration, allowing users
//! to customize the colors of various output elements. It supports 16-color
//! ANSI named colors for foreground styling and provides functionality to
//! load themes from YAML files and manage default theme settings.

use anyhow::{Context, Result};
use comfy_table::Color as TableColor;
use owo_colors::{AnsiColors, OwoColorize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Style for prominent headers or section titles.
    Header,
    /// Style for successful operation messages.
    Success,
    /// Style for general informational messages.
    Info,
    /// Style for warning messages.
    Warn,
    /// Style for error messages.
    Error,
    /// Style for lines added in a diff view.
    DiffAdded,
    /// Style for lines removed in a diff view.
    DiffRemoved,
    /// Style for the header/footer of a diff view.
    DiffHeader,
    /// Style for the slot number in a summary or pattern listing.
    SummarySlot,
    /// Style for the number of occurrences in a summary.
    SummaryOccurrences,
    /// Style for user prompts or confirmation questions.
    Prompt,
}

const ALL_ENTRIES: [ThemeEntry; 11] = [
    ThemeEntry::Header,
    ThemeEntry::Success,
    ThemeEntry::Info,
    ThemeEntry::Warn,
    ThemeEntry::Error,
    ThemeEntry::DiffAdded,
    ThemeEntry::DiffRemoved,
    ThemeEntry::DiffHeader,
    ThemeEntry::SummarySlot,
    ThemeEntry::SummaryOccurrences,
    ThemeEntry::Prompt,
];

/// The sixteen named colors, in ANSI palette order.
const COLOR_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "brightblack",
    "brightred",
    "brightgreen",
    "brightyellow",
    "brightblue",
    "brightmagenta",
    "brightcyan",
    "brightwhite",
];

/// Represents an ANSI color that can be used in the theme.
///
/// Theme files name colors as plain strings; unknown names fail to load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if COLOR_NAMES.contains(&lower.as_str()) {
            Ok(ThemeColor::Named(lower))
        } else {
            Err(ParseThemeColorError)
        }
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        match color {
            ThemeColor::Named(name) => name,
        }
    }
}

impl ThemeColor {
    /// Converts the `ThemeColor` into its corresponding `owo_colors::AnsiColors`.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }

    /// The color as a `comfy_table` cell color, using the 16-color palette index.
    pub fn to_table_color(&self) -> TableColor {
        match self {
            ThemeColor::Named(name) => COLOR_NAMES
                .iter()
                .position(|n| n == name)
                .map(|i| TableColor::AnsiValue(i as u8))
                .unwrap_or(TableColor::White),
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

/// Colors `text` with the theme's style for `entry`, or returns it unchanged
/// when color is disabled or the entry has no color.
pub fn paint(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme_map.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

impl ThemeStyle {
    /// Loads a theme configuration from a YAML file on disk and merges it with default styles.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        let defaults = Self::default_theme_map();
        for entry in ALL_ENTRIES {
            if let Some(style) = defaults.get(&entry) {
                custom.entry(entry).or_insert_with(|| style.clone());
            }
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let named = |name: &str| ThemeStyle {
            fg: Some(ThemeColor::Named(name.to_string())),
        };

        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Header, named("brightcyan"));
        default_theme.insert(ThemeEntry::Success, named("green"));
        default_theme.insert(ThemeEntry::Info, named("white"));
        default_theme.insert(ThemeEntry::Warn, named("yellow"));
        default_theme.insert(ThemeEntry::Error, named("red"));
        default_theme.insert(ThemeEntry::DiffAdded, named("green"));
        default_theme.insert(ThemeEntry::DiffRemoved, named("red"));
        default_theme.insert(ThemeEntry::DiffHeader, named("cyan"));
        default_theme.insert(ThemeEntry::SummarySlot, named("brightblue"));
        default_theme.insert(ThemeEntry::SummaryOccurrences, named("brightyellow"));
        default_theme.insert(ThemeEntry::Prompt, named("brightmagenta"));
        default_theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn to_ansi_color_roundtrip() {
        let tc: ThemeColor = "blue".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::Blue);
        let tc: ThemeColor = "brightmagenta".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::BrightMagenta);
    }

    #[test]
    fn custom_theme_is_merged_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "warn:\n  fg: blue").unwrap();

        let map = ThemeStyle::load_from_file(file.path()).unwrap();
        assert_eq!(
            map.get(&ThemeEntry::Warn).unwrap().fg,
            Some(ThemeColor::Named("blue".into()))
        );
        assert_eq!(map.len(), ALL_ENTRIES.len());
    }

    #[test]
    fn unknown_color_names_fail_to_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "warn:\n  fg: purple").unwrap();

        let err = ThemeStyle::load_from_file(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid theme color"));
    }

    #[test]
    fn table_colors_follow_the_palette_order() {
        let color: ThemeColor = "brightblue".parse().unwrap();
        assert_eq!(color.to_table_color(), TableColor::AnsiValue(12));
        let color: ThemeColor = "black".parse().unwrap();
        assert_eq!(color.to_table_color(), TableColor::AnsiValue(0));
    }

    #[test]
    fn paint_is_plain_without_colors() {
        let map = ThemeStyle::default_theme_map();
        assert_eq!(paint("hi", ThemeEntry::Error, &map, false), "hi");
        assert_ne!(paint("hi", ThemeEntry::Error, &map, true), "hi");
    }
}
