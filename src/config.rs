//! Configuration system for daytime with validation and private latitude overrides.
//!
//! The day/night calculator only needs a latitude. This module is the
//! collaborator that supplies it: it locates and parses the TOML file,
//! fills in defaults, applies an optional `geo.toml` override and rejects
//! values that make no geographic sense.
//!
//! ## Configuration Sources
//!
//! 1. **XDG_CONFIG_HOME**/daytime/daytime.toml (created with defaults when missing)
//! 2. **XDG_CONFIG_HOME**/daytime/geo.toml (optional, overrides `latitude`)
//!
//! Keeping the latitude in a separate `geo.toml` lets users version control
//! their main settings without publishing their location.
//!
//! ## Configuration Structure
//!
//! ```toml
//! latitude = 52.520000              # Degrees, -90 (south) to 90 (north)
//! days = 1                          # Consecutive days printed by the CLI
//! ```
//!
//! Latitudes beyond ±80° are valid here; the calculator clamps them.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::logger::Log;

/// Contents of the optional geo.toml file.
#[derive(Debug, Deserialize, Clone)]
struct GeoConfig {
    /// Geographic latitude in degrees (-90 to +90)
    latitude: Option<f64>,
}

/// Configuration structure for daytime settings.
///
/// All fields are optional in the file; [`Config::load_from_path`] fills in
/// defaults before validation, so loaded configs always carry values.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Latitude of the simulated city in degrees. Negative is south.
    pub latitude: Option<f64>,
    /// Number of consecutive days to report, starting at the requested date.
    pub days: Option<u32>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("daytime").join("daytime.toml"))
    }

    /// Latitude to construct the calculator with.
    pub fn effective_latitude(&self) -> f64 {
        self.latitude.unwrap_or(DEFAULT_LATITUDE)
    }

    pub fn effective_days(&self) -> u32 {
        self.days.unwrap_or(DEFAULT_DAYS)
    }

    /// Create a default config file, optionally seeded with a latitude.
    ///
    /// If a geo.toml already sits next to `path`, the latitude is written there
    /// instead of the main file.
    pub fn create_default_config(path: &Path, latitude: Option<f64>) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let latitude = latitude.unwrap_or(DEFAULT_LATITUDE);
        let geo_path = geo_path_for(path).filter(|p| p.exists());

        if let Some(geo_path) = &geo_path {
            write_geo_file(geo_path, latitude)?;
            Log::log_indented(&format!(
                "Saved latitude to separate geo file: {}",
                crate::utils::path_for_display(geo_path)
            ));
        }

        let builder = ConfigBuilder::new()
            .add_section("Daytime configuration")
            .add_setting(
                "days",
                &DEFAULT_DAYS.to_string(),
                &format!(
                    "Consecutive days to report ({}-{})",
                    MINIMUM_DAYS, MAXIMUM_DAYS
                ),
            )
            .add_section("City location");

        let builder = if geo_path.is_none() {
            builder.add_setting(
                "latitude",
                &format!("{:.6}", latitude),
                &format!(
                    "Degrees ({} to {}), clamped to ±{} for day length",
                    MINIMUM_LATITUDE, MAXIMUM_LATITUDE, MAX_SUPPORTED_LATITUDE
                ),
            )
        } else {
            builder
        };

        fs::write(path, builder.build()).context("Failed to write default config file")?;
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Self::load_geo_override_from_path(&mut config, path);
        Self::apply_defaults(&mut config);

        validate_config(&config)?;

        Ok(config)
    }

    /// Load the config from the default location, creating it first if needed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Log::log_block_start(&format!(
                "Creating default configuration at {}",
                crate::utils::path_for_display(&config_path)
            ));
            Self::create_default_config(&config_path, None)
                .context("Failed to create default config during load")?;
        }

        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    fn apply_defaults(config: &mut Config) {
        if config.latitude.is_none() {
            config.latitude = Some(DEFAULT_LATITUDE);
        }
        if config.days.is_none() {
            config.days = Some(DEFAULT_DAYS);
        }
    }

    /// Apply the latitude from geo.toml next to `config_path`, if any.
    ///
    /// A missing file is normal. An unreadable or malformed one is reported
    /// and otherwise ignored so the main config still loads.
    fn load_geo_override_from_path(config: &mut Config, config_path: &Path) {
        let Some(geo_path) = geo_path_for(config_path) else {
            return;
        };

        if !geo_path.exists() {
            return;
        }

        let content = match fs::read_to_string(&geo_path) {
            Ok(content) => content,
            Err(e) => {
                Log::log_warning(&format!(
                    "Failed to read geo.toml: {}. Using latitude from main config.",
                    e
                ));
                return;
            }
        };

        match toml::from_str::<GeoConfig>(&content) {
            Ok(geo_config) => {
                if let Some(latitude) = geo_config.latitude {
                    config.latitude = Some(latitude);
                }
                Log::log_indented(&format!(
                    "Loaded latitude override from {}",
                    crate::utils::path_for_display(&geo_path)
                ));
            }
            Err(e) => {
                Log::log_warning(&format!(
                    "Failed to parse geo.toml: {}. Using latitude from main config.",
                    e
                ));
            }
        }
    }

    /// Store a new latitude for the config at `config_path`.
    ///
    /// Writes to geo.toml when it exists, otherwise rewrites the `latitude`
    /// line of the main file (keeping its inline comment) or appends one.
    pub fn update_latitude(config_path: &Path, latitude: f64) -> Result<()> {
        validate_latitude(latitude)?;

        if let Some(geo_path) = geo_path_for(config_path).filter(|p| p.exists()) {
            write_geo_file(&geo_path, latitude)?;
            Log::log_block_start(&format!(
                "Updated latitude in {}",
                crate::utils::path_for_display(&geo_path)
            ));
            Log::log_indented(&format!("Latitude: {}", latitude));
            return Ok(());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let new_value = format!("{:.6}", latitude);
        let updated_content = match find_config_line(&content, "latitude") {
            Some(index) => {
                let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
                lines[index] = preserve_comment_formatting(&lines[index], "latitude", &new_value);
                let mut updated = lines.join("\n");
                if content.ends_with('\n') {
                    updated.push('\n');
                }
                updated
            }
            None => {
                let mut updated = content;
                if !updated.is_empty() && !updated.ends_with('\n') {
                    updated.push('\n');
                }
                updated.push_str(&format!("latitude = {}\n", new_value));
                updated
            }
        };

        fs::write(config_path, updated_content).with_context(|| {
            format!(
                "Failed to write updated config to {}",
                config_path.display()
            )
        })?;

        Log::log_block_start(&format!(
            "Updated config file: {}",
            crate::utils::path_for_display(config_path)
        ));
        Log::log_indented(&format!("Latitude: {}", latitude));

        Ok(())
    }

    pub fn log_config(&self) {
        let latitude = self.effective_latitude();

        Log::log_block_start("Configuration");
        Log::log_indented(&format!("Latitude: {:.4}°", latitude));
        if latitude.abs() > MAX_SUPPORTED_LATITUDE {
            Log::log_indented(&format!(
                "Day length uses ±{}° (latitude is beyond the supported band)",
                MAX_SUPPORTED_LATITUDE
            ));
        }
        Log::log_indented(&format!("Days: {}", self.effective_days()));
    }
}

/// Validate a configuration after defaults have been applied.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(latitude) = config.latitude {
        validate_latitude(latitude)?;
    }

    if let Some(days) = config.days {
        if !(MINIMUM_DAYS..=MAXIMUM_DAYS).contains(&days) {
            anyhow::bail!(
                "Days ({}) must be between {} and {}",
                days,
                MINIMUM_DAYS,
                MAXIMUM_DAYS
            );
        }
    }

    Ok(())
}

/// Reject latitudes that are not finite or lie outside -90..=90.
pub fn validate_latitude(latitude: f64) -> Result<()> {
    if !latitude.is_finite() {
        anyhow::bail!("Latitude must be a finite number of degrees");
    }
    if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&latitude) {
        anyhow::bail!(
            "Invalid latitude: {}. Must be between {} and {} degrees",
            latitude,
            MINIMUM_LATITUDE,
            MAXIMUM_LATITUDE
        );
    }
    Ok(())
}

fn geo_path_for(config_path: &Path) -> Option<PathBuf> {
    config_path.parent().map(|parent| parent.join("geo.toml"))
}

fn write_geo_file(geo_path: &Path, latitude: f64) -> Result<()> {
    let content = format!("#[Private geo coordinates]\nlatitude = {:.6}\n", latitude);
    fs::write(geo_path, content)
        .with_context(|| format!("Failed to write latitude to {}", geo_path.display()))
}

/// Builds commented TOML with the comments of all settings aligned.
struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{}]", title)));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{} = {}", key, value),
            comment: format!("# {}", comment),
        });
        self
    }

    fn build(self) -> String {
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(title);
                    first_section = false;
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{}{}{}", line, padding, comment));
                }
            }
        }

        let mut output = result.join("\n");
        output.push('\n');
        output
    }
}

/// Index of the first uncommented line that sets `key`
fn find_config_line(content: &str, key: &str) -> Option<usize> {
    content.lines().position(|line| {
        let trimmed = line.trim();
        !trimmed.starts_with('#')
            && trimmed
                .split_once('=')
                .is_some_and(|(name, _)| name.trim() == key)
    })
}

/// Preserve the comment formatting when updating a config line value
fn preserve_comment_formatting(original_line: &str, key: &str, new_value: &str) -> String {
    let key_value_part = format!("{} = {}", key, new_value);

    match original_line.find('#') {
        Some(comment_pos) => {
            let comment_part = &original_line[comment_pos..];
            // Keep the comment in its original column where possible
            let padding_needed = comment_pos.saturating_sub(key_value_part.len()).max(1);
            format!(
                "{}{}{}",
                key_value_part,
                " ".repeat(padding_needed),
                comment_part
            )
        }
        None => key_value_part,
    }
}
