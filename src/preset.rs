//! Preset configuration parser
//!
//! Parses `dots.toml` into named indicator presets layered over the
//! built-in defaults.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::indicator::options::{DotsOptions, OptionsPatch};

/// A named indicator preset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetConfig {
    /// Unique name for this preset
    pub name: String,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Glyph override
    #[serde(default, rename = "char", skip_serializing_if = "Option::is_none")]
    pub glyph: Option<char>,
    /// Maximum cycle position override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Tick interval override in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<u64>,
    /// Autostart override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<bool>,
}

impl PresetConfig {
    /// The preset's overrides as a patch.
    #[must_use]
    pub const fn patch(&self) -> OptionsPatch {
        OptionsPatch {
            glyph: self.glyph,
            count: self.count,
            speed: self.speed,
            start: self.start,
        }
    }
}

/// Top-level configuration parsed from dots.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DotsFile {
    /// Overrides applied to every resolved preset before its own
    #[serde(default)]
    pub defaults: OptionsPatch,
    /// Preset definitions
    #[serde(default, rename = "preset")]
    pub presets: Vec<PresetConfig>,
}

impl DotsFile {
    /// Parse a dots.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse dots.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse dots.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Find a preset by name
    #[must_use]
    pub fn get_preset(&self, name: &str) -> Option<&PresetConfig> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Resolve the effective options: built-in defaults, then the
    /// `[defaults]` section, then the named preset's overrides. With no
    /// preset name, only the first two layers apply.
    pub fn resolve(&self, preset: Option<&str>) -> Result<DotsOptions> {
        let mut options = DotsOptions::default();
        options.apply(self.defaults);

        if let Some(name) = preset {
            let preset = self.get_preset(name).with_context(|| {
                format!(
                    "Unknown preset '{}'. Available presets: {}",
                    name,
                    self.available_names()
                )
            })?;
            options.apply(preset.patch());
        }

        Ok(options)
    }

    /// Format available preset names for error messages.
    #[must_use]
    pub fn available_names(&self) -> String {
        self.presets
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        // Check for duplicate preset names
        let mut seen = HashSet::new();
        for preset in &self.presets {
            if !seen.insert(&preset.name) {
                bail!("Duplicate preset name: '{}'", preset.name);
            }
        }

        // Check that preset names are non-empty
        for preset in &self.presets {
            if preset.name.trim().is_empty() {
                bail!("Preset name cannot be empty");
            }
        }

        // A zero tick interval would spin the timer without ever pausing
        if self.defaults.speed == Some(0) {
            bail!("Invalid speed in [defaults]: must be at least 1ms");
        }
        for preset in &self.presets {
            if preset.speed == Some(0) {
                bail!("Invalid speed in preset '{}': must be at least 1ms", preset.name);
            }
        }

        Ok(())
    }
}
