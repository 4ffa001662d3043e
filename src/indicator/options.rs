//! Indicator configuration: full options, partial patches, and the
//! control directives a bound indicator accepts.

use serde::{Deserialize, Serialize};

/// Complete configuration for one indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DotsOptions {
    /// Glyph repeated to render each frame
    #[serde(default = "default_glyph", rename = "char")]
    pub glyph: char,
    /// Maximum cycle position before wrapping back to zero
    #[serde(default = "default_count")]
    pub count: u32,
    /// Tick interval in milliseconds. Must be nonzero; the configuration
    /// layer rejects zero before it reaches a controller.
    #[serde(default = "default_speed")]
    pub speed: u64,
    /// Whether to begin animating immediately on construction
    #[serde(default = "default_start")]
    pub start: bool,
}

const fn default_glyph() -> char {
    '.'
}

const fn default_count() -> u32 {
    3
}

const fn default_speed() -> u64 {
    500
}

const fn default_start() -> bool {
    true
}

impl Default for DotsOptions {
    fn default() -> Self {
        Self {
            glyph: default_glyph(),
            count: default_count(),
            speed: default_speed(),
            start: default_start(),
        }
    }
}

impl DotsOptions {
    /// Shallow-merge a patch: fields set in the patch replace the current
    /// values, unset fields are left alone.
    pub fn apply(&mut self, patch: OptionsPatch) {
        if let Some(glyph) = patch.glyph {
            self.glyph = glyph;
        }
        if let Some(count) = patch.count {
            self.count = count;
        }
        if let Some(speed) = patch.speed {
            self.speed = speed;
        }
        if let Some(start) = patch.start {
            self.start = start;
        }
    }
}

/// Partial configuration, merged into [`DotsOptions`] with
/// [`DotsOptions::apply`]. Every field is optional.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionsPatch {
    /// Replacement glyph
    #[serde(default, rename = "char", skip_serializing_if = "Option::is_none")]
    pub glyph: Option<char>,
    /// Replacement maximum cycle position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Replacement tick interval in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<u64>,
    /// Replacement autostart flag (only meaningful at construction)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<bool>,
}

/// Control message for a bound indicator: stop it, start it, or merge new
/// options into its live configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Cancel the timer and clear the rendered output
    Stop,
    /// (Re)start the timer
    Start,
    /// Merge the patch without touching running state or cycle position
    Patch(OptionsPatch),
}
