//! Application settings stored as JSON under the user config directory
//!
//! The file only carries presentation tunables. The card field configuration
//! chosen in edit mode is session state and is never written here; the
//! `default_fields` entry only seeds the carousel at startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::assignment::ActiveFields;
use crate::constants;
use crate::fields::{DEFAULT_ACTIVE, FieldId};

/// Top-level settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub swipe: SwipeSettings,
    #[serde(default)]
    pub edit: EditSettings,

    /// Field identifiers shown on the center card at startup
    #[serde(default = "default_fields")]
    pub default_fields: Vec<String>,

    /// Skip slide transition animations
    #[serde(default)]
    pub reduce_motion: bool,

    /// Alternative book catalogue (JSON array of book records)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

/// Initial window size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_width")]
    pub width: f32,
    #[serde(default = "default_window_height")]
    pub height: f32,
}

/// Responsive breakpoint, bubble ring and slide geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint: f32,
    #[serde(default = "default_wide_bubble_radius")]
    pub wide_bubble_radius: f32,
    #[serde(default = "default_narrow_bubble_radius")]
    pub narrow_bubble_radius: f32,
    #[serde(default = "default_wide_slide_spacing")]
    pub wide_slide_spacing: f32,
    #[serde(default = "default_narrow_slide_spacing")]
    pub narrow_slide_spacing: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeSettings {
    /// Minimum travel in logical pixels before a swipe fires
    #[serde(default = "default_swipe_distance")]
    pub min_distance: f32,
}

/// Save choreography timings of the edit overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditSettings {
    #[serde(default = "default_save_delay_ms")]
    pub save_delay_ms: u64,
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,
}

// Default value functions
fn default_fields() -> Vec<String> {
    DEFAULT_ACTIVE.iter().map(|id| id.as_str().to_string()).collect()
}

fn default_window_width() -> f32 {
    1280.0
}

fn default_window_height() -> f32 {
    860.0
}

fn default_narrow_breakpoint() -> f32 {
    constants::layout::NARROW_BREAKPOINT
}

fn default_wide_bubble_radius() -> f32 {
    constants::layout::WIDE_BUBBLE_RADIUS
}

fn default_narrow_bubble_radius() -> f32 {
    constants::layout::NARROW_BUBBLE_RADIUS
}

fn default_wide_slide_spacing() -> f32 {
    constants::slides::WIDE_SPACING
}

fn default_narrow_slide_spacing() -> f32 {
    constants::slides::NARROW_SPACING
}

fn default_swipe_distance() -> f32 {
    constants::swipe::MIN_DISTANCE
}

fn default_save_delay_ms() -> u64 {
    constants::edit::SAVE_DELAY_MS
}

fn default_close_delay_ms() -> u64 {
    constants::edit::CLOSE_DELAY_MS
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            narrow_breakpoint: default_narrow_breakpoint(),
            wide_bubble_radius: default_wide_bubble_radius(),
            narrow_bubble_radius: default_narrow_bubble_radius(),
            wide_slide_spacing: default_wide_slide_spacing(),
            narrow_slide_spacing: default_narrow_slide_spacing(),
        }
    }
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            min_distance: default_swipe_distance(),
        }
    }
}

impl Default for EditSettings {
    fn default() -> Self {
        Self {
            save_delay_ms: default_save_delay_ms(),
            close_delay_ms: default_close_delay_ms(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            layout: LayoutSettings::default(),
            swipe: SwipeSettings::default(),
            edit: EditSettings::default(),
            default_fields: default_fields(),
            reduce_motion: false,
            catalog_path: None,
        }
    }
}

impl Settings {
    /// `<config dir>/audiobook-carousel/settings.json`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(constants::config::APP_DIR);
        path.push(constants::config::FILENAME);
        path
    }

    /// Load settings from `path`, writing a default file when none exists
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Settings file not found, creating default");
            let settings = Settings::default();
            settings.save(path)?;
            return Ok(settings);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let mut settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings JSON from {}", path.display()))?;
        settings.validate_and_clamp();

        info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;

        info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Parse `default_fields`, skipping unknown identifiers
    pub fn initial_fields(&self) -> ActiveFields {
        let parsed = self.default_fields.iter().filter_map(|raw| match raw.parse::<FieldId>() {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "Skipping entry in default_fields");
                None
            }
        });
        ActiveFields::new(parsed)
    }

    /// Clamp values to safe ranges after loading
    fn validate_and_clamp(&mut self) {
        use crate::constants::validation::*;

        clamp_f32(
            "swipe.min_distance",
            &mut self.swipe.min_distance,
            MIN_SWIPE_DISTANCE,
            MAX_SWIPE_DISTANCE,
        );
        clamp_f32(
            "layout.wide_bubble_radius",
            &mut self.layout.wide_bubble_radius,
            MIN_BUBBLE_RADIUS,
            MAX_BUBBLE_RADIUS,
        );
        clamp_f32(
            "layout.narrow_bubble_radius",
            &mut self.layout.narrow_bubble_radius,
            MIN_BUBBLE_RADIUS,
            MAX_BUBBLE_RADIUS,
        );
        clamp_f32(
            "window.width",
            &mut self.window.width,
            MIN_WINDOW_DIMENSION,
            MAX_WINDOW_DIMENSION,
        );
        clamp_f32(
            "window.height",
            &mut self.window.height,
            MIN_WINDOW_DIMENSION,
            MAX_WINDOW_DIMENSION,
        );

        if self.layout.narrow_breakpoint < 0.0 || !self.layout.narrow_breakpoint.is_finite() {
            warn!(
                narrow_breakpoint = self.layout.narrow_breakpoint,
                using = default_narrow_breakpoint(),
                "Invalid narrow_breakpoint, using default"
            );
            self.layout.narrow_breakpoint = default_narrow_breakpoint();
        }

        for (name, spacing, fallback) in [
            ("wide_slide_spacing", &mut self.layout.wide_slide_spacing, default_wide_slide_spacing()),
            ("narrow_slide_spacing", &mut self.layout.narrow_slide_spacing, default_narrow_slide_spacing()),
        ] {
            if *spacing <= 0.0 || !spacing.is_finite() {
                warn!(setting = name, value = *spacing, using = fallback, "Invalid slide spacing, using default");
                *spacing = fallback;
            }
        }

        for (name, delay) in [
            ("edit.save_delay_ms", &mut self.edit.save_delay_ms),
            ("edit.close_delay_ms", &mut self.edit.close_delay_ms),
        ] {
            if *delay > MAX_DELAY_MS {
                warn!(setting = name, value = *delay, max = MAX_DELAY_MS, "Delay exceeds maximum, clamping");
                *delay = MAX_DELAY_MS;
            }
        }
    }
}

fn clamp_f32(name: &str, value: &mut f32, min: f32, max: f32) {
    if !value.is_finite() || *value < min {
        warn!(setting = name, value = *value, min, "Setting below minimum, clamping");
        *value = min;
    } else if *value > max {
        warn!(setting = name, value = *value, max, "Setting exceeds maximum, clamping");
        *value = max;
    }
}
