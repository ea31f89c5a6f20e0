//! Explorer Configuration
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables: `VISTA_WORLD`, `VISTA_START`, `VISTA_TRANSITION`,
//!    `VISTA_FADE_DURATION`
//! 2. Config file: first command-line argument, else `vista.toml`
//! 3. Built-in defaults
//!
//! # Example Config File
//!
//! ```toml
//! world = "worlds/polygon_isle.toml"
//! start = "Beach"          # overrides the world's own start
//! tick_rate = 60
//!
//! [transition]
//! kind = "fade"            # fade, wipe, cut
//! duration = 0.75
//! wipe_edge = "left"
//!
//! [zones]
//! side_width = 0.2
//! forward_height = 0.4
//! turn_around_height = 0.15
//! ```

use crate::error::RuntimeError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vista_core::LocationId;
use vista_navigation::ZoneLayout;
use vista_transition::TransitionSettings;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "vista.toml";

/// Complete explorer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// World content file
    pub world: PathBuf,
    /// Starting location override
    pub start: Option<LocationId>,
    /// Transition settings
    pub transition: TransitionSettings,
    /// Scheduling ticks per second
    pub tick_rate: u32,
    /// Pointer zone layout
    pub zones: ZoneLayout,
    /// Config file path (for reporting)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            world: PathBuf::from("world.toml"),
            start: None,
            transition: TransitionSettings::default(),
            tick_rate: 60,
            zones: ZoneLayout::default(),
            config_path: None,
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from all sources
    pub fn load(args: impl IntoIterator<Item = String>) -> Result<Self, RuntimeError> {
        let explicit = args.into_iter().find(|arg| !arg.starts_with("--"));

        let mut config = match &explicit {
            // An explicitly named file must exist
            Some(path) => Self::load_from_file(Path::new(path))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                log::info!("No config file, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.normalize();
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, RuntimeError> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content).map_err(|message| {
            RuntimeError::ConfigParse {
                path: path.to_path_buf(),
                message,
            }
        })?;
        config.config_path = Some(path.to_path_buf());
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Override from environment variables, read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(world) = lookup("VISTA_WORLD").filter(|v| !v.is_empty()) {
            self.world = PathBuf::from(world);
            log::info!("World from env: {}", self.world.display());
        }

        if let Some(start) = lookup("VISTA_START").filter(|v| !v.is_empty()) {
            self.start = Some(LocationId::new(start));
        }

        if let Some(kind) = lookup("VISTA_TRANSITION") {
            match kind.parse() {
                Ok(kind) => self.transition.kind = kind,
                Err(e) => log::warn!("Ignoring VISTA_TRANSITION: {}", e),
            }
        }

        if let Some(duration) = lookup("VISTA_FADE_DURATION") {
            match duration.parse::<f32>() {
                Ok(seconds) => self.transition.duration = seconds,
                Err(_) => log::warn!("Ignoring VISTA_FADE_DURATION: not a number: {}", duration),
            }
        }
    }

    /// Clamp values into their valid ranges
    pub fn normalize(&mut self) {
        if self.transition.duration.is_nan() || self.transition.duration < 0.0 {
            self.transition.duration = 0.0;
        }
        self.tick_rate = self.tick_rate.clamp(1, 1000);
        self.zones = self.zones.clamped();
    }

    /// Seconds per scheduling tick
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        log::info!("=== Explorer Configuration ===");
        if let Some(path) = &self.config_path {
            log::info!("  Config:     {}", path.display());
        }
        log::info!("  World:      {}", self.world.display());
        if let Some(start) = &self.start {
            log::info!("  Start:      {}", start);
        }
        log::info!(
            "  Transition: {} ({:.2}s)",
            self.transition.kind,
            self.transition.duration
        );
        log::info!("  Tick rate:  {} Hz", self.tick_rate);
        log::info!("==============================");
    }
}
