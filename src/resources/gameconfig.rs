//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [viewport]
//! width = 800
//! height = 600
//!
//! [world]
//! width = 1200
//! height = 900
//!
//! [player]
//! acceleration = 40
//! max_speed = 200
//! deceleration = 40
//! start_x = 20
//! start_y = 20
//!
//! [rules]
//! terminal_priority = lose_first
//! banner_delay = 1.0
//! banner_fade = 1.0
//! fade_out = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::levelstate::TerminalPriority;

/// Default safe values for startup
const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;
const DEFAULT_WORLD_WIDTH: f32 = 1200.0;
const DEFAULT_WORLD_HEIGHT: f32 = 900.0;
const DEFAULT_ACCELERATION: f32 = 40.0;
const DEFAULT_MAX_SPEED: f32 = 200.0;
const DEFAULT_DECELERATION: f32 = 40.0;
const DEFAULT_START_X: f32 = 20.0;
const DEFAULT_START_Y: f32 = 20.0;
const DEFAULT_BANNER_DELAY: f32 = 1.0;
const DEFAULT_BANNER_FADE: f32 = 1.0;
const DEFAULT_FADE_OUT: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the viewport and world sizes, the player tuning values and the
/// level rules. Missing keys keep their defaults.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Size of the level background, which defines the world bounds.
    pub world_width: f32,
    pub world_height: f32,
    pub player_acceleration: f32,
    pub player_max_speed: f32,
    pub player_deceleration: f32,
    pub player_start_x: f32,
    pub player_start_y: f32,
    pub terminal_priority: TerminalPriority,
    /// Seconds before an end-of-level banner starts fading in.
    pub banner_delay: f32,
    pub banner_fade: f32,
    /// Fade-out length for collected items and the dead player.
    pub fade_out: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            player_acceleration: DEFAULT_ACCELERATION,
            player_max_speed: DEFAULT_MAX_SPEED,
            player_deceleration: DEFAULT_DECELERATION,
            player_start_x: DEFAULT_START_X,
            player_start_y: DEFAULT_START_Y,
            terminal_priority: TerminalPriority::default(),
            banner_delay: DEFAULT_BANNER_DELAY,
            banner_fade: DEFAULT_BANNER_FADE,
            fade_out: DEFAULT_FADE_OUT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();

        // [viewport] section
        if let Some(width) = float("viewport", "width") {
            self.viewport_width = width as f32;
        }
        if let Some(height) = float("viewport", "height") {
            self.viewport_height = height as f32;
        }

        // [world] section
        if let Some(width) = float("world", "width") {
            self.world_width = width as f32;
        }
        if let Some(height) = float("world", "height") {
            self.world_height = height as f32;
        }

        // [player] section
        if let Some(v) = float("player", "acceleration") {
            self.player_acceleration = v as f32;
        }
        if let Some(v) = float("player", "max_speed") {
            self.player_max_speed = v as f32;
        }
        if let Some(v) = float("player", "deceleration") {
            self.player_deceleration = v as f32;
        }
        if let Some(v) = float("player", "start_x") {
            self.player_start_x = v as f32;
        }
        if let Some(v) = float("player", "start_y") {
            self.player_start_y = v as f32;
        }

        // [rules] section
        if let Some(priority) = config.get("rules", "terminal_priority") {
            match priority.parse() {
                Ok(p) => self.terminal_priority = p,
                Err(e) => warn!("Ignoring [rules] terminal_priority: {}", e),
            }
        }
        if let Some(v) = float("rules", "banner_delay") {
            self.banner_delay = v as f32;
        }
        if let Some(v) = float("rules", "banner_fade") {
            self.banner_fade = v as f32;
        }
        if let Some(v) = float("rules", "fade_out") {
            self.fade_out = v as f32;
        }

        info!(
            "Loaded config: {}x{} viewport, {}x{} world, player acc={} max={} dec={}, priority={}",
            self.viewport_width,
            self.viewport_height,
            self.world_width,
            self.world_height,
            self.player_acceleration,
            self.player_max_speed,
            self.player_deceleration,
            self.terminal_priority
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("viewport", "width", Some(self.viewport_width.to_string()));
        config.set("viewport", "height", Some(self.viewport_height.to_string()));

        config.set("world", "width", Some(self.world_width.to_string()));
        config.set("world", "height", Some(self.world_height.to_string()));

        config.set("player", "acceleration", Some(self.player_acceleration.to_string()));
        config.set("player", "max_speed", Some(self.player_max_speed.to_string()));
        config.set("player", "deceleration", Some(self.player_deceleration.to_string()));
        config.set("player", "start_x", Some(self.player_start_x.to_string()));
        config.set("player", "start_y", Some(self.player_start_y.to_string()));

        config.set(
            "rules",
            "terminal_priority",
            Some(self.terminal_priority.to_string()),
        );
        config.set("rules", "banner_delay", Some(self.banner_delay.to_string()));
        config.set("rules", "banner_fade", Some(self.banner_fade.to_string()));
        config.set("rules", "fade_out", Some(self.fade_out.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the viewport size.
    pub fn viewport_size(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.viewport_size(), (800.0, 600.0));
        assert_eq!(config.world_width, 1200.0);
        assert_eq!(config.player_max_speed, 200.0);
        assert_eq!(config.terminal_priority, TerminalPriority::LoseFirst);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[player]\nmax_speed = 150\n\n[rules]\nterminal_priority = win_first")
            .expect("write");
        let mut config = GameConfig::with_path(file.path());
        config.load_from_file().expect("load");
        assert_eq!(config.player_max_speed, 150.0);
        assert_eq!(config.player_acceleration, 40.0);
        assert_eq!(config.terminal_priority, TerminalPriority::WinFirst);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.ini");
        let mut config = GameConfig::with_path(&path);
        config.world_width = 1600.0;
        config.banner_delay = 0.5;
        config.save_to_file().expect("save");

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut config = GameConfig::with_path(dir.path().join("nope.ini"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.world_height, 900.0);
    }
}
