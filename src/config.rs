/// Game settings, read from TOML. Every field has a default so a partial (or
/// missing) file still yields a playable configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Play field size in world pixels.
    pub width: f32,
    pub height: f32,
    /// Target frames per second for the terminal loop.
    pub frame_rate: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 480.0,
            frame_rate: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Base time unit in seconds; every other interval is a multiple of it.
    pub standard_interval: f32,
    pub fast_factor: f32,
    pub slow_factor: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            standard_interval: 1.0 / 60.0,
            fast_factor: 1.5,
            slow_factor: 6.0,
        }
    }
}

impl TimingConfig {
    pub fn standard(&self) -> f32 {
        self.standard_interval
    }

    /// Sphere and missile sheets.
    pub fn fast(&self) -> f32 {
        self.standard_interval * self.fast_factor
    }

    /// Explosions and the ship sheet.
    pub fn slow(&self) -> f32 {
        self.standard_interval * self.slow_factor
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub lives: u32,
    pub starting_level: u32,
    pub max_missiles: usize,
    /// Pixels per motion update.
    pub ship_step: f32,
    pub missile_step: f32,
    /// Seconds shaved off a missile's motion interval on every update.
    pub missile_acceleration: f32,
    pub min_missile_interval: f32,
    pub sphere_speed: f32,
    /// Fraction of the screen left empty around the end banner.
    pub text_margin: f32,
    /// Background scroll per standard interval.
    pub background_step: f32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            lives: 3,
            starting_level: 1,
            max_missiles: 3,
            ship_step: 4.0,
            missile_step: 4.0,
            missile_acceleration: 1.0 / 4000.0,
            min_missile_interval: 1.0 / 240.0,
            sphere_speed: 1.5,
            text_margin: 0.2,
            background_step: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log destination; nothing is logged without one.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub timing: TimingConfig,
    pub rules: RulesConfig,
    pub log: LogConfig,
    /// Fixed RNG seed for reproducible swarms.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        toml::from_str(text).map_err(|e| GameError::Config {
            path: PathBuf::from("<inline>"),
            reason: e.to_string(),
        })
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| GameError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Falls back to defaults, handing back the reason when loading failed.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e.to_string())),
        }
    }

    /// Problems that would make the game misbehave; empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            problems.push("window dimensions must be > 0".into());
        }
        if self.window.frame_rate == 0 {
            problems.push("window.frame_rate must be > 0".into());
        }
        if self.timing.standard_interval <= 0.0 {
            problems.push("timing.standard_interval must be > 0".into());
        }
        if self.timing.fast_factor <= 0.0 || self.timing.slow_factor <= 0.0 {
            problems.push("timing factors must be > 0".into());
        }
        if self.rules.lives == 0 {
            problems.push("rules.lives must be at least 1".into());
        }
        if self.rules.starting_level == 0 {
            problems.push("rules.starting_level must be at least 1".into());
        }
        if self.rules.min_missile_interval <= 0.0 {
            problems.push("rules.min_missile_interval must be > 0".into());
        }
        if self.rules.missile_acceleration < 0.0 {
            problems.push("rules.missile_acceleration must not be negative".into());
        }
        if !(0.0..1.0).contains(&self.rules.text_margin) {
            problems.push(format!(
                "rules.text_margin must be in [0, 1), got {}",
                self.rules.text_margin
            ));
        }
        problems
    }
}
