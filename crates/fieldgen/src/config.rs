use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

pub const CONFIG_PATH: &str = "fieldgen_config.toml";

static CONFIG: OnceLock<Mutex<FieldConfig>> = OnceLock::new();

/// Get a copy of the current configuration, loading it from disk on first use.
/// A missing or broken file falls back to the built-in defaults.
pub fn get_config() -> FieldConfig {
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(load_or_default(CONFIG_PATH)));
    config_mutex
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Re-read the config file, keeping the previous values if it can't be loaded.
pub fn reload_config() -> Result<FieldConfig, ConfigError> {
    let new_config = FieldConfig::load_from_file(CONFIG_PATH)?;
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    *config_mutex.lock().unwrap_or_else(PoisonError::into_inner) = new_config.clone();
    Ok(new_config)
}

fn load_or_default(path: &str) -> FieldConfig {
    match FieldConfig::load_from_file(path) {
        Ok(config) => {
            log::info!("Loaded field config from {path}");
            config
        }
        Err(err) => {
            log::warn!("Using default field config: {err}");
            FieldConfig::default()
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to access config file: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FieldConfig {
    pub animation: AnimationConfig,
    pub grid: GridConfig,
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Length of one hover animation in seconds
    pub period: f64,
    /// How far a particle pops out of the grid plane at mid-period
    pub max_offset: f32,
    pub min_lightness: f32,
    pub max_lightness: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            period: 12.0,
            max_offset: 15.0,
            min_lightness: 0.1,
            max_lightness: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub box_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min: -20.0,
            max: 20.0,
            step: 1.1,
            box_size: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial distance from the grid center
    pub distance: f32,
    pub rotation_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            distance: 30.0,
            rotation_speed: 0.005,
            zoom_speed: 2.0,
            min_distance: 5.0,
            max_distance: 90.0,
        }
    }
}

impl FieldConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would make the animation or grid degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.period.is_nan() || self.animation.period <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "animation.period must be positive, got {}",
                self.animation.period
            )));
        }
        if self.grid.step.is_nan() || self.grid.step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "grid.step must be positive, got {}",
                self.grid.step
            )));
        }
        if self.camera.min_distance > self.camera.max_distance {
            return Err(ConfigError::Invalid(format!(
                "camera.min_distance {} exceeds camera.max_distance {}",
                self.camera.min_distance, self.camera.max_distance
            )));
        }
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
