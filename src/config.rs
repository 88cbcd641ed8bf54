//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HYPERWIRE_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use hyperwire_geom::{DepthFade, EngineParams, Projection, SpinSchedule};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Animation clock and rotation schedule
    #[serde(default)]
    pub animation: AnimationConfig,
    /// 4D-to-2D projection parameters
    #[serde(default)]
    pub projection: Projection,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            animation: AnimationConfig::default(),
            projection: Projection::default(),
            rendering: RenderingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HYPERWIRE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HYPERWIRE_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("HYPERWIRE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Engine parameters assembled from the animation and projection sections
    pub fn engine_params(&self) -> EngineParams {
        EngineParams {
            time_step: self.animation.time_step,
            schedule: self.animation.schedule,
            projection: self.projection,
            fade: self.rendering.fade,
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hyperwire - 4D Hypercube".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Animation clock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Tick interval in milliseconds (~60 FPS at 16)
    pub frame_interval_ms: u64,
    /// Clock increment per tick
    pub time_step: f32,
    /// Per-plane rotation rates and phases
    #[serde(default)]
    pub schedule: SpinSchedule,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            time_step: 0.03,
            schedule: SpinSchedule::default(),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Edge stroke width in pixels
    pub line_width: f32,
    /// Edge stroke color [r, g, b]; alpha comes from the depth fade
    pub edge_color: [f32; 3],
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// W-depth edge fade parameters
    #[serde(default)]
    pub fade: DepthFade,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            line_width: 1.6,
            edge_color: [1.0, 1.0, 1.0],
            background_color: [0.0, 0.0, 0.0, 1.0],
            fade: DepthFade::default(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
