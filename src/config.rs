use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/graph.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            server: ServerConfig::default(),
            layout: LayoutConfig::default(),
            theme: ThemeConfig::default(),
            filter: FilterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Radial layout parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Radius of the topic ring around a focused legislator
    #[serde(default = "default_legislator_ring_radius")]
    pub legislator_ring_radius: f64,
    /// Radius of the legislator ring around a focused topic
    #[serde(default = "default_topic_ring_radius")]
    pub topic_ring_radius: f64,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
}

fn default_legislator_ring_radius() -> f64 {
    300.0
}

fn default_topic_ring_radius() -> f64 {
    800.0
}

fn default_animation_duration_ms() -> u64 {
    1000
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            legislator_ring_radius: default_legislator_ring_radius(),
            topic_ring_radius: default_topic_ring_radius(),
            animation_duration_ms: default_animation_duration_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_dark_background")]
    pub dark_background: String,
    #[serde(default = "default_light_background")]
    pub light_background: String,
}

fn default_dark_background() -> String {
    "#222222".to_string()
}

fn default_light_background() -> String {
    "#ffffff".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark_background: default_dark_background(),
            light_background: default_light_background(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Initial importance slider position, in percent
    #[serde(default = "default_threshold")]
    pub default_threshold: [f64; 2],
}

fn default_threshold() -> [f64; 2] {
    [0.0, 50.0]
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
        }
    }
}

impl Config {
    /// Get the configuration directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("senategraph");
        Ok(config_dir)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults when none exists
    pub fn load_or_default() -> Result<Self> {
        let config_path = match Self::config_path() {
            Ok(path) => path,
            Err(_) => return Ok(Self::default()),
        };

        if !config_path.exists() {
            tracing::debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file at {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
