use crate::pathfinding::SearchConfig;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub movement: MovementConfig,
    #[serde(default)]
    pub level: LevelConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_cell_width")]
    pub cell_width: i32,
    #[serde(default = "default_cell_height")]
    pub cell_height: i32,
    #[serde(default = "default_atlas_columns")]
    pub atlas_columns: i32,
}

#[derive(Debug, Deserialize)]
pub struct MovementConfig {
    #[serde(default = "default_base_cost")]
    pub base_cost: u32,
    #[serde(default = "default_slow_cost")]
    pub slow_cost: u32,
    #[serde(default = "default_movement_budget")]
    pub default_budget: u32,
}

#[derive(Debug, Deserialize)]
pub struct LevelConfig {
    #[serde(default = "default_level_path")]
    pub path: String,
}

// Default values
fn default_cell_width() -> i32 { 32 }
fn default_cell_height() -> i32 { 32 }
fn default_atlas_columns() -> i32 { 8 }
fn default_base_cost() -> u32 { 1 }
fn default_slow_cost() -> u32 { 2 }
fn default_movement_budget() -> u32 { 5 }
fn default_level_path() -> String { "content/levels/level1.txt".to_string() }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            atlas_columns: default_atlas_columns(),
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            base_cost: default_base_cost(),
            slow_cost: default_slow_cost(),
            default_budget: default_movement_budget(),
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            path: default_level_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            movement: MovementConfig::default(),
            level: LevelConfig::default(),
        }
    }
}

impl MovementConfig {
    /// The numeric costs handed to each pathfinding query.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            base_cost: self.base_cost,
            slow_cost: self.slow_cost,
            max_expanded: None,
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }
}
