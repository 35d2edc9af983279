use crate::terrain::CostTable;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub visibility: VisibilityConfig,
    #[serde(default)]
    pub coverage: CoverageConfig,
    #[serde(default)]
    pub costs: CostConfig,
}

#[derive(Debug, Deserialize)]
pub struct VisibilityConfig {
    #[serde(default = "default_ray_count")]
    pub ray_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct CoverageConfig {
    #[serde(default = "default_resolution_cols")]
    pub resolution_cols: usize,
    #[serde(default = "default_resolution_rows")]
    pub resolution_rows: usize,
}

#[derive(Debug, Deserialize)]
pub struct CostConfig {
    #[serde(default = "default_open_cost")]
    pub open: u32,
    #[serde(default = "default_road_cost")]
    pub road: u32,
    #[serde(default = "default_forest_cost")]
    pub forest: u32,
    #[serde(default = "default_urban_cost")]
    pub urban: u32,
}

// Default values
fn default_ray_count() -> u32 { 360 }
fn default_resolution_cols() -> usize { 120 }
fn default_resolution_rows() -> usize { 80 }
fn default_open_cost() -> u32 { 1 }
fn default_road_cost() -> u32 { 1 }
fn default_forest_cost() -> u32 { 8 }
fn default_urban_cost() -> u32 { 20 }

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            ray_count: default_ray_count(),
        }
    }
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            resolution_cols: default_resolution_cols(),
            resolution_rows: default_resolution_rows(),
        }
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            open: default_open_cost(),
            road: default_road_cost(),
            forest: default_forest_cost(),
            urban: default_urban_cost(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visibility: VisibilityConfig::default(),
            coverage: CoverageConfig::default(),
            costs: CostConfig::default(),
        }
    }
}

impl CostConfig {
    /// Convert the config section into the table `find_path` consumes
    pub fn to_table(&self) -> CostTable {
        CostTable {
            open: self.open,
            road: self.road,
            forest: self.forest,
            urban: self.urban,
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from config.toml");
                    config
                }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[visibility]\nray_count = 90\n").unwrap();
        assert_eq!(config.visibility.ray_count, 90);
        assert_eq!(config.coverage.resolution_cols, 120);
        assert_eq!(config.costs.to_table(), CostTable::default());
    }
}
