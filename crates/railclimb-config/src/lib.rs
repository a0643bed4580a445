//! Configuration system for railclimb.
//!
//! A climb request names the grade, the throttle limit, whether
//! self-powered units re-join the power block, and the train as a roster of
//! catalog entries. It loads from TOML or YAML.
//!
//! # Examples
//!
//! ```
//! use railclimb_config::ClimbConfig;
//! use railclimb_core::prefab::Difficulty;
//!
//! let config = ClimbConfig::from_toml_str(r#"
//!     grade = 0.08
//!     power_ratio = 0.9
//!     difficulty = "hard"
//!
//!     [[train]]
//!     stock = "climax"
//!
//!     [[train]]
//!     stock = "hopper"
//!     cargo = "coal"
//!     count = 3
//! "#).unwrap();
//!
//! assert_eq!(config.difficulty, Difficulty::Hard);
//! assert_eq!(config.build_train().unwrap().len(), 4);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use railclimb_config::ClimbConfig;
//!
//! let config = ClimbConfig::load("climb.toml").unwrap_or_default();
//! assert!(config.train.is_empty());
//! ```

use std::path::Path;

use railclimb_core::error::{check_grade, check_power_ratio};
use railclimb_core::prefab::{self, CargoLoad, Difficulty};
use railclimb_core::stock::{RollingStock, Train};
use railclimb_core::{RailclimbError, DEFAULT_POWER_RATIO};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Stock(#[from] RailclimbError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// A climb request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ClimbConfig {
    /// Gradient as a ratio, e.g. 0.08 for 8%.
    #[serde(default)]
    pub grade: f64,

    /// Maximum throttle to require, in (0, 1].
    #[serde(default = "default_power_ratio")]
    pub power_ratio: f64,

    /// Whether units that can climb on their own join the power block once
    /// they are at the top.
    #[serde(default)]
    pub collect_net: bool,

    /// Cargo mass multiplier.
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Roster, front to back.
    #[serde(default)]
    pub train: Vec<StockEntry>,
}

fn default_power_ratio() -> f64 {
    DEFAULT_POWER_RATIO
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            grade: 0.0,
            power_ratio: DEFAULT_POWER_RATIO,
            collect_net: false,
            difficulty: Difficulty::default(),
            train: Vec::new(),
        }
    }
}

impl ClimbConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn with_grade(mut self, grade: f64) -> Self {
        self.grade = grade;
        self
    }

    pub fn with_power_ratio(mut self, power_ratio: f64) -> Self {
        self.power_ratio = power_ratio;
        self
    }

    pub fn with_collect_net(mut self, collect_net: bool) -> Self {
        self.collect_net = collect_net;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Appends a roster entry.
    pub fn with_stock(mut self, entry: StockEntry) -> Self {
        self.train.push(entry);
        self
    }

    /// Checks the grade and power ratio ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_grade(self.grade)?;
        check_power_ratio(self.power_ratio)?;
        Ok(())
    }

    /// Builds the train described by the roster.
    ///
    /// # Errors
    ///
    /// Fails on unknown stock or cargo keys, cargo on a locomotive, and
    /// quantities above a car's limit.
    pub fn build_train(&self) -> Result<Train, ConfigError> {
        let mut units = Vec::new();
        for entry in &self.train {
            let unit = entry.build(self.difficulty)?;
            units.extend(std::iter::repeat(unit).take(entry.count));
        }
        Ok(Train::new(units))
    }
}

/// One roster line: a catalog key, optional cargo, optional repetition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StockEntry {
    /// Locomotive or car key, e.g. `"climax"` or `"hopper"`.
    pub stock: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,

    /// Cargo units; the car is filled when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(default = "default_count")]
    pub count: usize,

    /// Display name overriding the catalog name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fn default_count() -> usize {
    1
}

impl StockEntry {
    pub fn new(stock: impl Into<String>) -> Self {
        Self {
            stock: stock.into(),
            cargo: None,
            quantity: None,
            count: 1,
            name: None,
        }
    }

    pub fn with_cargo(mut self, cargo: impl Into<String>) -> Self {
        self.cargo = Some(cargo.into());
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn build(&self, difficulty: Difficulty) -> Result<RollingStock, ConfigError> {
        if let Some(template) = prefab::locomotive(&self.stock) {
            if self.cargo.is_some() {
                return Err(ConfigError::Invalid(format!(
                    "locomotive '{}' cannot carry cargo",
                    self.stock
                )));
            }
            return Ok(match &self.name {
                Some(name) => template.named(name),
                None => template.build(),
            });
        }

        let template = prefab::car(&self.stock)
            .ok_or_else(|| RailclimbError::UnknownStock(self.stock.clone()))?;
        let load = match &self.cargo {
            Some(key) => Some(CargoLoad {
                cargo: prefab::cargo(key)?,
                quantity: self.quantity,
            }),
            None if self.quantity.is_some() => {
                return Err(ConfigError::Invalid(format!(
                    "'{}' has a quantity but no cargo",
                    self.stock
                )));
            }
            None => None,
        };
        Ok(template.build_with(self.name.as_deref(), load, difficulty)?)
    }
}
