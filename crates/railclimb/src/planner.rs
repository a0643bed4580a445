//! Config-driven entry points.

use std::path::Path;

use railclimb_config::{ClimbConfig, ConfigError};
use railclimb_core::RailclimbError;
use railclimb_solver::{compute_climb, ClimbPlan};
use thiserror::Error;
use tracing::info;

/// Error from loading a request or planning it.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Climb(#[from] RailclimbError),
}

/// Builds the configured train and plans its climb.
///
/// `Ok(None)` means the train cannot be brought up the grade.
pub fn plan(config: &ClimbConfig) -> Result<Option<ClimbPlan>, PlanError> {
    config.validate()?;
    let train = config.build_train()?;
    info!(
        event = "roster_built",
        entries = config.train.len(),
        units = train.len(),
        difficulty = ?config.difficulty,
    );
    Ok(compute_climb(
        &train,
        config.grade,
        config.power_ratio,
        config.collect_net,
    )?)
}

/// Loads a request from a TOML or YAML file, chosen by extension, and
/// plans it.
pub fn plan_file(path: impl AsRef<Path>) -> Result<Option<ClimbPlan>, PlanError> {
    let path = path.as_ref();
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => ClimbConfig::from_yaml_file(path)?,
        _ => ClimbConfig::from_toml_file(path)?,
    };
    plan(&config)
}
