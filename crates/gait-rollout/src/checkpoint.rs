//! Policy parameter storage keyed by checkpoint name and iteration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("checkpoint '{name}' iteration {iteration} not found at {path}")]
    NotFound {
        name: String,
        iteration: u64,
        path: PathBuf,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed checkpoint: {0}")]
    Malformed(String),
}

/// Affine policy parameters as persisted by a training run.
///
/// `weights` is row-major, one row per action dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyParams {
    /// Weight matrix, `action_dim` rows of `observation_dim` columns.
    pub weights: Vec<Vec<f64>>,
    /// Bias vector, length `action_dim`.
    pub bias: Vec<f64>,
    /// Uniform exploration noise scale.
    #[serde(default)]
    pub noise_scale: f64,
}

impl PolicyParams {
    /// Number of action dimensions.
    pub fn action_dim(&self) -> usize {
        self.weights.len()
    }

    /// Number of observation dimensions.
    pub fn observation_dim(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    /// Check internal consistency of the parameter shapes.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.weights.is_empty() {
            return Err(CheckpointError::Malformed("empty weight matrix".into()));
        }
        let cols = self.weights[0].len();
        if cols == 0 {
            return Err(CheckpointError::Malformed("zero-width weight row".into()));
        }
        for (i, row) in self.weights.iter().enumerate() {
            if row.len() != cols {
                return Err(CheckpointError::Malformed(format!(
                    "weight row {i} has {} columns, expected {cols}",
                    row.len()
                )));
            }
        }
        if self.bias.len() != self.weights.len() {
            return Err(CheckpointError::Malformed(format!(
                "bias length {} does not match {} weight rows",
                self.bias.len(),
                self.weights.len()
            )));
        }
        Ok(())
    }
}

/// Loads and saves policy parameters under
/// `<root>/<name>/policy_<iteration>.json`.
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    root: PathBuf,
}

impl CheckpointStore {
    /// Store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a checkpoint would be stored at.
    pub fn path_for(&self, name: &str, iteration: u64) -> PathBuf {
        self.root.join(name).join(format!("policy_{iteration}.json"))
    }

    /// Load and validate the parameters for one checkpoint iteration.
    pub fn load(&self, name: &str, iteration: u64) -> Result<PolicyParams, CheckpointError> {
        let path = self.path_for(name, iteration);
        if !path.is_file() {
            return Err(CheckpointError::NotFound {
                name: name.to_string(),
                iteration,
                path,
            });
        }
        let text = fs::read_to_string(&path)?;
        let params: PolicyParams = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    /// Persist parameters for one checkpoint iteration.
    pub fn save(
        &self,
        name: &str,
        iteration: u64,
        params: &PolicyParams,
    ) -> Result<PathBuf, CheckpointError> {
        params.validate()?;
        let path = self.path_for(name, iteration);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(params)?)?;
        Ok(path)
    }
}
