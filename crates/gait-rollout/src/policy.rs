//! Policies mapping observations to actions.

use crate::checkpoint::{CheckpointError, PolicyParams};
use nalgebra::{DMatrix, DVector};
use rand::Rng;
use rand::rngs::StdRng;

/// Maps an observation and a fresh random draw to an action.
pub trait Policy {
    /// Sample an action for the current observation.
    fn act(&self, observation: &DVector<f64>, rng: &mut StdRng) -> DVector<f64>;

    /// Dimension of the actions produced.
    fn action_dim(&self) -> usize;
}

/// Applies no actuation; the environment runs open loop.
#[derive(Debug, Clone)]
pub struct ZeroPolicy {
    dim: usize,
}

impl ZeroPolicy {
    /// Zero policy with `dim` action dimensions.
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Policy for ZeroPolicy {
    fn act(&self, _observation: &DVector<f64>, _rng: &mut StdRng) -> DVector<f64> {
        DVector::zeros(self.dim)
    }

    fn action_dim(&self) -> usize {
        self.dim
    }
}

/// Affine policy reconstructed from checkpoint parameters.
///
/// With a nonzero noise scale, each action component gets an independent
/// uniform draw in `[-noise_scale, noise_scale]` added per step.
#[derive(Debug, Clone)]
pub struct LinearPolicy {
    weights: DMatrix<f64>,
    bias: DVector<f64>,
    noise_scale: f64,
}

impl LinearPolicy {
    /// Deterministic affine policy.
    pub fn new(weights: DMatrix<f64>, bias: DVector<f64>) -> Self {
        Self {
            weights,
            bias,
            noise_scale: 0.0,
        }
    }

    /// Add uniform exploration noise of the given scale.
    pub fn with_noise(mut self, noise_scale: f64) -> Self {
        self.noise_scale = noise_scale;
        self
    }

    /// Reconstruct a policy from persisted parameters.
    pub fn from_params(params: &PolicyParams) -> Result<Self, CheckpointError> {
        params.validate()?;
        let rows = params.action_dim();
        let cols = params.observation_dim();
        let weights = DMatrix::from_row_iterator(
            rows,
            cols,
            params.weights.iter().flatten().copied(),
        );
        let bias = DVector::from_column_slice(&params.bias);
        Ok(Self {
            weights,
            bias,
            noise_scale: params.noise_scale,
        })
    }

    /// Dimension of observations this policy expects.
    pub fn observation_dim(&self) -> usize {
        self.weights.ncols()
    }
}

impl Policy for LinearPolicy {
    fn act(&self, observation: &DVector<f64>, rng: &mut StdRng) -> DVector<f64> {
        let mut action = &self.weights * observation + &self.bias;
        if self.noise_scale > 0.0 {
            for value in action.iter_mut() {
                *value += self.noise_scale * (rng.r#gen::<f64>() * 2.0 - 1.0);
            }
        }
        action
    }

    fn action_dim(&self) -> usize {
        self.weights.nrows()
    }
}
