//! Error types for gait analysis.

use gait_model::{ConfigError, Limb, SteadyStateWindow};
use thiserror::Error;

/// Failure modes of phase extraction and cost scoring.
///
/// These are never caught and defaulted internally; a substituted dummy
/// phase would corrupt whatever optimization consumes the cost. The caller
/// decides whether a failed evaluation becomes a penalty or an abort.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaitError {
    /// Too few reference-limb onsets to bound any stride interval.
    #[error(
        "insufficient stride data: {onsets} {reference} onset(s) in steady-state window {window}"
    )]
    InsufficientStrideData {
        reference: Limb,
        onsets: usize,
        window: SteadyStateWindow,
    },

    /// A tracked limb never re-contacts the ground after a reference onset.
    #[error("no {limb} contact onset at or after step {after} before window {window} ends")]
    MissingContactEvent {
        limb: Limb,
        after: usize,
        window: SteadyStateWindow,
    },

    /// Malformed limb or target configuration.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, GaitError>;
