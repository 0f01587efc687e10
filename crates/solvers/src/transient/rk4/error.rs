use std::error::Error as StdError;

use stride_core::{DimensionMismatch, GridError};

/// Errors that can occur during RK4 integration.
///
/// Every variant aborts the run; no partial trajectory is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid time grid: {0}")]
    InvalidGrid(#[from] GridError),

    #[error("initial state has no components")]
    EmptyState,

    #[error("derivative at t = {time} has {actual} components, expected {expected}")]
    DimensionMismatch {
        time: f64,
        expected: usize,
        actual: usize,
    },

    #[error("system error: {0}")]
    System(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn system<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::System(Box::new(err))
    }

    pub(crate) fn dimension(mismatch: DimensionMismatch, time: f64) -> Self {
        Self::DimensionMismatch {
            time,
            expected: mismatch.expected,
            actual: mismatch.actual,
        }
    }
}
