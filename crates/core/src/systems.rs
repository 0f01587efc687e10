//! Ready-made ODE systems.
//!
//! Each system keeps its physical parameters as validated fields and
//! implements [`OdeSystem`](crate::OdeSystem). They double as reference
//! problems with known behavior for exercising solvers.
//!
//! - [`HarmonicOscillator`]: `x'' = -ω²x`, written as `[x, v]`
//! - [`ExponentialDecay`]: `x' = -kx`, componentwise
//! - [`DrivenPendulum`]: damped pendulum with a periodic drive

mod decay;
mod oscillator;
mod pendulum;

pub use decay::ExponentialDecay;
pub use oscillator::HarmonicOscillator;
pub use pendulum::{DrivenPendulum, PendulumParams};

use thiserror::Error;

/// Errors that can occur when validating system parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },

    #[error("{name} must be non-negative")]
    Negative { name: &'static str },
}

/// Checks that a parameter is finite.
fn finite(name: &'static str, value: f64) -> Result<f64, ParamsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamsError::NonFinite { name })
    }
}

/// Checks that a parameter is finite and non-negative.
fn non_negative(name: &'static str, value: f64) -> Result<f64, ParamsError> {
    let value = finite(name, value)?;
    if value < 0.0 {
        return Err(ParamsError::Negative { name });
    }
    Ok(value)
}
