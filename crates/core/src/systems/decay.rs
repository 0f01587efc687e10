use std::convert::Infallible;

use crate::OdeSystem;

use super::{ParamsError, finite};

/// Exponential decay `x' = -kx`, applied to every component independently.
///
/// Works with any number of components. From `x(0) = x₀` the exact solution
/// is `x(t) = x₀·e^(-kt)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    rate: f64,
}

impl ExponentialDecay {
    /// Creates a decay with rate constant `rate`.
    ///
    /// A negative rate gives exponential growth.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is not finite.
    pub fn new(rate: f64) -> Result<Self, ParamsError> {
        Ok(Self {
            rate: finite("rate", rate)?,
        })
    }

    /// Returns the rate constant.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the exact solution at time `t` from `initial` at `t = 0`.
    #[must_use]
    pub fn exact(&self, initial: f64, t: f64) -> f64 {
        initial * (-self.rate * t).exp()
    }
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self { rate: 1.0 }
    }
}

impl OdeSystem for ExponentialDecay {
    type Error = Infallible;

    fn derivative(&self, state: &[f64], _t: f64) -> Result<Vec<f64>, Self::Error> {
        Ok(state.iter().map(|x| -self.rate * x).collect())
    }
}
