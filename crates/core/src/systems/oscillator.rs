use crate::{DimensionMismatch, OdeSystem};

use super::{ParamsError, non_negative};

/// An undamped harmonic oscillator with angular frequency `ω`.
///
/// The state is `[x, v]` and the derivative is `[v, -ω²x]`. Starting from
/// `[0, 1]` with `ω = 1`, the exact solution is `x = sin t`, `v = cos t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicOscillator {
    omega: f64,
}

impl HarmonicOscillator {
    /// Creates an oscillator with angular frequency `omega`.
    ///
    /// # Errors
    ///
    /// Returns an error if `omega` is negative or not finite.
    pub fn new(omega: f64) -> Result<Self, ParamsError> {
        Ok(Self {
            omega: non_negative("omega", omega)?,
        })
    }

    /// Returns the angular frequency.
    #[must_use]
    pub fn omega(&self) -> f64 {
        self.omega
    }
}

impl Default for HarmonicOscillator {
    fn default() -> Self {
        Self { omega: 1.0 }
    }
}

impl OdeSystem for HarmonicOscillator {
    type Error = DimensionMismatch;

    fn derivative(&self, state: &[f64], _t: f64) -> Result<Vec<f64>, Self::Error> {
        let &[x, v] = state else {
            return Err(DimensionMismatch {
                expected: 2,
                actual: state.len(),
            });
        };

        Ok(vec![v, -self.omega.powi(2) * x])
    }
}
