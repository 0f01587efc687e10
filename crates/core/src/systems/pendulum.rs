use std::f64::consts::TAU;

use crate::{DimensionMismatch, OdeSystem};

use super::{ParamsError, finite, non_negative};

/// Parameters of a [`DrivenPendulum`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumParams {
    /// Angular frequency of the drive, `ω`.
    pub drive_frequency: f64,

    /// Natural angular frequency of the pendulum, `ω₀`.
    pub natural_frequency: f64,

    /// Damping coefficient, `β`.
    pub damping: f64,

    /// Drive strength relative to gravity, `γ`.
    pub drive_strength: f64,
}

impl Default for PendulumParams {
    /// A drive at 1 Hz with `ω₀ = 1.5ω`, `β = ω₀/4`, and `γ = 1.073`.
    ///
    /// With this drive strength the motion settles into a period-doubled
    /// oscillation.
    fn default() -> Self {
        let drive_frequency = TAU;
        let natural_frequency = 1.5 * drive_frequency;
        Self {
            drive_frequency,
            natural_frequency,
            damping: natural_frequency * 0.25,
            drive_strength: 1.073,
        }
    }
}

/// A damped pendulum driven by a periodic torque.
///
/// The state is `[θ, θ']` and the equation of motion is
///
/// ```text
/// θ'' = -2βθ' - ω₀² sin θ + γω₀² cos ωt
/// ```
///
/// Unlike the other provided systems, the derivative depends on time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrivenPendulum {
    params: PendulumParams,
}

impl DrivenPendulum {
    /// Creates a pendulum with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is not finite, or if the damping or
    /// either frequency is negative.
    pub fn new(params: PendulumParams) -> Result<Self, ParamsError> {
        non_negative("drive_frequency", params.drive_frequency)?;
        non_negative("natural_frequency", params.natural_frequency)?;
        non_negative("damping", params.damping)?;
        finite("drive_strength", params.drive_strength)?;

        Ok(Self { params })
    }

    /// Returns the parameters.
    #[must_use]
    pub fn params(&self) -> &PendulumParams {
        &self.params
    }
}

impl OdeSystem for DrivenPendulum {
    type Error = DimensionMismatch;

    fn derivative(&self, state: &[f64], t: f64) -> Result<Vec<f64>, Self::Error> {
        let &[theta, omega] = state else {
            return Err(DimensionMismatch {
                expected: 2,
                actual: state.len(),
            });
        };

        let PendulumParams {
            drive_frequency,
            natural_frequency,
            damping,
            drive_strength,
        } = self.params;
        let w0_sq = natural_frequency.powi(2);

        Ok(vec![
            omega,
            -2.0 * damping * omega - w0_sq * theta.sin()
                + drive_strength * w0_sq * (drive_frequency * t).cos(),
        ])
    }
}
