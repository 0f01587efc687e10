use std::convert::Infallible;

/// A system of first-order ordinary differential equations.
///
/// An ODE system maps a state vector `L` and a time `t` to the derivative
/// `dL/dt`, one component per state variable. Solvers evaluate it several
/// times per step at perturbed states and times, so an implementation must
/// be a pure function of its arguments: physical parameters belong in the
/// implementing type, and nothing may change between calls.
///
/// The returned vector must have the same length as `state`. Solvers treat a
/// mismatch as a configuration bug and abort.
///
/// Closures of the form `Fn(&[f64], f64) -> Vec<f64>` implement this trait
/// and never fail:
///
/// ```
/// use stride_core::OdeSystem;
///
/// let oscillator = |state: &[f64], _t: f64| vec![state[1], -state[0]];
/// let derivative = oscillator.derivative(&[0.0, 1.0], 0.0).unwrap();
///
/// assert_eq!(derivative, vec![1.0, 0.0]);
/// ```
pub trait OdeSystem {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative of `state` at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be evaluated, for
    /// example because `state` has the wrong number of components.
    fn derivative(&self, state: &[f64], t: f64) -> Result<Vec<f64>, Self::Error>;
}

impl<F> OdeSystem for F
where
    F: Fn(&[f64], f64) -> Vec<f64>,
{
    type Error = Infallible;

    fn derivative(&self, state: &[f64], t: f64) -> Result<Vec<f64>, Self::Error> {
        Ok(self(state, t))
    }
}
