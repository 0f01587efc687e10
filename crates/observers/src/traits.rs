//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasTime`]: events that carry the time of a recorded point
//! - [`HasState`]: events that carry the state of a recorded point
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use stride_core::Observer;
//! use stride_observers::traits::{CanStopEarly, HasTime};
//!
//! struct Until {
//!     t_stop: f64,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Until {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.t_stop).then(A::stop_early)
//!     }
//! }
//! ```

use stride_solvers::transient::rk4;

/// An event that carries the time of a recorded point.
pub trait HasTime {
    /// Returns the time for this event.
    fn time(&self) -> f64;
}

/// An event that carries the state of a recorded point.
pub trait HasState {
    /// Returns the state components for this event.
    fn state(&self) -> &[f64];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- rk4::Event ---

impl HasTime for rk4::Event<'_> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl HasState for rk4::Event<'_> {
    fn state(&self) -> &[f64] {
        self.state.as_slice()
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for rk4::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
