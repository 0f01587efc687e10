//! Solvers that integrate ODE systems forward in time.
//!
//! An [`OdeSystem`] maps a state and a time to the state's derivative.
//! Solvers in this module march that state across a [`TimeGrid`] and return
//! the resulting [`Trajectory`].
//!
//! # Solvers
//!
//! - [`rk4`]: classical fourth-order Runge-Kutta with a fixed step
//!
//! [`OdeSystem`]: stride_core::OdeSystem
//! [`TimeGrid`]: stride_core::TimeGrid
//! [`Trajectory`]: stride_core::Trajectory

pub mod rk4;
