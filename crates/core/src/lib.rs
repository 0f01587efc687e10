//! Core traits and types for Stride.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`StateVector`]: the values of every dynamical variable at one instant
//! - [`TimeGrid`]: the fixed, evenly spaced times a solution is evaluated at
//! - [`Trajectory`]: the ordered `(time, state)` output of an integration
//! - [`OdeSystem`]: a derivative function mapping `(state, t)` to `dstate/dt`
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! Ready-made systems live in [`systems`].

mod grid;
mod observer;
mod state;
mod system;
mod trajectory;

pub mod systems;

pub use grid::{GridError, MAX_POINTS, TimeGrid};
pub use observer::Observer;
pub use state::{DimensionMismatch, StateVector};
pub use system::OdeSystem;
pub use trajectory::{Point, Trajectory};
