//! Numerical solvers for Stride.
//!
//! # Modules
//!
//! - [`transient`]: fixed-step time integration of ODE systems

pub mod transient;
