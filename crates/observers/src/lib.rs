//! Reusable observers for Stride integrations.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers in the Stride ecosystem.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasTime`], [`HasState`], [`CanStopEarly`])
//! - [`StopOnNonFinite`]: stops an integration once the state blows up
//!
//! # Features
//!
//! - `plot`: Enables [`PlotObserver`] for visualizing trajectories via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: stride_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod guard;

pub use guard::StopOnNonFinite;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
