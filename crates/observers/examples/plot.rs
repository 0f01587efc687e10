//! Interactive visualizations of Stride integrations.
//!
//! Each mode integrates a small system with RK4 and opens a plot window.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- pendulum
//! cargo run --example plot --features plot -- oscillator
//! cargo run --example plot --features plot -- oscillator 0.8
//! ```
//!
//! # Modes
//!
//! - **pendulum**: A damped pendulum driven at 1 Hz, from `θ = 0, θ' = 1`
//!   over `[0, 10)` with `dt = 0.01`. Angle and angular velocity are drawn in
//!   stacked panels. The motion settles into a period-doubled swing.
//!
//! - **oscillator [dt]**: The undamped oscillator `x'' = -x` over five
//!   periods, overlaid on the exact `cos t`. RK4 stays on the curve at the
//!   default `dt = 0.1`; try `0.8` or `1.2` to watch amplitude and phase drift.

use std::{error::Error, f64::consts::TAU};

use stride_core::{
    StateVector, TimeGrid,
    systems::{DrivenPendulum, HarmonicOscillator},
};
use stride_observers::{PlotObserver, ShowConfig};
use stride_solvers::transient::rk4;

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "pendulum".into());
    match mode.as_str() {
        "pendulum" => pendulum(),
        "oscillator" => {
            let dt = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid step size, expected a number such as 0.1");
                    std::process::exit(1);
                })
                .unwrap_or(0.1);
            oscillator(dt)
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [pendulum|oscillator [dt]]");
            std::process::exit(1);
        }
    }
}

/// Integrate the driven pendulum and plot `θ` and `θ'` against time.
fn pendulum() -> Result<(), Box<dyn Error>> {
    let pendulum = DrivenPendulum::default();
    let initial = StateVector::from([0.0, 1.0]);

    let trajectory = rk4::integrate_range(&pendulum, &initial, 0.0, 10.0, 0.01)?;

    PlotObserver::<2>::from_trajectory(&trajectory, ["θ", "θ'"]).show(
        ShowConfig::new()
            .title("Driven damped pendulum (RK4, dt = 0.01)")
            .stacked(),
    )?;

    Ok(())
}

/// Integrate `x'' = -x` from `x = 1, x' = 0` and compare against `cos t`.
fn oscillator(dt: f64) -> Result<(), Box<dyn Error>> {
    let grid = TimeGrid::with_step(0.0, 5.0 * TAU, dt)?;
    let initial = StateVector::from([1.0, 0.0]);

    let mut obs = PlotObserver::<2>::new(["RK4", "cos t"]);
    rk4::solve(
        &HarmonicOscillator::default(),
        &initial,
        &grid,
        |event: &rk4::Event<'_>| {
            obs.record(event.time, [event.state.get(0), Some(event.time.cos())]);
            None
        },
    )?;

    obs.show(
        ShowConfig::new()
            .title(format!("Harmonic oscillator (dt = {dt}): RK4 vs. exact"))
            .legend(),
    )?;

    Ok(())
}
