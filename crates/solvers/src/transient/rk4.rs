//! Classical fourth-order Runge-Kutta solver for ODE systems.
//!
//! # Algorithm
//!
//! The solver walks a [`TimeGrid`] with its fixed step `dt`. At each grid
//! time `t` it records the current state `L`, then advances it with four
//! derivative evaluations:
//!
//! ```text
//! k1 = dt · f(L, t)
//! k2 = dt · f(L + k1/2, t + dt/2)
//! k3 = dt · f(L + k2/2, t + dt/2)
//! k4 = dt · f(L + k3, t + dt)
//! L' = L + (k1 + 2·k2 + 2·k3 + k4) / 6
//! ```
//!
//! The trajectory therefore holds the state at the *start* of each interval,
//! one point per grid time. The local truncation error is `O(dt⁵)` and the
//! global error `O(dt⁴)`.
//!
//! # Errors
//!
//! Integration is all-or-nothing. An empty initial state, a derivative of the
//! wrong length, or a failing system aborts the run and no trajectory is
//! returned.
//!
//! # Observer Events
//!
//! [`solve`] emits one [`Event`] per recorded point, starting with the initial
//! state at step 0. Observers may return [`Action::StopEarly`], which takes
//! effect before the next step begins, never part-way through one.
//!
//! # Example
//!
//! ```
//! use stride_core::{StateVector, TimeGrid};
//! use stride_solvers::transient::rk4;
//!
//! let oscillator = |state: &[f64], _t: f64| vec![state[1], -state[0]];
//! let grid = TimeGrid::with_step(0.0, std::f64::consts::TAU, 0.01)?;
//! let initial = StateVector::from([0.0, 1.0]);
//!
//! let trajectory = rk4::integrate(&oscillator, &initial, &grid)?;
//!
//! assert_eq!(trajectory.len(), grid.len());
//! for point in &trajectory {
//!     assert!((point.state[0] - point.time.sin()).abs() < 1e-6);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use stride_core::{DimensionMismatch, Observer, OdeSystem, StateVector, TimeGrid, Trajectory};

const SIXTH: f64 = 1.0 / 6.0;

/// Integrates an ODE system across a time grid using RK4.
///
/// The observer receives an [`Event`] after each point is recorded and may
/// return [`Action::StopEarly`] to end the run at that point.
/// See the [module docs](self) for the algorithm.
///
/// # Errors
///
/// Returns an error if the initial state is empty, if the system fails, or
/// if the system returns a derivative whose length differs from the state's.
pub fn solve<S, Obs>(
    system: &S,
    initial: &StateVector,
    grid: &TimeGrid,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: OdeSystem,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if initial.is_empty() {
        return Err(Error::EmptyState);
    }

    let dt = grid.dt();
    let last = grid.len().saturating_sub(1);
    let mut trajectory = Trajectory::with_capacity(grid.len());
    let mut current = initial.clone();

    for (index, time) in grid.iter().enumerate() {
        trajectory.push(time, current);
        let state = &trajectory[index].state;

        let event = Event {
            step: index,
            time,
            state,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: index,
            });
        }

        // The update past the final grid time would never be recorded.
        if index == last {
            break;
        }
        current = step(system, state, time, dt)?;
    }

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps: last,
    })
}

/// Integrates an ODE system across a time grid using RK4 without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events and
/// returns only the trajectory, which has exactly one point per grid time.
///
/// # Errors
///
/// Returns an error if the initial state is empty, if the system fails, or
/// if the system returns a derivative whose length differs from the state's.
pub fn integrate<S: OdeSystem>(
    system: &S,
    initial: &StateVector,
    grid: &TimeGrid,
) -> Result<Trajectory, Error> {
    solve(system, initial, grid, ()).map(|solution| solution.trajectory)
}

/// Integrates an ODE system over `[t_min, t_max)` with step `dt`.
///
/// The grid is built with [`TimeGrid::with_step`].
///
/// # Errors
///
/// Returns [`Error::InvalidGrid`] before any stepping if the grid cannot be
/// built, and otherwise fails as [`integrate`] does.
pub fn integrate_range<S: OdeSystem>(
    system: &S,
    initial: &StateVector,
    t_min: f64,
    t_max: f64,
    dt: f64,
) -> Result<Trajectory, Error> {
    let grid = TimeGrid::with_step(t_min, t_max, dt)?;
    integrate(system, initial, &grid)
}

/// Advances `state` from `t` to `t + dt` with a single RK4 step.
///
/// # Errors
///
/// Returns an error if the system fails or returns a derivative whose length
/// differs from the state's.
pub fn step<S: OdeSystem>(
    system: &S,
    state: &StateVector,
    t: f64,
    dt: f64,
) -> Result<StateVector, Error> {
    let half = 0.5 * dt;

    let k1 = stage(system, state, t, dt)?;
    let k2 = stage(system, &nudge(state, &k1, 0.5), t + half, dt)?;
    let k3 = stage(system, &nudge(state, &k2, 0.5), t + half, dt)?;
    let k4 = stage(system, &nudge(state, &k3, 1.0), t + dt, dt)?;

    Ok((0..state.len())
        .map(|i| state[i] + SIXTH * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]))
        .collect())
}

/// Evaluates one stage vector, `dt · f(state, t)`.
fn stage<S: OdeSystem>(
    system: &S,
    state: &StateVector,
    t: f64,
    dt: f64,
) -> Result<StateVector, Error> {
    let derivative = system
        .derivative(state.as_slice(), t)
        .map_err(Error::system)?;

    DimensionMismatch::check(state.len(), derivative.len())
        .map_err(|mismatch| Error::dimension(mismatch, t))?;

    Ok(derivative.into_iter().map(|d| dt * d).collect())
}

/// Returns `state + scale · k`, the input to the next stage.
///
/// `k` comes from [`stage`], which has already checked its length against
/// `state`.
fn nudge(state: &StateVector, k: &StateVector, scale: f64) -> StateVector {
    state
        .iter()
        .zip(k)
        .map(|(x, dx)| x + scale * dx)
        .collect()
}
