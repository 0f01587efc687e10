use std::ops::Index;

use thiserror::Error;

/// Relative tolerance on spacing for grids built from explicit times.
const SPACING_REL_TOL: f64 = 1e-6;

/// Largest number of points a generated grid may hold.
pub const MAX_POINTS: usize = 1 << 27;

/// Errors that can occur when constructing a [`TimeGrid`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid bounds and step must be finite")]
    NonFinite,

    #[error("t_max must be greater than t_min")]
    EmptyInterval,

    #[error("step size must be finite and positive")]
    InvalidStep,

    #[error("step count must be positive")]
    ZeroSteps,

    #[error("grid would need more than {max} points")]
    TooManyPoints { max: usize },

    #[error("at least two times are needed to derive a step size")]
    TooFewPoints,

    #[error("times must be strictly increasing (violated at index {index})")]
    NotIncreasing { index: usize },

    #[error("times must be evenly spaced (violated at index {index})")]
    UnevenSpacing { index: usize },
}

/// The fixed, evenly spaced times at which a solution is evaluated.
///
/// A grid covers the half-open interval `[t_min, t_end)` with `len` points
/// `t_i = t_min + i * dt`, so that `dt == (t_end - t_min) / len`. The final
/// time `t_end` is never a grid point.
///
/// Grids can only be built through the validating constructors below. This
/// keeps the step size used by fixed-step solvers consistent with the points
/// the solution is reported at.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
    dt: f64,
}

impl TimeGrid {
    /// Creates a grid of `steps` points on `[t_min, t_max)`.
    ///
    /// The step size is `(t_max - t_min) / steps`.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound or the resulting step is not finite, if
    /// `t_max <= t_min`, or if `steps` is zero or above [`MAX_POINTS`].
    pub fn new(t_min: f64, t_max: f64, steps: usize) -> Result<Self, GridError> {
        check_interval(t_min, t_max)?;
        if steps == 0 {
            return Err(GridError::ZeroSteps);
        }

        #[allow(clippy::cast_precision_loss)]
        let dt = (t_max - t_min) / steps as f64;
        Self::generate(t_min, dt, steps)
    }

    /// Creates a grid on `[t_min, t_max)` with a fixed step size.
    ///
    /// The grid holds `ceil((t_max - t_min) / dt)` points, the same count a
    /// half-open range with this step would produce. When the interval is not
    /// a whole multiple of `dt`, the grid's end [`t_end`](Self::t_end) lies
    /// past `t_max`, but no grid point does.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, if `t_max <= t_min`, if
    /// `dt` is not finite and positive, or if the grid would hold more than
    /// [`MAX_POINTS`] points.
    pub fn with_step(t_min: f64, t_max: f64, dt: f64) -> Result<Self, GridError> {
        check_interval(t_min, t_max)?;
        if !dt.is_finite() || dt <= 0.0 {
            return Err(GridError::InvalidStep);
        }

        let span = ((t_max - t_min) / dt).ceil();
        if !span.is_finite() {
            return Err(GridError::InvalidStep);
        }
        #[allow(clippy::cast_precision_loss)]
        let limit = MAX_POINTS as f64;
        if span > limit {
            return Err(GridError::TooManyPoints { max: MAX_POINTS });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mut steps = span as usize;

        // Rounding in the division can push the count one past the interval.
        while steps > 1 && grid_point(t_min, dt, steps - 1) >= t_max {
            steps -= 1;
        }

        Self::generate(t_min, dt, steps)
    }

    /// Creates a grid from explicit times.
    ///
    /// The times must be finite, strictly increasing, and evenly spaced to
    /// within a small relative tolerance. The step size is their mean spacing.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two times are given or if the times are
    /// not finite, not strictly increasing, or not evenly spaced.
    pub fn from_times(times: Vec<f64>) -> Result<Self, GridError> {
        if times.len() < 2 {
            return Err(GridError::TooFewPoints);
        }
        if times.iter().any(|t| !t.is_finite()) {
            return Err(GridError::NonFinite);
        }
        if let Some(index) = (1..times.len()).find(|&i| times[i] <= times[i - 1]) {
            return Err(GridError::NotIncreasing { index });
        }

        let first = times[0];
        let last = times[times.len() - 1];
        #[allow(clippy::cast_precision_loss)]
        let dt = (last - first) / (times.len() - 1) as f64;
        if !dt.is_finite() {
            return Err(GridError::NonFinite);
        }

        let tol = SPACING_REL_TOL * dt;
        let uneven = |i: &usize| ((times[*i] - times[*i - 1]) - dt).abs() > tol;
        if let Some(index) = (1..times.len()).find(uneven) {
            return Err(GridError::UnevenSpacing { index });
        }

        Ok(Self { times, dt })
    }

    fn generate(t_min: f64, dt: f64, steps: usize) -> Result<Self, GridError> {
        if steps == 0 {
            return Err(GridError::ZeroSteps);
        }
        if steps > MAX_POINTS {
            return Err(GridError::TooManyPoints { max: MAX_POINTS });
        }
        // A span too wide for f64 overflows the step even with finite bounds.
        if !dt.is_finite() {
            return Err(GridError::NonFinite);
        }

        let times: Vec<f64> = (0..steps).map(|i| grid_point(t_min, dt, i)).collect();

        // A step too small to resolve at this magnitude collapses neighbors.
        if let Some(index) = (1..times.len()).find(|&i| times[i] <= times[i - 1]) {
            return Err(GridError::NotIncreasing { index });
        }
        if times.iter().any(|t| !t.is_finite()) {
            return Err(GridError::NonFinite);
        }

        Ok(Self { times, dt })
    }

    /// Returns the number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the grid has no points.
    ///
    /// Validated grids always have at least one point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the step size between consecutive points.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the first grid point.
    #[must_use]
    pub fn t_min(&self) -> f64 {
        self.times[0]
    }

    /// Returns the exclusive end of the grid, `t_min + len * dt`.
    #[must_use]
    pub fn t_end(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let len = self.times.len() as f64;
        self.t_min() + len * self.dt
    }

    /// Returns the grid point at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.times.get(index).copied()
    }

    /// Returns the grid points as a slice.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns an iterator over the grid points.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.times.iter().copied()
    }
}

impl Index<usize> for TimeGrid {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.times[index]
    }
}

impl<'a> IntoIterator for &'a TimeGrid {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[allow(clippy::cast_precision_loss)]
fn grid_point(t_min: f64, dt: f64, index: usize) -> f64 {
    t_min + index as f64 * dt
}

fn check_interval(t_min: f64, t_max: f64) -> Result<(), GridError> {
    if !t_min.is_finite() || !t_max.is_finite() {
        return Err(GridError::NonFinite);
    }
    if t_max <= t_min {
        return Err(GridError::EmptyInterval);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn new_divides_interval_into_steps() {
        let grid = TimeGrid::new(0.0, 1.0, 4).expect("valid grid");

        assert_eq!(grid.len(), 4);
        assert_eq!(grid.times(), &[0.0, 0.25, 0.5, 0.75]);
        assert_relative_eq!(grid.dt(), 0.25);
        assert_relative_eq!(grid.t_end(), 1.0);
    }

    #[test]
    fn with_step_excludes_t_max() {
        let grid = TimeGrid::with_step(0.0, 10.0, 0.01).expect("valid grid");

        assert_eq!(grid.len(), 1000);
        assert_relative_eq!(grid.t_min(), 0.0);
        assert_relative_eq!(grid[999], 9.99, epsilon = 1e-12);
        assert!(grid.iter().all(|t| t < 10.0));
    }

    #[test]
    fn with_step_rounds_partial_interval_up() {
        let grid = TimeGrid::with_step(0.0, 1.0, 0.3).expect("valid grid");

        // 0.0, 0.3, 0.6, 0.9
        assert_eq!(grid.len(), 4);
        assert_relative_eq!(grid.dt(), 0.3);
        assert_relative_eq!(grid.t_end(), 1.2, epsilon = 1e-12);
    }

    #[test]
    fn step_matches_bounds_over_length() {
        let grid = TimeGrid::with_step(-1.0, 2.0, 0.125).expect("valid grid");

        #[allow(clippy::cast_precision_loss)]
        let derived = (grid.t_end() - grid.t_min()) / grid.len() as f64;
        assert_relative_eq!(derived, grid.dt());
    }

    #[test]
    fn single_step_grid_has_one_point() {
        let grid = TimeGrid::new(2.0, 3.0, 1).expect("valid grid");

        assert_eq!(grid.times(), &[2.0]);
        assert!(!grid.is_empty());
    }

    #[test]
    fn rejects_empty_interval() {
        assert_eq!(TimeGrid::new(1.0, 1.0, 10), Err(GridError::EmptyInterval));
        assert_eq!(
            TimeGrid::with_step(1.0, 0.0, 0.1),
            Err(GridError::EmptyInterval)
        );
    }

    #[test]
    fn rejects_zero_steps() {
        assert_eq!(TimeGrid::new(0.0, 1.0, 0), Err(GridError::ZeroSteps));
    }

    #[test]
    fn rejects_bad_step_size() {
        assert_eq!(
            TimeGrid::with_step(0.0, 1.0, 0.0),
            Err(GridError::InvalidStep)
        );
        assert_eq!(
            TimeGrid::with_step(0.0, 1.0, -0.1),
            Err(GridError::InvalidStep)
        );
        assert_eq!(
            TimeGrid::with_step(0.0, 1.0, f64::NAN),
            Err(GridError::InvalidStep)
        );
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert_eq!(
            TimeGrid::new(0.0, f64::INFINITY, 10),
            Err(GridError::NonFinite)
        );
        assert_eq!(
            TimeGrid::with_step(f64::NAN, 1.0, 0.1),
            Err(GridError::NonFinite)
        );
    }

    #[test]
    fn rejects_span_too_wide_for_f64() {
        assert_eq!(TimeGrid::new(-1e308, 1e308, 2), Err(GridError::NonFinite));
        assert_eq!(TimeGrid::new(-1e308, 1e308, 1), Err(GridError::NonFinite));
        assert_eq!(
            TimeGrid::with_step(-1e308, 1e308, 1e308),
            Err(GridError::InvalidStep)
        );
    }

    #[test]
    fn rejects_grids_past_point_limit() {
        let too_many = Err(GridError::TooManyPoints { max: MAX_POINTS });

        assert_eq!(TimeGrid::with_step(0.0, 1e20, 1.0), too_many);
        assert_eq!(TimeGrid::new(0.0, 1.0, usize::MAX), too_many);
        assert_eq!(TimeGrid::new(0.0, 1.0, MAX_POINTS + 1), too_many);
    }

    #[test]
    fn from_times_derives_step() {
        let grid = TimeGrid::from_times(vec![1.0, 1.5, 2.0, 2.5]).expect("valid grid");

        assert_eq!(grid.len(), 4);
        assert_relative_eq!(grid.dt(), 0.5);
        assert_relative_eq!(grid.t_end(), 3.0);
    }

    #[test]
    fn from_times_accepts_rounding_noise() {
        let times: Vec<f64> = (0..100_i32).map(|i| f64::from(i) * 0.1).collect();

        let grid = TimeGrid::from_times(times.clone()).expect("valid grid");

        assert_eq!(grid.times(), times.as_slice());
        assert_relative_eq!(grid.dt(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn from_times_rejects_short_input() {
        assert_eq!(TimeGrid::from_times(vec![]), Err(GridError::TooFewPoints));
        assert_eq!(
            TimeGrid::from_times(vec![0.0]),
            Err(GridError::TooFewPoints)
        );
    }

    #[test]
    fn from_times_rejects_non_monotonic_input() {
        assert_eq!(
            TimeGrid::from_times(vec![0.0, 2.0, 1.0]),
            Err(GridError::NotIncreasing { index: 2 })
        );
        assert_eq!(
            TimeGrid::from_times(vec![0.0, 0.0, 1.0]),
            Err(GridError::NotIncreasing { index: 1 })
        );
    }

    #[test]
    fn from_times_rejects_uneven_spacing() {
        assert_eq!(
            TimeGrid::from_times(vec![0.0, 1.0, 3.0, 4.0]),
            Err(GridError::UnevenSpacing { index: 1 })
        );
    }

    #[test]
    fn from_times_rejects_non_finite_input() {
        assert_eq!(
            TimeGrid::from_times(vec![0.0, f64::NAN, 2.0]),
            Err(GridError::NonFinite)
        );
        assert_eq!(
            TimeGrid::from_times(vec![-1e308, 0.0, 1e308]),
            Err(GridError::NonFinite)
        );
    }
}
