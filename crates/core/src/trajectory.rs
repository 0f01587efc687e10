use std::ops::Index;

use crate::StateVector;

/// A state vector paired with the time it was recorded at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub time: f64,
    pub state: StateVector,
}

/// The ordered output of an integration: one [`Point`] per grid time.
///
/// Point `i` of a trajectory produced over a [`TimeGrid`](crate::TimeGrid)
/// carries grid time `i` exactly. Renderers typically plot one state
/// component against time at a time, see [`component`](Self::component).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trajectory {
    points: Vec<Point>,
}

impl Trajectory {
    /// Creates an empty trajectory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trajectory with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point.
    ///
    /// Callers are responsible for appending in time order.
    pub fn push(&mut self, time: f64, state: StateVector) {
        self.points.push(Point { time, state });
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the trajectory has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of state components, or `None` if empty.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.points.first().map(|point| point.state.len())
    }

    /// Returns the point at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns an iterator over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Returns an iterator over the recorded times.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.time)
    }

    /// Returns an iterator over the recorded states.
    pub fn states(&self) -> impl Iterator<Item = &StateVector> + '_ {
        self.points.iter().map(|point| &point.state)
    }

    /// Returns `(time, value)` pairs for one state component.
    ///
    /// Points whose state has no component at `index` are skipped.
    pub fn component(&self, index: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .filter_map(move |point| point.state.get(index).map(|value| (point.time, value)))
    }

    /// Consumes the trajectory and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Index<usize> for Trajectory {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Trajectory {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
