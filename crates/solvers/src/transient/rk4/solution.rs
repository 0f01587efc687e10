use stride_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Recorded a point for every grid time.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an RK4 integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// One point per visited grid time, in grid order.
    pub trajectory: Trajectory,

    /// Number of integration steps taken.
    pub steps: usize,
}
