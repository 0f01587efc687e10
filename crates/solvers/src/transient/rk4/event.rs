use stride_core::StateVector;

/// Event emitted by the RK4 solver for each recorded point.
///
/// Step 0 is the initial state at the first grid time. Step `i` is the state
/// at grid time `i`, emitted right after it is appended to the trajectory.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The grid index of this point.
    pub step: usize,

    /// The grid time of this point.
    pub time: f64,

    /// The state at this point.
    pub state: &'a StateVector,
}
