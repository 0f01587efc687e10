use stride_core::Observer;

use crate::traits::{CanStopEarly, HasState, HasTime};

/// Stops an integration at the first point whose state is not finite.
///
/// A fixed-step solver keeps stepping after the state overflows or turns
/// into NaN, which wastes work and fills the trajectory with garbage. With
/// this observer the run ends at the first bad point, which is kept so the
/// caller can see where it happened via [`tripped_at`](Self::tripped_at).
#[derive(Debug, Clone, Copy, Default)]
pub struct StopOnNonFinite {
    tripped_at: Option<f64>,
}

impl StopOnNonFinite {
    /// Creates a guard that has not tripped.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the time of the first non-finite state, if one was seen.
    #[must_use]
    pub fn tripped_at(&self) -> Option<f64> {
        self.tripped_at
    }
}

impl<E, A> Observer<E, A> for StopOnNonFinite
where
    E: HasTime + HasState,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.state().iter().all(|x| x.is_finite()) {
            return None;
        }
        self.tripped_at.get_or_insert(event.time());
        Some(A::stop_early())
    }
}

/// Allows `&mut StopOnNonFinite` to be passed to solvers that take an
/// observer by value, so the guard can be inspected after the solve.
impl<E, A> Observer<E, A> for &mut StopOnNonFinite
where
    E: HasTime + HasState,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
