/// Receives solver events and optionally returns a control action.
///
/// Solvers call [`observe`](Observer::observe) at well-defined points (for
/// example, after each recorded step) and act on the returned action, if any.
/// The event and action types are defined by each solver.
///
/// Two implementations are provided:
///
/// - `()` ignores every event, for unobserved solves.
/// - Any `FnMut(&E) -> Option<A>` closure, for quick inline observers.
pub trait Observer<E, A> {
    /// Handles an event and returns an action for the solver, if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<O: Observer<u32, Action>>(mut observer: O, events: &[u32]) -> Option<u32> {
        events
            .iter()
            .find(|event| observer.observe(event) == Some(Action::Stop))
            .copied()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_observer_sees_every_event_until_it_acts() {
        let mut seen = Vec::new();
        let stopped_at = drive(
            |event: &u32| {
                seen.push(*event);
                (*event == 2).then_some(Action::Stop)
            },
            &[1, 2, 3],
        );

        assert_eq!(stopped_at, Some(2));
        assert_eq!(seen, vec![1, 2]);
    }
}
