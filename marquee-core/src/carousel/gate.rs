//! Two-state latch guarding page transitions.
//!
//! Completion is an external event (the front end reports that its exit
//! animation finished); the gate never assumes a duration.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Idle,
    Transitioning,
}

/// Answer to [`TransitionGate::request_advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceDecision {
    Proceed,
    Refused,
}

impl AdvanceDecision {
    pub fn is_proceed(self) -> bool {
        matches!(self, AdvanceDecision::Proceed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransitionGate {
    state: GateState,
}

impl TransitionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        self.state == GateState::Transitioning
    }

    /// Check-and-set in one call: at most one transition is in flight.
    pub fn request_advance(&mut self) -> AdvanceDecision {
        match self.state {
            GateState::Transitioning => {
                tracing::debug!("advance dropped: transition in flight");
                AdvanceDecision::Refused
            }
            GateState::Idle => {
                self.state = GateState::Transitioning;
                AdvanceDecision::Proceed
            }
        }
    }

    pub fn on_transition_complete(&mut self) {
        if self.state == GateState::Idle {
            tracing::debug!("transition completion received while idle");
        }
        self.state = GateState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_request_is_refused_until_completion() {
        let mut gate = TransitionGate::new();
        assert_eq!(gate.state(), GateState::Idle);

        assert_eq!(gate.request_advance(), AdvanceDecision::Proceed);
        assert!(gate.is_transitioning());
        assert_eq!(gate.request_advance(), AdvanceDecision::Refused);
        assert_eq!(gate.request_advance(), AdvanceDecision::Refused);

        gate.on_transition_complete();
        assert_eq!(gate.state(), GateState::Idle);
        assert!(gate.request_advance().is_proceed());
    }

    #[test]
    fn stray_completion_keeps_gate_idle() {
        let mut gate = TransitionGate::new();
        gate.on_transition_complete();
        assert_eq!(gate.state(), GateState::Idle);
        assert!(gate.request_advance().is_proceed());
    }
}
