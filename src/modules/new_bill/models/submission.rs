// Per-form submission state machine
//
// One submission pipeline runs at a time. The machine refuses to start
// while a run is in flight and after the form already succeeded; a failed
// run may be retried manually.

use crate::core::ErrorKind;

/// Submission lifecycle of one new-bill form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// Nothing submitted yet
    Idle,

    /// Pipeline running, submit disabled
    Submitting,

    /// Bill persisted and navigation fired; terminal
    Succeeded,

    /// Last run failed with this kind of error; retry allowed
    Failed(ErrorKind),
}

impl Default for SubmitState {
    fn default() -> Self {
        SubmitState::Idle
    }
}

impl SubmitState {
    /// Whether a pipeline run may start from this state
    pub fn can_begin(&self) -> bool {
        matches!(self, SubmitState::Idle | SubmitState::Failed(_))
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}
