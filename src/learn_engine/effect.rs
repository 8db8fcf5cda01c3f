//! Side effects as data, plus the boundary traits the host wires them to.
//!
//! The session state machine never performs I/O. Each answer returns the
//! effects it wants alongside the new state; the host drains them into a
//! [`ProgressSink`]. That keeps the transition logic unit-testable with no
//! network mocking, and makes the fire-and-forget contract explicit: a
//! failed report is logged and dropped, never retried, and never alters
//! queue state.

use tracing::warn;

use crate::learn_engine::{error::LearnError, schema::SessionBootstrap};

/// An outbound command emitted by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Report one answer's correctness to the per-set progress endpoint.
    ReportProgress { term_id: u64, is_correct: bool },
}

// ---------------------------------------------------------------------------
// Boundary traits
// ---------------------------------------------------------------------------

/// Source of session bootstraps. The production implementation is an HTTP
/// client for `GET /learning/{set_id}/session`; tests use stubs.
pub trait SessionSource {
    fn fetch_session(&self, set_id: u64) -> Result<SessionBootstrap, LearnError>;
}

/// Destination for progress writes. Production: the per-set progress and
/// reset endpoints.
pub trait ProgressSink {
    fn report_progress(&self, term_id: u64, is_correct: bool) -> Result<(), LearnError>;

    /// Clear all mastery state for a set. On success the caller re-fetches
    /// the session from scratch.
    fn reset_progress(&self, set_id: u64) -> Result<(), LearnError>;
}

/// Deliver effects to `sink`, swallowing failures.
///
/// Availability over consistency: the study experience must not stall on a
/// backend hiccup, so a failed report is logged at `warn` and forgotten.
/// The local queue stays the source of truth for the rest of the round.
pub fn dispatch_effects<S: ProgressSink + ?Sized>(effects: Vec<Effect>, sink: &S) {
    for effect in effects {
        match effect {
            Effect::ReportProgress { term_id, is_correct } => {
                if let Err(err) = sink.report_progress(term_id, is_correct) {
                    warn!(term_id, is_correct, %err, "progress report dropped");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Sink that records calls and fails on demand.
    struct RecordingSink {
        calls: RefCell<Vec<(u64, bool)>>,
        fail: bool,
    }

    impl ProgressSink for RecordingSink {
        fn report_progress(&self, term_id: u64, is_correct: bool) -> Result<(), LearnError> {
            self.calls.borrow_mut().push((term_id, is_correct));
            if self.fail {
                Err(LearnError::ProgressReport { term_id, reason: "503".into() })
            } else {
                Ok(())
            }
        }

        fn reset_progress(&self, _set_id: u64) -> Result<(), LearnError> {
            Ok(())
        }
    }

    #[test]
    fn dispatch_delivers_each_effect_once() {
        let sink = RecordingSink { calls: RefCell::new(Vec::new()), fail: false };
        dispatch_effects(
            vec![
                Effect::ReportProgress { term_id: 1, is_correct: true },
                Effect::ReportProgress { term_id: 2, is_correct: false },
            ],
            &sink,
        );
        assert_eq!(*sink.calls.borrow(), vec![(1, true), (2, false)]);
    }

    #[test]
    fn dispatch_swallows_sink_failures() {
        let sink = RecordingSink { calls: RefCell::new(Vec::new()), fail: true };
        // Must not panic or propagate.
        dispatch_effects(vec![Effect::ReportProgress { term_id: 9, is_correct: true }], &sink);
        assert_eq!(sink.calls.borrow().len(), 1);
    }
}
