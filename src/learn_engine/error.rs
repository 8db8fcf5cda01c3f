use thiserror::Error;

/// Failure taxonomy for the learn engine.
///
/// Every failure is classified by kind, not by cause: a timed-out session
/// fetch and a 500 both surface as `SessionLoad`. The engine offers no
/// automatic retries; callers re-fetch on explicit user action.
#[derive(Debug, Error)]
pub enum LearnError {
    /// The session bootstrap could not be fetched or decoded. Fatal to
    /// starting a round; surfaced with a manual-retry affordance.
    #[error("failed to load learning session: {0}")]
    SessionLoad(String),

    /// The bootstrap succeeded but contained no terms left to study.
    /// Deliberately distinct from `SessionLoad` so the UI can show
    /// "nothing to learn" instead of an error screen.
    #[error("nothing to learn: session contains no unmastered terms")]
    NothingToLearn,

    /// A progress report was rejected by the backend. Non-fatal: logged
    /// and swallowed by `dispatch_effects`, never surfaced mid-round.
    #[error("failed to report progress for term {term_id}: {reason}")]
    ProgressReport { term_id: u64, reason: String },

    /// The reset request failed. Surfaced inline; no automatic retry.
    #[error("failed to reset progress: {0}")]
    ResetFailed(String),
}
