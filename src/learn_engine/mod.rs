//! Core learn engine — the adaptive study queue, question rolling, and the
//! boundary contracts around it.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | All shared types: terms, statuses, counts, settings, questions, outcomes |
//! | `error`    | Failure taxonomy: session load, nothing-to-learn, progress report, reset |
//! | `schema`   | Wire types with dual-spelling tolerance, one-step normalization, round planning |
//! | `question` | Question-style selection, distractor sampling, answer evaluation |
//! | `session`  | `LearnSession` — the per-round mastery state machine over an ordered queue |
//! | `effect`   | Side effects as data, `SessionSource`/`ProgressSink` traits, dispatch |
//! | `view`     | Engine values → client JSON payloads (question, feedback, terminal screens) |

pub mod effect;
pub mod error;
pub mod models;
pub mod question;
pub mod schema;
pub mod session;
pub mod view;

// Re-export the public API surface so callers can use
// `learn_engine::LearnSession` without reaching into sub-modules.
pub use effect::{dispatch_effects, Effect, ProgressSink, SessionSource};
pub use error::LearnError;
pub use models::{
    Answer, AnswerOutcome, LearningStatus, LearningTerm, Question, QuestionKind,
    SessionCounts, StudySettings, Term, ADVANCE_AFTER_CORRECT, ADVANCE_AFTER_INCORRECT,
};
pub use question::{evaluate, select_kind, DISTRACTOR_COUNT};
pub use schema::{plan_round, ProgressUpdate, RawSession, RawSessionTerm, SessionBootstrap,
    ROUND_BATCH_SIZE};
pub use session::LearnSession;
pub use view::{
    load_error_view, nothing_to_learn_view, outcome_view, question_view, round_complete_view,
};
