//! # study_drill_gen
//!
//! An in-memory adaptive study queue for flashcard Learn mode, decoupled
//! from any UI: it orders a round of terms, rolls a question for the queue
//! head, grades answers, and walks each term through
//! `not_started → familiar → mastered`.
//!
//! ## How it works
//!
//! 1. Fetch a session bootstrap (any [`SessionSource`]) and normalize it
//!    with [`SessionBootstrap::from_json`] — one canonical shape, whatever
//!    the backend's field spelling.
//! 2. Build a [`LearnSession`] from the bootstrap, the user's
//!    [`StudySettings`], and an optional RNG seed.
//! 3. Loop: [`LearnSession::next_question`] → show it →
//!    [`LearnSession::submit`] the answer. Each submission returns an
//!    [`AnswerOutcome`] (new status, updated counts, advance delay) plus
//!    the [`Effect`]s to deliver — hand those to [`dispatch_effects`] with
//!    your [`ProgressSink`].
//! 4. The round is over when the queue is empty; every term reached
//!    `mastered` by answering correctly twice.
//!
//! ## Key behaviors
//!
//! - **No regression**: a miss never demotes a `familiar` term; it only
//!   resets the consecutive-correct counter, which drops the term back to
//!   the multiple-choice question style.
//! - **Fire-and-forget reporting**: progress reports are emitted as data
//!   and delivered best-effort; a backend failure is logged and never
//!   stalls or reverts the local queue.
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   distractors and option order every time — useful for tests.
//!
//! ## Quick start
//!
//! ```rust
//! use study_drill_gen::{
//!     Answer, LearnSession, LearningStatus, LearningTerm, SessionBootstrap,
//!     SessionCounts, StudySettings, Term,
//! };
//!
//! let terms: Vec<LearningTerm> = (0..3)
//!     .map(|i| LearningTerm::new(
//!         Term { id: i, term: format!("term-{i}"), definition: format!("def-{i}"), starred: false },
//!         LearningStatus::NotStarted,
//!         0,
//!     ))
//!     .collect();
//! let bootstrap = SessionBootstrap {
//!     counts: SessionCounts { new: 3, familiar: 0, mastered: 0 },
//!     terms,
//! };
//!
//! let mut session = LearnSession::new(bootstrap, StudySettings::default(), Some(42));
//! while let Some(question) = session.next_question() {
//!     // A perfect student: always submit the expected answer.
//!     let (outcome, _effects) = session
//!         .submit(&question, &Answer::Text(question.expected.clone()))
//!         .unwrap();
//!     println!("{} -> {}", outcome.term_id, outcome.new_status);
//! }
//! assert!(session.is_complete());
//! assert_eq!(session.counts().mastered, 3);
//! ```

pub mod learn_engine;

// Convenience re-exports so callers can use `study_drill_gen::LearnSession`
// directly without reaching into `learn_engine::`.
pub use learn_engine::{
    dispatch_effects, evaluate, load_error_view, nothing_to_learn_view, outcome_view,
    plan_round, question_view, round_complete_view, select_kind, Answer, AnswerOutcome, Effect,
    LearnError, LearnSession, LearningStatus, LearningTerm, ProgressSink, ProgressUpdate,
    Question, QuestionKind, RawSession, RawSessionTerm, SessionBootstrap, SessionCounts,
    SessionSource, StudySettings, Term, ADVANCE_AFTER_CORRECT, ADVANCE_AFTER_INCORRECT,
    DISTRACTOR_COUNT, ROUND_BATCH_SIZE,
};
