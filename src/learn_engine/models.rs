use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Term primitives
// ---------------------------------------------------------------------------

/// A flashcard unit: one prompt/answer pair inside a study set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    /// Prompt-side text.
    pub term: String,
    /// Answer-side text.
    pub definition: String,
    /// User bookmark flag, independent of mastery. Carried through for
    /// sibling views; the learn engine never reads it.
    #[serde(default)]
    pub starred: bool,
}

/// Mastery classification of a term within the current round.
///
/// Progression is strictly one-way: `NotStarted → Familiar → Mastered`.
/// An incorrect answer never regresses the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStatus {
    NotStarted,
    Familiar,
    Mastered,
}

impl fmt::Display for LearningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningStatus::NotStarted => write!(f, "not_started"),
            LearningStatus::Familiar   => write!(f, "familiar"),
            LearningStatus::Mastered   => write!(f, "mastered"),
        }
    }
}

/// A term plus its learning metadata, scoped to one study session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTerm {
    #[serde(flatten)]
    pub term: Term,
    pub learning_status: LearningStatus,
    /// 0 = never answered correctly since the last miss; >= 1 = answered
    /// correctly more recently than that. Only the zero/nonzero threshold
    /// drives behavior (question-style selection).
    pub consecutive_correct: u8,
}

impl LearningTerm {
    pub fn new(term: Term, status: LearningStatus, consecutive_correct: u8) -> Self {
        LearningTerm { term, learning_status: status, consecutive_correct }
    }
}

// ---------------------------------------------------------------------------
// Session aggregates and settings
// ---------------------------------------------------------------------------

/// The `{new, familiar, mastered}` triple shown in the progress header.
///
/// Derived aggregate, recomputed by the session on every transition.
/// Invariant: the three buckets always sum to the round's term count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounts {
    pub new: u32,
    pub familiar: u32,
    pub mastered: u32,
}

impl SessionCounts {
    pub fn total(&self) -> u32 {
        self.new + self.familiar + self.mastered
    }
}

/// Which question styles are eligible this session.
///
/// Held in transient UI state only; the engine is handed a copy at
/// construction and never persists it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySettings {
    pub multiple_choice: bool,
    pub written: bool,
    pub flashcard: bool,
}

impl Default for StudySettings {
    fn default() -> Self {
        StudySettings { multiple_choice: true, written: true, flashcard: false }
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    MultipleChoice,
    Written,
    Flashcard,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "Multiple Choice"),
            QuestionKind::Written        => write!(f, "Written"),
            QuestionKind::Flashcard      => write!(f, "Flashcard"),
        }
    }
}

/// One rendered question for the current queue head.
///
/// `options` is non-empty only for `MultipleChoice`: the correct definition
/// plus up to three distractors, already shuffled into display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub term_id: u64,
    pub kind: QuestionKind,
    /// Prompt-side text shown to the user.
    pub prompt: String,
    /// The expected answer (the term's definition). Flashcard questions
    /// reveal it instead of checking it.
    pub expected: String,
    pub options: Vec<String>,
}

/// How the user responded to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Option picked or text typed; judged against `Question::expected`
    /// after trimming and case folding.
    Text(String),
    /// Flashcard self-report: `true` = "I knew it", `false` = "still learning".
    SelfReport(bool),
}

// ---------------------------------------------------------------------------
// Answer outcomes
// ---------------------------------------------------------------------------

/// Suggested pause before the UI advances to the next question.
pub const ADVANCE_AFTER_CORRECT: Duration = Duration::from_millis(1200);
/// Longer on a miss so the user can read the correction.
pub const ADVANCE_AFTER_INCORRECT: Duration = Duration::from_millis(2500);

/// Result of applying one answer to the session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub term_id: u64,
    pub is_correct: bool,
    pub previous_status: LearningStatus,
    pub new_status: LearningStatus,
    /// Counts after the transition.
    pub counts: SessionCounts,
    /// True once the queue is empty and the round is over.
    pub round_complete: bool,
    /// Presentation hint only; does not alter transition semantics.
    pub advance_after: Duration,
}
