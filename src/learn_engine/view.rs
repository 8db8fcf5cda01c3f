//! View-model adapter: engine values → the JSON shapes the web client
//! renders. Pure value conversion; no HTTP, no rendering.
//!
//! The client speaks camelCase, numbers its options from 1 (the keyboard
//! shortcuts), and distinguishes three terminal screens: round complete,
//! nothing to learn, and load error.

use serde_json::{json, Value};

use crate::learn_engine::models::{AnswerOutcome, Question, QuestionKind, SessionCounts};

fn kind_str(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::MultipleChoice => "multiple_choice",
        QuestionKind::Written        => "written",
        QuestionKind::Flashcard      => "flashcard",
    }
}

/// Build the numbered option list for a multiple-choice question.
fn option_entries(options: &[String]) -> Value {
    let entries: Vec<Value> = options
        .iter()
        .enumerate()
        .map(|(i, text)| json!({ "id": i + 1, "text": text }))
        .collect();
    Value::Array(entries)
}

/// The progress header triple.
fn counts_block(counts: SessionCounts) -> Value {
    json!({
        "newCount": counts.new,
        "familiarCount": counts.familiar,
        "masteredCount": counts.mastered,
        "total": counts.total(),
    })
}

/// Map a [`Question`] plus the session's progress state to the question
/// screen payload.
pub fn question_view(question: &Question, counts: SessionCounts, remaining: usize) -> Value {
    json!({
        "screen": "question",
        "questionId": question.question_id,
        "termId": question.term_id,
        "kind": kind_str(question.kind),
        "prompt": question.prompt,
        "options": option_entries(&question.options),
        "progress": counts_block(counts),
        "remaining": remaining,
    })
}

/// Map an [`AnswerOutcome`] to the feedback overlay payload. The expected
/// answer is included so a miss can show the correction.
pub fn outcome_view(outcome: &AnswerOutcome, expected: &str) -> Value {
    json!({
        "screen": "feedback",
        "termId": outcome.term_id,
        "isCorrect": outcome.is_correct,
        "previousStatus": outcome.previous_status.to_string(),
        "newStatus": outcome.new_status.to_string(),
        "correctAnswer": expected,
        "advanceAfterMs": outcome.advance_after.as_millis() as u64,
        "roundComplete": outcome.round_complete,
        "progress": counts_block(outcome.counts),
    })
}

/// Terminal screen shown when the queue drains.
pub fn round_complete_view(counts: SessionCounts) -> Value {
    json!({
        "screen": "round_complete",
        "progress": counts_block(counts),
        "actions": ["new_round", "exit"],
    })
}

/// Terminal screen for a bootstrap with no studyable terms.
pub fn nothing_to_learn_view() -> Value {
    json!({
        "screen": "nothing_to_learn",
        "actions": ["exit"],
    })
}

/// Terminal screen for a failed session load. Retry is manual.
pub fn load_error_view(message: &str) -> Value {
    json!({
        "screen": "load_error",
        "message": message,
        "actions": ["retry", "exit"],
    })
}
