//! Question construction and answer evaluation.
//!
//! The question style for the queue head depends only on two inputs: the
//! term's consecutive-correct counter (zero vs nonzero) and the session's
//! style toggles. Multiple-choice distractors are drawn from the *full*
//! session pool, not just the remaining queue, so late-round questions keep
//! four options.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::learn_engine::models::{
    Answer, LearningTerm, Question, QuestionKind, StudySettings, Term,
};

/// Number of incorrect options alongside the correct one, pool permitting.
pub const DISTRACTOR_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Style selection
// ---------------------------------------------------------------------------

/// Pick the question style for a term.
///
/// A term that has not been answered correctly since its last miss
/// (counter == 0) gets the gentler multiple-choice form; once it has a
/// correct answer behind it (counter >= 1) it graduates to written recall.
/// Flashcard is the universal fallback when the preferred styles are
/// disabled.
pub fn select_kind(term: &LearningTerm, settings: &StudySettings) -> QuestionKind {
    if term.consecutive_correct == 0 {
        if settings.multiple_choice {
            QuestionKind::MultipleChoice
        } else {
            QuestionKind::Flashcard
        }
    } else if settings.written {
        QuestionKind::Written
    } else if settings.multiple_choice {
        QuestionKind::MultipleChoice
    } else {
        QuestionKind::Flashcard
    }
}

// ---------------------------------------------------------------------------
// Question assembly
// ---------------------------------------------------------------------------

/// Question ID from a style prefix + RNG, e.g. `MC-09AF31C2`.
fn make_question_id(kind: QuestionKind, rng: &mut impl RngCore) -> String {
    let prefix = match kind {
        QuestionKind::MultipleChoice => "MC",
        QuestionKind::Written        => "WR",
        QuestionKind::Flashcard      => "FC",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Sample up to [`DISTRACTOR_COUNT`] distinct wrong definitions for `term`
/// from `pool`, without replacement.
///
/// Distinctness is by option *text*: two different terms sharing a
/// definition contribute one distractor, and nothing equal to the correct
/// answer is ever offered. Pools with fewer than four terms simply yield
/// fewer options.
fn sample_distractors<R: Rng>(rng: &mut R, term: &Term, pool: &[Term]) -> Vec<String> {
    let mut candidates: Vec<&str> = Vec::new();
    for other in pool {
        if other.id == term.id || other.definition == term.definition {
            continue;
        }
        if !candidates.contains(&other.definition.as_str()) {
            candidates.push(&other.definition);
        }
    }

    candidates
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .map(|s| s.to_string())
        .collect()
}

/// Build the question for the queue head, rolling fresh distractors and a
/// fresh option order every time.
pub fn build_question<R: Rng>(
    rng: &mut R,
    head: &LearningTerm,
    pool: &[Term],
    settings: &StudySettings,
) -> Question {
    let kind = select_kind(head, settings);
    let question_id = make_question_id(kind, rng);

    let options = match kind {
        QuestionKind::MultipleChoice => {
            let mut opts = sample_distractors(rng, &head.term, pool);
            opts.push(head.term.definition.clone());
            opts.shuffle(rng);
            opts
        }
        QuestionKind::Written | QuestionKind::Flashcard => Vec::new(),
    };

    Question {
        question_id,
        term_id: head.term.id,
        kind,
        prompt: head.term.term.clone(),
        expected: head.term.definition.clone(),
        options,
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Canonical comparison form: surrounding whitespace stripped, case folded.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Judge a submitted answer against the question's expected answer.
///
/// Text answers match on the trimmed, case-insensitive form; flashcard
/// self-reports are taken at face value.
pub fn evaluate(question: &Question, answer: &Answer) -> bool {
    match answer {
        Answer::Text(text) => normalize(text) == normalize(&question.expected),
        Answer::SelfReport(knew_it) => *knew_it,
    }
}
