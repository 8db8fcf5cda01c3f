//! The adaptive study queue: one round of Learn mode, in memory.
//!
//! A [`LearnSession`] owns an ordered queue of unmastered terms, the
//! `{new, familiar, mastered}` progress triple, and the RNG that rolls
//! multiple-choice options. Answers drive a per-term state machine:
//!
//! | status      | answer    | next      | counter | queue           |
//! |-------------|-----------|-----------|---------|-----------------|
//! | not_started | correct   | familiar  | 1       | move to back    |
//! | familiar    | correct   | mastered  | 2       | remove          |
//! | mastered    | any       | mastered  | —       | remove (defensive) |
//! | not_started | incorrect | not_started | 0     | move to back    |
//! | familiar    | incorrect | familiar  | 0       | move to back    |
//!
//! An incorrect answer never regresses status; it only resets the counter,
//! which demotes the term back to the gentler question style. The round is
//! over exactly when the queue is empty.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::learn_engine::{
    effect::Effect,
    models::{
        Answer, AnswerOutcome, LearningStatus, LearningTerm, Question, SessionCounts,
        StudySettings, Term, ADVANCE_AFTER_CORRECT, ADVANCE_AFTER_INCORRECT,
    },
    question::{build_question, evaluate},
    schema::SessionBootstrap,
};

pub struct LearnSession {
    queue: VecDeque<LearningTerm>,
    /// Full term pool for the round; distractors are drawn from here, not
    /// from the shrinking queue.
    pool: Vec<Term>,
    counts: SessionCounts,
    settings: StudySettings,
    rng: StdRng,
}

impl LearnSession {
    /// Start a round from a normalized bootstrap.
    ///
    /// `rng_seed` pins distractor sampling and option order for
    /// reproducible rounds; `None` seeds from entropy.
    pub fn new(
        bootstrap: SessionBootstrap,
        settings: StudySettings,
        rng_seed: Option<u64>,
    ) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        let pool = bootstrap.terms.iter().map(|t| t.term.clone()).collect();
        LearnSession {
            queue: bootstrap.terms.into(),
            pool,
            counts: bootstrap.counts,
            settings,
            rng,
        }
    }

    pub fn counts(&self) -> SessionCounts {
        self.counts
    }

    pub fn settings(&self) -> StudySettings {
        self.settings
    }

    /// Terms still in the queue this round.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// True once every term has reached `mastered`.
    pub fn is_complete(&self) -> bool {
        self.queue.is_empty()
    }

    /// The term currently up for questioning, if the round is still going.
    pub fn current(&self) -> Option<&LearningTerm> {
        self.queue.front()
    }

    /// Roll a question for the current queue head. Distractors and option
    /// order are re-rolled on every call.
    pub fn next_question(&mut self) -> Option<Question> {
        let head = self.queue.front()?;
        Some(build_question(&mut self.rng, head, &self.pool, &self.settings))
    }

    /// Evaluate a submitted answer against `question` and apply it.
    ///
    /// Returns `None` if the question no longer matches the queue head —
    /// a stale submission after an advance is ignored rather than applied
    /// to the wrong term.
    pub fn submit(
        &mut self,
        question: &Question,
        answer: &Answer,
    ) -> Option<(AnswerOutcome, Vec<Effect>)> {
        if self.queue.front().map(|t| t.term.id) != Some(question.term_id) {
            return None;
        }
        let is_correct = evaluate(question, answer);
        self.record_answer(is_correct)
    }

    /// Apply one correctness verdict to the current queue head.
    ///
    /// This is the whole state machine: status transition, counter update,
    /// requeue-or-remove, counts bookkeeping, and the progress-report
    /// effect. Pure with respect to I/O; the caller dispatches the effects.
    pub fn record_answer(&mut self, is_correct: bool) -> Option<(AnswerOutcome, Vec<Effect>)> {
        let mut term = self.queue.pop_front()?;
        let previous_status = term.learning_status;

        let requeue = if is_correct {
            match previous_status {
                LearningStatus::NotStarted => {
                    term.learning_status = LearningStatus::Familiar;
                    term.consecutive_correct = 1;
                    self.counts.new = self.counts.new.saturating_sub(1);
                    self.counts.familiar += 1;
                    true
                }
                LearningStatus::Familiar => {
                    term.learning_status = LearningStatus::Mastered;
                    term.consecutive_correct = 2;
                    self.counts.familiar = self.counts.familiar.saturating_sub(1);
                    self.counts.mastered += 1;
                    false
                }
                // Should not be in the queue at all; drop it, counts untouched.
                LearningStatus::Mastered => {
                    term.consecutive_correct = term.consecutive_correct.saturating_add(1);
                    false
                }
            }
        } else {
            match previous_status {
                // A miss holds status steady; familiar never regresses.
                LearningStatus::NotStarted | LearningStatus::Familiar => {
                    term.consecutive_correct = 0;
                    true
                }
                LearningStatus::Mastered => false,
            }
        };

        let new_status = term.learning_status;
        debug!(
            term_id = term.term.id,
            is_correct,
            from = %previous_status,
            to = %new_status,
            remaining = self.queue.len() + usize::from(requeue),
            "answer applied"
        );

        let term_id = term.term.id;
        if requeue {
            self.queue.push_back(term);
        }

        let outcome = AnswerOutcome {
            term_id,
            is_correct,
            previous_status,
            new_status,
            counts: self.counts,
            round_complete: self.queue.is_empty(),
            advance_after: if is_correct {
                ADVANCE_AFTER_CORRECT
            } else {
                ADVANCE_AFTER_INCORRECT
            },
        };
        let effects = vec![Effect::ReportProgress { term_id, is_correct }];
        Some((outcome, effects))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learn_engine::models::QuestionKind;

    fn bootstrap(n: u64) -> SessionBootstrap {
        let terms: Vec<LearningTerm> = (0..n)
            .map(|i| {
                LearningTerm::new(
                    Term {
                        id: i,
                        term: format!("term-{i}"),
                        definition: format!("def-{i}"),
                        starred: false,
                    },
                    LearningStatus::NotStarted,
                    0,
                )
            })
            .collect();
        let counts = SessionCounts { new: n as u32, familiar: 0, mastered: 0 };
        SessionBootstrap { counts, terms }
    }

    fn session(n: u64) -> LearnSession {
        LearnSession::new(bootstrap(n), StudySettings::default(), Some(42))
    }

    #[test]
    fn correct_answer_promotes_and_requeues_a_new_term() {
        let mut s = session(3);
        let head_id = s.current().unwrap().term.id;

        let (outcome, effects) = s.record_answer(true).unwrap();
        assert_eq!(outcome.previous_status, LearningStatus::NotStarted);
        assert_eq!(outcome.new_status, LearningStatus::Familiar);
        assert_eq!(outcome.counts, SessionCounts { new: 2, familiar: 1, mastered: 0 });
        assert_eq!(effects, vec![Effect::ReportProgress { term_id: head_id, is_correct: true }]);

        // Requeued at the back, not gone.
        assert_eq!(s.remaining(), 3);
        assert_ne!(s.current().unwrap().term.id, head_id);
        assert_eq!(s.queue.back().unwrap().term.id, head_id);
        assert_eq!(s.queue.back().unwrap().consecutive_correct, 1);
    }

    #[test]
    fn second_correct_answer_masters_and_removes() {
        let mut s = session(1);
        s.record_answer(true).unwrap();
        let (outcome, _) = s.record_answer(true).unwrap();

        assert_eq!(outcome.new_status, LearningStatus::Mastered);
        assert!(outcome.round_complete);
        assert!(s.is_complete());
        assert_eq!(s.counts(), SessionCounts { new: 0, familiar: 0, mastered: 1 });
    }

    #[test]
    fn incorrect_answer_never_regresses_familiar() {
        let mut s = session(1);
        s.record_answer(true).unwrap(); // not_started -> familiar
        let (outcome, _) = s.record_answer(false).unwrap();

        assert_eq!(outcome.previous_status, LearningStatus::Familiar);
        assert_eq!(outcome.new_status, LearningStatus::Familiar);
        assert_eq!(outcome.counts, SessionCounts { new: 0, familiar: 1, mastered: 0 });
        assert_eq!(s.current().unwrap().consecutive_correct, 0);
    }

    #[test]
    fn incorrect_answer_requeues_without_touching_counts() {
        let mut s = session(3);
        let before = s.counts();
        let head_id = s.current().unwrap().term.id;

        let (outcome, _) = s.record_answer(false).unwrap();
        assert_eq!(outcome.counts, before);
        assert_eq!(s.remaining(), 3);
        assert_eq!(s.queue.back().unwrap().term.id, head_id);
    }

    #[test]
    fn counts_always_sum_to_the_round_size() {
        let mut s = session(5);
        let total = s.counts().total();
        // Mixed script: miss, hit, hit, miss...
        for (i, correct) in [false, true, true, false, true, true, true, true, true, true, true]
            .iter()
            .enumerate()
        {
            if s.is_complete() {
                break;
            }
            let (outcome, _) = s.record_answer(*correct).unwrap();
            assert_eq!(outcome.counts.total(), total, "sum broke at step {i}");
        }
    }

    #[test]
    fn mastered_term_in_queue_is_dropped_without_count_changes() {
        // Defensive path: force a mastered term into the queue.
        let mut boot = bootstrap(2);
        boot.terms[0].learning_status = LearningStatus::Mastered;
        boot.terms[0].consecutive_correct = 2;
        boot.counts = SessionCounts { new: 1, familiar: 0, mastered: 1 };

        let mut s = LearnSession::new(boot, StudySettings::default(), Some(1));
        let before = s.counts();
        let (outcome, _) = s.record_answer(true).unwrap();

        assert_eq!(outcome.counts, before);
        assert_eq!(outcome.new_status, LearningStatus::Mastered);
        assert_eq!(s.remaining(), 1);
    }

    #[test]
    fn slow_advance_after_a_miss() {
        let mut s = session(2);
        let (hit, _) = s.record_answer(true).unwrap();
        let (miss, _) = s.record_answer(false).unwrap();
        assert!(miss.advance_after > hit.advance_after);
    }

    #[test]
    fn stale_question_submission_is_ignored() {
        let mut s = session(3);
        let q = s.next_question().unwrap();
        s.record_answer(true).unwrap(); // head advances past q's term

        assert!(s.submit(&q, &Answer::Text(q.expected.clone())).is_none());
        assert_eq!(s.remaining(), 3);
    }

    #[test]
    fn submit_evaluates_and_applies_in_one_step() {
        let mut s = session(3);
        let q = s.next_question().unwrap();
        assert_eq!(q.kind, QuestionKind::MultipleChoice);

        let (outcome, _) = s
            .submit(&q, &Answer::Text(format!("  {}  ", q.expected.to_uppercase())))
            .unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.new_status, LearningStatus::Familiar);
    }

    #[test]
    fn same_seed_rolls_identical_questions() {
        let mut a = session(6);
        let mut b = session(6);
        for _ in 0..6 {
            let qa = a.next_question().unwrap();
            let qb = b.next_question().unwrap();
            assert_eq!(qa.question_id, qb.question_id);
            assert_eq!(qa.options, qb.options);
            let _ = a.record_answer(true);
            let _ = b.record_answer(true);
        }
    }
}
