//! Full demo of one Learn-mode round.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `study_drill_gen` works end to end:
//!
//! 1. **Bootstrap** — a session payload is parsed and normalized (note the
//!    mixed snake_case/camelCase field names — both are accepted).
//! 2. **Round** — a scripted student answers questions until every term is
//!    mastered: right, wrong, right again, demonstrating promotion,
//!    requeueing, and the no-regression rule.
//! 3. **Effects** — each answer's progress report is dispatched to a stub
//!    sink that simply prints; in a real app it would POST to the backend.
//!
//! The RNG seed is fixed, so the output is deterministic and reproducible.

use study_drill_gen::{
    dispatch_effects, Answer, LearnError, LearnSession, ProgressSink, QuestionKind,
    SessionBootstrap, StudySettings,
};

/// Sink that prints instead of calling the backend.
struct PrintSink;

impl ProgressSink for PrintSink {
    fn report_progress(&self, term_id: u64, is_correct: bool) -> Result<(), LearnError> {
        println!("      -> reported term {term_id}: correct={is_correct}");
        Ok(())
    }

    fn reset_progress(&self, set_id: u64) -> Result<(), LearnError> {
        println!("      -> reset progress for set {set_id}");
        Ok(())
    }
}

fn main() {
    let body = r#"{
        "newCount": 3,
        "familiar_count": 0,
        "masteredCount": 0,
        "terms": [
            {"id": 1, "term": "bonjour",   "definition": "hello"},
            {"id": 2, "term": "merci",     "definition": "thank you"},
            {"id": 3, "term": "au revoir", "definition": "goodbye",
             "learningStatus": "not_started", "consecutiveCorrect": 0}
        ]
    }"#;

    let bootstrap = SessionBootstrap::from_json(body).expect("demo payload is valid");
    let mut session = LearnSession::new(bootstrap, StudySettings::default(), Some(42));
    let sink = PrintSink;

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Learn round — {} terms", session.remaining());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Scripted student: flubs every third answer, so some terms take an
    // extra lap through the queue.
    let mut step = 0u32;
    while let Some(question) = session.next_question() {
        step += 1;
        println!();
        println!("  [{}] {} — {}", step, question.kind, question.prompt);
        if question.kind == QuestionKind::MultipleChoice {
            for (i, opt) in question.options.iter().enumerate() {
                println!("      {}. {}", i + 1, opt);
            }
        }

        let flub = step % 3 == 0;
        let submitted = if flub {
            "no idea".to_string()
        } else {
            // Sloppy but acceptable: grading trims and case-folds.
            format!("  {}  ", question.expected.to_uppercase())
        };
        println!("      student answers: {submitted:?}");

        let (outcome, effects) = session
            .submit(&question, &Answer::Text(submitted))
            .expect("question matches the queue head");
        println!(
            "      {} | {} -> {} | new={} familiar={} mastered={} | advance in {:?}",
            if outcome.is_correct { "correct" } else { "incorrect" },
            outcome.previous_status,
            outcome.new_status,
            outcome.counts.new,
            outcome.counts.familiar,
            outcome.counts.mastered,
            outcome.advance_after,
        );
        dispatch_effects(effects, &sink);
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let counts = session.counts();
    println!(
        "  Round complete after {step} answers: {} mastered / {} total",
        counts.mastered,
        counts.total(),
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
