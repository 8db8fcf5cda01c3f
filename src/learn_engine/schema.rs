//! Wire schema for the session bootstrap, and its normalization into the
//! one canonical in-memory representation the engine runs on.
//!
//! The backend and older clients disagree on naming (`new_count` vs
//! `newCount`, `learning_status` vs `status`), and the progress fields are
//! optional for terms that have never been reviewed. All of that tolerance
//! lives here, in the raw types; nothing past `SessionBootstrap::normalize`
//! ever sees an optional field or a second spelling.

use serde::{Deserialize, Serialize};

use crate::learn_engine::{
    error::LearnError,
    models::{LearningStatus, LearningTerm, SessionCounts, Term},
};

// ---------------------------------------------------------------------------
// Raw wire types
// ---------------------------------------------------------------------------

/// One term as the session endpoint returns it. Progress fields are absent
/// for terms with no review history.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSessionTerm {
    pub id: u64,
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub starred: bool,
    #[serde(default, alias = "status", alias = "learningStatus")]
    pub learning_status: Option<LearningStatus>,
    #[serde(default, alias = "consecutiveCorrect")]
    pub consecutive_correct: Option<u8>,
}

/// The session bootstrap body as fetched from
/// `GET /learning/{study_set_id}/session`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSession {
    #[serde(default, alias = "newCount")]
    pub new_count: u32,
    #[serde(default, alias = "familiarCount")]
    pub familiar_count: u32,
    #[serde(default, alias = "masteredCount")]
    pub mastered_count: u32,
    #[serde(default)]
    pub terms: Vec<RawSessionTerm>,
}

/// Body of the fire-and-forget progress report,
/// `POST /learning/{study_set_id}/update/{term_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub is_correct: bool,
}

// ---------------------------------------------------------------------------
// Canonical form
// ---------------------------------------------------------------------------

/// Normalized session bootstrap: every term carries a definite status and
/// counter, and `counts` is recomputed from the terms actually present so
/// the bucket sum always matches the round size.
#[derive(Debug, Clone)]
pub struct SessionBootstrap {
    pub counts: SessionCounts,
    pub terms: Vec<LearningTerm>,
}

impl SessionBootstrap {
    /// Collapse a raw payload into the canonical form.
    ///
    /// Missing `learning_status` defaults to `NotStarted`; a missing counter
    /// is derived from the status (0 / 1 / 2). Terms that arrive already
    /// mastered are tallied but excluded from `terms` — they never enter a
    /// queue. Returns `NothingToLearn` when no studyable term remains.
    pub fn normalize(raw: RawSession) -> Result<SessionBootstrap, LearnError> {
        let mut counts = SessionCounts::default();
        let mut terms = Vec::with_capacity(raw.terms.len());

        for rt in raw.terms {
            let status = rt.learning_status.unwrap_or(LearningStatus::NotStarted);
            let consecutive = rt.consecutive_correct.unwrap_or(match status {
                LearningStatus::NotStarted => 0,
                LearningStatus::Familiar   => 1,
                LearningStatus::Mastered   => 2,
            });

            match status {
                LearningStatus::NotStarted => counts.new += 1,
                LearningStatus::Familiar   => counts.familiar += 1,
                LearningStatus::Mastered   => {
                    counts.mastered += 1;
                    continue;
                }
            }

            let term = Term {
                id: rt.id,
                term: rt.term,
                definition: rt.definition,
                starred: rt.starred,
            };
            terms.push(LearningTerm::new(term, status, consecutive));
        }

        // The backend also reports mastered terms it chose not to send.
        counts.mastered = counts.mastered.max(raw.mastered_count);

        if terms.is_empty() {
            return Err(LearnError::NothingToLearn);
        }
        Ok(SessionBootstrap { counts, terms })
    }

    /// Parse and normalize a JSON bootstrap body in one step.
    pub fn from_json(body: &str) -> Result<SessionBootstrap, LearnError> {
        let raw: RawSession = serde_json::from_str(body)
            .map_err(|e| LearnError::SessionLoad(e.to_string()))?;
        SessionBootstrap::normalize(raw)
    }
}

// ---------------------------------------------------------------------------
// Round planning
// ---------------------------------------------------------------------------

/// Terms per round. Familiar terms are reviewed before new terms are
/// introduced, so a struggling user drains their review backlog first.
pub const ROUND_BATCH_SIZE: usize = 7;

/// Select the next round's batch from a full set held locally.
///
/// Mirrors the server-side session builder: mastered terms are skipped,
/// familiar terms fill the batch first, remaining slots go to new terms,
/// preserving set order within each bucket.
pub fn plan_round(terms: &[LearningTerm]) -> Vec<LearningTerm> {
    let familiar = terms
        .iter()
        .filter(|t| t.learning_status == LearningStatus::Familiar);
    let fresh = terms
        .iter()
        .filter(|t| t.learning_status == LearningStatus::NotStarted);

    familiar
        .chain(fresh)
        .take(ROUND_BATCH_SIZE)
        .cloned()
        .collect()
}
