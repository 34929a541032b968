//! Per-learner quiz session.
//!
//! A session owns the set of nouns still to be answered for the active
//! level and the running scores. The noun table itself is shared, read-only,
//! behind an `Arc`.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::error::QuizError;
use crate::model::{Level, LevelScores, NounRecord, Tally};
use crate::plural::{answers_match, pluralize};
use crate::report::ScoreSummary;
use crate::table::NounTable;

/// Result of selecting a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LevelSelection {
    /// The remaining set was refilled with `available` nouns.
    Changed { level: Level, available: usize },
    /// The level was already active; nothing changed.
    Unchanged { level: Level },
}

/// What to show after asking for the next noun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NextQuestion {
    Ask { singular: String },
    /// Every noun of the level has been answered correctly.
    Complete { level: Level },
}

/// Outcome of one scored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub singular: String,
    pub expected: String,
    pub level: Level,
    /// Score since the level was last selected.
    pub round: Tally,
    /// Nouns still to be answered in this level.
    pub remaining: usize,
}

/// Quiz state for one learner.
///
/// `remaining` holds row indices into the shared table; `current` is a
/// position in `remaining`. A correct answer removes the row and clears
/// `current`, so `current` always points at a live entry.
pub struct QuizSession<R = StdRng> {
    table: Arc<NounTable>,
    level: Option<Level>,
    remaining: Vec<usize>,
    current: Option<usize>,
    scores: LevelScores,
    round: Tally,
    rng: R,
}

impl QuizSession<StdRng> {
    /// New session seeded from the operating system.
    pub fn new(table: Arc<NounTable>) -> Self {
        Self::with_rng(table, StdRng::from_os_rng())
    }

    /// New session with a deterministic noun order.
    pub fn with_seed(table: Arc<NounTable>, seed: u64) -> Self {
        Self::with_rng(table, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizSession<R> {
    pub fn with_rng(table: Arc<NounTable>, rng: R) -> Self {
        Self {
            table,
            level: None,
            remaining: Vec::new(),
            current: None,
            scores: LevelScores::default(),
            round: Tally::default(),
            rng,
        }
    }

    /// Switch to `level`, refilling the remaining set.
    ///
    /// Selecting the active level again is a no-op. A level without nouns
    /// is rejected and leaves the session as it was. Per-level scores are
    /// never touched.
    pub fn select_level(&mut self, level: Level) -> Result<LevelSelection, QuizError> {
        if self.level == Some(level) {
            return Ok(LevelSelection::Unchanged { level });
        }

        let rows = self.table.rows_for(level);
        if rows.is_empty() {
            debug!(%level, "level has no nouns");
            return Err(QuizError::NoNounsForLevel(level));
        }

        Ok(self.refill(level, rows))
    }

    /// Refill the active level, e.g. to practise it again once complete.
    pub fn restart_level(&mut self) -> Result<LevelSelection, QuizError> {
        let level = self.level.ok_or(QuizError::NoLevelSelected)?;
        let rows = self.table.rows_for(level);
        Ok(self.refill(level, rows))
    }

    fn refill(&mut self, level: Level, rows: Vec<usize>) -> LevelSelection {
        let available = rows.len();
        self.level = Some(level);
        self.remaining = rows;
        self.current = None;
        self.round = Tally::default();
        debug!(%level, available, "level selected");
        LevelSelection::Changed { level, available }
    }

    /// Pick a noun uniformly at random from the remaining set.
    pub fn next_question(&mut self) -> Result<NextQuestion, QuizError> {
        let level = self.level.ok_or(QuizError::NoLevelSelected)?;

        if self.remaining.is_empty() {
            self.current = None;
            return Ok(NextQuestion::Complete { level });
        }

        let pos = self.rng.random_range(0..self.remaining.len());
        self.current = Some(pos);
        let singular = self.table.records()[self.remaining[pos]].singular.clone();
        debug!(%level, %singular, remaining = self.remaining.len(), "asking");
        Ok(NextQuestion::Ask { singular })
    }

    /// Score a guess for the noun on display.
    ///
    /// Does not advance to another noun. After a wrong answer the same noun
    /// stays on display and in the remaining set.
    pub fn submit_answer(&mut self, guess: &str) -> Result<AnswerOutcome, QuizError> {
        let level = self.level.ok_or(QuizError::NoActiveQuestion)?;
        if self.remaining.is_empty() {
            return Err(QuizError::LevelComplete(level));
        }
        let pos = self.current.ok_or(QuizError::NoActiveQuestion)?;

        let singular = self.table.records()[self.remaining[pos]].singular.clone();
        let expected = pluralize(&singular);
        let correct = answers_match(guess, &expected);

        self.scores.get_mut(level).record(correct);
        self.round.record(correct);
        if correct {
            self.remaining.swap_remove(pos);
            self.current = None;
        }
        debug!(%level, %singular, correct, round = %self.round, "answer scored");

        Ok(AnswerOutcome {
            correct,
            singular,
            expected,
            level,
            round: self.round,
            remaining: self.remaining.len(),
        })
    }

    /// Per-level totals; never mutates.
    pub fn total_score_summary(&self) -> ScoreSummary {
        ScoreSummary::from_scores(&self.scores)
    }
}

impl<R> QuizSession<R> {
    pub fn current_level(&self) -> Option<Level> {
        self.level
    }

    /// The noun on display, if any.
    pub fn current_noun(&self) -> Option<&NounRecord> {
        self.current
            .and_then(|pos| self.remaining.get(pos))
            .and_then(|&row| self.table.get(row))
    }

    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    /// Nouns still to be answered, in no particular order.
    pub fn remaining(&self) -> impl Iterator<Item = &NounRecord> + '_ {
        self.remaining.iter().filter_map(|&row| self.table.get(row))
    }

    pub fn level_score(&self, level: Level) -> Tally {
        self.scores.get(level)
    }

    pub fn round(&self) -> Tally {
        self.round
    }

    pub fn table(&self) -> &Arc<NounTable> {
        &self.table
    }
}
