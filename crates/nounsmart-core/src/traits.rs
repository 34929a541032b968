//! Core trait definitions for quiz front ends and noun table sources.
//!
//! `PluralQuiz` is what every presentation adapter drives; `NounSource` is
//! implemented by the `nounsmart-sources` crate.

use async_trait::async_trait;
use rand::Rng;

use crate::error::QuizError;
use crate::model::Level;
use crate::report::ScoreSummary;
use crate::session::{AnswerOutcome, LevelSelection, NextQuestion, QuizSession};
use crate::table::NounTable;

// ---------------------------------------------------------------------------
// Quiz trait
// ---------------------------------------------------------------------------

/// The operations a front end may perform on a quiz.
pub trait PluralQuiz {
    /// Switch to a level. See [`QuizSession::select_level`].
    fn select_level(&mut self, level: Level) -> Result<LevelSelection, QuizError>;

    /// Refill the active level.
    fn restart_level(&mut self) -> Result<LevelSelection, QuizError>;

    /// Pick the next noun to display.
    fn next_question(&mut self) -> Result<NextQuestion, QuizError>;

    /// Score a guess for the noun on display.
    fn submit_answer(&mut self, guess: &str) -> Result<AnswerOutcome, QuizError>;

    /// Per-level totals.
    fn total_score_summary(&self) -> ScoreSummary;
}

impl<R: Rng> PluralQuiz for QuizSession<R> {
    fn select_level(&mut self, level: Level) -> Result<LevelSelection, QuizError> {
        QuizSession::select_level(self, level)
    }

    fn restart_level(&mut self) -> Result<LevelSelection, QuizError> {
        QuizSession::restart_level(self)
    }

    fn next_question(&mut self) -> Result<NextQuestion, QuizError> {
        QuizSession::next_question(self)
    }

    fn submit_answer(&mut self, guess: &str) -> Result<AnswerOutcome, QuizError> {
        QuizSession::submit_answer(self, guess)
    }

    fn total_score_summary(&self) -> ScoreSummary {
        QuizSession::total_score_summary(self)
    }
}

// ---------------------------------------------------------------------------
// Noun source trait
// ---------------------------------------------------------------------------

/// Somewhere a noun table can be loaded from.
#[async_trait]
pub trait NounSource: Send + Sync {
    /// Short source kind (e.g. "http").
    fn name(&self) -> &str;

    /// Where the table comes from, for messages.
    fn location(&self) -> String;

    /// Fetch and parse the table. Called once per process.
    async fn load(&self) -> anyhow::Result<NounTable>;
}
