//! Score summaries shown to the learner.

use std::fmt;

use serde::Serialize;

use crate::model::{Level, LevelScores, Tally};

/// Per-level totals in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub levels: Vec<LevelTally>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelTally {
    pub level: Level,
    #[serde(flatten)]
    pub tally: Tally,
}

impl ScoreSummary {
    pub fn from_scores(scores: &LevelScores) -> Self {
        Self {
            levels: scores
                .iter()
                .map(|(level, tally)| LevelTally { level, tally })
                .collect(),
        }
    }

    /// Sum across all levels.
    pub fn total(&self) -> Tally {
        self.levels.iter().fold(Tally::default(), |acc, lt| Tally {
            score: acc.score + lt.tally.score,
            trials: acc.trials + lt.tally.trials,
        })
    }
}

impl fmt::Display for ScoreSummary {
    /// Renders as `s(1/2), es(0/0), ies(0/0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lt) in self.levels.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}({})", lt.level, lt.tally)?;
        }
        Ok(())
    }
}
