//! Core data model types for nounsmart.
//!
//! These are the fundamental types shared by the quiz session, the table
//! loaders and every front end: levels, noun records and score tallies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pluralization-rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Add `-s` (`cat` -> `cats`).
    S,
    /// Add `-es` (`bus` -> `buses`).
    Es,
    /// Consonant + `y` becomes `-ies` (`city` -> `cities`).
    Ies,
}

impl Level {
    /// All levels in display order.
    pub const ALL: [Level; 3] = [Level::S, Level::Es, Level::Ies];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::S => "s",
            Level::Es => "es",
            Level::Ies => "ies",
        }
    }

    /// Parse a bare level name, ignoring case and surrounding whitespace.
    ///
    /// Unlike [`FromStr`], the whole cell must be the name, so `"es typo"`
    /// is rejected.
    pub fn parse_exact(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "s" => Ok(Level::S),
            "es" => Ok(Level::Es),
            "ies" => Ok(Level::Ies),
            _ => Err(format!("unknown level: '{}'", s.trim())),
        }
    }

    fn index(self) -> usize {
        match self {
            Level::S => 0,
            Level::Es => 1,
            Level::Ies => 2,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    /// Accepts bare names as well as dropdown labels like `"es (12 items)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.split_whitespace().next().unwrap_or("");
        Level::parse_exact(token).map_err(|_| format!("unknown level: '{}'", s.trim()))
    }
}

/// A singular noun and the level it is practised under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounRecord {
    pub singular: String,
    pub level: Level,
}

impl NounRecord {
    pub fn new(singular: impl Into<String>, level: Level) -> Self {
        Self {
            singular: singular.into(),
            level,
        }
    }
}

/// Correct answers out of scored submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub score: u32,
    pub trials: u32,
}

impl Tally {
    /// Record one submission.
    pub fn record(&mut self, correct: bool) {
        self.trials += 1;
        if correct {
            self.score += 1;
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.trials)
    }
}

/// One [`Tally`] per level; every level is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelScores([Tally; 3]);

impl LevelScores {
    pub fn get(&self, level: Level) -> Tally {
        self.0[level.index()]
    }

    pub fn get_mut(&mut self, level: Level) -> &mut Tally {
        &mut self.0[level.index()]
    }

    /// Levels paired with their tallies, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Level, Tally)> + '_ {
        Level::ALL.into_iter().map(|level| (level, self.get(level)))
    }
}
