//! Quiz and table error types.
//!
//! Defined in `nounsmart-core` so every front end can tell the recoverable
//! quiz states apart from load failures without string matching.

use thiserror::Error;

use crate::model::Level;

/// Errors returned by quiz session operations.
///
/// All of these are recoverable: the session state is left untouched and
/// the front end is expected to show the message and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The selected level has no nouns in the table.
    #[error("No nouns available for the Level: {0}. Please select a different level.")]
    NoNounsForLevel(Level),

    /// A question was requested before any level was selected.
    #[error("Please select a level first.")]
    NoLevelSelected,

    /// An answer was submitted with no noun on display.
    #[error("Please ask for a noun first.")]
    NoActiveQuestion,

    /// An answer was submitted after every noun of the level was answered.
    #[error("All nouns have been answered correctly. Great job!")]
    LevelComplete(Level),
}

impl QuizError {
    /// Returns `true` for states the user caused and can fix by picking
    /// another action, as opposed to a finished level.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, QuizError::LevelComplete(_))
    }
}

/// Errors that can occur while parsing a noun table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A required column is missing from the header row.
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// The table parsed but contained no usable rows.
    #[error("noun table has no usable rows")]
    Empty,

    /// The CSV itself is malformed.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}
