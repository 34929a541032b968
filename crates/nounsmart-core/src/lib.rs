//! nounsmart-core — Quiz session, plural rules and noun tables.
//!
//! This crate defines the data model, the pluralization rules and the
//! per-learner quiz session that every nounsmart front end builds on.

pub mod error;
pub mod model;
pub mod plural;
pub mod report;
pub mod session;
pub mod table;
pub mod traits;

pub use error::{QuizError, TableError};
pub use model::{Level, NounRecord, Tally};
pub use session::{AnswerOutcome, LevelSelection, NextQuestion, QuizSession};
pub use table::NounTable;
