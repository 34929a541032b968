//! Noun table: CSV parsing, per-level lookup and validation.
//!
//! The source file has a header row with at least a `singular` and a
//! `level` column. Header names are matched case-insensitively and every
//! field is trimmed.

use std::collections::HashSet;
use std::io::Read;

use serde::Serialize;

use crate::error::TableError;
use crate::model::{Level, NounRecord};
use crate::plural::rule_for;

/// Read-only list of nouns, shared between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NounTable {
    records: Vec<NounRecord>,
}

/// How many nouns a level has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelCount {
    pub level: Level,
    pub count: usize,
}

impl LevelCount {
    pub fn label(&self) -> String {
        level_label(self.level, self.count)
    }
}

/// Dropdown-style label, e.g. `"es (12 items)"`.
pub fn level_label(level: Level, count: usize) -> String {
    format!("{level} ({count} items)")
}

impl NounTable {
    pub fn new(records: Vec<NounRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[NounRecord] {
        &self.records
    }

    pub fn get(&self, row: usize) -> Option<&NounRecord> {
        self.records.get(row)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row indices of every noun in `level`, in table order.
    pub fn rows_for(&self, level: Level) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.level == level)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count(&self, level: Level) -> usize {
        self.records.iter().filter(|r| r.level == level).count()
    }

    /// Counts for every level in display order, including empty ones.
    pub fn level_counts(&self) -> Vec<LevelCount> {
        Level::ALL
            .into_iter()
            .map(|level| LevelCount {
                level,
                count: self.count(level),
            })
            .collect()
    }

    /// Parse a table from CSV text.
    pub fn from_csv_str(content: &str) -> Result<Self, TableError> {
        Self::from_csv_reader(content.as_bytes())
    }

    /// Parse a table from any CSV reader.
    ///
    /// Rows with an empty `singular` or an unknown level are skipped with a
    /// warning; they could never be asked.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(TableError::MissingColumn(name))
        };
        let singular_col = column("singular")?;
        let level_col = column("level")?;

        let mut records = Vec::new();
        for (line, row) in csv_reader.records().enumerate() {
            let row = row?;
            // Header is line 1.
            let line = line + 2;
            let singular = row.get(singular_col).unwrap_or("").trim();
            let level_raw = row.get(level_col).unwrap_or("").trim();

            if singular.is_empty() {
                tracing::warn!(line, "skipping row with empty singular");
                continue;
            }
            match Level::parse_exact(level_raw) {
                Ok(level) => records.push(NounRecord::new(singular, level)),
                Err(e) => {
                    tracing::warn!(line, singular, "skipping row: {e}");
                }
            }
        }

        if records.is_empty() {
            return Err(TableError::Empty);
        }

        tracing::debug!(rows = records.len(), "parsed noun table");
        Ok(Self { records })
    }
}

impl FromIterator<NounRecord> for NounTable {
    fn from_iter<I: IntoIterator<Item = NounRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A warning from table validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableWarning {
    /// Zero-based row index in the table.
    pub row: usize,
    pub singular: String,
    pub message: String,
}

/// Validate a table for rows that would confuse a learner.
pub fn validate_table(table: &NounTable) -> Vec<TableWarning> {
    let mut warnings = Vec::new();

    // Recorded level must match the rule the quiz will grade against
    for (row, record) in table.records().iter().enumerate() {
        let rule = rule_for(&record.singular);
        if rule != record.level {
            warnings.push(TableWarning {
                row,
                singular: record.singular.clone(),
                message: format!(
                    "listed under level '{}' but the plural rule gives '{}'",
                    record.level, rule
                ),
            });
        }
    }

    // Duplicates within a level
    let mut seen = HashSet::new();
    for (row, record) in table.records().iter().enumerate() {
        if !seen.insert((record.level, record.singular.to_lowercase())) {
            warnings.push(TableWarning {
                row,
                singular: record.singular.clone(),
                message: format!("duplicate noun in level '{}'", record.level),
            });
        }
    }

    warnings
}
