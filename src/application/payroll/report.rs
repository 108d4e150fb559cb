//! Load and save reports

use std::path::PathBuf;

use crate::domain::ports::LineProblem;

/// How a load ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No data file existed; an empty one was created.
    CreatedNew,
    /// The data file holds no lines.
    Empty,
    /// Every line was skipped.
    NoValidRecords,
    /// At least one record was loaded.
    Loaded { count: usize },
}

/// One skipped line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    pub line_no: usize,
    pub content: String,
    pub problem: LineProblem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub path: PathBuf,
    pub outcome: LoadOutcome,
    pub skipped: Vec<LineDiagnostic>,
}

impl LoadReport {
    pub fn loaded(&self) -> usize {
        match self.outcome {
            LoadOutcome::Loaded { count } => count,
            _ => 0,
        }
    }

    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub path: PathBuf,
    pub saved: usize,
}
