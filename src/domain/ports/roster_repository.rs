//! RosterRepository port
//!
//! Persists the employee roster. The repository decodes lines but does not
//! judge them against each other; duplicate ids across lines are the
//! application layer's concern.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;

use crate::domain::entities::EmployeeRecord;
use crate::domain::value_objects::RecordField;

pub trait RosterRepository {
    /// Read every stored record. A missing store is created empty.
    fn load(&self) -> Result<StoredRoster, RosterError>;

    /// Replace the stored roster with `records`, in order.
    fn save(&self, records: &[EmployeeRecord]) -> Result<(), RosterError>;

    /// Where the roster lives, for display
    fn location(&self) -> &Path;
}

/// What a repository found when loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredRoster {
    /// Nothing was stored; an empty store has just been created.
    Created,
    /// The store exists but holds no lines.
    Empty,
    /// One entry per non-blank line, in file order.
    Lines(Vec<DecodedLine>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine {
    /// 1-based line number
    pub line_no: usize,
    /// The raw line as stored; invalid UTF-8 is replaced with U+FFFD
    pub content: String,
    pub record: Result<EmployeeRecord, LineProblem>,
}

/// Why one stored line could not become a record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineProblem {
    #[error("expected 5 fields, found {found}")]
    FieldCount { found: usize },

    #[error("{field} '{value}' is not a number")]
    InvalidNumber { field: RecordField, value: String },

    #[error("{field} '{value}' is negative")]
    NegativeAmount { field: RecordField, value: String },

    #[error("unknown role '{value}'")]
    InvalidRole { value: String },

    #[error("{field} '{value}' is larger than {max}")]
    AmountTooLarge {
        field: RecordField,
        value: String,
        max: Decimal,
    },

    #[error("line is not valid UTF-8 text")]
    NotText,

    #[error("id {id} is already used by an earlier line")]
    DuplicateId { id: i32 },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("failed to access employee data file {path}: {message}")]
    Access { path: PathBuf, message: String },

    #[error("refusing to overwrite {path}: it could not be read when loading")]
    NotLoaded { path: PathBuf },
}

impl RosterError {
    pub fn access(path: &Path, err: impl std::fmt::Display) -> Self {
        RosterError::Access {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
