//! PayrollStore use case

use std::path::Path;

use rust_decimal::Decimal;

use crate::domain::entities::{EmployeeRecord, Roster};
use crate::domain::ports::{LineProblem, RosterError, RosterRepository, StoredRoster};
use crate::domain::value_objects::{parse_amount, parse_id, RecordField, Role};

use super::error::AddError;
use super::report::{LineDiagnostic, LoadOutcome, LoadReport, SaveReport};

/// Raw text of a new employee, exactly as typed
#[derive(Debug, Clone, Copy, Default)]
pub struct NewEmployee<'a> {
    pub name: &'a str,
    pub id: &'a str,
    pub role: &'a str,
    pub basic_pay: &'a str,
    pub allowances: &'a str,
}

pub struct PayrollStore<R: RosterRepository> {
    repository: R,
    roster: Roster,
    dirty: bool,
    /// The last load failed, so the file may hold records we never saw.
    load_failed: bool,
}

impl<R: RosterRepository> PayrollStore<R> {
    /// An empty store. Nothing is read until `load_from_file`.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            roster: Roster::new(),
            dirty: false,
            load_failed: false,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn path(&self) -> &Path {
        self.repository.location()
    }

    /// Records added since the last successful save or load
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Validate an id for the add path: it must parse and be unused.
    pub fn check_new_id(&self, raw: &str) -> Result<i32, AddError> {
        let id = parse_id(raw).ok_or_else(|| AddError::InvalidId {
            value: raw.trim().to_string(),
        })?;
        if self.roster.contains_id(id) {
            return Err(AddError::DuplicateId { id });
        }
        Ok(id)
    }

    /// Validate raw input and append the record.
    ///
    /// Checks id, basic pay, allowances, then role; the first failure wins and
    /// nothing is appended.
    pub fn add_employee(&mut self, input: NewEmployee<'_>) -> Result<&EmployeeRecord, AddError> {
        let id = self.check_new_id(input.id)?;
        let basic_pay = parse_amount(input.basic_pay)
            .map_err(|e| AddError::from_amount(RecordField::BasicPay, e))?;
        let allowances = parse_amount(input.allowances)
            .map_err(|e| AddError::from_amount(RecordField::Allowances, e))?;
        let role: Role = input.role.parse().map_err(|_| AddError::InvalidRole {
            value: input.role.trim().to_string(),
        })?;

        let record = EmployeeRecord::new(id, input.name.trim(), role, basic_pay, allowances);
        let added = self
            .roster
            .insert(record)
            .ok_or(AddError::DuplicateId { id })?;
        self.dirty = true;
        tracing::info!(id, role = %role, "employee added");
        Ok(added)
    }

    /// Every record, in insertion order
    pub fn list_employees(&self) -> &[EmployeeRecord] {
        self.roster.all()
    }

    pub fn find_by_id(&self, id: i32) -> Option<&EmployeeRecord> {
        self.roster.find(id)
    }

    pub fn calculate_salary_for(&self, id: i32) -> Option<(&EmployeeRecord, Decimal)> {
        self.find_by_id(id)
            .map(|record| (record, record.calculate_salary()))
    }

    /// `None` when there are no employees, so an empty roster never reads as 0.
    pub fn total_payroll(&self) -> Option<Decimal> {
        self.roster.total_salary()
    }

    /// Rewrite the data file with the current roster.
    ///
    /// On failure the roster is kept and stays dirty. After a failed load the
    /// file is never overwritten; a later successful load lifts that.
    pub fn save_to_file(&mut self) -> Result<SaveReport, RosterError> {
        if self.load_failed {
            tracing::warn!(path = %self.path().display(), "not saving over a file that failed to load");
            return Err(RosterError::NotLoaded {
                path: self.path().to_path_buf(),
            });
        }
        if let Err(e) = self.repository.save(self.roster.all()) {
            tracing::warn!(error = %e, "save failed");
            return Err(e);
        }
        self.dirty = false;
        Ok(SaveReport {
            path: self.path().to_path_buf(),
            saved: self.roster.len(),
        })
    }

    /// Replace the roster with the data file's content.
    ///
    /// The roster is cleared first, so after an error it is empty.
    pub fn load_from_file(&mut self) -> Result<LoadReport, RosterError> {
        self.roster.clear();
        self.dirty = false;

        let stored = match self.repository.load() {
            Ok(stored) => stored,
            Err(e) => {
                self.load_failed = true;
                return Err(e);
            }
        };
        self.load_failed = false;
        let mut skipped = Vec::new();

        let outcome = match stored {
            StoredRoster::Created => LoadOutcome::CreatedNew,
            StoredRoster::Empty => LoadOutcome::Empty,
            StoredRoster::Lines(lines) => {
                for line in lines {
                    let problem = match line.record {
                        Ok(record) => {
                            let id = record.id();
                            if self.roster.insert(record).is_some() {
                                continue;
                            }
                            LineProblem::DuplicateId { id }
                        }
                        Err(problem) => problem,
                    };
                    tracing::warn!(line = line.line_no, %problem, "skipping line");
                    skipped.push(LineDiagnostic {
                        line_no: line.line_no,
                        content: line.content,
                        problem,
                    });
                }

                if self.roster.is_empty() {
                    LoadOutcome::NoValidRecords
                } else {
                    LoadOutcome::Loaded {
                        count: self.roster.len(),
                    }
                }
            }
        };

        tracing::debug!(?outcome, skipped = skipped.len(), "load finished");
        Ok(LoadReport {
            path: self.path().to_path_buf(),
            outcome,
            skipped,
        })
    }
}
