//! Add-path validation errors

use crate::domain::value_objects::{max_amount, AmountError, RecordField, Role};

/// Why an add was refused. The roster is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddError {
    #[error("Invalid ID '{value}'.")]
    InvalidId { value: String },

    #[error("An employee with ID {id} already exists.")]
    DuplicateId { id: i32 },

    #[error("Invalid {field} '{value}'.")]
    InvalidAmount { field: RecordField, value: String },

    #[error("{field} cannot be negative (got {value}).")]
    NegativeAmount { field: RecordField, value: String },

    #[error("{field} cannot be larger than {} (got {value}).", max_amount())]
    AmountTooLarge { field: RecordField, value: String },

    #[error("Invalid role '{value}'. Expected one of {}.", Role::choices())]
    InvalidRole { value: String },
}

impl AddError {
    /// Attach the field an amount error came from
    pub fn from_amount(field: RecordField, err: AmountError) -> Self {
        match err {
            AmountError::Invalid { value } => AddError::InvalidAmount { field, value },
            AmountError::Negative { value } => AddError::NegativeAmount { field, value },
            AmountError::TooLarge { value } => AddError::AmountTooLarge { field, value },
        }
    }
}
