//! Line codec for the employee data file
//!
//! One record per line: `name,id,role,basicPay,allowances`.
//!
//! Inside a field, `\` is written as `\\`, `,` as `\,`, a newline as `\n` and
//! a carriage return as `\r`. Lines without backslashes decode exactly as the
//! plain comma-separated format always has, so older files stay readable.

use crate::domain::entities::EmployeeRecord;
use crate::domain::ports::LineProblem;
use crate::domain::value_objects::{
    max_amount, parse_amount, parse_id, AmountError, RecordField, Role,
};

const FIELD_COUNT: usize = 5;

/// Encode one record as a single line, without the terminator.
pub fn encode_record(record: &EmployeeRecord) -> String {
    format!(
        "{},{},{},{},{}",
        escape_field(record.name()),
        record.id(),
        record.role(),
        record.basic_pay(),
        record.allowances()
    )
}

/// Decode one line. Checks run in field order: count, id, amounts, role.
pub fn decode_line(line: &str) -> Result<EmployeeRecord, LineProblem> {
    let fields = split_fields(line);
    if fields.len() != FIELD_COUNT {
        return Err(LineProblem::FieldCount {
            found: fields.len(),
        });
    }

    let id = parse_id(&fields[1]).ok_or_else(|| LineProblem::InvalidNumber {
        field: RecordField::Id,
        value: fields[1].clone(),
    })?;
    let basic_pay = decode_amount(RecordField::BasicPay, &fields[3])?;
    let allowances = decode_amount(RecordField::Allowances, &fields[4])?;
    let role: Role = fields[2].parse().map_err(|_| LineProblem::InvalidRole {
        value: fields[2].clone(),
    })?;

    Ok(EmployeeRecord::new(
        id,
        fields[0].clone(),
        role,
        basic_pay,
        allowances,
    ))
}

fn decode_amount(field: RecordField, raw: &str) -> Result<rust_decimal::Decimal, LineProblem> {
    parse_amount(raw).map_err(|e| match e {
        AmountError::Invalid { value } => LineProblem::InvalidNumber { field, value },
        AmountError::Negative { value } => LineProblem::NegativeAmount { field, value },
        AmountError::TooLarge { value } => LineProblem::AmountTooLarge {
            field,
            value,
            max: max_amount(),
        },
    })
}

pub fn escape_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Split on unescaped commas and unescape each field.
///
/// An unknown escape such as `\t` is kept verbatim, as is a trailing `\`.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\\') => current.push('\\'),
                Some(',') => current.push(','),
                Some('n') => current.push('\n'),
                Some('r') => current.push('\r'),
                Some(other) => {
                    current.push('\\');
                    current.push(other);
                }
                None => current.push('\\'),
            },
            ',' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
