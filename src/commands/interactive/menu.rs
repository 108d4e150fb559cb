//! Menu loop over any line source and sink

use std::io::{self, BufRead, Write};

use paydesk::domain::ports::RosterRepository;
use paydesk::application::AddError;
use paydesk::domain::value_objects::{parse_amount, parse_id, RecordField, Role};
use paydesk::{NewEmployee, PayrollStore};

use crate::ui::context::UiContext;
use crate::ui::views::menu::{render_unsaved_warning, INVALID_CHOICE, INVALID_INPUT, MENU, PROMPT};
use crate::ui::views::payroll::{
    render_add_error, render_employee_added, render_invalid_id, render_not_found, render_salary,
    render_save_failed, render_saved, render_total,
};
use crate::ui::views::roster::render_roster_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddEmployee,
    DisplayAll,
    Salary,
    TotalPayroll,
    Save,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(Self::AddEmployee),
            2 => Some(Self::DisplayAll),
            3 => Some(Self::Salary),
            4 => Some(Self::TotalPayroll),
            5 => Some(Self::Save),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu until Exit is chosen or `input` is exhausted.
pub fn run_menu<R, I, O>(
    store: &mut PayrollStore<R>,
    input: &mut I,
    out: &mut O,
    ui: &UiContext,
) -> io::Result<()>
where
    R: RosterRepository,
    I: BufRead,
    O: Write,
{
    loop {
        writeln!(out)?;
        writeln!(out, "{MENU}")?;
        let Some(line) = prompt(input, out, PROMPT)? else {
            writeln!(out)?;
            break;
        };

        let choice = match line.trim().parse::<i32>() {
            Ok(n) => MenuChoice::from_number(n),
            Err(_) => {
                writeln!(out, "{INVALID_INPUT}")?;
                continue;
            }
        };

        match choice {
            Some(MenuChoice::AddEmployee) => add_employee(store, input, out, ui)?,
            Some(MenuChoice::DisplayAll) => writeln!(
                out,
                "{}",
                render_roster_table(store.list_employees(), ui.color, ui.unicode)
            )?,
            Some(MenuChoice::Salary) => show_salary(store, input, out, ui)?,
            Some(MenuChoice::TotalPayroll) => {
                writeln!(out, "{}", render_total(store.total_payroll(), ui.color))?
            }
            Some(MenuChoice::Save) => match store.save_to_file() {
                Ok(_) => writeln!(out, "{}", render_saved(ui.color))?,
                Err(err) => writeln!(out, "{}", render_save_failed(&err, ui.color))?,
            },
            Some(MenuChoice::Exit) => break,
            None => writeln!(out, "{INVALID_CHOICE}")?,
        }
    }

    if store.is_dirty() {
        writeln!(
            out,
            "{}",
            render_unsaved_warning(store.path(), ui.color, ui.unicode)
        )?;
    }
    out.flush()
}

/// Write `text` without a newline and read one line; `None` at end of input.
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn add_employee<R, I, O>(
    store: &mut PayrollStore<R>,
    input: &mut I,
    out: &mut O,
    ui: &UiContext,
) -> io::Result<()>
where
    R: RosterRepository,
    I: BufRead,
    O: Write,
{
    let Some(name) = prompt(input, out, "Enter Name: ")? else {
        return Ok(());
    };
    let Some(id) = prompt(input, out, "Enter ID: ")? else {
        return Ok(());
    };
    if let Err(err) = store.check_new_id(&id) {
        return writeln!(out, "{}", render_add_error(&err, ui.color));
    }

    let role_prompt = format!("Enter Role ({}): ", Role::choices());
    let Some(role) = prompt(input, out, &role_prompt)? else {
        return Ok(());
    };
    let Some(basic_pay) = prompt(input, out, "Enter Basic Pay: ")? else {
        return Ok(());
    };
    if let Err(err) = parse_amount(&basic_pay) {
        let err = AddError::from_amount(RecordField::BasicPay, err);
        return writeln!(out, "{}", render_add_error(&err, ui.color));
    }
    let Some(allowances) = prompt(input, out, "Enter Allowances: ")? else {
        return Ok(());
    };
    if let Err(err) = parse_amount(&allowances) {
        let err = AddError::from_amount(RecordField::Allowances, err);
        return writeln!(out, "{}", render_add_error(&err, ui.color));
    }

    let result = store.add_employee(NewEmployee {
        name: &name,
        id: &id,
        role: &role,
        basic_pay: &basic_pay,
        allowances: &allowances,
    });
    match result {
        Ok(_) => writeln!(out, "{}", render_employee_added(ui.color)),
        Err(err) => writeln!(out, "{}", render_add_error(&err, ui.color)),
    }
}

fn show_salary<R, I, O>(
    store: &PayrollStore<R>,
    input: &mut I,
    out: &mut O,
    ui: &UiContext,
) -> io::Result<()>
where
    R: RosterRepository,
    I: BufRead,
    O: Write,
{
    let Some(raw) = prompt(input, out, "Enter Employee ID: ")? else {
        return Ok(());
    };
    let Some(id) = parse_id(&raw) else {
        return writeln!(out, "{}", render_invalid_id(ui.color));
    };

    match store.calculate_salary_for(id) {
        Some((record, salary)) => writeln!(out, "{}", render_salary(record, salary)),
        None => writeln!(out, "{}", render_not_found(ui.color)),
    }
}
