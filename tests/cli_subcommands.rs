//! One-shot subcommands in text and JSON mode

mod common;

use common::*;

#[test]
fn list_prints_table() {
    let env = TestEnv::with_data(TWO_EMPLOYEES);
    let result = env.run(&["list"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        result.stdout,
        "\
ID | Name  | Role      | Basic Pay | Allowances | Net Salary
---+-------+-----------+-----------+------------+-----------
 1 | Alice | Manager   |      1000 |        200 |    1100.00
 2 | Bob   | Developer |      2000 |          0 |    1800.00
"
    );
    assert_eq!(result.stderr, "");
}

#[test]
fn list_on_first_run() {
    let env = TestEnv::new();
    let result = env.run(&["list"]);

    assert_eq!(result.stdout, "No employees to display.\n");
    assert!(result
        .stderr
        .contains("No employee data file found. A new file has been created."));
}

#[test]
fn salary_found() {
    let env = TestEnv::with_data(TWO_EMPLOYEES);
    let result = env.run(&["salary", "2"]);
    assert_eq!(result.stdout, "Salary for Bob (Developer): 1800.00\n");
}

#[test]
fn salary_missing_exits_non_zero() {
    let env = TestEnv::with_data(TWO_EMPLOYEES);
    let result = env.run(&["salary", "99"]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stdout, "Employee not found.\n");
}

#[test]
fn salary_invalid_id() {
    let env = TestEnv::with_data(TWO_EMPLOYEES);
    let result = env.run(&["salary", "abc"]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stdout, "Invalid ID.\n");
}

#[test]
fn total_on_empty_roster() {
    let env = TestEnv::with_data("");
    let result = env.run(&["total"]);
    assert_eq!(result.stdout, "No employees to calculate payroll.\n");
}

#[test]
fn add_rejects_duplicate_id() {
    let env = TestEnv::with_data(TWO_EMPLOYEES);
    let result = env.run(&[
        "add",
        "--name",
        "Eve",
        "--id",
        "1",
        "--role",
        "Intern",
        "--basic-pay",
        "1",
        "--allowances",
        "1",
    ]);

    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stdout, "An employee with ID 1 already exists.\n");
    assert_eq!(env.read_project_file("employees.txt"), TWO_EMPLOYEES);
}

#[test]
fn add_rejects_negative_allowances() {
    let env = TestEnv::new();
    let result = env.run(&[
        "add",
        "--name",
        "Eve",
        "--id",
        "5",
        "--role",
        "Intern",
        "--basic-pay",
        "1",
        "--allowances",
        "-1",
    ]);

    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stdout, "Allowances cannot be negative (got -1).\n");
}

#[test]
fn json_list_emits_load_then_employees() {
    let env = TestEnv::with_data(TWO_EMPLOYEES);
    let result = env.run(&["list", "--json"]);
    let events = result.json_events();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["event"], "load");
    assert_eq!(events[0]["outcome"], "loaded");
    assert_eq!(events[0]["loaded"], 2);
    assert_eq!(events[1]["event"], "employees");
    assert_eq!(events[1]["count"], 2);
    assert_eq!(events[1]["employees"][0]["name"], "Alice");
    assert_eq!(events[1]["employees"][0]["salary"], "1100.00");
}

#[test]
fn json_total_is_null_when_empty() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "total"]);
    let events = result.json_events();

    assert_eq!(events[0]["outcome"], "created_new");
    assert_eq!(events[1]["total"], serde_json::Value::Null);
}

#[test]
fn json_salary_not_found_is_an_error_event() {
    let env = TestEnv::with_data(TWO_EMPLOYEES);
    let result = env.run(&["--json", "salary", "42"]);
    let events = result.json_events();

    assert_eq!(result.exit_code, 1);
    assert_eq!(events[1]["event"], "error");
    assert_eq!(events[1]["kind"], "not_found");
}

#[test]
fn json_add_reports_the_new_employee() {
    let env = TestEnv::new();
    let result = env.run(&[
        "add",
        "--json",
        "--name",
        "Alice",
        "--id",
        "1",
        "--role",
        "Manager",
        "--basic-pay",
        "1000",
        "--allowances",
        "200",
    ]);
    let events = result.json_events();

    assert_eq!(events[1]["event"], "employee_added");
    assert_eq!(events[1]["employee"]["role"], "Manager");
    assert_eq!(events[1]["path"], "employees.txt");
}

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);
    assert!(result.success);
    for name in ["list", "salary", "total", "add"] {
        assert!(result.stdout.contains(name), "missing {name}: {}", result.stdout);
    }
}
