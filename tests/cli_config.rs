//! Config file discovery and precedence

mod common;

use common::*;

#[test]
fn project_config_sets_data_file() {
    let env = TestEnv::new();
    env.write_project_file("paydesk.toml", "[storage]\nfile = \"payroll.txt\"\n");
    env.write_project_file("payroll.txt", TWO_EMPLOYEES);

    let result = env.run(&["total"]);
    assert_eq!(result.stdout, "Total Payroll: 2900.00\n");
}

#[test]
fn user_config_is_used_without_project_config() {
    let env = TestEnv::new();
    env.write_user_config("[storage]\nfile = \"from-user.txt\"\n");

    let result = env.run(&["list"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("from-user.txt").exists());
}

#[test]
fn file_flag_beats_env_and_config() {
    let env = TestEnv::new();
    env.write_project_file("paydesk.toml", "[storage]\nfile = \"config.txt\"\n");

    let result = env.run_with_env(&["-f", "flag.txt", "list"], "", &[("PAYDESK_FILE", "env.txt")]);
    assert!(result.success);
    assert!(env.project_path("flag.txt").exists());
    assert!(!env.project_path("env.txt").exists());
    assert!(!env.project_path("config.txt").exists());
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write_project_file("paydesk.toml", "[output]\ncolour = \"never\"\n");

    let result = env.run(&["list"]);
    assert!(result.success);
    assert!(result.stderr.contains(
        "[WARN] Unknown config key 'colour' in"
    ));
    assert!(result.stderr.contains("(did you mean 'color'?)"));
}

#[test]
fn broken_project_config_falls_back_to_defaults() {
    let env = TestEnv::new();
    env.write_project_file("paydesk.toml", "[storage\nfile = ");

    let result = env.run(&["list"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("employees.txt").exists());
    assert!(result.stderr.contains("ignoring config file"));
}
