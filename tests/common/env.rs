//! Test environment for isolated paydesk runs.
//!
//! Every run uses a fresh working directory and a fresh config home, so no
//! user config or `PAYDESK_*` variable from the host leaks in.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the paydesk binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON object
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {line:?}: {e}\n{}", self.stdout))
            })
            .collect()
    }
}

pub struct TestEnv {
    /// Working directory for the run
    pub project_root: TempDir,
    /// Stand-in for the user's home and config directory
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
        }
    }

    /// Start with `employees.txt` holding `content`
    pub fn with_data(content: &str) -> Self {
        let env = Self::new();
        env.write_project_file("employees.txt", content);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn user_config_path(&self) -> PathBuf {
        self.home_dir.path().join(".config/paydesk/config.toml")
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn write_user_config(&self, content: &str) {
        let path = self.user_config_path();
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        std::fs::write(&path, content).expect("Failed to write user config");
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run paydesk with no stdin
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, "")
    }

    /// Run paydesk feeding `stdin` to the menu
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_with_env(args, stdin, &[])
    }

    pub fn run_with_env(&self, args: &[&str], stdin: &str, env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(self.project_root.path());
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute paydesk");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");
        let output = child.wait_with_output().expect("Failed to wait for paydesk");
        output_to_result(output)
    }

    fn command(&self, cwd: &Path) -> Command {
        let home = self.home_dir.path();
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_paydesk"));
        cmd.current_dir(cwd)
            .env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("PAYDESK_FILE")
            .env_remove("PAYDESK_COLOR")
            .env_remove("PAYDESK_UNICODE")
            .env_remove("PAYDESK_LOG")
            .env("NO_COLOR", "1")
            .env("LC_ALL", "C")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
