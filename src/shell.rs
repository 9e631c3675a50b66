//! Shell Session
//!
//! Main entry point for a yshell session. Ties together the inode state and
//! the command table: lines are split into words, dispatched, and their
//! output and failures collected into an [`ExecResult`].

use tracing::{debug, info};

use crate::commands::{dispatch, CommandError};
use crate::fs::InodeState;

/// Options for creating a session.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Initial prompt (defaults to `"% "`)
    pub prompt: Option<String>,
}

/// Output of one line or script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecResult {
    pub fn new(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }
}

/// Splits a command line into words. Blank lines and `#` comments yield
/// nothing.
pub fn tokenize(line: &str) -> Vec<String> {
    let words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    match words.first() {
        Some(first) if first.starts_with('#') => Vec::new(),
        _ => words,
    }
}

/// One interactive session over a fresh in-memory tree.
pub struct Shell {
    state: InodeState,
    exit_status: i32,
    exited: bool,
}

impl Shell {
    pub fn new(options: ShellOptions) -> Self {
        let mut state = InodeState::new();
        if let Some(prompt) = options.prompt {
            state.set_prompt(prompt);
        }
        Self {
            state,
            exit_status: 0,
            exited: false,
        }
    }

    pub fn state(&self) -> &InodeState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut InodeState {
        &mut self.state
    }

    pub fn prompt(&self) -> &str {
        self.state.prompt()
    }

    /// Status the process should exit with: the `exit` argument if one was
    /// given, otherwise 1 once any command has failed, otherwise 0.
    pub fn exit_status(&self) -> i32 {
        self.exit_status
    }

    /// Whether `exit` has been run. Later lines are ignored.
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Executes a single command line.
    pub fn exec_line(&mut self, line: &str) -> ExecResult {
        if self.exited {
            return ExecResult::new(String::new(), String::new(), self.exit_status);
        }
        let words = tokenize(line);
        let Some((name, args)) = words.split_first() else {
            return ExecResult::default();
        };

        let mut stdout = String::new();
        match dispatch(&mut self.state, name, args, &mut stdout) {
            Ok(()) => ExecResult::new(stdout, String::new(), 0),
            Err(CommandError::Exit(status)) => {
                info!(status, "exit requested");
                self.exit_status = status;
                self.exited = true;
                ExecResult::new(stdout, String::new(), status)
            }
            Err(err) => {
                self.exit_status = 1;
                ExecResult::new(stdout, format!("{}\n", err), 1)
            }
        }
    }

    /// Executes every line of `script`, stopping after `exit`. The result's
    /// exit code is the session status afterwards.
    pub fn exec(&mut self, script: &str) -> ExecResult {
        let mut result = ExecResult::default();
        for line in script.lines() {
            if self.exited {
                break;
            }
            let line_result = self.exec_line(line);
            result.stdout.push_str(&line_result.stdout);
            result.stderr.push_str(&line_result.stderr);
        }
        result.exit_code = self.exit_status;
        debug!(exit_code = result.exit_code, "script finished");
        result
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  make  f   a b "), vec!["make", "f", "a", "b"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("# comment line").is_empty());
        assert_eq!(tokenize("echo # not a comment"), vec!["echo", "#", "not", "a", "comment"]);
    }

    #[test]
    fn test_exec_line_success() {
        let mut shell = Shell::default();
        let result = shell.exec_line("echo one two three");
        assert_eq!(result, ExecResult::new("one two three\n".to_string(), String::new(), 0));
    }

    #[test]
    fn test_exec_line_failure() {
        let mut shell = Shell::default();
        let result = shell.exec_line("cat nope");
        assert_eq!(result.stderr, "cat: nope: No such file or directory\n");
        assert_eq!(result.exit_code, 1);
        assert_eq!(shell.exit_status(), 1);

        // a later success does not clear the session status
        assert_eq!(shell.exec_line("echo ok").exit_code, 0);
        assert_eq!(shell.exit_status(), 1);
    }

    #[test]
    fn test_unknown_command() {
        let mut shell = Shell::default();
        let result = shell.exec_line("frob x");
        assert_eq!(result.stderr, "frob: no such command\n");
    }

    #[test]
    fn test_exit_stops_script() {
        let mut shell = Shell::default();
        let result = shell.exec("echo a\nexit 4\necho b\n");
        assert_eq!(result.stdout, "a\n");
        assert_eq!(result.exit_code, 4);
        assert!(shell.has_exited());
        assert_eq!(shell.exec_line("echo c").stdout, "");
    }

    #[test]
    fn test_prompt_option() {
        let shell = Shell::new(ShellOptions { prompt: Some("$ ".to_string()) });
        assert_eq!(shell.prompt(), "$ ");
        assert_eq!(Shell::default().prompt(), crate::fs::DEFAULT_PROMPT);
    }
}
