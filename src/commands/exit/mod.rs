//! exit - end the session
//!
//! The handler never terminates the process. It reports the requested
//! status through [`CommandError::Exit`] and the session decides what to do.

use crate::commands::{Command, CommandContext, CommandError, CommandResult};

/// Status used when the argument is not a number.
pub const NON_NUMERIC_STATUS: i32 = 127;

pub struct ExitCommand;

/// Parses the optional status argument. Values wrap modulo 256.
pub fn parse_status(args: &[String]) -> i32 {
    match args.first() {
        None => 0,
        Some(arg) => match arg.parse::<i64>() {
            Ok(parsed) => parsed.rem_euclid(256) as i32,
            Err(_) => NON_NUMERIC_STATUS,
        },
    }
}

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        Err(CommandError::Exit(parse_status(ctx.args)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::run;
    use crate::fs::InodeState;

    fn args(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exit_no_args() {
        assert_eq!(parse_status(&[]), 0);
    }

    #[test]
    fn test_exit_with_code() {
        assert_eq!(parse_status(&args(&["5"])), 5);
        assert_eq!(parse_status(&args(&["300"])), 44);
        assert_eq!(parse_status(&args(&["-1"])), 255);
    }

    #[test]
    fn test_exit_non_numeric() {
        assert_eq!(parse_status(&args(&["abc"])), 127);
    }

    #[test]
    fn test_exit_signal() {
        let mut state = InodeState::new();
        let result = run(&ExitCommand, &mut state, &["3"]);
        assert_eq!(result, Err(CommandError::Exit(3)));
    }
}
