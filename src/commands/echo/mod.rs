// src/commands/echo/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let output = ctx.args.join(" ");
        ctx.println(output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::run;
    use crate::fs::InodeState;

    #[test]
    fn test_echo_words() {
        let mut state = InodeState::new();
        let out = run(&EchoCommand, &mut state, &["one", "two", "three"]).unwrap();
        assert_eq!(out, "one two three\n");
    }

    #[test]
    fn test_echo_empty() {
        let mut state = InodeState::new();
        assert_eq!(run(&EchoCommand, &mut state, &[]).unwrap(), "\n");
    }

    #[test]
    fn test_echo_does_not_resolve_paths() {
        let mut state = InodeState::new();
        assert_eq!(run(&EchoCommand, &mut state, &["/no/such"]).unwrap(), "/no/such\n");
    }
}
