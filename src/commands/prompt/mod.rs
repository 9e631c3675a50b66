// src/commands/prompt/mod.rs
use crate::commands::{Command, CommandContext, CommandError, CommandResult};

pub struct PromptCommand;

impl Command for PromptCommand {
    fn name(&self) -> &'static str {
        "prompt"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return Err(CommandError::new("prompt", "Not enough arguments"));
        }
        // every word keeps a trailing space, so "prompt %" gives "% "
        let prompt: String = ctx.args.iter().map(|w| format!("{} ", w)).collect();
        ctx.state.set_prompt(prompt);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::run;
    use crate::fs::InodeState;

    #[test]
    fn test_prompt_set() {
        let mut state = InodeState::new();
        run(&PromptCommand, &mut state, &["my", "shell>"]).unwrap();
        assert_eq!(state.prompt(), "my shell> ");
    }

    #[test]
    fn test_prompt_requires_args() {
        let mut state = InodeState::new();
        let err = run(&PromptCommand, &mut state, &[]).unwrap_err();
        assert_eq!(err.to_string(), "prompt: Not enough arguments");
        assert_eq!(state.prompt(), crate::fs::DEFAULT_PROMPT);
    }
}
