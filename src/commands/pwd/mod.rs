// src/commands/pwd/mod.rs
use crate::commands::{Command, CommandContext, CommandError, CommandResult};

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if !ctx.args.is_empty() {
            return Err(CommandError::new("pwd", "Too many arguments"));
        }
        let pwd = ctx.state.pwd_string();
        ctx.println(pwd);
        Ok(())
    }
}
