// src/commands/cat/mod.rs
use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::{resolve, FsError};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let args = ctx.args;
        if args.is_empty() {
            return Err(CommandError::new("cat", "Not enough arguments"));
        }

        for path in args {
            let nr = resolve(ctx.state, path).map_err(|e| match e {
                FsError::NotFound(_) | FsError::NotADirectory(_) => {
                    CommandError::new("cat", format!("{}: No such file or directory", path))
                }
                other => CommandError::fs("cat", other),
            })?;
            let contents = ctx
                .state
                .fs()
                .contents(nr)
                .map_err(|e| CommandError::fs("cat", e))?;
            let line = contents
                .read()
                .map_err(|e| CommandError::new("cat", format!("{}: {}", path, e)))?
                .join(" ");
            ctx.println(line);
        }
        Ok(())
    }
}
