// src/commands/make/mod.rs
use tracing::debug;

use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::{resolve_parent, FsError};

pub struct MakeCommand;

impl Command for MakeCommand {
    fn name(&self) -> &'static str {
        "make"
    }

    /// `make PATH [WORD...]` creates or overwrites a plain file.
    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let Some((path, words)) = ctx.args.split_first() else {
            return Err(CommandError::new("make", "Not enough arguments"));
        };

        let parent = resolve_parent(ctx.state, path).map_err(|e| match e {
            FsError::NotFound(seg) => {
                CommandError::new("make", format!("{}: Directory does not exist", seg))
            }
            FsError::NotADirectory(seg) => {
                CommandError::new("make", format!("{}: Not a directory", seg))
            }
            other => CommandError::fs("make", other),
        })?;
        let Some(name) = parent.name else {
            return Err(CommandError::new("make", format!("{}: is a directory", path)));
        };

        let fs = ctx.state.fs_mut();
        let nr = match fs.lookup(parent.dir, &name).map_err(|e| CommandError::fs("make", e))? {
            Some(existing) => existing,
            None => fs
                .mkfile(parent.dir, &name)
                .map_err(|e| CommandError::fs("make", e))?,
        };
        fs.get_mut(nr)
            .map_err(|e| CommandError::fs("make", e))?
            .contents_mut()
            .write(words)
            .map_err(|e| CommandError::new("make", format!("{}: {}", name, e)))?;
        debug!(path = %path, nr, words = words.len(), "make");
        Ok(())
    }
}
