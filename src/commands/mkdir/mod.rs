// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::{resolve_parent, FsError};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    /// `mkdir PATH` creates one directory holding "." and "..".
    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let path = match ctx.args {
            [] => return Err(CommandError::new("mkdir", "Not enough arguments")),
            [path] => path,
            _ => return Err(CommandError::new("mkdir", "Too many arguments")),
        };

        let parent = resolve_parent(ctx.state, path).map_err(|e| match e {
            FsError::NotFound(seg) => {
                CommandError::new("mkdir", format!("{}: No such file or directory", seg))
            }
            FsError::NotADirectory(seg) => {
                CommandError::new("mkdir", format!("{}: Not a directory", seg))
            }
            other => CommandError::fs("mkdir", other),
        })?;
        let Some(name) = parent.name else {
            return Err(CommandError::new("mkdir", format!("{}: Directory already exists", path)));
        };

        let fs = ctx.state.fs_mut();
        if fs
            .lookup(parent.dir, &name)
            .map_err(|e| CommandError::fs("mkdir", e))?
            .is_some()
        {
            return Err(CommandError::new("mkdir", format!("{}: Directory already exists", name)));
        }
        fs.mkdir(parent.dir, &name)
            .map_err(|e| CommandError::fs("mkdir", e))?;
        Ok(())
    }
}
