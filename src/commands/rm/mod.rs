// src/commands/rm/mod.rs
use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::{is_dot_entry, resolve_parent};

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    /// Removes a plain file, or a directory holding nothing but "." and "..".
    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let path = match ctx.args {
            [] => return Ok(()),
            [path] => path,
            _ => return Err(CommandError::new("rm", "too many arguments")),
        };
        let no_such = || CommandError::new("rm", format!("{}: No such file or directory", path));

        let parent = resolve_parent(ctx.state, path).map_err(|_| no_such())?;
        let Some(name) = parent.name else {
            return Err(CommandError::new("rm", "Cannot delete root directory"));
        };
        if is_dot_entry(&name) {
            return Err(CommandError::new("rm", format!("{}: Cannot delete this directory", path)));
        }

        let fs = ctx.state.fs();
        let target = fs
            .lookup(parent.dir, &name)
            .map_err(|e| CommandError::fs("rm", e))?
            .ok_or_else(no_such)?;
        let contents = fs.contents(target).map_err(|e| CommandError::fs("rm", e))?;
        if contents.is_directory() {
            if !contents.is_empty_directory() {
                return Err(CommandError::new("rm", "Directory is not empty, cannot delete"));
            }
            if ctx.state.is_on_cwd_path(target).map_err(|e| CommandError::fs("rm", e))? {
                return Err(CommandError::new(
                    "rm",
                    format!("{}: Cannot delete the working directory", path),
                ));
            }
        }

        ctx.state
            .fs_mut()
            .unlink(parent.dir, &name)
            .map_err(|e| CommandError::fs("rm", e))?;
        Ok(())
    }
}
