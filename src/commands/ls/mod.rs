// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::{resolve, FsError, InMemoryFs, InodeNr, InodeState};

pub struct LsCommand;

/// One listing line: inode number, size, name, `/` after directories.
pub(crate) fn format_entry(nr: InodeNr, size: usize, name: &str, is_dir: bool) -> String {
    format!("{:>8}      {}  {}{}", nr, size, name, if is_dir { "/" } else { "" })
}

/// Appends one line per entry of `dir`, in name order.
pub(crate) fn list_entries(fs: &InMemoryFs, dir: InodeNr, out: &mut String) -> Result<(), FsError> {
    for (name, nr) in fs.contents(dir)?.entries()? {
        let contents = fs.contents(*nr)?;
        out.push_str(&format_entry(*nr, contents.size(), name, contents.is_directory()));
        out.push('\n');
    }
    Ok(())
}

/// Resolves the optional directory argument shared by ls and lsr. Returns
/// the directory and the label used in headers.
pub(crate) fn target_directory(
    command: &'static str,
    state: &InodeState,
    args: &[String],
    missing: &str,
) -> Result<(InodeNr, String), CommandError> {
    let path = match args {
        [] => {
            let label = if state.cwd() == state.root() { "/" } else { "." };
            return Ok((state.cwd(), label.to_string()));
        }
        [path] => path,
        _ => return Err(CommandError::new(command, "Too many arguments")),
    };

    let nr = resolve(state, path).map_err(|e| match e {
        FsError::NotFound(_) | FsError::NotADirectory(_) => {
            CommandError::new(command, format!("{}: {}", path, missing))
        }
        other => CommandError::fs(command, other),
    })?;
    let contents = state.fs().contents(nr).map_err(|e| CommandError::fs(command, e))?;
    if !contents.is_directory() {
        return Err(CommandError::new(command, format!("{}: Not a directory", path)));
    }
    Ok((nr, path.clone()))
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let (dir, label) =
            target_directory("ls", ctx.state, ctx.args, "No such file or directory")?;

        let mut listing = format!("{}:\n", label);
        list_entries(ctx.state.fs(), dir, &mut listing).map_err(|e| CommandError::fs("ls", e))?;
        ctx.stdout.push_str(&listing);
        Ok(())
    }
}
