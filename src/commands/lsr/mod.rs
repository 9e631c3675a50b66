// src/commands/lsr/mod.rs
use crate::commands::ls::{list_entries, target_directory};
use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::{is_dot_entry, FsError, InMemoryFs, InodeNr};

pub struct LsrCommand;

fn header(label: &str) -> String {
    let trimmed = label.trim_end_matches('/');
    if trimmed.is_empty() {
        "/:".to_string()
    } else {
        format!("{}/:", trimmed)
    }
}

fn child_label(label: &str, name: &str) -> String {
    let trimmed = label.trim_end_matches('/');
    match trimmed {
        "" => format!("/{}", name),
        "." => name.to_string(),
        _ => format!("{}/{}", trimmed, name),
    }
}

/// Lists `dir`, then every subdirectory below it, depth first in name order.
fn list_recursive(
    fs: &InMemoryFs,
    dir: InodeNr,
    label: &str,
    out: &mut String,
) -> Result<(), FsError> {
    out.push_str(&header(label));
    out.push('\n');
    list_entries(fs, dir, out)?;

    let mut subdirs = Vec::new();
    for (name, nr) in fs.contents(dir)?.entries()? {
        if !is_dot_entry(name) && fs.contents(*nr)?.is_directory() {
            subdirs.push((name, *nr));
        }
    }
    for (name, nr) in subdirs {
        list_recursive(fs, nr, &child_label(label, name), out)?;
    }
    Ok(())
}

impl Command for LsrCommand {
    fn name(&self) -> &'static str {
        "lsr"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let (dir, label) =
            target_directory("lsr", ctx.state, ctx.args, "Directory does not exist")?;
        list_recursive(ctx.state.fs(), dir, &label, ctx.stdout)
            .map_err(|e| CommandError::fs("lsr", e))
    }
}
