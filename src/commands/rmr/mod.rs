// src/commands/rmr/mod.rs
use tracing::debug;

use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::{is_dot_entry, resolve_parent};

pub struct RmrCommand;

impl Command for RmrCommand {
    fn name(&self) -> &'static str {
        "rmr"
    }

    /// Removes a file, or a directory together with everything below it.
    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let path = match ctx.args {
            [] => return Err(CommandError::new("rmr", "Not enough arguments")),
            [path] => path,
            _ => return Err(CommandError::new("rmr", "too many arguments")),
        };

        let parent = resolve_parent(ctx.state, path)
            .map_err(|_| CommandError::new("rmr", format!("{}: No such directory", path)))?;
        let Some(name) = parent.name else {
            return Err(CommandError::new("rmr", "Cannot delete root directory"));
        };
        if is_dot_entry(&name) {
            return Err(CommandError::new("rmr", "Cannot delete this directory"));
        }

        let target = ctx
            .state
            .fs()
            .lookup(parent.dir, &name)
            .map_err(|e| CommandError::fs("rmr", e))?
            .ok_or_else(|| {
                CommandError::new("rmr", format!("{}: No such file or directory", path))
            })?;

        let is_dir = ctx
            .state
            .fs()
            .contents(target)
            .map_err(|e| CommandError::fs("rmr", e))?
            .is_directory();
        if is_dir {
            if ctx.state.is_on_cwd_path(target).map_err(|e| CommandError::fs("rmr", e))? {
                return Err(CommandError::new(
                    "rmr",
                    format!("{}: Cannot delete the working directory", path),
                ));
            }
            ctx.state
                .recursive_clear(target)
                .map_err(|e| CommandError::fs("rmr", e))?;
        }
        ctx.state
            .fs_mut()
            .unlink(parent.dir, &name)
            .map_err(|e| CommandError::fs("rmr", e))?;
        debug!(path = %path, target, "removed recursively");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::run;
    use crate::fs::{resolve, InodeState};

    fn state_with_tree() -> InodeState {
        let mut state = InodeState::new();
        let fs = state.fs_mut();
        let a = fs.mkdir(1, "a").unwrap();
        let b = fs.mkdir(a, "b").unwrap();
        let c = fs.mkdir(b, "c").unwrap();
        fs.mkfile(c, "deep").unwrap();
        fs.mkfile(a, "f").unwrap();
        fs.mkdir(a, "empty").unwrap();
        fs.mkdir(1, "keep").unwrap();
        state
    }

    #[test]
    fn test_rmr_tree() {
        let mut state = state_with_tree();
        let before = state.fs().contents(1).unwrap().size();
        run(&RmrCommand, &mut state, &["a"]).unwrap();
        assert!(resolve(&state, "a").is_err());
        assert_eq!(state.fs().contents(1).unwrap().size(), before - 1);
        // root and keep are all that is left
        assert_eq!(state.fs().len(), 2);
    }

    #[test]
    fn test_rmr_nested_path() {
        let mut state = state_with_tree();
        run(&RmrCommand, &mut state, &["/a/b"]).unwrap();
        assert!(resolve(&state, "a/b").is_err());
        assert!(resolve(&state, "a/f").is_ok());
    }

    #[test]
    fn test_rmr_file() {
        let mut state = state_with_tree();
        run(&RmrCommand, &mut state, &["a/f"]).unwrap();
        assert!(resolve(&state, "a/f").is_err());
    }

    #[test]
    fn test_rmr_refuses_root_and_dots() {
        let mut state = state_with_tree();
        let err = run(&RmrCommand, &mut state, &["/"]).unwrap_err();
        assert_eq!(err.to_string(), "rmr: Cannot delete root directory");
        let err = run(&RmrCommand, &mut state, &["."]).unwrap_err();
        assert_eq!(err.to_string(), "rmr: Cannot delete this directory");
        let err = run(&RmrCommand, &mut state, &["a/.."]).unwrap_err();
        assert_eq!(err.to_string(), "rmr: Cannot delete this directory");
    }

    #[test]
    fn test_rmr_missing() {
        let mut state = state_with_tree();
        let err = run(&RmrCommand, &mut state, &["a/zz"]).unwrap_err();
        assert_eq!(err.to_string(), "rmr: a/zz: No such file or directory");
        let err = run(&RmrCommand, &mut state, &["zz/a"]).unwrap_err();
        assert_eq!(err.to_string(), "rmr: zz/a: No such directory");
    }

    #[test]
    fn test_rmr_working_directory_ancestor() {
        let mut state = state_with_tree();
        let c = resolve(&state, "a/b/c").unwrap();
        state.set_cwd(c);
        let err = run(&RmrCommand, &mut state, &["/a"]).unwrap_err();
        assert_eq!(err.to_string(), "rmr: /a: Cannot delete the working directory");
        assert!(resolve(&state, "/a/b/c/deep").is_ok());
    }

    #[test]
    fn test_rmr_arguments() {
        let mut state = state_with_tree();
        let err = run(&RmrCommand, &mut state, &[]).unwrap_err();
        assert_eq!(err.to_string(), "rmr: Not enough arguments");
    }
}
