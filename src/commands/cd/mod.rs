//! cd - change the working directory
//!
//! Supports:
//! - cd        - back to the root
//! - cd DIR    - absolute or relative, with "." and ".." segments
//!
//! The pwd stack is recomputed alongside the walk and committed together
//! with the new cwd only when the whole path resolved to a directory.

use tracing::debug;

use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::{resolve_directory_with_pwd, FsError};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let target = match ctx.args {
            [] => {
                let root = ctx.state.root();
                ctx.state.set_cwd(root);
                ctx.state.reset_pwd();
                return Ok(());
            }
            [target] => target,
            _ => return Err(CommandError::new("cd", "Too many arguments")),
        };

        let (dir, pwd) = resolve_directory_with_pwd(ctx.state, target).map_err(|e| match e {
            FsError::NotADirectory(_) | FsError::WrongType(_) => {
                CommandError::new("cd", format!("{}: Not a directory", target))
            }
            _ => CommandError::new("cd", format!("{}: No such directory", target)),
        })?;

        debug!(target = %target, dir, "change directory");
        ctx.state.set_cwd(dir);
        ctx.state.set_pwd(pwd);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::run;
    use crate::fs::InodeState;

    fn state_with_tree() -> InodeState {
        let mut state = InodeState::new();
        let fs = state.fs_mut();
        let a = fs.mkdir(1, "a").unwrap();
        fs.mkdir(a, "b").unwrap();
        fs.mkfile(a, "f").unwrap();
        state
    }

    #[test]
    fn test_cd_relative_and_back() {
        let mut state = state_with_tree();
        run(&CdCommand, &mut state, &["a/b"]).unwrap();
        assert_eq!(state.pwd_string(), "/a/b");
        let b = state.cwd();

        run(&CdCommand, &mut state, &[".."]).unwrap();
        assert_eq!(state.pwd_string(), "/a");
        run(&CdCommand, &mut state, &["b"]).unwrap();
        assert_eq!(state.cwd(), b);
    }

    #[test]
    fn test_cd_no_args_goes_to_root() {
        let mut state = state_with_tree();
        run(&CdCommand, &mut state, &["a/b"]).unwrap();
        run(&CdCommand, &mut state, &[]).unwrap();
        assert_eq!(state.cwd(), state.root());
        assert_eq!(state.pwd_string(), "/");
    }

    #[test]
    fn test_cd_root_and_dots() {
        let mut state = state_with_tree();
        run(&CdCommand, &mut state, &["a"]).unwrap();
        run(&CdCommand, &mut state, &["/"]).unwrap();
        assert_eq!(state.cwd(), 1);
        assert_eq!(state.pwd_string(), "/");

        run(&CdCommand, &mut state, &[".."]).unwrap();
        assert_eq!(state.pwd_string(), "/");
        run(&CdCommand, &mut state, &["./a/."]).unwrap();
        assert_eq!(state.pwd_string(), "/a");
    }

    #[test]
    fn test_cd_missing_restores_state() {
        let mut state = state_with_tree();
        run(&CdCommand, &mut state, &["a"]).unwrap();
        let before = state.checkpoint();

        let err = run(&CdCommand, &mut state, &["b/nope"]).unwrap_err();
        assert_eq!(err.to_string(), "cd: b/nope: No such directory");
        assert_eq!(state.checkpoint(), before);
    }

    #[test]
    fn test_cd_into_file() {
        let mut state = state_with_tree();
        let err = run(&CdCommand, &mut state, &["a/f"]).unwrap_err();
        assert_eq!(err.to_string(), "cd: a/f: Not a directory");
        assert_eq!(state.cwd(), state.root());
    }
}
