// src/commands/types.rs
use thiserror::Error;
use crate::fs::{FsError, InodeState};

/// Failure of a command, shown to the user as `<command>: <message>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{command}: {message}")]
    Failed { command: &'static str, message: String },

    #[error("{command}: {source}")]
    Fs {
        command: &'static str,
        #[source]
        source: FsError,
    },

    #[error("{0}: no such command")]
    NoSuchCommand(String),

    /// Not a failure: the session should end with this status.
    #[error("exit({0})")]
    Exit(i32),
}

impl CommandError {
    pub fn new(command: &'static str, message: impl Into<String>) -> Self {
        CommandError::Failed { command, message: message.into() }
    }

    pub fn fs(command: &'static str, source: FsError) -> Self {
        CommandError::Fs { command, source }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, CommandError::Exit(_))
    }
}

pub type CommandResult = Result<(), CommandError>;

/// 命令执行上下文
pub struct CommandContext<'a> {
    /// Arguments after the command name.
    pub args: &'a [String],
    pub state: &'a mut InodeState,
    pub stdout: &'a mut String,
}

impl<'a> CommandContext<'a> {
    pub fn new(args: &'a [String], state: &'a mut InodeState, stdout: &'a mut String) -> Self {
        Self { args, state, stdout }
    }

    pub fn println(&mut self, line: impl AsRef<str>) {
        self.stdout.push_str(line.as_ref());
        self.stdout.push('\n');
    }
}

/// 命令 trait
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult;
}
