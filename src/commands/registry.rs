// src/commands/registry.rs
use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::debug;

use super::types::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::InodeState;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::echo::EchoCommand;
use super::exit::ExitCommand;
use super::ls::LsCommand;
use super::lsr::LsrCommand;
use super::make::MakeCommand;
use super::mkdir::MkdirCommand;
use super::prompt::PromptCommand;
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::rmr::RmrCommand;

/// Registers every shell command.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(ExitCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(LsrCommand));
    registry.register(Box::new(MakeCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(PromptCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(RmrCommand));
}

pub fn create_builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

lazy_static! {
    static ref BUILTINS: CommandRegistry = create_builtin_registry();
}

pub fn find_command(name: &str) -> Result<&'static dyn Command, CommandError> {
    BUILTINS
        .get(name)
        .ok_or_else(|| CommandError::NoSuchCommand(name.to_string()))
}

/// Runs `name` with `args` against `state`, appending its output to
/// `stdout`. On failure the working directory and pwd are put back exactly
/// as they were.
pub fn dispatch(
    state: &mut InodeState,
    name: &str,
    args: &[String],
    stdout: &mut String,
) -> CommandResult {
    let command = find_command(name)?;
    debug!(command = name, ?args, "dispatch");
    let checkpoint = state.checkpoint();
    let result = command.execute(&mut CommandContext::new(args, state, stdout));
    if let Err(err) = &result {
        if !err.is_exit() {
            debug!(command = name, error = %err, "command failed");
            state.restore(checkpoint);
        }
    }
    result
}
