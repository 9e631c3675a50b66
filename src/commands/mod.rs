// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod echo;
pub mod exit;
pub mod ls;
pub mod lsr;
pub mod make;
pub mod mkdir;
pub mod prompt;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod rmr;
pub mod types;

pub use registry::{dispatch, find_command, CommandRegistry};
pub use types::{Command, CommandContext, CommandError, CommandResult};
