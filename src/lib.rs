//! yshell - a small shell over an in-memory inode tree
//!
//! The filesystem is an arena of numbered inodes; directories map names to
//! inode numbers, including the "." and ".." entries. Commands such as
//! `make`, `mkdir`, `ls`, `lsr`, `rm` and `rmr` resolve paths against the
//! session's working directory and mutate the tree in place.

pub mod commands;
pub mod config;
pub mod fs;
pub mod logging;
pub mod shell;

pub use commands::{dispatch, CommandError};
pub use fs::{FileType, FsError, InodeNr, InodeState};
pub use shell::{ExecResult, Shell, ShellOptions};
