//! File System Module
//!
//! In-memory inode tree for the shell:
//! - types: inode numbers, node contents, errors
//! - in_memory_fs: the inode arena and allocator
//! - state: working directory, pwd stack and prompt of a session
//! - path: splitting and resolving path strings

pub mod types;
pub mod in_memory_fs;
pub mod path;
pub mod state;

pub use types::*;
pub use in_memory_fs::InMemoryFs;
pub use path::{resolve, resolve_directory_with_pwd, resolve_parent, split_path, ParentRef};
pub use state::{Checkpoint, InodeState, DEFAULT_PROMPT};
