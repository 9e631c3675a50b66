//! File System Types
//!
//! Core types for the inode tree: inode numbers, the two content variants
//! and the errors raised when an operation hits the wrong variant.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Inode number. Assigned by the arena, starting at 1, never reused.
pub type InodeNr = u64;

/// Name-to-inode mapping held by a directory, sorted by name.
pub type DirectoryEntries = BTreeMap<String, InodeNr>;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    /// Operation invoked on the wrong content variant.
    #[error("is a {0}")]
    WrongType(FileType),

    #[error("{0}: No such file or directory")]
    NotFound(String),

    #[error("{0}: Not a directory")]
    NotADirectory(String),

    #[error("inode {0} is not allocated")]
    Unallocated(InodeNr),
}

/// The two kinds of node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Plain,
    Directory,
}

impl FileType {
    pub fn name(self) -> &'static str {
        match self {
            FileType::Plain => "file",
            FileType::Directory => "directory",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of an inode: a word sequence or a directory mapping.
///
/// Every accessor that only makes sense for one variant fails with
/// [`FsError::WrongType`] on the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent {
    Plain { data: Vec<String> },
    Directory { entries: DirectoryEntries },
}

impl NodeContent {
    pub fn new(file_type: FileType) -> Self {
        match file_type {
            FileType::Plain => NodeContent::Plain { data: Vec::new() },
            // "." and ".." are inserted by whoever creates the directory
            FileType::Directory => NodeContent::Directory {
                entries: DirectoryEntries::new(),
            },
        }
    }

    pub fn file_type(&self) -> FileType {
        match self {
            NodeContent::Plain { .. } => FileType::Plain,
            NodeContent::Directory { .. } => FileType::Directory,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, NodeContent::Directory { .. })
    }

    /// "file" or "directory".
    pub fn type_name(&self) -> &'static str {
        self.file_type().name()
    }

    /// Plain file: characters of every word plus one separator between
    /// words. Directory: number of entries, "." and ".." included.
    pub fn size(&self) -> usize {
        match self {
            NodeContent::Plain { data } if data.is_empty() => 0,
            NodeContent::Plain { data } => {
                data.iter().map(String::len).sum::<usize>() + data.len() - 1
            }
            NodeContent::Directory { entries } => entries.len(),
        }
    }

    pub fn read(&self) -> Result<&[String], FsError> {
        match self {
            NodeContent::Plain { data } => Ok(data),
            other => Err(FsError::WrongType(other.file_type())),
        }
    }

    /// Replaces the whole content.
    pub fn write(&mut self, words: &[String]) -> Result<(), FsError> {
        match self {
            NodeContent::Plain { data } => {
                data.clear();
                data.extend_from_slice(words);
                Ok(())
            }
            other => Err(FsError::WrongType(other.file_type())),
        }
    }

    pub fn entries(&self) -> Result<&DirectoryEntries, FsError> {
        match self {
            NodeContent::Directory { entries } => Ok(entries),
            other => Err(FsError::WrongType(other.file_type())),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Option<InodeNr>, FsError> {
        Ok(self.entries()?.get(name).copied())
    }

    /// Binds `name` to `nr`. Collisions are checked by the callers.
    pub fn insert_entry(&mut self, name: &str, nr: InodeNr) -> Result<(), FsError> {
        match self {
            NodeContent::Directory { entries } => {
                entries.insert(name.to_string(), nr);
                Ok(())
            }
            other => Err(FsError::WrongType(other.file_type())),
        }
    }

    /// Removes `name` if present. A missing name is not an error.
    pub fn remove_entry(&mut self, name: &str) -> Result<Option<InodeNr>, FsError> {
        match self {
            NodeContent::Directory { entries } => Ok(entries.remove(name)),
            other => Err(FsError::WrongType(other.file_type())),
        }
    }

    pub fn clear_entries(&mut self) -> Result<(), FsError> {
        match self {
            NodeContent::Directory { entries } => {
                entries.clear();
                Ok(())
            }
            other => Err(FsError::WrongType(other.file_type())),
        }
    }

    /// Only "." and ".." left.
    pub fn is_empty_directory(&self) -> bool {
        matches!(self, NodeContent::Directory { entries } if entries.len() <= 2)
    }
}

/// A numbered node. The number and the content variant never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inode {
    nr: InodeNr,
    contents: NodeContent,
}

impl Inode {
    pub(crate) fn with_contents(nr: InodeNr, contents: NodeContent) -> Self {
        Self { nr, contents }
    }

    pub fn nr(&self) -> InodeNr {
        self.nr
    }

    pub fn contents(&self) -> &NodeContent {
        &self.contents
    }

    pub fn contents_mut(&mut self) -> &mut NodeContent {
        &mut self.contents
    }
}

/// True for the two self-referential entries every directory carries.
pub fn is_dot_entry(name: &str) -> bool {
    name == "." || name == ".."
}
