//! Path Resolution
//!
//! Paths are split on `/` with empty segments dropped, then walked one
//! segment at a time from the root (absolute paths) or from the working
//! directory (relative paths). Resolution never touches the session state;
//! callers commit the result only once the whole walk succeeded.

use tracing::trace;

use super::state::{InodeState, ROOT_SEGMENT};
use super::types::*;

pub const SEPARATOR: char = '/';

/// Splits a path into its non-empty segments. `""` and `"/"` both yield no
/// segments, which resolves to the starting directory.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty()).collect()
}

pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Directory a walk of `path` begins at.
pub fn start_of(state: &InodeState, path: &str) -> InodeNr {
    if is_absolute(path) {
        state.root()
    } else {
        state.cwd()
    }
}

/// Parent directory of a path plus the name of its final segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub dir: InodeNr,
    /// `None` when the path had no segments (`/`, or empty).
    pub name: Option<String>,
}

fn step(state: &InodeState, dir: InodeNr, segment: &str) -> Result<InodeNr, FsError> {
    if !state.fs().contents(dir)?.is_directory() {
        return Err(FsError::NotADirectory(segment.to_string()));
    }
    let next = state
        .fs()
        .lookup(dir, segment)?
        .ok_or_else(|| FsError::NotFound(segment.to_string()))?;
    trace!(dir, segment, next, "path step");
    Ok(next)
}

fn walk(state: &InodeState, start: InodeNr, segments: &[&str]) -> Result<InodeNr, FsError> {
    let mut current = start;
    for (i, segment) in segments.iter().enumerate() {
        // every node we descend through must be a directory
        if i > 0 && !state.fs().contents(current)?.is_directory() {
            return Err(FsError::NotADirectory(segments[i - 1].to_string()));
        }
        current = step(state, current, segment)?;
    }
    Ok(current)
}

/// Resolves every segment of `path`, returning the node it names.
pub fn resolve(state: &InodeState, path: &str) -> Result<InodeNr, FsError> {
    walk(state, start_of(state, path), &split_path(path))
}

/// Resolves all but the last segment, which must land on a directory.
pub fn resolve_parent(state: &InodeState, path: &str) -> Result<ParentRef, FsError> {
    let segments = split_path(path);
    let start = start_of(state, path);
    let Some((last, init)) = segments.split_last() else {
        return Ok(ParentRef { dir: start, name: None });
    };
    let dir = walk(state, start, init)?;
    if !state.fs().contents(dir)?.is_directory() {
        let name = init.last().copied().unwrap_or(ROOT_SEGMENT);
        return Err(FsError::NotADirectory(name.to_string()));
    }
    Ok(ParentRef {
        dir,
        name: Some(last.to_string()),
    })
}

/// Resolves `path` to a directory and computes the pwd stack that goes with
/// it. `"."` leaves the stack alone, `".."` pops one segment (never the root
/// marker), any other name is pushed.
pub fn resolve_directory_with_pwd(
    state: &InodeState,
    path: &str,
) -> Result<(InodeNr, Vec<String>), FsError> {
    let mut pwd: Vec<String> = if is_absolute(path) {
        vec![ROOT_SEGMENT.to_string()]
    } else {
        state.pwd().to_vec()
    };
    let mut current = start_of(state, path);
    for segment in split_path(path) {
        current = step(state, current, segment)?;
        match segment {
            "." => {}
            ".." => {
                if pwd.len() > 1 {
                    pwd.pop();
                }
            }
            name => pwd.push(format!("{}/", name)),
        }
    }
    if !state.fs().contents(current)?.is_directory() {
        return Err(FsError::NotADirectory(path.to_string()));
    }
    Ok((current, pwd))
}
