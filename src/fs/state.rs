//! Filesystem state shared by every command of a session.

use tracing::{debug, trace};

use super::in_memory_fs::InMemoryFs;
use super::types::*;

pub const DEFAULT_PROMPT: &str = "% ";

/// Marker that always sits at the bottom of the pwd stack.
pub const ROOT_SEGMENT: &str = "/";

/// Saved working directory, used to undo a failed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    cwd: InodeNr,
    pwd: Vec<String>,
}

/// The inode tree plus the working directory and prompt of one session.
///
/// `pwd` is kept in lockstep with `cwd` by the callers: `pwd[0]` is always
/// `"/"` and each later segment is a directory name with a trailing `/`.
/// The setters here do no validation.
#[derive(Debug)]
pub struct InodeState {
    fs: InMemoryFs,
    cwd: InodeNr,
    pwd: Vec<String>,
    prompt: String,
}

impl InodeState {
    pub fn new() -> Self {
        let fs = InMemoryFs::new();
        let root = fs.root();
        debug!(root, prompt = DEFAULT_PROMPT, "new inode state");
        Self {
            fs,
            cwd: root,
            pwd: vec![ROOT_SEGMENT.to_string()],
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn fs(&self) -> &InMemoryFs {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut InMemoryFs {
        &mut self.fs
    }

    pub fn root(&self) -> InodeNr {
        self.fs.root()
    }

    pub fn cwd(&self) -> InodeNr {
        self.cwd
    }

    pub fn set_cwd(&mut self, nr: InodeNr) {
        self.cwd = nr;
    }

    pub fn pwd(&self) -> &[String] {
        &self.pwd
    }

    /// Pushes a directory name; the trailing separator is added here.
    pub fn add_pwd(&mut self, segment: &str) {
        self.pwd.push(format!("{}/", segment));
    }

    pub fn remove_pwd(&mut self) {
        self.pwd.pop();
    }

    pub fn reset_pwd(&mut self) {
        self.pwd = vec![ROOT_SEGMENT.to_string()];
    }

    pub fn set_pwd(&mut self, pwd: Vec<String>) {
        self.pwd = pwd;
    }

    /// Absolute path of the working directory, e.g. `/a/b`.
    pub fn pwd_string(&self) -> String {
        let joined: String = self.pwd.concat();
        if self.pwd.len() > 1 {
            joined.trim_end_matches('/').to_string()
        } else {
            joined
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            cwd: self.cwd,
            pwd: self.pwd.clone(),
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.cwd = checkpoint.cwd;
        self.pwd = checkpoint.pwd;
    }

    /// Whether `dir` is the working directory or one of its ancestors.
    pub fn is_on_cwd_path(&self, dir: InodeNr) -> Result<bool, FsError> {
        let root = self.root();
        let mut current = self.cwd;
        loop {
            if current == dir {
                return Ok(true);
            }
            if current == root {
                return Ok(false);
            }
            current = self
                .fs
                .lookup(current, "..")?
                .ok_or_else(|| FsError::NotFound("..".to_string()))?;
        }
    }

    /// Empties the subtree under `dir`, children first, and frees every
    /// descendant. Ends by clearing `dir`'s own entries, so the caller must
    /// unlink `dir` from its parent right after.
    ///
    /// Only non-empty subdirectories are descended into and "." / ".." are
    /// never followed, so the walk terminates despite the cycles.
    pub fn recursive_clear(&mut self, dir: InodeNr) -> Result<(), FsError> {
        let children: Vec<(String, InodeNr)> = self
            .fs
            .contents(dir)?
            .entries()?
            .iter()
            .filter(|(name, _)| !is_dot_entry(name))
            .map(|(name, nr)| (name.clone(), *nr))
            .collect();

        for (name, child) in children {
            let contents = self.fs.contents(child)?;
            if contents.is_directory() && contents.size() > 2 {
                trace!(dir, name = %name, child, "descend");
                self.recursive_clear(child)?;
            }
            self.fs.release(child);
        }

        self.fs.get_mut(dir)?.contents_mut().clear_entries()?;
        debug!(dir, "cleared directory");
        Ok(())
    }
}

impl Default for InodeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = InodeState::new();
        assert_eq!(state.cwd(), state.root());
        assert_eq!(state.pwd(), &["/".to_string()]);
        assert_eq!(state.pwd_string(), "/");
        assert_eq!(state.prompt(), DEFAULT_PROMPT);
    }

    #[test]
    fn test_pwd_string() {
        let mut state = InodeState::new();
        state.add_pwd("a");
        state.add_pwd("b");
        assert_eq!(state.pwd_string(), "/a/b");
        state.remove_pwd();
        assert_eq!(state.pwd_string(), "/a");
        state.reset_pwd();
        assert_eq!(state.pwd_string(), "/");
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut state = InodeState::new();
        let a = state.fs_mut().mkdir(1, "a").unwrap();
        let saved = state.checkpoint();
        state.set_cwd(a);
        state.add_pwd("a");
        state.restore(saved);
        assert_eq!(state.cwd(), 1);
        assert_eq!(state.pwd_string(), "/");
    }

    #[test]
    fn test_recursive_clear_frees_subtree() {
        let mut state = InodeState::new();
        let fs = state.fs_mut();
        let a = fs.mkdir(1, "a").unwrap();
        let b = fs.mkdir(a, "b").unwrap();
        let c = fs.mkdir(b, "c").unwrap();
        let f = fs.mkfile(c, "f").unwrap();
        let empty = fs.mkdir(a, "empty").unwrap();
        assert_eq!(fs.len(), 6);

        state.recursive_clear(a).unwrap();
        for nr in [b, c, f, empty] {
            assert!(!state.fs().contains(nr));
        }
        assert_eq!(state.fs().contents(a).unwrap().size(), 0);

        state.fs_mut().unlink(1, "a").unwrap();
        assert_eq!(state.fs().len(), 1);
        assert_eq!(state.fs().contents(1).unwrap().size(), 2);
    }

    #[test]
    fn test_is_on_cwd_path() {
        let mut state = InodeState::new();
        let a = state.fs_mut().mkdir(1, "a").unwrap();
        let b = state.fs_mut().mkdir(a, "b").unwrap();
        let other = state.fs_mut().mkdir(1, "other").unwrap();
        state.set_cwd(b);
        assert!(state.is_on_cwd_path(b).unwrap());
        assert!(state.is_on_cwd_path(a).unwrap());
        assert!(state.is_on_cwd_path(1).unwrap());
        assert!(!state.is_on_cwd_path(other).unwrap());
    }
}
