//! In-Memory File System Implementation
//!
//! Arena of inodes keyed by inode number. Directories refer to their
//! children, themselves and their parent by number, so the "." and ".."
//! cycles never own anything. Storage is released only when a node is
//! explicitly removed.

use std::collections::HashMap;

use tracing::debug;

use super::types::*;

/// Inode arena and allocator.
///
/// Inode numbers start at 1 (the root) and grow monotonically; a released
/// number is never handed out again.
#[derive(Debug)]
pub struct InMemoryFs {
    nodes: HashMap<InodeNr, Inode>,
    next_inode_nr: InodeNr,
    root: InodeNr,
}

impl InMemoryFs {
    /// Create a filesystem holding only the root directory, whose "." and
    /// ".." both refer to itself.
    pub fn new() -> Self {
        let mut fs = Self {
            nodes: HashMap::new(),
            next_inode_nr: 1,
            root: 0,
        };
        let root = fs.next_inode_nr;
        let entries = DirectoryEntries::from([(".".to_string(), root), ("..".to_string(), root)]);
        fs.root = fs.allocate_with(NodeContent::Directory { entries });
        fs
    }

    pub fn root(&self) -> InodeNr {
        self.root
    }

    /// Number of live inodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, nr: InodeNr) -> bool {
        self.nodes.contains_key(&nr)
    }

    pub fn get(&self, nr: InodeNr) -> Result<&Inode, FsError> {
        self.nodes.get(&nr).ok_or(FsError::Unallocated(nr))
    }

    pub fn get_mut(&mut self, nr: InodeNr) -> Result<&mut Inode, FsError> {
        self.nodes.get_mut(&nr).ok_or(FsError::Unallocated(nr))
    }

    pub fn contents(&self, nr: InodeNr) -> Result<&NodeContent, FsError> {
        Ok(self.get(nr)?.contents())
    }

    pub fn file_type(&self, nr: InodeNr) -> Result<FileType, FsError> {
        Ok(self.contents(nr)?.file_type())
    }

    /// Looks `name` up in directory `dir`.
    pub fn lookup(&self, dir: InodeNr, name: &str) -> Result<Option<InodeNr>, FsError> {
        self.contents(dir)?.lookup(name)
    }

    /// Creates an empty plain file named `name` inside `dir`.
    pub fn mkfile(&mut self, dir: InodeNr, name: &str) -> Result<InodeNr, FsError> {
        self.ensure_directory(dir)?;
        let nr = self.allocate(FileType::Plain);
        self.get_mut(dir)?.contents_mut().insert_entry(name, nr)?;
        debug!(dir, name, nr, "mkfile");
        Ok(nr)
    }

    /// Creates a directory named `name` inside `dir` and populates its "."
    /// and ".." entries before returning.
    pub fn mkdir(&mut self, dir: InodeNr, name: &str) -> Result<InodeNr, FsError> {
        self.ensure_directory(dir)?;
        let nr = self.allocate(FileType::Directory);
        self.get_mut(dir)?.contents_mut().insert_entry(name, nr)?;
        let contents = self.get_mut(nr)?.contents_mut();
        contents.insert_entry(".", nr)?;
        contents.insert_entry("..", dir)?;
        debug!(dir, name, nr, "mkdir");
        Ok(nr)
    }

    /// Unbinds `name` from `dir` and frees the node it referred to. A missing
    /// name is a no-op.
    pub fn unlink(&mut self, dir: InodeNr, name: &str) -> Result<Option<InodeNr>, FsError> {
        let removed = self.get_mut(dir)?.contents_mut().remove_entry(name)?;
        if let Some(nr) = removed {
            self.release(nr);
        }
        Ok(removed)
    }

    /// Frees the storage for `nr`. Entries that still refer to it are the
    /// caller's problem.
    pub fn release(&mut self, nr: InodeNr) -> Option<Inode> {
        let node = self.nodes.remove(&nr);
        if node.is_some() {
            debug!(nr, "release inode");
        }
        node
    }

    fn allocate(&mut self, file_type: FileType) -> InodeNr {
        self.allocate_with(NodeContent::new(file_type))
    }

    fn allocate_with(&mut self, contents: NodeContent) -> InodeNr {
        let nr = self.next_inode_nr;
        self.next_inode_nr += 1;
        let file_type = contents.file_type();
        self.nodes.insert(nr, Inode::with_contents(nr, contents));
        debug!(nr, %file_type, "allocate inode");
        nr
    }

    fn ensure_directory(&self, dir: InodeNr) -> Result<(), FsError> {
        match self.file_type(dir)? {
            FileType::Directory => Ok(()),
            other => Err(FsError::WrongType(other)),
        }
    }
}

impl Default for InMemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_layout() {
        let fs = InMemoryFs::new();
        assert_eq!(fs.root(), 1);
        assert_eq!(fs.len(), 1);
        let root = fs.contents(1).unwrap();
        assert_eq!(root.lookup(".").unwrap(), Some(1));
        assert_eq!(root.lookup("..").unwrap(), Some(1));
        assert_eq!(root.size(), 2);
    }

    #[test]
    fn test_first_allocation_after_root() {
        let mut fs = InMemoryFs::new();
        assert_eq!(fs.file_type(1).unwrap(), FileType::Directory);
        assert_eq!(fs.mkfile(1, "f").unwrap(), 2);
        assert_eq!(fs.contents(1).unwrap().size(), 3);
    }

    #[test]
    fn test_mkdir_populates_dot_entries() {
        let mut fs = InMemoryFs::new();
        let a = fs.mkdir(1, "a").unwrap();
        assert_eq!(a, 2);
        assert_eq!(fs.lookup(a, ".").unwrap(), Some(a));
        assert_eq!(fs.lookup(a, "..").unwrap(), Some(1));
        assert_eq!(fs.lookup(1, "a").unwrap(), Some(a));
        assert!(fs.contents(a).unwrap().is_empty_directory());
    }

    #[test]
    fn test_inode_numbers_not_reused() {
        let mut fs = InMemoryFs::new();
        let f = fs.mkfile(1, "f").unwrap();
        assert_eq!(fs.unlink(1, "f").unwrap(), Some(f));
        assert!(!fs.contains(f));
        let g = fs.mkfile(1, "g").unwrap();
        assert!(g > f);
    }

    #[test]
    fn test_mkfile_in_plain_file_fails() {
        let mut fs = InMemoryFs::new();
        let f = fs.mkfile(1, "f").unwrap();
        assert_eq!(fs.mkfile(f, "g"), Err(FsError::WrongType(FileType::Plain)));
        assert_eq!(fs.mkdir(f, "d"), Err(FsError::WrongType(FileType::Plain)));
        // nothing was allocated by the failed calls
        assert_eq!(fs.len(), 2);
    }

    #[test]
    fn test_unlink_missing_is_noop() {
        let mut fs = InMemoryFs::new();
        assert_eq!(fs.unlink(1, "nope").unwrap(), None);
        assert_eq!(fs.contents(1).unwrap().size(), 2);
    }

    #[test]
    fn test_released_inode_lookup() {
        let mut fs = InMemoryFs::new();
        let f = fs.mkfile(1, "f").unwrap();
        fs.release(f);
        assert_eq!(fs.get(f).unwrap_err(), FsError::Unallocated(f));
    }
}
