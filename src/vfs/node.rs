//! VFS Node Tree
//!
//! Core data model for the virtual file system: a tree of directory and
//! file nodes owned strictly downward from a single root.

use indexmap::IndexMap;
use thiserror::Error;

use super::path::split_segments;

/// Node kind, used for declared-type checks in the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// A single entry in the VFS tree.
///
/// Directories own their children by name; insertion order is preserved so
/// listings are deterministic. File content is decoded once at load time
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory { children: IndexMap<String, Node> },
    File { content: Vec<u8> },
}

impl Node {
    /// Create an empty directory node.
    pub fn empty_dir() -> Self {
        Node::Directory {
            children: IndexMap::new(),
        }
    }

    /// Create a file node with the given content.
    pub fn file(content: Vec<u8>) -> Self {
        Node::File { content }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory { .. } => NodeKind::Directory,
            Node::File { .. } => NodeKind::File,
        }
    }

    /// File content, if this is a file node.
    pub fn content(&self) -> Option<&[u8]> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }

    /// Children mapping, if this is a directory node.
    pub fn children(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }
}

/// Path resolution errors. Recoverable; surfaced as command output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{path}: No such file or directory")]
    NotFound { path: String },

    #[error("{path}: Not a directory")]
    NotADirectory { path: String },
}

/// The in-memory virtual file system.
///
/// Owns a single root directory; every other node is reachable from it by
/// child lookups only. There are no parent back-pointers: resolution always
/// walks down from the root.
#[derive(Debug, Clone)]
pub struct VfsTree {
    root: Node,
}

impl VfsTree {
    /// Create a tree containing only an empty root directory.
    pub fn new() -> Self {
        Self {
            root: Node::empty_dir(),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Root children mapping. The root is a directory by construction.
    pub(crate) fn root_children_mut(&mut self) -> &mut IndexMap<String, Node> {
        match &mut self.root {
            Node::Directory { children } => children,
            Node::File { .. } => unreachable!("root node is always a directory"),
        }
    }

    /// Walk a normalized absolute path down from the root.
    ///
    /// Every intermediate node must be a directory; a file in an
    /// intermediate position fails with `NotADirectory`, a missing segment
    /// with `NotFound`. Never mutates the tree.
    pub fn locate(&self, path: &str) -> Result<&Node, ResolveError> {
        let mut current = &self.root;
        for segment in split_segments(path) {
            let children = match current.children() {
                Some(children) => children,
                None => {
                    return Err(ResolveError::NotADirectory {
                        path: path.to_string(),
                    })
                }
            };
            current = children.get(segment).ok_or_else(|| ResolveError::NotFound {
                path: path.to_string(),
            })?;
        }
        Ok(current)
    }

    /// As `locate`, but the final node must itself be a directory.
    pub fn locate_dir(&self, path: &str) -> Result<&IndexMap<String, Node>, ResolveError> {
        match self.locate(path)? {
            Node::Directory { children } => Ok(children),
            Node::File { .. } => Err(ResolveError::NotADirectory {
                path: path.to_string(),
            }),
        }
    }

    /// Mutable variant of `locate_dir`, used by `mkdir`.
    pub fn locate_dir_mut(
        &mut self,
        path: &str,
    ) -> Result<&mut IndexMap<String, Node>, ResolveError> {
        let mut current = &mut self.root;
        for segment in split_segments(path) {
            let children = match current {
                Node::Directory { children } => children,
                Node::File { .. } => {
                    return Err(ResolveError::NotADirectory {
                        path: path.to_string(),
                    })
                }
            };
            current = children.get_mut(segment).ok_or_else(|| ResolveError::NotFound {
                path: path.to_string(),
            })?;
        }
        match current {
            Node::Directory { children } => Ok(children),
            Node::File { .. } => Err(ResolveError::NotADirectory {
                path: path.to_string(),
            }),
        }
    }
}

impl Default for VfsTree {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> VfsTree {
        let mut tree = VfsTree::new();
        let root = tree.locate_dir_mut("/").unwrap();
        root.insert("docs".to_string(), Node::empty_dir());
        root.insert("readme.txt".to_string(), Node::file(b"hello".to_vec()));
        let docs = tree.locate_dir_mut("/docs").unwrap();
        docs.insert("a.txt".to_string(), Node::file(b"aaa".to_vec()));
        tree
    }

    #[test]
    fn test_locate_root() {
        let tree = VfsTree::new();
        assert!(tree.locate("/").unwrap().is_directory());
    }

    #[test]
    fn test_locate_nested() {
        let tree = sample_tree();
        let node = tree.locate("/docs/a.txt").unwrap();
        assert_eq!(node.content(), Some(&b"aaa"[..]));
    }

    #[test]
    fn test_locate_missing() {
        let tree = sample_tree();
        assert_eq!(
            tree.locate("/nope"),
            Err(ResolveError::NotFound {
                path: "/nope".to_string()
            })
        );
    }

    #[test]
    fn test_locate_through_file() {
        let tree = sample_tree();
        assert_eq!(
            tree.locate("/readme.txt/x"),
            Err(ResolveError::NotADirectory {
                path: "/readme.txt/x".to_string()
            })
        );
    }

    #[test]
    fn test_locate_dir_rejects_file() {
        let tree = sample_tree();
        assert!(matches!(
            tree.locate_dir("/readme.txt"),
            Err(ResolveError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut tree = VfsTree::new();
        let root = tree.locate_dir_mut("/").unwrap();
        root.insert("zeta".to_string(), Node::empty_dir());
        root.insert("alpha".to_string(), Node::empty_dir());
        let names: Vec<&String> = tree.locate_dir("/").unwrap().keys().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }
}
