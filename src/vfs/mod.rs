//! Virtual File System
//!
//! The in-memory directory/file tree, its path resolution, and its
//! construction from a serialized CSV source.

pub mod loader;
pub mod node;
pub mod path;

pub use loader::{load_file, load_source, LoadError};
pub use node::{Node, NodeKind, ResolveError, VfsTree};
pub use path::{resolve, split_segments};
