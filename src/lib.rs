//! memshell - A shell emulator over an in-memory virtual file system
//!
//! This library provides the VFS tree, its CSV-source loader, path
//! resolution, and the session that dispatches the fixed command set
//! (`ls`, `cd`, `mkdir`, `exit`). The binary wraps it with a CLI that
//! runs interactively or replays a startup script.

pub mod shell;
pub mod vfs;

pub use shell::{CommandResult, LineOutcome, Session};
pub use vfs::{LoadError, VfsTree};
