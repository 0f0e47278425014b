//! Session and Command Dispatch
//!
//! A `Session` holds the loaded VFS tree and the current working directory,
//! and executes one command line at a time. Every handler is a function of
//! (session, args) -> result; nothing lives in module-level state.

use crate::shell::tokenizer::tokenize;
use crate::vfs::{resolve, Node, VfsTree};

/// Result of one executed command.
///
/// `exit_code` is the machine-readable success signal: script replay halts
/// on a nonzero code and never inspects the output text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code: 0,
        }
    }

    pub fn error(stderr: String) -> Self {
        Self {
            stdout: String::new(),
            stderr,
            exit_code: 1,
        }
    }

    pub fn ok() -> Self {
        Self::success(String::new())
    }
}

/// What became of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line ran (successfully or not) and the session continues.
    Ran(CommandResult),
    /// The `exit` command: terminate the session.
    Exit,
}

/// The fixed command set, dispatched by exact first-token match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellCommand {
    Ls,
    Cd,
    Mkdir,
    Exit,
}

impl ShellCommand {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "ls" => Some(ShellCommand::Ls),
            "cd" => Some(ShellCommand::Cd),
            "mkdir" => Some(ShellCommand::Mkdir),
            "exit" => Some(ShellCommand::Exit),
            _ => None,
        }
    }
}

/// A single shell session over one VFS tree.
pub struct Session {
    tree: VfsTree,
    current_path: String,
}

impl Session {
    /// Start a session at the root of the given tree.
    pub fn new(tree: VfsTree) -> Self {
        Self {
            tree,
            current_path: "/".to_string(),
        }
    }

    /// The current working directory, always a normalized absolute path.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn tree(&self) -> &VfsTree {
        &self.tree
    }

    /// Tokenize and execute one command line.
    ///
    /// All failures (tokenize, resolve, arg count, duplicates) become
    /// failure results; none abort the session or mutate its state.
    pub fn run_line(&mut self, line: &str) -> LineOutcome {
        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => return LineOutcome::Ran(CommandResult::error(format!("Parsing error: {e}"))),
        };

        let Some((name, args)) = tokens.split_first() else {
            return LineOutcome::Ran(CommandResult::ok());
        };

        match ShellCommand::from_name(name) {
            Some(ShellCommand::Ls) => LineOutcome::Ran(self.ls(args)),
            Some(ShellCommand::Cd) => LineOutcome::Ran(self.cd(args)),
            Some(ShellCommand::Mkdir) => LineOutcome::Ran(self.mkdir(args)),
            Some(ShellCommand::Exit) => LineOutcome::Exit,
            None => LineOutcome::Ran(CommandResult::error(format!("Command not found: {name}"))),
        }
    }

    fn ls(&self, args: &[String]) -> CommandResult {
        if !args.is_empty() {
            return CommandResult::error("ls: too many arguments".to_string());
        }
        match self.tree.locate_dir(&self.current_path) {
            Ok(children) => {
                let names: Vec<&str> = children.keys().map(String::as_str).collect();
                CommandResult::success(names.join("\n"))
            }
            Err(e) => CommandResult::error(format!("ls: {e}")),
        }
    }

    fn cd(&mut self, args: &[String]) -> CommandResult {
        let target = match args {
            [] => return CommandResult::error("cd: missing argument".to_string()),
            [target] => target,
            _ => return CommandResult::error("cd: too many arguments".to_string()),
        };

        let resolved = resolve(&self.current_path, target);
        match self.tree.locate(&resolved) {
            Ok(node) if node.is_directory() => {
                self.current_path = resolved;
                CommandResult::ok()
            }
            _ => CommandResult::error(format!("cd: {target}: No such directory")),
        }
    }

    fn mkdir(&mut self, args: &[String]) -> CommandResult {
        let name = match args {
            [] => return CommandResult::error("mkdir: missing argument".to_string()),
            [name] => name,
            _ => return CommandResult::error("mkdir: too many arguments".to_string()),
        };

        if name.is_empty() || name.contains('/') || name == "." || name == ".." {
            return CommandResult::error(format!("mkdir: {name}: Invalid directory name"));
        }

        let children = match self.tree.locate_dir_mut(&self.current_path) {
            Ok(children) => children,
            Err(e) => return CommandResult::error(format!("mkdir: {e}")),
        };
        if children.contains_key(name.as_str()) {
            return CommandResult::error(format!("mkdir: {name}: Directory already exists"));
        }
        children.insert(name.clone(), Node::empty_dir());
        CommandResult::ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
