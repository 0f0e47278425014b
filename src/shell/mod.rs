//! Shell Layer
//!
//! Command tokenization, the session with its dispatcher, prompt
//! formatting, and startup-script replay.

pub mod prompt;
pub mod script;
pub mod session;
pub mod tokenizer;

pub use prompt::format_prompt;
pub use script::{run_script, ScriptStatus};
pub use session::{CommandResult, LineOutcome, Session};
pub use tokenizer::{tokenize, TokenizeError};
