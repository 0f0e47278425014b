//! Startup Script Replay
//!
//! Runs a script line by line against a session, echoing each command with
//! its prompt before executing it. Replay is strictly sequential: a line's
//! result (including any working-directory change) is fully settled before
//! the next line is read.

use std::io::{self, Write};

use super::prompt::format_prompt;
use super::session::{LineOutcome, Session};

/// How a script replay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    /// Every line ran successfully.
    Completed,
    /// A command failed; remaining lines were skipped.
    Halted,
    /// The script ran `exit`.
    Exited,
}

/// Replay a script against the session, writing the transcript to `out`.
///
/// Empty and `#`-comment lines are skipped. The first command with a
/// nonzero exit code halts the replay without terminating the process.
pub fn run_script(
    session: &mut Session,
    script: &str,
    custom_prompt: Option<&str>,
    out: &mut impl Write,
) -> io::Result<ScriptStatus> {
    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let prompt = format_prompt(custom_prompt, session.current_path());
        writeln!(out, "{prompt}{line}")?;

        match session.run_line(line) {
            LineOutcome::Exit => return Ok(ScriptStatus::Exited),
            LineOutcome::Ran(result) => {
                if !result.stdout.is_empty() {
                    writeln!(out, "{}", result.stdout)?;
                }
                if !result.stderr.is_empty() {
                    writeln!(out, "{}", result.stderr)?;
                }
                if result.exit_code != 0 {
                    writeln!(out, "Script execution stopped due to error in: {line}")?;
                    return Ok(ScriptStatus::Halted);
                }
            }
        }
    }
    Ok(ScriptStatus::Completed)
}

// ============================================================================
// Tests
// ============================================================================
