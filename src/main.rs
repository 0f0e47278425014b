use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use memshell::shell::{format_prompt, run_script, LineOutcome, Session};
use memshell::vfs::{load_file, VfsTree};

#[derive(Parser)]
#[command(name = "memshell")]
#[command(about = "A shell emulator over an in-memory virtual file system")]
#[command(version)]
struct Cli {
    /// CSV file describing the virtual file system
    #[arg(long = "vfs-path")]
    vfs_path: Option<PathBuf>,

    /// Fixed custom prompt string
    #[arg(long)]
    prompt: Option<String>,

    /// Startup script to replay before exiting
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    println!("Debug: starting emulator with parameters:");
    println!(
        "  VFS source: {}",
        cli.vfs_path
            .as_deref()
            .map_or("not specified".to_string(), |p| p.display().to_string())
    );
    println!(
        "  Custom prompt: {}",
        cli.prompt.as_deref().unwrap_or("not specified")
    );
    println!(
        "  Script: {}",
        cli.script
            .as_deref()
            .map_or("not specified".to_string(), |p| p.display().to_string())
    );

    // Without a source the session starts on an empty root; a source that
    // fails to load is fatal.
    let tree = match &cli.vfs_path {
        Some(path) => match load_file(path) {
            Ok(tree) => {
                println!("VFS loaded from {}", path.display());
                tree
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => VfsTree::new(),
    };

    let mut session = Session::new(tree);

    if let Some(script_path) = &cli.script {
        let script = match std::fs::read_to_string(script_path) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Error: cannot read script {}: {e}", script_path.display());
                return ExitCode::FAILURE;
            }
        };
        let mut stdout = io::stdout();
        if let Err(e) = run_script(&mut session, &script, cli.prompt.as_deref(), &mut stdout) {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    match repl(&mut session, cli.prompt.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Interactive loop: prompt, read a line, run it, print the result.
fn repl(session: &mut Session, custom_prompt: Option<&str>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", format_prompt(custom_prompt, session.current_path()))?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            return Ok(());
        }

        match session.run_line(line.trim()) {
            LineOutcome::Exit => {
                writeln!(stdout, "Exiting emulator.")?;
                return Ok(());
            }
            LineOutcome::Ran(result) => {
                if !result.stdout.is_empty() {
                    writeln!(stdout, "{}", result.stdout)?;
                }
                if !result.stderr.is_empty() {
                    writeln!(stdout, "{}", result.stderr)?;
                }
            }
        }
    }
}
