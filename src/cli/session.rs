//! Interactive session loop.
//!
//! Reads one command per line, parses it with the same grammar the
//! one-shot mode uses, and executes it against the session's store.
//! A failed command is reported and the loop continues; only EOF or
//! `quit`/`exit` ends the session, discarding all state with it.

use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use fixdesk_lib::IssueStore;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{Commands, execute_command};
use crate::config::Config;

/// One line of session input: a bare command, no binary name.
#[derive(Parser, Debug)]
#[command(name = "fxd", no_binary_name = true)]
struct SessionLine {
    #[command(subcommand)]
    command: Commands,
}

/// Run the interactive session until EOF or `quit`.
///
/// Command output goes to stdout; the banner, prompt, and error
/// reports go to stderr so piped output stays clean.
///
/// # Errors
///
/// Returns an error only for I/O failures on stdin. Command failures
/// are printed and the session continues.
pub fn run(store: &mut IssueStore, config: &Config, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_tty();
    banner(store);

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            eprint!("fxd> ");
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let tokens = tokenize(&line);
        if tokens.is_empty() {
            continue;
        }
        if matches!(tokens[0].as_str(), "quit" | "exit") {
            break;
        }
        tracing::debug!(command = %tokens[0], "session input");

        match SessionLine::try_parse_from(&tokens) {
            Ok(parsed) => {
                if let Err(e) = execute_command(store, &parsed.command, config, json) {
                    eprintln!("Error: {e}");
                }
            }
            // Renders help for `help` and `--help`, usage for bad input.
            Err(e) => {
                e.print().ok();
            }
        }
    }

    eprintln!("Session closed; {} issue(s) discarded.", store.len());
    Ok(())
}

fn banner(store: &IssueStore) {
    eprintln!(
        "fixdesk {} interactive session. State is discarded on exit.",
        env!("CARGO_PKG_VERSION")
    );
    if store.is_empty() {
        eprintln!("Starting with an empty store.");
    } else {
        eprintln!("{} issue(s) loaded.", store.len());
    }
    eprintln!("Type 'help' for commands, 'quit' to leave.");
}

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#).expect("token pattern is valid")
});

/// Split a line into shell-ish tokens: double- or single-quoted spans
/// stay together, everything else splits on whitespace. An unpaired
/// quote is kept literally.
fn tokenize(line: &str) -> Vec<String> {
    TOKEN
        .captures_iter(line)
        .map(|capture| {
            capture
                .get(1)
                .or_else(|| capture.get(2))
                .or_else(|| capture.get(3))
                .map_or_else(String::new, |m| m.as_str().to_string())
        })
        .collect()
}
