// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! DFA minimization driver
//!
//! Every argument names a file containing a DFA description; with no
//! arguments one description is read from standard input. For each
//! automaton the original and the minimized versions are printed.
//!

use std::{io::Read, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{filter, prelude::*};

use minauto::{errors::Error, reader};

/// Minimize deterministic finite-state automata
#[derive(Debug, Clone, clap::Parser)]
struct Cli {
    /// DFA description files; standard input is read if none are given
    files: Vec<PathBuf>,
    /// Log verbosity
    #[clap(short = 'v', long, default_value = "info", value_parser = ["info", "debug", "trace"])]
    verbosity: String,
}

fn setup_logging(verbosity: &str) {
    let level = match verbosity {
        "trace" => filter::LevelFilter::TRACE,
        "debug" => filter::LevelFilter::DEBUG,
        _ => filter::LevelFilter::INFO,
    };

    let stderr_log = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();
}

// Read, minimize and print one automaton.
// A None source means standard input.
fn process_input(source: Option<&PathBuf>) -> Result<(), Error> {
    let text = match source {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let dfa = reader::parse_dfa(&text)?;
    debug!(
        "read DFA with {} states over {} symbols",
        dfa.num_states(),
        dfa.alphabet_size()
    );

    println!("\n------- Original  DFA -------\n");
    print!("{dfa}");

    let minimized = dfa.minimize();
    debug!("minimized DFA has {} states", minimized.num_states());

    println!("\n\n------- Minimized DFA -------\n");
    print!("{minimized}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli.verbosity);

    if cli.files.is_empty() {
        // no arguments: process standard input
        if let Err(e) = process_input(None) {
            error!("stdin: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let mut status = ExitCode::SUCCESS;
    for file in &cli.files {
        match process_input(Some(file)) {
            Ok(()) => (),
            Err(Error::Io(e)) => {
                // an unreadable file is reported and the remaining
                // files are still processed
                error!("{}: {}", file.display(), e);
                status = ExitCode::FAILURE;
            }
            Err(e) => {
                // malformed input aborts the whole run
                error!("{}: {}", file.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }
    status
}
