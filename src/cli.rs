// src/cli.rs
use std::env;

use crate::config::RunOptions;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

const USAGE: &str = "\
Usage: passive_scrape

Fetches the Distilled Emotions passives from poe2db and writes them,
sorted by token weight, to ./data.json (overwritten on each run).

Options:
  -h, --help    Print this help

Logging: set RUST_LOG (e.g. RUST_LOG=passive_scrape=debug).";

/// Prints status lines to stdout.
pub struct StdoutProgress;

impl Progress for StdoutProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

pub enum Command {
    Scrape,
    Help,
}

pub fn run() -> Result<Option<RunSummary>> {
    match parse_cli(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{USAGE}");
            Ok(None)
        }
        Command::Scrape => {
            let opts = RunOptions::default();
            let summary = runner::run(&opts, Some(&mut StdoutProgress))?;
            Ok(Some(summary))
        }
    }
}

/// No knobs: URL and output path are fixed. Anything but help is rejected.
pub fn parse_cli<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut cmd = Command::Scrape;
    for a in args {
        match a.as_str() {
            "-h" | "--help" => cmd = Command::Help,
            _ => return Err(Error::Usage(format!("Unknown arg: {a}\n\n{USAGE}"))),
        }
    }
    Ok(cmd)
}
