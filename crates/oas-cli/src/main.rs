//! `oas`, the command-line surface over the spec document engine.
//!
//! A thin caller standing in for the interactive editor: it reads a file,
//! invokes the engine, and prints the result. All document logic lives in
//! the engine crates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use oas_engine::{Section, convert_notation, next_notation, run_validation, upsert_section};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "oas")]
#[command(about = "Validate and edit OpenAPI description documents", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a document and list every problem with its source line
    Validate {
        /// Path to the document (JSON or block notation, auto-detected)
        input: PathBuf,

        /// Emit the error list as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Re-render a document in the other notation
    Convert {
        /// Path to the document
        input: PathBuf,
    },

    /// Insert or replace a canned top-level section
    Insert {
        /// Path to the document
        input: PathBuf,

        /// Which section to insert
        #[arg(long, value_enum)]
        section: SectionArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SectionArg {
    Info,
    Paths,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Info => Section::Info,
            SectionArg::Paths => Section::Paths,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}

fn run() -> Result<i32> {
    let args = Args::parse();

    match args.command {
        Command::Validate { input, json } => {
            let text = read_input(&input)?;
            let errors = run_validation(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&errors)?);
                return Ok(if errors.is_empty() { 0 } else { 1 });
            }

            if errors.is_empty() {
                println!("✓ {} is a valid OpenAPI document", input.display());
                return Ok(0);
            }

            for error in &errors {
                match error.line {
                    Some(line) => println!("line {}: {}", line, error.message),
                    None => println!("-: {}", error.message),
                }
            }
            Ok(1)
        }

        Command::Convert { input } => {
            let text = read_input(&input)?;
            let target = next_notation(&text);
            let converted = convert_notation(&text)
                .with_context(|| format!("cannot convert {} to {}", input.display(), target.name()))?;
            println!("{}", converted);
            Ok(0)
        }

        Command::Insert { input, section } => {
            let text = read_input(&input)?;
            println!("{}", upsert_section(&text, section.into()));
            Ok(0)
        }
    }
}

fn read_input(path: &PathBuf) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
