//! vitae CLI - résumé and reference sheet generator

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use vitae::{Mode, Vitae};

#[derive(Parser)]
#[command(name = "vitae")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Generate résumé documents from JSON data", long_about = None)]
struct Cli {
    /// JSON data file (default: resume.json, or references.json with --references)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output a letter template with header
    #[arg(short, long)]
    letter: bool,

    /// Output a references sheet from reference data
    #[arg(short, long)]
    references: bool,

    /// Output in plaintext format
    #[arg(short, long)]
    plaintext: bool,

    /// Set output file ("-" for stdout)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    output: PathBuf,

    /// Style file input by the LaTeX preamble
    #[arg(long, value_name = "FILE", env = "VITAE_PREAMBLE")]
    preamble: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mode = match Mode::from_flags(cli.letter, cli.references) {
        Ok(mode) => mode,
        Err(e) => Cli::command()
            .error(ErrorKind::ArgumentConflict, e.to_string())
            .exit(),
    };

    let mut vitae = Vitae::new().mode(mode).output(cli.output);
    if cli.plaintext {
        vitae = vitae.plaintext();
    }
    if let Some(input) = cli.input {
        vitae = vitae.input(input);
    }
    if let Some(preamble) = cli.preamble {
        vitae = vitae.preamble_file(preamble);
    }

    log::debug!("reading {}", vitae.input_path().display());

    if let Err(e) = vitae.run() {
        eprintln!("{}: {}", "vitae".red().bold(), e);
        process::exit(if e.is_usage() { 2 } else { 1 });
    }
}
