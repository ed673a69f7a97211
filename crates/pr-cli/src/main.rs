//! `phonoreduce`: reduce the syllable inventory of an IPA transcript.

mod args;
mod input;
mod output;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pr_core::ReducerConfig;
use pr_parser::{IpaParser, TranscriptParser};
use pr_reducer::ReductionEngine;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use args::Cli;
use input::{parse_target, prompt_line, validate_target, FILE_PROMPT, TARGET_PROMPT};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // stdout carries the result only
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Resolve missing arguments through `input`/`prompt`, reduce, render.
fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, prompt: &mut W) -> Result<String> {
    let config = match &cli.config {
        Some(path) => ReducerConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ReducerConfig::default(),
    };

    let file = match &cli.file {
        Some(path) => path.clone(),
        None => PathBuf::from(prompt_line(input, prompt, FILE_PROMPT)?),
    };
    let target = match cli.target {
        Some(target) => target,
        None => parse_target(&prompt_line(input, prompt, TARGET_PROMPT)?)?,
    };
    let target = validate_target(target, &config)?;

    let parser = IpaParser::new();
    if !parser.can_parse(&file) {
        warn!(
            path = %file.display(),
            expected = ?parser.supported_extensions(),
            "Unexpected transcript extension, parsing anyway"
        );
    }
    let mut text = parser
        .parse_file(&file)
        .with_context(|| format!("failed to read transcript {}", file.display()))?;
    info!(path = %file.display(), syllables = text.len(), target, "Reducing transcript");

    let report = ReductionEngine::from_config(target, &config).reduce(&mut text);
    Ok(output::render(cli.format, &text, &report)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = io::stdin();
    let rendered = run(&cli, &mut stdin.lock(), &mut io::stdout())?;
    println!("{rendered}");
    Ok(())
}
