//! Parse transcripts from the command line and print one JSON result per line.
//!
//! Usage: cargo run --bin parse-transcript -- [--fen <FEN>] [TRANSCRIPT...]
//!
//! Transcripts are read from stdin, one per line, when none are given.
//! Moves are resolved against the --fen position, the start position by
//! default. Set VOICE_COMMANDS_FILE to load custom voice commands and
//! VOICE_AMBIGUITY_POLICY to change how ambiguous moves are handled.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;
use voice_parser::{legal_moves_from_fen, ParserConfig, VoiceParser, STANDARD_START_FEN};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let mut fen: Option<String> = None;
    let mut transcripts: Vec<String> = Vec::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fen" => match args.next() {
                Some(value) => fen = Some(value),
                None => bail!("--fen needs a value"),
            },
            _ => transcripts.push(arg),
        }
    }

    let config = ParserConfig::from_env();
    let parser = VoiceParser::from_config(&config).context("Failed to build voice parser")?;

    let fen = fen.as_deref().unwrap_or(STANDARD_START_FEN);
    let moves = legal_moves_from_fen(fen).with_context(|| format!("Invalid FEN: {fen}"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut emit = |text: &str| -> Result<()> {
        let parsed = parser.parse(text, Some(&moves));
        writeln!(out, "{}", serde_json::to_string(&parsed)?)?;
        Ok(())
    };

    if transcripts.is_empty() {
        for line in io::stdin().lock().lines() {
            emit(&line?)?;
        }
    } else {
        for text in &transcripts {
            emit(text)?;
        }
    }

    Ok(())
}
