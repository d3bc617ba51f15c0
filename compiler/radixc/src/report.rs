//! Gathering inputs and writing scan reports.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use radix_lexer_core::{scan, InputCursor, Token, TokenKind, Tokenizer, MAX_INPUT_LEN};

use crate::config::{DriverConfig, InputSource, Mode, DEMO_INPUTS};
use crate::DriverError;

/// Totals for one driver run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub tokens: usize,
    pub errors: usize,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }
}

/// Scan every input named by `config` and write the report to `out`.
#[tracing::instrument(level = "debug", skip_all, fields(mode = ?config.mode))]
pub fn run(config: &DriverConfig, out: &mut impl Write) -> Result<Outcome, DriverError> {
    let inputs = load_inputs(&config.source)?;
    tracing::debug!(count = inputs.len(), "inputs loaded");

    let mut outcome = Outcome::default();
    let mut cursor = InputCursor::default();
    for input in &inputs {
        if input.len() > MAX_INPUT_LEN {
            tracing::warn!(
                len = input.len(),
                max = MAX_INPUT_LEN,
                "input longer than the cursor capacity; scanning a prefix"
            );
        }
        cursor.set_input(input);
        match config.mode {
            Mode::Single => report_single(input, &mut cursor, config.verbose, &mut outcome, out)?,
            Mode::All => report_all(input, &mut cursor, config.verbose, &mut outcome, out)?,
        }
    }
    Ok(outcome)
}

fn load_inputs(source: &InputSource) -> Result<Vec<String>, DriverError> {
    match source {
        InputSource::Demo => Ok(DEMO_INPUTS.iter().map(ToString::to_string).collect()),
        InputSource::Args(literals) => Ok(literals.clone()),
        InputSource::File(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
                path: path.clone(),
                source,
            })?;
            Ok(content.lines().map(ToString::to_string).collect())
        }
        InputSource::Stdin => {
            let stdin = io::stdin();
            stdin
                .lock()
                .lines()
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| DriverError::Read {
                    path: PathBuf::from("-"),
                    source,
                })
        }
    }
}

/// One `scan` per input, in the demonstration format:
/// `Testing: '<input padded to 8>' -> NAME`.
fn report_single(
    input: &str,
    cursor: &mut InputCursor,
    verbose: bool,
    outcome: &mut Outcome,
    out: &mut impl Write,
) -> Result<(), DriverError> {
    let result = scan(cursor);
    let kind = match &result {
        Ok(token) => token.kind,
        Err(_) => TokenKind::Error,
    };
    tally(outcome, kind.is_error());

    write!(out, "Testing: '{input:<8}' -> {}", kind.name())?;
    if verbose {
        match result {
            Ok(token) => write!(
                out,
                "  [{}, rest {:?}]",
                token.span,
                String::from_utf8_lossy(cursor.remaining())
            )?,
            Err(err) => write!(out, "  [{err}]")?,
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Every literal in the input, one line per token.
fn report_all(
    input: &str,
    cursor: &mut InputCursor,
    verbose: bool,
    outcome: &mut Outcome,
    out: &mut impl Write,
) -> Result<(), DriverError> {
    writeln!(out, "Input: '{input}'")?;
    let tokens: Vec<Token> = Tokenizer::new(cursor).collect();
    for token in &tokens {
        tally(outcome, token.kind.is_error());
        let text = String::from_utf8_lossy(cursor.slice(token.span));
        write!(out, "  {:<5} {:<7} {text}", token.kind.name(), token.span.to_string())?;
        if verbose {
            if let Some(radix) = token.kind.radix() {
                write!(out, "  (base {radix})")?;
            }
        }
        writeln!(out)?;
    }
    if tokens.is_empty() {
        writeln!(out, "  (no literals)")?;
    }
    Ok(())
}

fn tally(outcome: &mut Outcome, is_error: bool) {
    outcome.tokens += 1;
    if is_error {
        outcome.errors += 1;
    }
}
