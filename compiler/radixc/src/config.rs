//! Driver configuration and command-line parsing.
//!
//! There are no config files. Everything comes from arguments, plus
//! `RUST_LOG` for tracing (see [`init_tracing`](crate::init_tracing)).

use std::path::PathBuf;

use crate::DriverError;

/// Inputs scanned when no literal or file is given.
pub const DEMO_INPUTS: [&str; 12] = [
    "0", "123", "0d", "0d1234", "0b", "0b101", "0o", "0o127", "0d", "0d359", "0h", "0hABC",
];

pub const USAGE: &str = "\
Usage: radixc [options] [--] [literal...]

Classifies numeric literal prefixes as BIN, OCT, DEC, HEX, or ERROR.
With no literal and no --file, scans a built-in demonstration list.

Options:
  -a, --all           Tokenize each input fully instead of one literal
  -f, --file <path>   Read inputs from a file, one per line ('-' for stdin)
  -v, --verbose       Show consumed span, unread bytes, and error reasons
  -h, --help          Show this help

Set RUST_LOG (e.g. RUST_LOG=radix_lexer_core=trace) to trace the DFA.";

/// How much of each input to scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// One `gettoken` call per input.
    #[default]
    Single,
    /// Every blank-separated literal in each input.
    All,
}

/// Where input lines come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    /// [`DEMO_INPUTS`].
    #[default]
    Demo,
    /// Literals given on the command line.
    Args(Vec<String>),
    /// One input per line of a file.
    File(PathBuf),
    /// One input per line of standard input.
    Stdin,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverConfig {
    pub mode: Mode,
    pub source: InputSource,
    pub verbose: bool,
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(DriverConfig),
    Help,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, DriverError> {
    let mut config = DriverConfig::default();
    let mut file: Option<PathBuf> = None;
    let mut literals = Vec::new();
    let mut only_literals = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if only_literals {
            literals.push(arg.to_string());
        } else if arg == "--" {
            only_literals = true;
        } else if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if arg == "-a" || arg == "--all" {
            config.mode = Mode::All;
        } else if arg == "-v" || arg == "--verbose" {
            config.verbose = true;
        } else if arg == "-f" || arg == "--file" {
            let Some(path) = args.get(i + 1) else {
                return Err(DriverError::Usage(format!("missing path after '{arg}'")));
            };
            file = Some(PathBuf::from(path));
            i += 1;
        } else if let Some(path) = arg.strip_prefix("--file=") {
            file = Some(PathBuf::from(path));
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(DriverError::Usage(format!("unknown option '{arg}'")));
        } else {
            literals.push(arg.to_string());
        }
        i += 1;
    }

    config.source = match (file, literals.is_empty()) {
        (Some(_), false) => {
            return Err(DriverError::Usage(
                "cannot combine --file with literal arguments".to_string(),
            ));
        }
        (Some(path), true) if path.as_os_str() == "-" => InputSource::Stdin,
        (Some(path), true) => InputSource::File(path),
        (None, false) => InputSource::Args(literals),
        (None, true) => InputSource::Demo,
    };

    Ok(Command::Run(config))
}
