//! End-to-end driver runs over argument lists and input files.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Write;

use pretty_assertions::assert_eq;
use radixc::{parse_args, run, Command, DriverConfig, InputSource, Mode, Outcome};

fn run_to_string(config: &DriverConfig) -> (String, Outcome) {
    let mut out = Vec::new();
    let outcome = run(config, &mut out).expect("driver run");
    (String::from_utf8(out).expect("utf-8 report"), outcome)
}

fn config_from(args: &[&str]) -> DriverConfig {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    match parse_args(&args).expect("valid arguments") {
        Command::Run(config) => config,
        Command::Help => panic!("unexpected help"),
    }
}

#[test]
fn file_lines_are_scanned_in_order() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "0b101").unwrap();
    writeln!(file, "0hff").unwrap();
    writeln!(file, "0o9").unwrap();
    writeln!(file, "h12").unwrap();

    let path = file.path().to_string_lossy().into_owned();
    let config = config_from(&["--file", &path]);
    assert_eq!(config.source, InputSource::File(file.path().to_path_buf()));

    let (text, outcome) = run_to_string(&config);
    assert_eq!(
        text,
        "Testing: '0b101   ' -> BIN\n\
         Testing: '0hff    ' -> HEX\n\
         Testing: '0o9     ' -> OCT\n\
         Testing: 'h12     ' -> ERROR\n"
    );
    assert_eq!(
        outcome,
        Outcome {
            tokens: 4,
            errors: 1
        }
    );
}

#[test]
fn file_in_all_mode() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "0d10 0b2").unwrap();

    let path = file.path().to_string_lossy().into_owned();
    let config = config_from(&["-a", "-f", &path]);
    assert_eq!(config.mode, Mode::All);

    let (text, outcome) = run_to_string(&config);
    assert_eq!(
        text,
        "Input: '0d10 0b2'\n  DEC   0..4    0d10\n  BIN   5..7    0b\n  DEC   7..8    2\n"
    );
    assert!(outcome.is_success());
}

#[test]
fn long_argument_is_scanned_as_prefix() {
    let long = "1".repeat(150);
    let config = config_from(&["-a", &long]);
    let (text, outcome) = run_to_string(&config);
    assert_eq!(outcome.tokens, 1);
    assert!(text.contains("DEC   0..99"));
}
