//! Tests for the non-interactive command surface.

mod common;

use common::temp_file;
use omnitool::cli::{handle_convert_command, handle_size_command, parse_args, CliCommand};
use omnitool::encoding::PreviewFormat;
use omnitool::error::ErrorCategory;

fn parse(args: &[&str]) -> CliCommand {
    let argv = std::iter::once("omnitool").chain(args.iter().copied());
    parse_args(argv.map(String::from))
}

#[test]
fn test_convert_arguments_flow_into_output() {
    let (dir, input) = temp_file("man.txt", b"Man");
    let out = dir.path().join("man.b64");

    let command = parse(&[
        "convert",
        input.to_str().unwrap(),
        "--format",
        "b64",
        "--out",
        out.to_str().unwrap(),
    ]);
    let CliCommand::Convert { path, format, out: target } = command else {
        panic!("expected convert command, got {:?}", command);
    };
    assert_eq!(format, PreviewFormat::Base64);

    let mut stdout = Vec::new();
    handle_convert_command(&path, format, target.as_deref(), &mut stdout).unwrap();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "TWFu");
    let printed = String::from_utf8(stdout).unwrap();
    assert!(printed.starts_with("Wrote base64 to "));
}

#[test]
fn test_convert_every_format_to_stdout() {
    let (_dir, input) = temp_file("blob.bin", &[0x00, 0x7F, 0xFF]);
    let expected = [
        (PreviewFormat::Hex, "00 7F FF"),
        (PreviewFormat::Binary, "00000000 01111111 11111111"),
        (PreviewFormat::PythonBytes, "file_data = b'\\x00\\x7f\\xff'"),
        (PreviewFormat::Base64, "AH//"),
    ];

    for (format, text) in expected {
        let mut stdout = Vec::new();
        handle_convert_command(&input, format, None, &mut stdout).unwrap();
        assert_eq!(String::from_utf8(stdout).unwrap(), format!("{}\n", text));
    }
}

#[test]
fn test_convert_missing_file_is_user_error() {
    let mut stdout = Vec::new();
    let err = handle_convert_command(
        std::path::Path::new("/no/such/file.bin"),
        PreviewFormat::Hex,
        None,
        &mut stdout,
    )
    .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::User);
    assert!(stdout.is_empty());
}

#[test]
fn test_size_command() {
    let command = parse(&["size", "1572864", "--decimals", "1"]);
    assert_eq!(
        command,
        CliCommand::Size {
            bytes: 1_572_864,
            decimals: 1
        }
    );

    let mut stdout = Vec::new();
    handle_size_command(1_572_864, 1, &mut stdout).unwrap();
    assert_eq!(String::from_utf8(stdout).unwrap(), "1.5 MB\n");
}

#[test]
fn test_files_start_the_tui() {
    let command = parse(&["a.bin", "b.png"]);
    match command {
        CliCommand::RunTui { files } => assert_eq!(files.len(), 2),
        other => panic!("expected RunTui, got {:?}", other),
    }
    assert!(matches!(parse(&["--bogus"]), CliCommand::Invalid(_)));
}
